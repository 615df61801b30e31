//! Boundary policy and index arithmetic, free of any host state.

/// Step direction requested by a control or key binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Move towards higher indices.
    Next,
    /// Move towards lower indices.
    Prev,
}

impl Direction {
    /// Map a keyboard `key` value to a direction.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "Right" => Some(Self::Next),
            "ArrowLeft" | "Left" => Some(Self::Prev),
            _ => None,
        }
    }
}

/// Snapshot of the strip needed to resolve a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Current index register.
    pub current: usize,
    /// Total item count, clones included.
    pub item_count: usize,
    /// Effective visible slide count.
    pub visible: usize,
    /// Whether loop mode is enabled.
    pub loop_items: bool,
}

impl Bounds {
    /// Whether an item exists `visible` slots after the current index.
    #[must_use]
    pub const fn has_item_after_visible(&self) -> bool {
        self.current + self.visible < self.item_count
    }
}

/// Resolve a requested index against the boundary policy.
///
/// Returns `None` when the request must be ignored: no mutation and no
/// notification.
#[must_use]
pub fn resolve_target(index: isize, bounds: &Bounds) -> Option<usize> {
    if bounds.item_count == 0 {
        return None;
    }
    if index < 0 {
        return bounds
            .loop_items
            .then(|| bounds.item_count.saturating_sub(bounds.visible));
    }
    let index = index.unsigned_abs();
    if index >= bounds.item_count || (!bounds.has_item_after_visible() && index > bounds.current)
    {
        return bounds.loop_items.then_some(0);
    }
    Some(index)
}

/// Index to jump to, without animation, once an infinite strip settles on
/// its cloned padding.
#[must_use]
pub fn infinite_rebase(
    current: usize,
    item_count: usize,
    offset: usize,
    slides_to_scroll: usize,
) -> Option<isize> {
    let real = real_count(item_count, offset)?;
    let current_signed = signed(current);
    if current <= slides_to_scroll {
        Some(current_signed + real)
    } else if current >= item_count.saturating_sub(offset) {
        Some(current_signed - real)
    } else {
        None
    }
}

/// Target index of each pagination button, over the non-cloned range.
#[must_use]
pub fn pagination_targets(item_count: usize, offset: usize, slides_to_scroll: usize) -> Vec<usize> {
    let real = item_count.saturating_sub(2 * offset);
    (0..real)
        .step_by(slides_to_scroll.max(1))
        .map(|start| start + offset)
        .collect()
}

/// Pagination button to highlight for `index`, if any.
///
/// Computes `floor(((index - offset) mod real) / slides_to_scroll)` with a
/// truncating remainder, so indices inside the leading clones resolve to a
/// negative page and leave the highlight untouched.
#[must_use]
pub fn active_page(
    index: usize,
    item_count: usize,
    offset: usize,
    slides_to_scroll: usize,
    pages: usize,
) -> Option<usize> {
    let real = real_count(item_count, offset)?;
    let step = signed(slides_to_scroll.max(1));
    let page = ((signed(index) - signed(offset)) % real).div_euclid(step);
    usize::try_from(page).ok().filter(|page| *page < pages)
}

fn real_count(item_count: usize, offset: usize) -> Option<isize> {
    let real = signed(item_count) - 2 * signed(offset);
    (real > 0).then_some(real)
}

pub(crate) fn signed(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn bounds(current: usize, item_count: usize, visible: usize, loop_items: bool) -> Bounds {
        Bounds {
            current,
            item_count,
            visible,
            loop_items,
        }
    }

    #[test]
    fn negative_index_wraps_only_when_looping() {
        assert_eq!(resolve_target(-1, &bounds(0, 6, 3, true)), Some(3));
        assert_eq!(resolve_target(-2, &bounds(0, 6, 3, false)), None);
        assert_eq!(resolve_target(-1, &bounds(0, 2, 3, true)), Some(0));
    }

    #[test]
    fn overflow_wraps_to_start_only_when_looping() {
        assert_eq!(resolve_target(6, &bounds(3, 6, 3, true)), Some(0));
        assert_eq!(resolve_target(6, &bounds(3, 6, 3, false)), None);
    }

    #[test]
    fn forward_move_blocked_once_tail_is_visible() {
        // items 0..5 with 3 visible: at index 3 nothing exists at 3 + 3.
        assert_eq!(resolve_target(5, &bounds(3, 6, 3, false)), None);
        assert_eq!(resolve_target(5, &bounds(3, 6, 3, true)), Some(0));
        // Moving backwards is still allowed.
        assert_eq!(resolve_target(1, &bounds(3, 6, 3, false)), Some(1));
    }

    #[test]
    fn in_range_index_passes_through() {
        assert_eq!(resolve_target(2, &bounds(0, 6, 3, false)), Some(2));
        assert_eq!(resolve_target(0, &bounds(0, 0, 1, true)), None);
    }

    #[test]
    fn infinite_rebase_jumps_over_real_range() {
        // 6 real items, offset 5 => 16 items.
        assert_eq!(infinite_rebase(2, 16, 5, 2), Some(8));
        assert_eq!(infinite_rebase(11, 16, 5, 2), Some(5));
        assert_eq!(infinite_rebase(7, 16, 5, 2), None);
        assert_eq!(infinite_rebase(0, 6, 5, 2), None);
    }

    #[test]
    fn pagination_steps_across_real_items() {
        assert_eq!(pagination_targets(16, 5, 2), vec![5, 7, 9]);
        assert_eq!(pagination_targets(5, 0, 2), vec![0, 2, 4]);
        assert!(pagination_targets(6, 5, 2).is_empty());
    }

    #[test]
    fn active_page_follows_floor_of_wrapped_index() {
        assert_eq!(active_page(7, 16, 5, 2, 3), Some(1));
        assert_eq!(active_page(11, 16, 5, 2, 3), Some(0));
        assert_eq!(active_page(0, 16, 5, 2, 3), None);
        assert_eq!(active_page(4, 5, 0, 2, 3), Some(2));
        assert_eq!(active_page(3, 6, 5, 2, 0), None);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("Right"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Prev));
        assert_eq!(Direction::from_key("Left"), Some(Direction::Prev));
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
