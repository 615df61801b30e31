//! Percentage math for the sliding strip.
//!
//! The strip is `item_count / visible` viewports wide; each item takes
//! `100 / item_count` percent of it, so `visible` items fill the frame.

#![allow(clippy::cast_precision_loss)]

/// Width of the strip relative to the frame, in percent.
#[must_use]
pub fn strip_width_percent(item_count: usize, visible: usize) -> f64 {
    if visible == 0 {
        return 0.0;
    }
    ratio(item_count, visible) * 100.0
}

/// Width of one item relative to the strip, in percent.
#[must_use]
pub fn item_width_percent(item_count: usize, visible: usize) -> f64 {
    if item_count == 0 || visible == 0 {
        return 0.0;
    }
    (100.0 / visible as f64) / ratio(item_count, visible)
}

/// Horizontal strip offset that brings `index` to the left edge, in percent.
#[must_use]
pub fn translate_percent(index: usize, item_count: usize) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    // -0.0 + 0.0 == 0.0, keeps "-0%" out of the style text
    index as f64 * -100.0 / item_count as f64 + 0.0
}

/// Format a percentage as CSS length text.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Format a horizontal offset as a `transform` value.
#[must_use]
pub fn translate3d(value: f64) -> String {
    format!("translate3d({value}%, 0, 0)")
}

fn ratio(item_count: usize, visible: usize) -> f64 {
    item_count as f64 / visible as f64
}
