//! Responsive breakpoint for carousel layouts.

use crate::options::CarouselOptions;

/// Viewport widths strictly below this value switch to the mobile layout.
pub const MOBILE_MAX_WIDTH: f64 = 800.0;

/// Layout mode selected from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportMode {
    /// Configured slide counts apply.
    #[default]
    Desktop,
    /// One slide visible, one slide per step.
    Mobile,
}

impl ViewportMode {
    /// Find the mode matching the supplied width.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether this is the narrowed mobile layout.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Slide counts in effect for the current viewport mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveSlides {
    /// Slides visible at once.
    pub visible: usize,
    /// Slides moved per step.
    pub scroll: usize,
}

impl EffectiveSlides {
    /// Narrow configured counts to a single slide in mobile mode.
    #[must_use]
    pub const fn resolve(options: &CarouselOptions, mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Mobile => Self {
                visible: 1,
                scroll: 1,
            },
            ViewportMode::Desktop => Self {
                visible: options.slides_visible,
                scroll: options.slides_to_scroll,
            },
        }
    }
}
