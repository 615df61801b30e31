//! Carousel configuration and validation.
//!
//! # Design
//! - Options are fixed at construction; the controller never mutates them.
//! - The JSON form mirrors the option bag accepted by the page bootstrap
//!   (`slidesToScroll`, `slidesVisible`, `loop`, `infinite`, `pagination`,
//!   `navigation`), with missing fields falling back to defaults.

use serde::Deserialize;

use crate::error::CarouselError;

/// Behaviour switches and slide counts for a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CarouselOptions {
    /// Number of slides moved by `next`/`prev`.
    pub slides_to_scroll: usize,
    /// Number of slides visible at once.
    pub slides_visible: usize,
    /// Wrap around to the opposite end when running past either boundary.
    #[serde(rename = "loop")]
    pub loop_items: bool,
    /// Pad the strip with clones so scrolling appears unbounded.
    pub infinite: bool,
    /// Render one pagination button per scroll step.
    pub pagination: bool,
    /// Render previous/next buttons.
    pub navigation: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselOptions {
    /// Default options: one slide visible, one per step, navigation only.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            loop_items: false,
            infinite: false,
            pagination: false,
            navigation: true,
        }
    }

    /// Set the number of slides moved per step.
    #[must_use]
    pub const fn with_slides_to_scroll(mut self, slides: usize) -> Self {
        self.slides_to_scroll = slides;
        self
    }

    /// Set the number of visible slides.
    #[must_use]
    pub const fn with_slides_visible(mut self, slides: usize) -> Self {
        self.slides_visible = slides;
        self
    }

    /// Toggle loop mode.
    #[must_use]
    pub const fn with_loop(mut self, enabled: bool) -> Self {
        self.loop_items = enabled;
        self
    }

    /// Toggle infinite mode.
    #[must_use]
    pub const fn with_infinite(mut self, enabled: bool) -> Self {
        self.infinite = enabled;
        self
    }

    /// Toggle pagination controls.
    #[must_use]
    pub const fn with_pagination(mut self, enabled: bool) -> Self {
        self.pagination = enabled;
        self
    }

    /// Toggle previous/next controls.
    #[must_use]
    pub const fn with_navigation(mut self, enabled: bool) -> Self {
        self.navigation = enabled;
        self
    }

    /// Check option invariants before any structure is built.
    ///
    /// # Errors
    /// Returns [`CarouselError::LoopAndInfinite`] when both wrap modes are
    /// enabled, or [`CarouselError::InvalidOption`] when a slide count is zero.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.loop_items && self.infinite {
            return Err(CarouselError::LoopAndInfinite);
        }
        if self.slides_to_scroll == 0 {
            return Err(CarouselError::InvalidOption {
                field: "slidesToScroll",
                message: "must be at least 1".to_string(),
            });
        }
        if self.slides_visible == 0 {
            return Err(CarouselError::InvalidOption {
                field: "slidesVisible",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Number of clones added on each side of the strip in infinite mode.
    #[must_use]
    pub const fn infinite_offset(&self) -> usize {
        if self.infinite {
            self.slides_visible + self.slides_to_scroll
        } else {
            0
        }
    }
}
