//! Carousels mounted by the page bootstrap.

use anyhow::{Context, Result};
use carousel_core::CarouselOptions;

/// Attribute holding a JSON option bag for declarative carousels.
pub const OPTIONS_ATTRIBUTE: &str = "data-carousel";

/// A selector paired with the options it is mounted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// CSS selector of the container element.
    pub selector: &'static str,
    /// Options applied to the carousel.
    pub options: CarouselOptions,
}

/// Demo carousels shipped with the page.
pub const PRESETS: [Preset; 4] = [
    Preset {
        selector: "#carousel1",
        options: CarouselOptions::new()
            .with_slides_visible(3)
            .with_slides_to_scroll(2)
            .with_loop(true),
    },
    Preset {
        selector: "#carousel2",
        options: CarouselOptions::new()
            .with_slides_visible(2)
            .with_slides_to_scroll(2)
            .with_infinite(true)
            .with_pagination(true),
    },
    Preset {
        selector: "#carousel3",
        options: CarouselOptions::new()
            .with_slides_visible(2)
            .with_slides_to_scroll(2)
            .with_pagination(true)
            .with_loop(true),
    },
    Preset {
        selector: "#carousel4",
        options: CarouselOptions::new(),
    },
];

/// Parse and validate a `data-carousel` attribute value.
///
/// A blank value selects the default options.
///
/// # Errors
/// Returns an error when the value is not a valid option bag or the options
/// fail validation.
pub fn parse_options(raw: &str) -> Result<CarouselOptions> {
    let options = if raw.trim().is_empty() {
        CarouselOptions::default()
    } else {
        serde_json::from_str(raw).with_context(|| format!("invalid {OPTIONS_ATTRIBUTE} value"))?
    };
    options.validate()?;
    Ok(options)
}
