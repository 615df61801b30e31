#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cargo_common_metadata)]
//! DOM-free carousel controller.
//!
//! The controller turns a container's children into a horizontally sliding
//! strip, keeps a single current-index register, and fans index changes out
//! to registered observers. Everything that touches a rendering environment
//! goes through [`HostSurface`], so the index math and boundary policy run
//! (and are tested) on native targets.

pub mod breakpoints;
pub mod carousel;
pub mod error;
pub mod host;
pub mod layout;
pub mod navigation;
pub mod observers;
pub mod options;

pub use breakpoints::{EffectiveSlides, MOBILE_MAX_WIDTH, ViewportMode};
pub use carousel::{Carousel, Transition, class};
pub use error::{CarouselError, HostError};
pub use host::{EventKind, HostEvent, HostSurface, ListenTarget};
pub use navigation::Direction;
pub use observers::{MoveObservers, SubscriptionId};
pub use options::CarouselOptions;
