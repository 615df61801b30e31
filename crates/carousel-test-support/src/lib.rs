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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across integration suites.
//! Layout: host.rs (in-memory host surface), logs.rs (tracing capture).

pub mod host;
pub mod logs;

pub use host::{FakeHost, FakeListener, FakeNode};
pub use logs::capture_logs;
