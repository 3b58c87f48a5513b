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

//! Shared test helpers used across loader suites.
//! Layout: surface.rs (in-memory rendering surface), module.rs (scripted module sources), slot.rs (shared error slot).

pub mod module;
pub mod slot;
pub mod surface;
