#![deny(unsafe_code)]
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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Browser bindings for the bootshim loader.
//! This crate wires `bootshim-core` to `import()`, `document.body` and the
//! global error slot, and ships the panic hook the application installs.

#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(any(target_arch = "wasm32", test))]
mod guard;
#[cfg(target_arch = "wasm32")]
pub mod import;
#[cfg(target_arch = "wasm32")]
pub mod panic;
#[cfg(target_arch = "wasm32")]
pub mod reason;
#[cfg(target_arch = "wasm32")]
pub mod slot;

#[cfg(target_arch = "wasm32")]
pub use boot::{WebBootError, run_boot};
