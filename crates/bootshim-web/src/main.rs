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
//! Bootshim wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    bootshim_web::run_boot(bootshim_core::BootConfig::default());
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), bootshim_telemetry::TelemetryError> {
    bootshim_telemetry::init_logging(&bootshim_telemetry::LoggingConfig::new(
        bootshim_core::DEFAULT_LOG_LEVEL,
    ))?;
    tracing::warn!(
        "bootshim-web is intended for wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`"
    );
    Ok(())
}
