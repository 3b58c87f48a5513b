//! Panic hook that feeds the error slot.
//!
//! The application module installs this early; when it panics during startup
//! the loader shows the panic message instead of the opaque wasm trap.

use std::panic::{self, PanicHookInfo};

use tracing::error;

use crate::slot::GlobalErrorSlot;

/// Install a panic hook publishing each panic message into `slot`, logging it
/// to the browser console, and then chaining to the previous hook.
pub fn install_panic_hook(slot: GlobalErrorSlot) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        report_panic(&slot, &info.to_string());
        console_error_panic_hook::hook(info);
        previous(info);
    }));
}

/// Publish a panic `message` into `slot` so a failed boot displays it.
pub fn report_panic(slot: &GlobalErrorSlot, message: &str) {
    if let Err(err) = slot.publish(message) {
        error!(slot = slot.key(), error = ?err, "failed to publish panic message");
    }
}
