//! Single-start guard for the boot entry point.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub(crate) struct BootGuard {
    started: AtomicBool,
}

impl BootGuard {
    pub(crate) const fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// `true` for the first caller only.
    #[must_use]
    pub(crate) fn claim(&self) -> bool {
        !self.started.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_claim_succeeds() {
        let guard = BootGuard::new();
        assert!(guard.claim());
        assert!(!guard.claim());
        assert!(!guard.claim());
    }
}
