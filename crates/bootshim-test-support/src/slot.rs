//! Error slot fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use bootshim_core::ErrorSlot;

/// Slot shared between a test, a scripted module and the loader.
///
/// Clones observe the same value, so a module can publish into the slot while
/// the load is in flight.
#[derive(Debug, Clone, Default)]
pub struct SharedSlot {
    value: Rc<RefCell<Option<String>>>,
}

impl SharedSlot {
    /// Unset slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot already holding `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.publish(value);
        slot
    }

    /// Store `value`, replacing any previous one.
    pub fn publish(&self, value: impl Into<String>) {
        *self.value.borrow_mut() = Some(value.into());
    }

    /// Remove the stored value.
    pub fn clear(&self) {
        self.value.borrow_mut().take();
    }
}

impl ErrorSlot for SharedSlot {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}
