//! Scripted module sources.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use bootshim_core::{FailureReason, LoadFailure, ModuleSource, ModuleSpecifier};

use crate::slot::SharedSlot;

#[derive(Debug, Clone)]
enum Script {
    Resolve,
    Reject(FailureReason),
    Pending,
}

/// Module source whose outcome is fixed up front.
#[derive(Debug, Clone)]
pub struct ScriptedModule {
    script: Script,
    publish: Option<(SharedSlot, String)>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl ScriptedModule {
    /// Source whose load succeeds.
    #[must_use]
    pub fn resolving() -> Self {
        Self::with_script(Script::Resolve)
    }

    /// Source whose load rejects with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<FailureReason>) -> Self {
        Self::with_script(Script::Reject(reason.into()))
    }

    /// Source whose load never settles.
    #[must_use]
    pub fn pending() -> Self {
        Self::with_script(Script::Pending)
    }

    /// Publish `value` into `slot` while the load is in flight, before it settles.
    #[must_use]
    pub fn publishing(mut self, slot: &SharedSlot, value: impl Into<String>) -> Self {
        self.publish = Some((slot.clone(), value.into()));
        self
    }

    /// Specifiers requested so far. Shared with clones of this source.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            publish: None,
            requests: Rc::default(),
        }
    }
}

#[async_trait(?Send)]
impl ModuleSource for ScriptedModule {
    async fn load(&self, specifier: &ModuleSpecifier) -> Result<(), LoadFailure> {
        self.requests.borrow_mut().push(specifier.to_string());
        if let Some((slot, value)) = &self.publish {
            slot.publish(value.clone());
        }
        match &self.script {
            Script::Resolve => Ok(()),
            Script::Reject(reason) => Err(LoadFailure::new(reason.clone())),
            Script::Pending => std::future::pending().await,
        }
    }
}
