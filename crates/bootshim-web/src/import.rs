//! Dynamic `import()` module source.

// wasm-bindgen expands the JS import shim into unsafe FFI glue.
#![allow(unsafe_code)]

use async_trait::async_trait;
use bootshim_core::{BootConfig, FailureReason, LoadFailure, ModuleSource, ModuleSpecifier};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::reason::failure_reason_from_js;

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<js_sys::Promise, JsValue>;
}

/// Loads the application module through the browser's dynamic `import()`.
///
/// Relative specifiers are resolved against `base`, normally the URL the shim
/// was served from. Without one the document base URL is used.
#[derive(Debug, Clone, Default)]
pub struct DynamicImport {
    base: Option<String>,
}

impl DynamicImport {
    /// Resolve against the current document's base URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an explicit base URL.
    #[must_use]
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Resolve against `config.base_url`, or the document base URL when unset.
    #[must_use]
    pub fn from_config(config: &BootConfig) -> Self {
        config
            .base_url
            .clone()
            .map_or_else(Self::new, Self::with_base)
    }

    /// Absolute URL passed to `import()` for `specifier`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadFailure`] if no base URL is available or the URL cannot be parsed.
    pub fn resolve(&self, specifier: &ModuleSpecifier) -> Result<String, LoadFailure> {
        let base = match &self.base {
            Some(base) => base.clone(),
            None => document_base()?,
        };
        web_sys::Url::new_with_base(specifier.as_str(), &base)
            .map(|url| url.href())
            .map_err(|err| LoadFailure::new(failure_reason_from_js(&err)))
    }
}

#[async_trait(?Send)]
impl ModuleSource for DynamicImport {
    async fn load(&self, specifier: &ModuleSpecifier) -> Result<(), LoadFailure> {
        let url = self.resolve(specifier)?;
        let promise =
            import_module(&url).map_err(|err| LoadFailure::new(failure_reason_from_js(&err)))?;
        JsFuture::from(promise)
            .await
            .map(|_module| ())
            .map_err(|err| LoadFailure::new(failure_reason_from_js(&err)))
    }
}

fn document_base() -> Result<String, LoadFailure> {
    let missing = || LoadFailure::new(FailureReason::message("document base url unavailable"));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(missing)?;
    document.base_uri().ok().flatten().ok_or_else(missing)
}
