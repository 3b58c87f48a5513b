//! `document.body` rendering surface.

use bootshim_core::{ErrorNotice, RenderSurface, SurfaceError, SurfaceResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::reason::failure_reason_from_js;

/// Tag of the block element holding the notice.
const NOTICE_TAG: &str = "p";

/// Surface over the page body. The body is looked up on every mutation, so a
/// missing body only matters once the failure path runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBody;

impl DocumentBody {
    /// Surface for the current page.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RenderSurface for DocumentBody {
    fn clear(&mut self) -> SurfaceResult<()> {
        let (_, body) = locate()?;
        body.set_text_content(Some(""));
        Ok(())
    }

    fn append_notice(&mut self, notice: &ErrorNotice) -> SurfaceResult<()> {
        let (document, body) = locate()?;
        let element: HtmlElement = document
            .create_element(NOTICE_TAG)
            .map_err(|err| dom_error("create_element", &err))?
            .dyn_into()
            .map_err(|_| SurfaceError::operation("dyn_into", "notice element is not an HtmlElement"))?;

        let style = element.style();
        style
            .set_property("color", &notice.style().color)
            .map_err(|err| dom_error("style.color", &err))?;
        style
            .set_property("white-space", notice.style().white_space.as_css())
            .map_err(|err| dom_error("style.white_space", &err))?;
        element.set_text_content(Some(notice.text()));

        body.append_child(&element)
            .map_err(|err| dom_error("append_child", &err))?;
        Ok(())
    }
}

fn locate() -> SurfaceResult<(Document, HtmlElement)> {
    let window = web_sys::window().ok_or(SurfaceError::Unavailable { surface: "window" })?;
    let document = window.document().ok_or(SurfaceError::Unavailable {
        surface: "document",
    })?;
    let body = document
        .body()
        .ok_or(SurfaceError::Unavailable { surface: "body" })?;
    Ok((document, body))
}

fn dom_error(operation: &'static str, err: &JsValue) -> SurfaceError {
    SurfaceError::operation(operation, failure_reason_from_js(err).to_display_string())
}
