use orrery_engine::{Cursor, UiSurface};
use web_sys::{Element, HtmlElement};
use crate::error::WebError;

/// Page-side UI: the caption element and the body's cursor style.
pub struct DomSurface {
    body: HtmlElement,
    caption: Element,
}

impl DomSurface {
    /// Attach to the page. The caption element must already exist.
    pub fn attach(caption_id: &str) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let body = document.body().ok_or(WebError::NoBody)?;
        let caption = document
            .get_element_by_id(caption_id)
            .ok_or_else(|| WebError::MissingElement(caption_id.to_string()))?;
        Ok(Self { body, caption })
    }
}

impl UiSurface for DomSurface {
    fn set_cursor(&mut self, cursor: Cursor) {
        if self.body.style().set_property("cursor", cursor.css()).is_err() {
            log::warn!("could not set cursor to {}", cursor.css());
        }
    }

    fn set_caption(&mut self, text: &str) {
        self.caption.set_text_content(Some(text));
    }
}
