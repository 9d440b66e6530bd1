use wasm_bindgen::JsValue;

/// Failures while attaching to the page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element #{0} not found")]
    MissingElement(String),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
