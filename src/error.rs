//! Crate error type.
//!
//! Missing markup is not an error; controllers simply do not attach. These
//! variants cover the few failures that are worth reporting at start-up.

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Js(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
