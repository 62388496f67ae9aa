//! Error types
//!
//! Only component setup can fail. Once a frame loop is running, drawing
//! errors are swallowed per frame since the browser offers no recovery.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("canvas #{0} has no 2d context")]
    NoContext(String),
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
    #[error("malformed settings json: {0}")]
    SettingsJson(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        FxError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, FxError>;
