//! Structured error types for the header engine.
//!
//! Geometry itself never fails; errors only come from decoding pass inputs
//! and encoding layouts at the crate boundary.

/// All errors surfaced by the header engine.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Malformed or mistyped JSON input.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure converting to or from a JavaScript value.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeaderError>;

impl From<serde_wasm_bindgen::Error> for HeaderError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<HeaderError> for wasm_bindgen::JsValue {
    fn from(e: HeaderError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
