//! Error types for cutsim-bench-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for cutsim-bench-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Failed to fetch data: {0}")]
    Network(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Missing attribute: {attribute}")]
    MissingAttribute { attribute: String },

    #[error("Unknown metric type: {0}")]
    UnknownMetric(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}
