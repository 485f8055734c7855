//! Error types for page rendering.
//!
//! Rendering errors are deterministic functions of the input — retrying
//! with the same record is pointless, so the caller should surface them
//! (typically as a 500 from the HTTP layer).

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A required localization key is absent from the supplied string table.
    ///
    /// The render aborts before any markup is built; no partial or
    /// silently-blanked output is ever produced.
    #[error("missing localization key: {key}")]
    MissingStringKey {
        /// The key that was looked up and not found.
        key: String,
    },
}
