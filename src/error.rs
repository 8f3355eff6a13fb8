//! Error types for satchel.
//!
//! The top-level [`Error`] nests per-subsystem enums so callers can match
//! on the failure domain: template handling, parameter store requests,
//! or local I/O.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    InvalidInput(String),
}

/// Template subsystem failures.
///
/// `Parse` is a malformed template; `Render` is a fault while executing
/// an otherwise well-formed template. Both carry the template name and
/// the engine's detail (position information where available).
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to parse template {name}: {detail}")]
    Parse { name: String, detail: String },

    #[error("failed to render template {name}: {detail}")]
    Render { name: String, detail: String },
}

/// Parameter store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("parameter already exists: {0} (use --overwrite to replace)")]
    AlreadyExists(String),

    #[error("parameter store request failed: {0}")]
    Request(String),
}
