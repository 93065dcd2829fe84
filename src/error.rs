//! Error and rejection types
//!
//! Infrastructure failures use thiserror for structured error handling.
//! Guarded domain operations report a [`Rejection`] instead of an error:
//! the document is left untouched and the caller decides how to surface
//! the message to the user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// A refused state transition.
///
/// Rejections are outcomes, not failures: the in-memory document is
/// unchanged and the process carries on. Each variant carries the
/// user-facing explanation via its `Display` impl.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("cannot remove the last remaining dish")]
    LastTemplate,

    #[error("no dish template with that id exists")]
    UnknownTemplate,
}
