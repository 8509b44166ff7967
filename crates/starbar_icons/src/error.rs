//! Icon error types

use thiserror::Error;

/// Errors that can occur when resolving icon assets
#[derive(Error, Debug)]
pub enum IconError {
    /// No family is registered under the requested identifier
    #[error("unknown icon family: {0}")]
    UnknownFamily(String),
}
