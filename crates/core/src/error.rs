//! Error model.

use thiserror::Error;

/// A second instance of a process-wide singleton was requested.
///
/// There is no recovery path for this error: callers should go through the
/// shared accessor instead of constructing the instance directly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("an instance of {type_name} already exists; use the shared accessor instead")]
pub struct DuplicateSingletonError {
    type_name: &'static str,
}

impl DuplicateSingletonError {
    pub fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }

    /// Returns the type whose instance already exists.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
