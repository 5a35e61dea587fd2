//! Error types for the action-type registry

use casekit_core::ActionTypeId;
use thiserror::Error;

/// Registry-specific errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Action type '{0}' is not registered")]
    ActionTypeNotRegistered(ActionTypeId),

    #[error("Registry state is inconsistent: {0}")]
    Inconsistent(String),
}

/// Registry result type
pub type RegistryResult<T> = Result<T, RegistryError>;
