//! Action error types.
//!
//! Every error aborts the backup of the VM it was raised for. None of them is
//! turned into a skipped item.

use kube::Error as KubeError;
use thiserror::Error;
use vm_netinfo::NetInfoError;

/// Errors that can occur in the VM backup action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The item or backup handed to the action is missing or unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The VM is running without its companions being part of the backup
    #[error("VM {0} cannot be safely backed up")]
    UnsafeBackup(String),

    /// The VM is running but its instance could not be found
    #[error("VMI {0} not found")]
    VmiNotFound(String),

    /// The backup lacks the volumes the VM needs to come back
    #[error("VM {0} would not be restored correctly")]
    RestoreNotPossible(String),

    /// Address resolution failed
    #[error("Network identity error: {0}")]
    NetInfo(#[from] NetInfoError),

    /// Kubernetes API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] KubeError),

    /// Item conversion failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
