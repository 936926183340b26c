//! Kube-OVN client errors

use thiserror::Error;

/// Errors that can occur when reading Kube-OVN IP records
#[derive(Debug, Error)]
pub enum KubeOvnError {
    /// No IP record exists under the requested name
    #[error("Not found: {0}")]
    NotFound(String),

    /// The Kubernetes API could not be reached or no client could be built
    #[error("Kube-OVN store unavailable: {0}")]
    Unavailable(String),

    /// Kubernetes API returned an error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),
}

impl KubeOvnError {
    /// Whether the error means the record does not exist (as opposed to a
    /// failure to reach the store)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
