//! Resolution errors
//!
//! Every variant carries the value that failed so a log line is enough to
//! diagnose it. None of them is retried here.

use kubeovn_client::KubeOvnError;
use thiserror::Error;

/// Errors that can occur while resolving a VM's network identity
#[derive(Debug, Error)]
pub enum NetInfoError {
    /// The VM (or a part of it the resolution needs) is missing
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A network name or attachment reference does not follow the grammar
    #[error("Malformed reference '{reference}': {reason}")]
    MalformedReference {
        /// The offending input
        reference: String,
        /// What part of the grammar it breaks
        reason: String,
    },

    /// An attachment reference lacks the Kube-OVN annotation suffix
    #[error("Invalid network annotation, expected '{reference}' to have suffix {suffix}")]
    InvalidReferenceSuffix {
        /// The offending reference
        reference: String,
        /// The suffix every reference must end with
        suffix: &'static str,
    },

    /// A secondary network lives in another namespace than the VM
    #[error(
        "Expected NAD to be in the same namespace as the VM, got {attachment_namespace} for NAD and {vm_namespace} for VM (reference '{reference}')"
    )]
    NamespaceMismatch {
        /// The offending reference
        reference: String,
        /// Namespace embedded in the reference
        attachment_namespace: String,
        /// Namespace of the VM
        vm_namespace: String,
    },

    /// VM name or namespace is empty
    #[error("Expected a VM name/namespace, got '{name}' and '{namespace}'")]
    EmptyIdentity {
        /// VM name as given
        name: String,
        /// VM namespace as given
        namespace: String,
    },

    /// No IP record exists under the derived name
    #[error("IP record {record} not found")]
    RecordNotFound {
        /// Name of the missing IP record
        record: String,
        /// Store error reporting the miss
        #[source]
        source: KubeOvnError,
    },

    /// The IP record store could not be reached
    #[error("Failed to fetch IP record {record}: {source}")]
    StoreUnavailable {
        /// Name of the IP record being fetched
        record: String,
        /// Underlying store error
        #[source]
        source: KubeOvnError,
    },

    /// Any of the above, labelled with the VM it happened for
    #[error("Failed to resolve network identity for VM {vm}: {source}")]
    Resolution {
        /// `<namespace>/<name>` of the VM
        vm: String,
        /// The failure itself
        #[source]
        source: Box<NetInfoError>,
    },
}

impl NetInfoError {
    /// Label this error with the VM it was raised for
    pub fn for_vm(self, vm: impl Into<String>) -> Self {
        Self::Resolution {
            vm: vm.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error, with any VM labels peeled off
    pub fn root(&self) -> &NetInfoError {
        match self {
            Self::Resolution { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn malformed(reference: &str, reason: impl Into<String>) -> Self {
        Self::MalformedReference {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}
