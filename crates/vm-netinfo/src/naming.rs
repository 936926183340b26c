//! Kube-OVN naming grammar
//!
//! Kube-OVN ties three strings together, and any drift from its own convention
//! means restored VMs silently get fresh addresses:
//!
//! - a KubeVirt network name: `<namespace>/<name>`
//! - an attachment reference, the prefix of the annotation keys Kube-OVN reads:
//!   `ovn.kubernetes.io` for the default network,
//!   `<name>.<namespace>.ovn.kubernetes.io` for a NetworkAttachmentDefinition
//! - an IP record name: `<vm>.<vm-namespace>` for the default network,
//!   `<vm>.<vm-namespace>.<name>.<namespace>.ovn` for an attachment
//!
//! Nothing is trimmed, case-folded or guessed. Input that does not match is an error.

use crate::error::NetInfoError;
use crate::model::VmIdentity;
use std::fmt;

/// Attachment reference of the default network, and suffix of every other one
pub const DEFAULT_NETWORK_ANNOTATION: &str = "ovn.kubernetes.io";

/// Trailing component of IP record names for attachments
const NAD_RECORD_SUFFIX: &str = "ovn";

/// Annotation-key prefix identifying one network attachment of a VM
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentReference(String);

impl AttachmentReference {
    /// Reference of the cluster default network
    pub fn default_network() -> Self {
        Self(DEFAULT_NETWORK_ANNOTATION.to_string())
    }

    /// Translate a KubeVirt Multus network name (`<namespace>/<name>`) into its
    /// attachment reference (`<name>.<namespace>.ovn.kubernetes.io`)
    pub fn from_network_name(network_name: &str) -> Result<Self, NetInfoError> {
        let parts: Vec<&str> = network_name.split('/').collect();
        let [namespace, name] = parts.as_slice() else {
            return Err(NetInfoError::malformed(
                network_name,
                "expected network name to have format [NS]/[NAD]",
            ));
        };
        if namespace.is_empty() || name.is_empty() {
            return Err(NetInfoError::malformed(
                network_name,
                "network name has an empty namespace or name",
            ));
        }

        Ok(Self(format!("{}.{}.{}", name, namespace, DEFAULT_NETWORK_ANNOTATION)))
    }

    /// Whether this is the default network's reference
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_NETWORK_ANNOTATION
    }

    /// The reference as written in annotation keys
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Annotation key for `field` on this attachment, `<reference>/<field>`
    pub fn annotation_key(&self, field: &str) -> String {
        format!("{}/{}", self.0, field)
    }

    /// Name of the IP record holding this attachment's addresses for `vm`
    pub fn record_identifier(&self, vm: &VmIdentity) -> Result<String, NetInfoError> {
        record_identifier_for(&self.0, &vm.name, &vm.namespace)
    }
}

impl From<String> for AttachmentReference {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl From<&str> for AttachmentReference {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl AsRef<str> for AttachmentReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the IP record name for the interface of VM `vm_name`/`vm_namespace`
/// identified by the attachment reference `reference`.
///
/// Attachments must live in the VM's own namespace.
pub fn record_identifier_for(reference: &str, vm_name: &str, vm_namespace: &str) -> Result<String, NetInfoError> {
    if vm_name.is_empty() || vm_namespace.is_empty() {
        return Err(NetInfoError::EmptyIdentity {
            name: vm_name.to_string(),
            namespace: vm_namespace.to_string(),
        });
    }

    if reference == DEFAULT_NETWORK_ANNOTATION {
        return Ok(format!("{}.{}", vm_name, vm_namespace));
    }

    let Some(attachment) = reference
        .strip_suffix(DEFAULT_NETWORK_ANNOTATION)
        .and_then(|rest| rest.strip_suffix('.'))
    else {
        return Err(NetInfoError::InvalidReferenceSuffix {
            reference: reference.to_string(),
            suffix: DEFAULT_NETWORK_ANNOTATION,
        });
    };

    let parts: Vec<&str> = attachment.split('.').collect();
    let [nad_name, nad_namespace] = parts.as_slice() else {
        return Err(NetInfoError::malformed(
            reference,
            format!("expected NAD annotation to have pattern [NAD].[NS], got {}", attachment),
        ));
    };
    if nad_name.is_empty() || nad_namespace.is_empty() {
        return Err(NetInfoError::malformed(reference, "NAD annotation has an empty name or namespace"));
    }

    if *nad_namespace != vm_namespace {
        return Err(NetInfoError::NamespaceMismatch {
            reference: reference.to_string(),
            attachment_namespace: nad_namespace.to_string(),
            vm_namespace: vm_namespace.to_string(),
        });
    }

    Ok(format!(
        "{}.{}.{}.{}.{}",
        vm_name, vm_namespace, nad_name, nad_namespace, NAD_RECORD_SUFFIX
    ))
}
