//! VirtualMachineInstance CRD
//!
//! The running counterpart of a VirtualMachine. Its spec is the same type that
//! VM templates embed; at backup time only the VMI labels are read.

use crate::embedded_meta::ExtraFields;
use crate::kubevirt::{Network, Volume};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label set on a VMI to keep it (and its VM) out of backups
pub const VELERO_EXCLUDE_LABEL: &str = "velero.kubevirt.io/exclude-from-backup";

/// Spec shared by VirtualMachineInstances and VM templates
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "kubevirt.io",
    version = "v1",
    kind = "VirtualMachineInstance",
    namespaced,
    derive = "Default"
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceSpec {
    /// Declared networks, in interface order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<Network>,

    /// Declared volumes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl VirtualMachineInstance {
    /// Whether the VMI is labelled for exclusion from backups
    pub fn is_excluded_from_backup(&self) -> bool {
        self.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(VELERO_EXCLUDE_LABEL))
            .is_some_and(|v| v == "true")
    }
}
