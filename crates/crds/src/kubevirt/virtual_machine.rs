//! VirtualMachine CRD
//!
//! A KubeVirt virtual machine definition. Its instance template declares the
//! networks whose addresses are persisted at backup time.

use crate::embedded_meta::{EmbeddedMeta, ExtraFields};
use crate::kubevirt::VirtualMachineInstanceSpec;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Printable status reported while the VM is booting
pub const PRINTABLE_STATUS_STARTING: &str = "Starting";
/// Printable status reported while the VM is running
pub const PRINTABLE_STATUS_RUNNING: &str = "Running";

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[kube(
    group = "kubevirt.io",
    version = "v1",
    kind = "VirtualMachine",
    namespaced,
    status = "VirtualMachineStatus",
    derive = "Default"
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineSpec {
    /// Template for the VirtualMachineInstance started from this VM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<VirtualMachineInstanceTemplateSpec>,

    /// DataVolumes created and owned by this VM
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_volume_templates: Vec<DataVolumeTemplateSpec>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Instance template embedded in a VirtualMachine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceTemplateSpec {
    /// Metadata applied to the created instance; restore-time annotations land here
    #[serde(default)]
    pub metadata: EmbeddedMeta,

    /// Instance spec
    #[serde(default)]
    pub spec: VirtualMachineInstanceSpec,
}

/// DataVolume template owned by a VirtualMachine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataVolumeTemplateSpec {
    #[serde(default)]
    pub metadata: EmbeddedMeta,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineStatus {
    /// Human readable state ("Stopped", "Starting", "Running", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printable_status: Option<String>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl VirtualMachine {
    /// Whether the VM is starting or running, i.e. has a live instance
    pub fn is_running(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.printable_status.as_deref())
            .is_some_and(|s| s == PRINTABLE_STATUS_STARTING || s == PRINTABLE_STATUS_RUNNING)
    }

    /// Whether `name` is one of the VM's DataVolume templates
    pub fn has_data_volume_template(&self, name: &str) -> bool {
        self.spec
            .data_volume_templates
            .iter()
            .any(|t| t.metadata.name.as_deref() == Some(name))
    }
}
