//! KubeVirt volume sources
//!
//! Only the claim-backed sources matter to restore checks.

use crate::embedded_meta::ExtraFields;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of a VM's `spec.template.spec.volumes`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume name
    pub name: String,

    /// DataVolume backed volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_volume: Option<DataVolumeSource>,

    /// PersistentVolumeClaim backed volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimSource>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Volume backed by a CDI DataVolume
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataVolumeSource {
    /// DataVolume name
    pub name: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Volume backed by an existing PVC
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaimSource {
    /// PVC name
    pub claim_name: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}
