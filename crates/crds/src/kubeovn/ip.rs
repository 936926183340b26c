//! IP CRD
//!
//! Kube-OVN records every address it assigns to a pod interface as a
//! cluster-scoped `IP` resource. For KubeVirt VMs the record is named after the
//! VM (`<vm>.<namespace>` for the default network,
//! `<vm>.<namespace>.<nad>.<nad-namespace>.ovn` for attachments).
//! This project only ever reads these records.

use crate::embedded_meta::ExtraFields;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "kubeovn.io",
    version = "v1",
    kind = "IP",
    plural = "ips",
    derive = "Default"
)]
#[serde(rename_all = "camelCase")]
pub struct IPSpec {
    /// Pod owning the address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pod_name: String,

    /// Namespace of the owning pod
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Subnet the address was taken from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subnet: String,

    /// Assigned MAC address
    #[serde(default)]
    pub mac_address: String,

    /// Assigned IPv4 address, empty on IPv6-only subnets
    #[serde(default)]
    pub v4_ip_address: String,

    /// Assigned IPv6 address, empty on IPv4-only subnets
    #[serde(default)]
    pub v6_ip_address: String,

    #[serde(flatten)]
    pub extra: ExtraFields,
}
