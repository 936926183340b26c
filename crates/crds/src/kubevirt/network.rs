//! KubeVirt network sources
//!
//! A network entry selects either the cluster's pod network or a Multus
//! NetworkAttachmentDefinition. Other sources are carried through untouched.

use crate::embedded_meta::ExtraFields;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of a VM's `spec.template.spec.networks`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network name, referenced by the matching interface
    pub name: String,

    /// Cluster default (pod) network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod: Option<PodNetwork>,

    /// Secondary network attached through Multus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multus: Option<MultusNetwork>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Pod network source
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PodNetwork {
    /// IPv4 CIDR of the VM network when masquerading
    #[serde(rename = "vmNetworkCIDR", default, skip_serializing_if = "Option::is_none")]
    pub vm_network_cidr: Option<String>,

    /// IPv6 CIDR of the VM network when masquerading
    #[serde(rename = "vmIPv6NetworkCIDR", default, skip_serializing_if = "Option::is_none")]
    pub vm_ipv6_network_cidr: Option<String>,
}

/// Multus network source
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultusNetwork {
    /// NetworkAttachmentDefinition reference, `<namespace>/<name>`
    pub network_name: String,

    /// Use this network as the VM's primary interface instead of the pod network
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}
