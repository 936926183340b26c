//! Backup CRD
//!
//! A Velero backup request. Its resource filters decide which companions of a
//! VM (instance, pods, claims) are captured alongside it.

use crate::embedded_meta::ExtraFields;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label marking a backup that only captures metadata, not volume data
pub const METADATA_BACKUP_LABEL: &str = "velero.kubevirt.io/metadataBackup";

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[kube(
    group = "velero.io",
    version = "v1",
    kind = "Backup",
    namespaced,
    derive = "Default"
)]
#[serde(rename_all = "camelCase")]
pub struct BackupSpec {
    /// Resources to include; empty means all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_resources: Vec<String>,

    /// Resources to exclude
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,

    /// Namespaces to include; empty means all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_namespaces: Vec<String>,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Backup {
    /// Whether this backup carries the metadata-only label
    pub fn is_metadata_backup(&self) -> bool {
        self.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(METADATA_BACKUP_LABEL))
            .is_some_and(|v| v == "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_is_metadata_backup() {
        let mut backup = Backup::default();
        assert!(!backup.is_metadata_backup());

        backup.metadata.labels = Some(BTreeMap::from([(METADATA_BACKUP_LABEL.to_string(), "true".to_string())]));
        assert!(backup.is_metadata_backup());
    }

    #[test]
    fn test_deserialize_resource_filters() {
        let backup: Backup = serde_json::from_value(serde_json::json!({
            "apiVersion": "velero.io/v1",
            "kind": "Backup",
            "metadata": { "name": "nightly", "namespace": "velero" },
            "spec": {
                "includedResources": ["virtualmachines", "virtualmachineinstances"],
                "excludedResources": ["pods"],
                "ttl": "720h0m0s"
            }
        }))
        .unwrap();

        assert_eq!(backup.spec.included_resources, vec!["virtualmachines", "virtualmachineinstances"]);
        assert_eq!(backup.spec.excluded_resources, vec!["pods"]);
        assert_eq!(backup.spec.extra["ttl"], "720h0m0s");
    }
}
