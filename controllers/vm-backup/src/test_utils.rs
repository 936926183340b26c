//! Test utilities for unit testing the backup action
//!
//! This module provides helpers for creating test VMs and backups, and a
//! static VMI lookup standing in for the cluster.

use crate::error::ActionError;
use crate::safety::VmiLookup;
use crds::*;
use kubeovn_client::MockKubeOvnClient;
use std::sync::{Arc, Mutex};

/// Helper to create a stopped test VirtualMachine with an instance template
pub fn create_test_vm(name: &str, namespace: &str, networks: Vec<Network>) -> VirtualMachine {
    let mut vm = VirtualMachine::new(
        name,
        VirtualMachineSpec {
            template: Some(VirtualMachineInstanceTemplateSpec {
                spec: VirtualMachineInstanceSpec {
                    networks,
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    vm.metadata.namespace = Some(namespace.to_string());
    vm
}

/// Mark `vm` as running
pub fn running(mut vm: VirtualMachine) -> VirtualMachine {
    vm.status = Some(VirtualMachineStatus {
        printable_status: Some(PRINTABLE_STATUS_RUNNING.to_string()),
        ..Default::default()
    });
    vm
}

/// Add a DataVolume template named `name` to `vm`
pub fn with_data_volume_template(mut vm: VirtualMachine, name: &str) -> VirtualMachine {
    vm.spec.data_volume_templates.push(DataVolumeTemplateSpec {
        metadata: EmbeddedMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    });
    vm
}

/// Helper to create a Multus network entry
pub fn multus_network(name: &str, network_name: &str, default: bool) -> Network {
    Network {
        name: name.to_string(),
        multus: Some(MultusNetwork {
            network_name: network_name.to_string(),
            default,
        }),
        ..Default::default()
    }
}

/// Helper to create a test Backup including `resources`
pub fn create_test_backup(resources: &[&str]) -> Backup {
    Backup::new(
        "test-backup",
        BackupSpec {
            included_resources: resources.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        },
    )
}

/// VMI lookup answering the same for every VMI, recording what it was asked
#[derive(Debug, Clone, Default)]
pub struct StaticVmiLookup {
    excluded: bool,
    missing: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticVmiLookup {
    pub fn excluded(excluded: bool) -> Self {
        Self {
            excluded,
            ..Default::default()
        }
    }

    /// Lookup for which no VMI exists
    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Default::default()
        }
    }

    /// VMIs looked up so far, as `namespace/name`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl VmiLookup for StaticVmiLookup {
    async fn is_vmi_excluded(&self, name: &str, namespace: &str) -> Result<bool, ActionError> {
        let vmi = format!("{}/{}", namespace, name);
        self.calls.lock().unwrap().push(vmi.clone());
        if self.missing {
            return Err(ActionError::VmiNotFound(vmi));
        }
        Ok(self.excluded)
    }
}

/// Helper to create a mock store holding the default network record of VM
/// `name` in `test-ns`
pub fn create_test_store_for(name: &str) -> MockKubeOvnClient {
    let mock = MockKubeOvnClient::new();
    mock.add_address(&format!("{}.test-ns", name), "00:00:00:00:00:01", "10.0.0.1", "");
    mock
}
