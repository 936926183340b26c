//! Test utilities for unit testing address resolution
//!
//! Builders for VMs and their networks, plus a mock IP record store
//! pre-populated the way Kube-OVN would name the records.

use crds::*;
use kubeovn_client::MockKubeOvnClient;

/// Helper to create a test VirtualMachine with an instance template
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

/// Helper to create a pod network entry
pub fn pod_network(name: &str) -> Network {
    Network {
        name: name.to_string(),
        pod: Some(PodNetwork::default()),
        ..Default::default()
    }
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

/// Helper to create a mock store holding the records of VM `test-vm` in
/// `test-ns`: its default network plus one record per NAD in `nads`, all
/// NADs living in `test-ns`.
///
/// Addresses are numbered in the order given, starting with the default
/// network at `.1`.
pub fn create_test_store(nads: &[&str]) -> MockKubeOvnClient {
    let mock = MockKubeOvnClient::new();
    mock.add_address("test-vm.test-ns", "00:00:00:00:00:01", "10.0.0.1", "fd00::1");
    for (i, nad) in nads.iter().enumerate() {
        let n = i + 2;
        mock.add_address(
            &format!("test-vm.test-ns.{}.test-ns.ovn", nad),
            &format!("00:00:00:00:00:{:02x}", n),
            &format!("10.0.0.{}", n),
            "",
        );
    }
    mock
}
