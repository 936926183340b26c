//! Request-scoped data model
//!
//! Everything here is derived from the VM object and the IP record store on
//! each resolution and dropped afterwards.

use crate::error::NetInfoError;
use crate::naming::AttachmentReference;
use crds::{IP, VirtualMachine};
use std::fmt;
use tracing::debug;

/// Name and namespace of a VM
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VmIdentity {
    /// VM name
    pub name: String,
    /// VM namespace
    pub namespace: String,
}

impl VmIdentity {
    /// Creates an identity from a name and a namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for VmIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// One entry of a VM's network list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkDeclaration {
    /// Mounts the cluster's default network
    Pod,
    /// Mounts a NetworkAttachmentDefinition (`<namespace>/<name>`), optionally
    /// as the VM's primary interface
    Multus {
        /// `<namespace>/<name>` of the NetworkAttachmentDefinition
        network_name: String,
        /// Whether this network replaces the pod network as primary interface
        is_default: bool,
    },
}

impl NetworkDeclaration {
    /// Shorthand for [`NetworkDeclaration::Multus`]
    pub fn multus(network_name: impl Into<String>, is_default: bool) -> Self {
        Self::Multus {
            network_name: network_name.into(),
            is_default,
        }
    }
}

/// The parts of a VM that address resolution reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmDeclaration {
    /// The VM the networks belong to
    pub identity: VmIdentity,
    /// Networks in declaration order
    pub networks: Vec<NetworkDeclaration>,
}

impl TryFrom<&VirtualMachine> for VmDeclaration {
    type Error = NetInfoError;

    fn try_from(vm: &VirtualMachine) -> Result<Self, Self::Error> {
        let identity = VmIdentity::new(
            vm.metadata.name.clone().unwrap_or_default(),
            vm.metadata.namespace.clone().unwrap_or_default(),
        );

        let template = vm.spec.template.as_ref().ok_or_else(|| {
            NetInfoError::InvalidInput(format!("VM {} has no instance template", identity))
        })?;

        let networks = template
            .spec
            .networks
            .iter()
            .flat_map(|network| {
                if network.pod.is_none() && network.multus.is_none() {
                    debug!("Skipping network {} of VM {}: not a pod or Multus network", network.name, identity);
                }
                let pod = network.pod.as_ref().map(|_| NetworkDeclaration::Pod);
                let multus = network
                    .multus
                    .as_ref()
                    .map(|m| NetworkDeclaration::multus(m.network_name.clone(), m.default));
                pod.into_iter().chain(multus)
            })
            .collect();

        Ok(Self { identity, networks })
    }
}

/// Addresses Kube-OVN assigned to one interface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    pub mac_address: String,
    pub ipv4_address: String,
    pub ipv6_address: String,
}

impl AddressRecord {
    /// IPv4 then IPv6, comma separated, empty fields left out
    pub fn combined_addresses(&self) -> String {
        [self.ipv4_address.as_str(), self.ipv6_address.as_str()]
            .into_iter()
            .filter(|address| !address.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<IP> for AddressRecord {
    fn from(ip: IP) -> Self {
        Self {
            mac_address: ip.spec.mac_address,
            ipv4_address: ip.spec.v4_ip_address,
            ipv6_address: ip.spec.v6_ip_address,
        }
    }
}

/// An attachment of a VM together with the record fetched for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttachment {
    pub reference: AttachmentReference,
    pub record: AddressRecord,
}

/// Network identity of one interface, in annotation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNetInfo {
    pub reference: AttachmentReference,
    pub mac_address: String,
    /// See [`AddressRecord::combined_addresses`]
    pub combined_addresses: String,
}
