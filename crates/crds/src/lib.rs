//! External CRD Definitions
//!
//! Typed models for the resources owned by other operators that the VM backup
//! action reads: KubeVirt virtual machines, Kube-OVN IP records and Velero backups.
//!
//! These CRDs are never installed by this project. Only the fields we read are
//! modelled; every other field is kept in a flattened map so that a resource
//! survives a deserialize/serialize round trip unchanged.

pub mod embedded_meta;
pub mod kubeovn;
pub mod kubevirt;
pub mod velero;

pub use embedded_meta::*;
pub use kubeovn::*;
pub use kubevirt::*;
pub use velero::*;
