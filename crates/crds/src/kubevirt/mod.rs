//! KubeVirt CRDs (`kubevirt.io/v1`)
//!
//! - VirtualMachine: the resource being backed up
//! - VirtualMachineInstance: the running instance, consulted for backup exclusion labels
//! - Network / Volume: the parts of the instance template that drive address
//!   resolution and restore checks

pub mod network;
pub mod virtual_machine;
pub mod virtual_machine_instance;
pub mod volume;

pub use network::*;
pub use virtual_machine::*;
pub use virtual_machine_instance::*;
pub use volume::*;
