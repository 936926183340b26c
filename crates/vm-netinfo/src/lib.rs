//! VM network identity resolution
//!
//! Works out which Kube-OVN `IP` record belongs to each network interface of a
//! KubeVirt VM and turns those records into the annotations Kube-OVN reads when
//! the VM is recreated, so a restored VM gets its old MAC and IP addresses back.
//!
//! The pieces, leaves first:
//! - [`naming`]: the string grammar linking network names, annotation keys and
//!   IP record names
//! - [`fetcher`]: IP record lookups through an injected [`KubeOvnClientTrait`]
//! - [`enumerator`]: which attachments a VM has, including the implicit
//!   default network
//! - [`annotations`]: `<ref>/mac_address` and `<ref>/ip_address` entries
//! - [`resolver`]: the entry point used by the backup action
//!
//! # Example
//!
//! ```no_run
//! use kubeovn_client::KubeOvnClient;
//! use vm_netinfo::NetInfoResolver;
//!
//! # async fn example(vm: &crds::VirtualMachine) -> Result<(), vm_netinfo::NetInfoError> {
//! let resolver = NetInfoResolver::new(Box::new(KubeOvnClient::new()));
//! let annotations = resolver.resolve_annotations(Some(vm)).await?;
//! for (key, value) in &annotations {
//!     println!("{key}={value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`KubeOvnClientTrait`]: kubeovn_client::KubeOvnClientTrait

pub mod annotations;
pub mod enumerator;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod naming;
pub mod resolver;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod naming_test;

pub use annotations::{merge_annotations, AnnotationSet};
pub use enumerator::AttachmentEnumerator;
pub use error::NetInfoError;
pub use fetcher::RecordFetcher;
pub use model::{AddressRecord, NetworkDeclaration, ResolvedAttachment, ResolvedNetInfo, VmDeclaration, VmIdentity};
pub use naming::{AttachmentReference, record_identifier_for, DEFAULT_NETWORK_ANNOTATION};
pub use resolver::NetInfoResolver;
