//! Kube-OVN IP record client
//!
//! Read-only access to the `IP` resources Kube-OVN creates for every address it
//! hands out. Callers depend on [`KubeOvnClientTrait`]; the concrete
//! [`KubeOvnClient`] talks to the Kubernetes API and
//! [`MockKubeOvnClient`] (feature `test-util`) serves records from memory.
//!
//! # Example
//!
//! ```no_run
//! use kubeovn_client::{KubeOvnClient, KubeOvnClientTrait};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // The Kubernetes client is only created on the first lookup
//! let client = KubeOvnClient::new();
//!
//! let ip = client.get_ip("my-vm.my-namespace").await?;
//! println!("{} {}", ip.spec.mac_address, ip.spec.v4_ip_address);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
#[path = "trait.rs"]
pub mod kubeovn_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::KubeOvnClient;
pub use error::KubeOvnError;
pub use kubeovn_trait::KubeOvnClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockKubeOvnClient;
