//! KubeOvnClient trait for mocking
//!
//! This trait abstracts the IP record store so the resolution engine can be
//! handed a concrete client or an in-memory mock at construction time.

use crate::error::KubeOvnError;
use crds::IP;

/// Trait for Kube-OVN IP record lookups
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait KubeOvnClientTrait: Send + Sync {
    /// Get the IP record named `name`
    ///
    /// # Returns
    /// * `Ok(IP)` - The record
    /// * `Err(KubeOvnError::NotFound)` - No record under that name
    /// * `Err(_)` - The store could not be reached
    async fn get_ip(&self, name: &str) -> Result<IP, KubeOvnError>;
}
