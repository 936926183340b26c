//! IP record fetcher
//!
//! Wraps the injected store client and converts its records and errors into
//! the resolution model. The store is only ever read.

use crate::error::NetInfoError;
use crate::model::AddressRecord;
use kubeovn_client::KubeOvnClientTrait;
use tracing::{debug, error};

/// Fetches Kube-OVN IP records by name
pub struct RecordFetcher {
    client: Box<dyn KubeOvnClientTrait>,
}

impl RecordFetcher {
    /// Creates a fetcher reading records through `client`
    pub fn new(client: Box<dyn KubeOvnClientTrait>) -> Self {
        Self { client }
    }

    /// Fetch the record named `record_id`
    ///
    /// # Returns
    /// * `Ok(AddressRecord)` - The record's addresses
    /// * `Err(NetInfoError::RecordNotFound)` - No record under that name
    /// * `Err(NetInfoError::StoreUnavailable)` - The store could not be reached
    pub async fn fetch(&self, record_id: &str) -> Result<AddressRecord, NetInfoError> {
        debug!("Fetching IP record {}", record_id);

        match self.client.get_ip(record_id).await {
            Ok(ip) => Ok(AddressRecord::from(ip)),
            Err(e) if e.is_not_found() => {
                error!("IP record {} not found", record_id);
                Err(NetInfoError::RecordNotFound {
                    record: record_id.to_string(),
                    source: e,
                })
            }
            Err(e) => {
                error!("Failed to fetch IP record {}: {}", record_id, e);
                Err(NetInfoError::StoreUnavailable {
                    record: record_id.to_string(),
                    source: e,
                })
            }
        }
    }
}

impl std::fmt::Debug for RecordFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordFetcher").finish_non_exhaustive()
    }
}
