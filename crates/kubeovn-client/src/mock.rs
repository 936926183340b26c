//! Mock KubeOvnClient for unit testing
//!
//! This module provides a mock implementation of KubeOvnClientTrait that can be
//! used in unit tests without requiring a cluster running Kube-OVN.

use crate::error::KubeOvnError;
use crate::kubeovn_trait::KubeOvnClientTrait;
use crds::{IP, IPSpec};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock KubeOvnClient for testing
///
/// Stores IP records in memory. Clones share the same store, so a test can keep
/// a handle for assertions after moving a clone into the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockKubeOvnClient {
    ips: Arc<Mutex<HashMap<String, IP>>>,
    unavailable: Arc<Mutex<Option<String>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockKubeOvnClient {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an IP record to the mock store (for test setup)
    pub fn add_ip(&self, ip: IP) {
        let name = ip.metadata.name.clone().unwrap_or_default();
        self.ips.lock().unwrap().insert(name, ip);
    }

    /// Add an IP record built from its addresses (for test setup)
    pub fn add_address(&self, name: &str, mac: &str, v4: &str, v6: &str) {
        self.add_ip(ip_record(name, mac, v4, v6));
    }

    /// Make every subsequent lookup fail as if the API server were unreachable
    pub fn set_unavailable(&self, reason: impl Into<String>) {
        *self.unavailable.lock().unwrap() = Some(reason.into());
    }

    /// Names requested so far, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

/// Build an `IP` record with the given name and addresses
pub fn ip_record(name: &str, mac: &str, v4: &str, v6: &str) -> IP {
    IP::new(
        name,
        IPSpec {
            mac_address: mac.to_string(),
            v4_ip_address: v4.to_string(),
            v6_ip_address: v6.to_string(),
            ..Default::default()
        },
    )
}

#[async_trait::async_trait]
impl KubeOvnClientTrait for MockKubeOvnClient {
    async fn get_ip(&self, name: &str) -> Result<IP, KubeOvnError> {
        self.lookups.lock().unwrap().push(name.to_string());

        if let Some(reason) = self.unavailable.lock().unwrap().clone() {
            return Err(KubeOvnError::Unavailable(reason));
        }

        self.ips
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| KubeOvnError::NotFound(format!("IP {} not found", name)))
    }
}
