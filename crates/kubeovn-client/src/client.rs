//! Kube-OVN IP record client
//!
//! Reads `kubeovn.io/v1` `IP` resources through the Kubernetes API.
//! The underlying Kubernetes client is created on the first lookup and reused
//! for every later one.

use crate::error::KubeOvnError;
use crate::kubeovn_trait::KubeOvnClientTrait;
use crds::IP;
use kube::{Api, Client};
use tokio::sync::OnceCell;
use tracing::debug;

/// Kube-OVN IP record client
pub struct KubeOvnClient {
    ips: OnceCell<Api<IP>>,
}

impl KubeOvnClient {
    /// Create a client that builds its Kubernetes connection lazily from the
    /// ambient configuration (`KUBECONFIG`, in-cluster service account, ...)
    pub fn new() -> Self {
        Self {
            ips: OnceCell::new(),
        }
    }

    /// Create a client on top of an existing Kubernetes client
    pub fn from_client(client: Client) -> Self {
        Self {
            ips: OnceCell::new_with(Some(Api::all(client))),
        }
    }

    /// Whether the Kubernetes connection has been established
    pub fn is_connected(&self) -> bool {
        self.ips.initialized()
    }

    async fn ips(&self) -> Result<&Api<IP>, KubeOvnError> {
        self.ips
            .get_or_try_init(|| async {
                debug!("Creating Kubernetes client for Kube-OVN IP lookups");
                let client = Client::try_default().await.map_err(|e| {
                    KubeOvnError::Unavailable(format!("failed to create Kubernetes client: {}", e))
                })?;
                Ok::<_, KubeOvnError>(Api::all(client))
            })
            .await
    }
}

impl Default for KubeOvnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KubeOvnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeOvnClient")
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[async_trait::async_trait]
impl KubeOvnClientTrait for KubeOvnClient {
    async fn get_ip(&self, name: &str) -> Result<IP, KubeOvnError> {
        let ips = self.ips().await?;
        debug!("Fetching Kube-OVN IP {}", name);

        match ips.get_opt(name).await {
            Ok(Some(ip)) => Ok(ip),
            Ok(None) => Err(KubeOvnError::NotFound(format!("IP {} not found", name))),
            Err(e) => Err(KubeOvnError::Kube(e)),
        }
    }
}
