//! Attachment enumeration
//!
//! Decides which attachments of a VM carry addresses worth persisting and
//! fetches the IP record of each one, in interface order:
//!
//! 1. No networks declared: KubeVirt gives the VM the default network only.
//! 2. Otherwise every pod network resolves to the default network and every
//!    Multus network to its own attachment.
//! 3. Unless a pod network was declared or a Multus network was marked
//!    `default`, KubeVirt still injects the default network. It is appended last.
//!
//! The first failure aborts the whole enumeration.

use crate::error::NetInfoError;
use crate::fetcher::RecordFetcher;
use crate::model::{NetworkDeclaration, ResolvedAttachment, VmDeclaration, VmIdentity};
use crate::naming::AttachmentReference;
use futures::{stream, TryStreamExt};
use tracing::debug;

/// Walks a VM's network declarations and resolves each attachment
#[derive(Debug)]
pub struct AttachmentEnumerator<'a> {
    fetcher: &'a RecordFetcher,
}

/// State threaded through the declaration scan
#[derive(Debug, Default)]
struct Scan {
    resolved: Vec<ResolvedAttachment>,
    explicit_pod_network: bool,
    multus_is_primary: bool,
}

impl Scan {
    fn push(mut self, attachment: ResolvedAttachment) -> Self {
        self.resolved.push(attachment);
        self
    }

    fn with_explicit_pod_network(mut self) -> Self {
        self.explicit_pod_network = true;
        self
    }

    fn with_primary_multus(mut self, is_default: bool) -> Self {
        self.multus_is_primary |= is_default;
        self
    }

    fn needs_implicit_default(&self) -> bool {
        !self.multus_is_primary && !self.explicit_pod_network
    }
}

impl<'a> AttachmentEnumerator<'a> {
    /// Creates an enumerator fetching records through `fetcher`
    pub fn new(fetcher: &'a RecordFetcher) -> Self {
        Self { fetcher }
    }

    /// Resolve every attachment of `vm`, in interface order
    pub async fn enumerate(&self, vm: &VmDeclaration) -> Result<Vec<ResolvedAttachment>, NetInfoError> {
        let identity = &vm.identity;

        // No network on the VM means it will inherit the default network and only the default network
        if vm.networks.is_empty() {
            debug!("VM {} declares no networks, using the default network", identity);
            return Ok(vec![self.resolve_default(identity).await?]);
        }

        let scan = stream::iter(vm.networks.iter().map(Ok::<_, NetInfoError>))
            .try_fold(Scan::default(), |scan, declaration| self.visit(scan, identity, declaration))
            .await?;

        if !scan.needs_implicit_default() {
            return Ok(scan.resolved);
        }

        debug!("VM {} has no pod network and no primary Multus network, adding the injected default network", identity);
        let default = self.resolve_default(identity).await?;
        Ok(scan.push(default).resolved)
    }

    async fn visit(
        &self,
        scan: Scan,
        identity: &VmIdentity,
        declaration: &NetworkDeclaration,
    ) -> Result<Scan, NetInfoError> {
        match declaration {
            NetworkDeclaration::Pod => {
                let attachment = self.resolve_default(identity).await?;
                Ok(scan.push(attachment).with_explicit_pod_network())
            }
            NetworkDeclaration::Multus { network_name, is_default } => {
                let reference = AttachmentReference::from_network_name(network_name)?;
                let attachment = self.resolve(reference, identity).await?;
                Ok(scan.push(attachment).with_primary_multus(*is_default))
            }
        }
    }

    async fn resolve_default(&self, identity: &VmIdentity) -> Result<ResolvedAttachment, NetInfoError> {
        self.resolve(AttachmentReference::default_network(), identity).await
    }

    async fn resolve(
        &self,
        reference: AttachmentReference,
        identity: &VmIdentity,
    ) -> Result<ResolvedAttachment, NetInfoError> {
        let record_id = reference.record_identifier(identity)?;
        debug!("Attachment {} of VM {} maps to IP record {}", reference, identity, record_id);

        let record = self.fetcher.fetch(&record_id).await?;
        Ok(ResolvedAttachment { reference, record })
    }
}
