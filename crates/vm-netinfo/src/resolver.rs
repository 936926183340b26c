//! Resolution entry point
//!
//! A resolution either produces the annotations of every attachment of the
//! VM or fails as a whole. Nothing is cached between calls since Kube-OVN may
//! reassign addresses between two backups.

use crate::annotations::{merge_annotations, AnnotationSet};
use crate::enumerator::AttachmentEnumerator;
use crate::error::NetInfoError;
use crate::fetcher::RecordFetcher;
use crate::model::{ResolvedNetInfo, VmDeclaration};
use crds::VirtualMachine;
use kubeovn_client::KubeOvnClientTrait;
use tracing::{error, info};

/// Resolves VMs into the annotations pinning their addresses
#[derive(Debug)]
pub struct NetInfoResolver {
    fetcher: RecordFetcher,
}

impl NetInfoResolver {
    /// Create a resolver reading IP records through `client`
    pub fn new(client: Box<dyn KubeOvnClientTrait>) -> Self {
        Self {
            fetcher: RecordFetcher::new(client),
        }
    }

    /// Resolve every attachment of `vm`, in interface order
    pub async fn resolve_net_info(&self, vm: &VmDeclaration) -> Result<Vec<ResolvedNetInfo>, NetInfoError> {
        let attachments = AttachmentEnumerator::new(&self.fetcher).enumerate(vm).await?;
        Ok(attachments.into_iter().map(ResolvedNetInfo::from).collect())
    }

    /// Build the annotations that give `vm` its current addresses back on restore
    ///
    /// # Arguments
    /// * `vm` - The VM being backed up
    ///
    /// # Returns
    /// * `Ok(AnnotationSet)` - `mac_address` and `ip_address` entries for every attachment
    /// * `Err(NetInfoError::InvalidInput)` - No VM was given
    /// * `Err(NetInfoError::Resolution)` - Any failure, labelled with the VM
    pub async fn resolve_annotations(&self, vm: Option<&VirtualMachine>) -> Result<AnnotationSet, NetInfoError> {
        let Some(vm) = vm else {
            error!("Cannot resolve network identity: VM object is nil");
            return Err(NetInfoError::InvalidInput("VM object is nil".to_string()));
        };

        let declaration = VmDeclaration::try_from(vm)?;
        let identity = declaration.identity.to_string();
        info!("Resolving network identity for VM {}", identity);

        let net_infos = self.resolve_net_info(&declaration).await.map_err(|e| {
            error!("Failed to resolve network identity for VM {}: {}", identity, e);
            e.for_vm(identity.as_str())
        })?;

        let annotations = merge_annotations(&net_infos);
        info!(
            "Resolved {} attachment(s) into {} annotation(s) for VM {}",
            net_infos.len(),
            annotations.len(),
            identity
        );
        Ok(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use kubeovn_client::MockKubeOvnClient;

    fn annotations(entries: &[(&str, &str)]) -> AnnotationSet {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_default_network_only() {
        let mock = MockKubeOvnClient::new();
        mock.add_address("test-vm.test-ns", "00:00:00:00:00:01", "10.0.0.1", "");
        let resolver = NetInfoResolver::new(Box::new(mock));
        let vm = create_test_vm("test-vm", "test-ns", vec![]);

        let result = resolver.resolve_annotations(Some(&vm)).await.unwrap();
        assert_eq!(
            result,
            annotations(&[
                ("ovn.kubernetes.io/mac_address", "00:00:00:00:00:01"),
                ("ovn.kubernetes.io/ip_address", "10.0.0.1"),
            ])
        );
    }

    #[tokio::test]
    async fn test_secondary_network_with_implicit_default() {
        let mock = MockKubeOvnClient::new();
        mock.add_address("test-vm.test-ns", "00:00:00:00:00:01", "10.0.0.1", "");
        mock.add_address("test-vm.test-ns.test-nad.test-ns.ovn", "00:00:00:00:00:02", "10.0.0.2", "");
        let resolver = NetInfoResolver::new(Box::new(mock));
        let vm = create_test_vm(
            "test-vm",
            "test-ns",
            vec![multus_network("secondary", "test-ns/test-nad", false)],
        );

        let declaration = VmDeclaration::try_from(&vm).unwrap();
        let net_infos = resolver.resolve_net_info(&declaration).await.unwrap();
        let refs: Vec<&str> = net_infos.iter().map(|n| n.reference.as_str()).collect();
        assert_eq!(refs, vec!["test-nad.test-ns.ovn.kubernetes.io", "ovn.kubernetes.io"]);

        let result = resolver.resolve_annotations(Some(&vm)).await.unwrap();
        assert_eq!(
            result,
            annotations(&[
                ("ovn.kubernetes.io/mac_address", "00:00:00:00:00:01"),
                ("ovn.kubernetes.io/ip_address", "10.0.0.1"),
                ("test-nad.test-ns.ovn.kubernetes.io/mac_address", "00:00:00:00:00:02"),
                ("test-nad.test-ns.ovn.kubernetes.io/ip_address", "10.0.0.2"),
            ])
        );
    }

    #[tokio::test]
    async fn test_dual_stack_addresses() {
        let resolver = NetInfoResolver::new(Box::new(create_test_store(&[])));
        let vm = create_test_vm("test-vm", "test-ns", vec![pod_network("default")]);

        let result = resolver.resolve_annotations(Some(&vm)).await.unwrap();
        assert_eq!(result["ovn.kubernetes.io/ip_address"], "10.0.0.1,fd00::1");
    }

    #[tokio::test]
    async fn test_missing_vm() {
        let resolver = NetInfoResolver::new(Box::new(MockKubeOvnClient::new()));

        let err = resolver.resolve_annotations(None).await.unwrap_err();
        assert!(matches!(err, NetInfoError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_failure_is_labelled_with_vm() {
        let resolver = NetInfoResolver::new(Box::new(MockKubeOvnClient::new()));
        let vm = create_test_vm("test-vm", "test-ns", vec![]);

        let err = resolver.resolve_annotations(Some(&vm)).await.unwrap_err();
        match &err {
            NetInfoError::Resolution { vm, .. } => assert_eq!(vm, "test-ns/test-vm"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(err.root(), NetInfoError::RecordNotFound { .. }));
        assert!(err.to_string().contains("test-vm.test-ns"));
    }

    #[tokio::test]
    async fn test_empty_identity() {
        let resolver = NetInfoResolver::new(Box::new(create_test_store(&[])));
        let mut vm = create_test_vm("test-vm", "test-ns", vec![]);
        vm.metadata.namespace = None;

        let err = resolver.resolve_annotations(Some(&vm)).await.unwrap_err();
        assert!(matches!(err.root(), NetInfoError::EmptyIdentity { .. }));
    }

    #[tokio::test]
    async fn test_no_partial_result() {
        let mock = create_test_store(&["nad1"]);
        let resolver = NetInfoResolver::new(Box::new(mock));
        let vm = create_test_vm(
            "test-vm",
            "test-ns",
            vec![
                pod_network("default"),
                multus_network("first", "test-ns/nad1", false),
                multus_network("second", "test-ns/nad2", false),
            ],
        );

        let err = resolver.resolve_annotations(Some(&vm)).await.unwrap_err();
        assert!(matches!(err.root(), NetInfoError::RecordNotFound { .. }));
    }
}
