//! VM backup item action.
//!
//! Runs on every `VirtualMachine` a Velero backup captures. Refuses VMs that
//! would not come back consistently, then writes the Kube-OVN annotations
//! pinning the VM's current addresses into its instance template so that the
//! restored VM gets the same MAC and IP addresses.
//!
//! The annotations go on the template, not on the VM object: Kube-OVN reads
//! them from the virt-launcher pod, whose metadata is stamped from
//! `spec.template.metadata`.

use crate::error::ActionError;
use crate::safety::{can_be_safely_backed_up, restore_possible, volume_in_dv_templates, VmiLookup};
use crds::{Backup, VirtualMachine};
use kubeovn_client::KubeOvnClientTrait;
use tracing::{debug, error, info};
use vm_netinfo::NetInfoResolver;

/// Resource handled by this action
pub const VIRTUAL_MACHINES_RESOURCE: &str = "virtualmachines.kubevirt.io";

/// Resources an action is invoked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSelector {
    /// Resource names, `<plural>.<group>`
    pub included_resources: Vec<String>,
}

/// Backup item action for KubeVirt VMs
pub struct VmBackupItemAction {
    resolver: NetInfoResolver,
    vmi_lookup: Box<dyn VmiLookup>,
}

impl VmBackupItemAction {
    /// Creates a new action reading IP records through `kubeovn_client` and
    /// VMIs through `vmi_lookup`.
    pub fn new(kubeovn_client: Box<dyn KubeOvnClientTrait>, vmi_lookup: Box<dyn VmiLookup>) -> Self {
        Self {
            resolver: NetInfoResolver::new(kubeovn_client),
            vmi_lookup,
        }
    }

    /// Resources this action runs on
    pub fn applies_to(&self) -> ResourceSelector {
        ResourceSelector {
            included_resources: vec![VIRTUAL_MACHINES_RESOURCE.to_string()],
        }
    }

    /// Executes the action on one backed up VM.
    ///
    /// This method:
    /// 1. Rejects a missing backup
    /// 2. Checks the running VM's instance and pods are captured with it
    /// 3. Checks its volumes are captured, unless only metadata is backed up
    /// 4. Merges the address annotations into `spec.template.metadata`
    ///
    /// Returns the updated item.
    pub async fn execute(
        &self,
        item: serde_json::Value,
        backup: Option<&Backup>,
    ) -> Result<serde_json::Value, ActionError> {
        info!("Executing VMBackupItemAction");

        let Some(backup) = backup else {
            error!("Backup object is nil");
            return Err(ActionError::InvalidInput("backup object is nil".to_string()));
        };

        let mut vm: VirtualMachine = serde_json::from_value(item)?;
        let vm_id = format!(
            "{}/{}",
            vm.metadata.namespace.as_deref().unwrap_or_default(),
            vm.metadata.name.as_deref().unwrap_or_default()
        );

        if !can_be_safely_backed_up(&vm, backup, &*self.vmi_lookup).await? {
            error!("VM {} cannot be safely backed up", vm_id);
            return Err(ActionError::UnsafeBackup(vm_id));
        }

        // Volume consistency does not matter when only metadata is kept
        if backup.is_metadata_backup() {
            debug!("Backup is metadata only, skipping restore checks for VM {}", vm_id);
        } else {
            let volumes = vm
                .spec
                .template
                .as_ref()
                .map(|t| t.spec.volumes.as_slice())
                .unwrap_or_default();
            if !restore_possible(volumes, backup, |volume| volume_in_dv_templates(volume, &vm)) {
                error!("VM {} would not be restored correctly", vm_id);
                return Err(ActionError::RestoreNotPossible(vm_id));
            }
        }

        let annotations = self.resolver.resolve_annotations(Some(&vm)).await?;
        for (key, value) in &annotations {
            debug!("VM {}: {}={}", vm_id, key, value);
        }

        let template = vm
            .spec
            .template
            .as_mut()
            .ok_or_else(|| ActionError::InvalidInput(format!("VM {} has no instance template", vm_id)))?;
        template.metadata.merge_annotations(annotations);

        info!("Added network identity annotations to VM {}", vm_id);
        Ok(serde_json::to_value(&vm)?)
    }
}

impl std::fmt::Debug for VmBackupItemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VmBackupItemAction")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
