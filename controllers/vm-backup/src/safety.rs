//! Backup consistency checks.
//!
//! The same inclusion rules the KubeVirt Velero plugin applies: a VM is only
//! backed up when its running instance and volumes can be restored with it.

use crate::error::ActionError;
use crds::{Backup, Volume, VirtualMachine, VirtualMachineInstance};
use kube::{Api, Client};
use tracing::{error, info};

const RESOURCE_VMIS: &str = "virtualmachineinstances";
const RESOURCE_PODS: &str = "pods";
const RESOURCE_PVCS: &str = "persistentvolumeclaims";
const RESOURCE_DATAVOLUMES: &str = "datavolumes";

/// Reads whether a VM's running instance opts out of backups
#[async_trait::async_trait]
pub trait VmiLookup: Send + Sync {
    /// Whether the VMI `namespace`/`name` carries the exclusion label.
    /// A VMI that does not exist is an error, not an opt-in.
    async fn is_vmi_excluded(&self, name: &str, namespace: &str) -> Result<bool, ActionError>;
}

/// [`VmiLookup`] against the cluster
#[derive(Clone)]
pub struct KubeVmiLookup {
    client: Client,
}

impl KubeVmiLookup {
    /// Creates a lookup reading VMIs through `client`
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for KubeVmiLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeVmiLookup").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl VmiLookup for KubeVmiLookup {
    async fn is_vmi_excluded(&self, name: &str, namespace: &str) -> Result<bool, ActionError> {
        let api: Api<VirtualMachineInstance> = Api::namespaced(self.client.clone(), namespace);
        match api.get_opt(name).await? {
            Some(vmi) => Ok(vmi.is_excluded_from_backup()),
            None => {
                error!("VM {}/{} is running but its VMI was not found", namespace, name);
                Err(ActionError::VmiNotFound(format!("{}/{}", namespace, name)))
            }
        }
    }
}

/// Whether `resource` matches an entry of a backup resource filter, either
/// exactly or as `<resource>.<group>`
fn matches_resource(filter: &[String], resource: &str) -> bool {
    filter.iter().any(|entry| {
        entry == resource
            || entry
                .strip_prefix(resource)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Whether `backup` captures resources of kind `resource` (plural, lowercase)
pub fn is_resource_in_backup(resource: &str, backup: &Backup) -> bool {
    let spec = &backup.spec;
    let included = spec.included_resources.is_empty()
        || spec.included_resources.iter().any(|r| r == "*")
        || matches_resource(&spec.included_resources, resource);

    included && !matches_resource(&spec.excluded_resources, resource)
}

/// Whether `vm` can be captured by `backup` without losing its running state
pub async fn can_be_safely_backed_up(
    vm: &VirtualMachine,
    backup: &Backup,
    vmi_lookup: &dyn VmiLookup,
) -> Result<bool, ActionError> {
    if !vm.is_running() {
        return Ok(true);
    }

    if !is_resource_in_backup(RESOURCE_VMIS, backup) {
        info!("Backup of a running VM does not contain VMI");
        return Ok(false);
    }

    let name = vm.metadata.name.as_deref().unwrap_or_default();
    let namespace = vm.metadata.namespace.as_deref().unwrap_or_default();
    if vmi_lookup.is_vmi_excluded(name, namespace).await? {
        info!("VM {}/{} is running but VMI is not included in the backup", namespace, name);
        return Ok(false);
    }

    if !is_resource_in_backup(RESOURCE_PODS, backup) && is_resource_in_backup(RESOURCE_PVCS, backup) {
        info!("Backup of a running VM does not contain Pod but contains PVC");
        return Ok(false);
    }

    Ok(true)
}

/// Whether every claim-backed volume in `volumes` is captured by `backup`.
/// Volumes for which `skip` returns `true` are not checked.
pub fn restore_possible<F>(volumes: &[Volume], backup: &Backup, skip: F) -> bool
where
    F: Fn(&Volume) -> bool,
{
    volumes.iter().filter(|volume| !skip(volume)).all(|volume| {
        if volume.data_volume.is_some()
            && !(is_resource_in_backup(RESOURCE_DATAVOLUMES, backup) && is_resource_in_backup(RESOURCE_PVCS, backup))
        {
            info!("Volume {} is a DataVolume but DataVolumes or PVCs are not in the backup", volume.name);
            return false;
        }
        if volume.persistent_volume_claim.is_some() && !is_resource_in_backup(RESOURCE_PVCS, backup) {
            info!("Volume {} is a PVC but PVCs are not in the backup", volume.name);
            return false;
        }
        true
    })
}

/// Whether `volume` is a DataVolume created from one of `vm`'s templates
pub fn volume_in_dv_templates(volume: &Volume, vm: &VirtualMachine) -> bool {
    volume
        .data_volume
        .as_ref()
        .is_some_and(|dv| vm.has_data_volume_template(&dv.name))
}
