//! VM Backup Action
//!
//! Persists the Kube-OVN network identity of KubeVirt VMs across a Velero
//! backup and restore.
//!
//! Runs the backup item action once against a live VM and Backup and prints
//! the item as it would be stored in the backup.

mod action;
mod error;
mod safety;
#[cfg(test)]
mod test_utils;

use action::VmBackupItemAction;
use anyhow::Context;
use crate::error::ActionError;
use crds::{Backup, VirtualMachine};
use kube::{Api, Client};
use kubeovn_client::KubeOvnClient;
use safety::KubeVmiLookup;
use std::env;
use std::str::FromStr;
use tracing::info;

/// How the resulting item is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(ActionError::InvalidConfig(format!(
                "OUTPUT_FORMAT must be 'yaml' or 'json', got '{}'",
                other
            ))),
        }
    }
}

fn required_var(name: &str) -> Result<String, ActionError> {
    env::var(name).map_err(|e| ActionError::InvalidConfig(format!("{} environment variable is required: {}", name, e)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting VM Backup Action");

    // kube is built with rustls, which needs a process-wide crypto provider
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_provider| anyhow::anyhow!("a rustls crypto provider is already installed"))?;

    // Load configuration from environment variables
    let vm_name = required_var("VM_NAME")?;
    let vm_namespace = env::var("VM_NAMESPACE").unwrap_or_else(|_| "default".to_string());
    let backup_name = required_var("BACKUP_NAME")?;
    let velero_namespace = env::var("VELERO_NAMESPACE").unwrap_or_else(|_| "velero".to_string());
    let output_format: OutputFormat = env::var("OUTPUT_FORMAT")
        .unwrap_or_else(|_| "yaml".to_string())
        .parse()?;

    info!("Configuration:");
    info!("  VM: {}/{}", vm_namespace, vm_name);
    info!("  Backup: {}/{}", velero_namespace, backup_name);

    let client = Client::try_default()
        .await
        .context("failed to create Kubernetes client")?;

    let vm_api: Api<VirtualMachine> = Api::namespaced(client.clone(), &vm_namespace);
    let backup_api: Api<Backup> = Api::namespaced(client.clone(), &velero_namespace);

    let vm = vm_api
        .get(&vm_name)
        .await
        .with_context(|| format!("failed to get VirtualMachine {}/{}", vm_namespace, vm_name))?;
    let backup = backup_api
        .get(&backup_name)
        .await
        .with_context(|| format!("failed to get Backup {}/{}", velero_namespace, backup_name))?;

    let action = VmBackupItemAction::new(
        Box::new(KubeOvnClient::from_client(client.clone())),
        Box::new(KubeVmiLookup::new(client)),
    );
    info!("Action applies to {:?}", action.applies_to().included_resources);

    let item = action.execute(serde_json::to_value(&vm)?, Some(&backup)).await?;

    let output = match output_format {
        OutputFormat::Yaml => serde_yaml::to_string(&item)?,
        OutputFormat::Json => serde_json::to_string_pretty(&item)?,
    };
    println!("{}", output);

    Ok(())
}
