//! Kube-OVN CRDs (`kubeovn.io/v1`)

pub mod ip;

pub use ip::*;
