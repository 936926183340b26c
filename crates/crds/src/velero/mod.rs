//! Velero CRDs (`velero.io/v1`)

pub mod backup;

pub use backup::*;
