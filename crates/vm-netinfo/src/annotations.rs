//! Annotation builder
//!
//! Kube-OVN reads `<reference>/mac_address` and `<reference>/ip_address` on a
//! pod to pin the addresses of that attachment. These are the keys written
//! into the VM template at backup time.

use crate::model::{ResolvedAttachment, ResolvedNetInfo};
use std::collections::BTreeMap;

/// Annotation key suffix carrying the MAC address
pub const MAC_ADDRESS_FIELD: &str = "mac_address";
/// Annotation key suffix carrying the comma separated IP addresses
pub const IP_ADDRESS_FIELD: &str = "ip_address";

/// Annotation key to value
pub type AnnotationSet = BTreeMap<String, String>;

impl From<ResolvedAttachment> for ResolvedNetInfo {
    fn from(attachment: ResolvedAttachment) -> Self {
        Self {
            combined_addresses: attachment.record.combined_addresses(),
            mac_address: attachment.record.mac_address,
            reference: attachment.reference,
        }
    }
}

impl ResolvedNetInfo {
    /// The two annotations pinning this interface's addresses
    pub fn to_annotations(&self) -> AnnotationSet {
        AnnotationSet::from([
            (self.reference.annotation_key(MAC_ADDRESS_FIELD), self.mac_address.clone()),
            (self.reference.annotation_key(IP_ADDRESS_FIELD), self.combined_addresses.clone()),
        ])
    }
}

/// Union of the annotations of every interface
pub fn merge_annotations<'a, I>(net_infos: I) -> AnnotationSet
where
    I: IntoIterator<Item = &'a ResolvedNetInfo>,
{
    net_infos
        .into_iter()
        .flat_map(ResolvedNetInfo::to_annotations)
        .collect()
}
