//! Embedded object metadata
//!
//! Templates nested inside a resource spec (VMI templates, DataVolume templates)
//! carry their own metadata block. Only name, labels and annotations are typed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields of a resource that are not modelled, preserved verbatim
pub type ExtraFields = BTreeMap<String, serde_json::Value>;

/// Metadata of an object embedded in another resource's spec
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedMeta {
    /// Object name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    /// Annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    /// Remaining metadata fields
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl EmbeddedMeta {
    /// Merge `annotations` into this metadata, overwriting existing keys and
    /// keeping every key that is not being set.
    pub fn merge_annotations<I>(&mut self, annotations: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.annotations
            .get_or_insert_with(BTreeMap::new)
            .extend(annotations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_annotations_creates_map() {
        let mut meta = EmbeddedMeta::default();
        meta.merge_annotations([("a".to_string(), "1".to_string())]);
        assert_eq!(meta.annotations.unwrap().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_merge_annotations_preserves_and_overwrites() {
        let mut meta = EmbeddedMeta {
            annotations: Some(BTreeMap::from([
                ("keep".to_string(), "old".to_string()),
                ("replace".to_string(), "old".to_string()),
            ])),
            ..Default::default()
        };
        meta.merge_annotations([("replace".to_string(), "new".to_string())]);

        let annotations = meta.annotations.unwrap();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations["keep"], "old");
        assert_eq!(annotations["replace"], "new");
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = serde_json::json!({
            "name": "disk",
            "generateName": "disk-",
            "creationTimestamp": null
        });
        let meta: EmbeddedMeta = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(meta.name.as_deref(), Some("disk"));
        assert_eq!(serde_json::to_value(&meta).unwrap(), raw);
    }
}
