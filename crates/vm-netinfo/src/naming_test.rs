//! Unit tests for the naming grammar

#[cfg(test)]
mod tests {
    use crate::error::NetInfoError;
    use crate::model::VmIdentity;
    use crate::naming::*;

    #[test]
    fn test_network_name_to_reference() {
        let reference = AttachmentReference::from_network_name("test-ns/test-nad").unwrap();
        assert_eq!(reference.as_str(), "test-nad.test-ns.ovn.kubernetes.io");
        assert!(!reference.is_default());
    }

    #[test]
    fn test_network_name_malformed() {
        let cases = [
            ("test-ns-test-nad", "missing slash"),
            ("test-ns/test-nad/extra", "too many slashes"),
            ("", "empty network name"),
            ("/test-nad", "empty namespace"),
            ("test-ns/", "empty name"),
        ];
        for (network_name, case) in cases {
            let err = AttachmentReference::from_network_name(network_name).unwrap_err();
            assert!(
                matches!(err, NetInfoError::MalformedReference { .. }),
                "{case}: unexpected error {err:?}"
            );
        }
    }

    #[test]
    fn test_network_name_is_not_normalized() {
        let reference = AttachmentReference::from_network_name("Test-NS/ nad").unwrap();
        assert_eq!(reference.as_str(), " nad.Test-NS.ovn.kubernetes.io");
    }

    #[test]
    fn test_default_network_record() {
        assert_eq!(
            record_identifier_for(DEFAULT_NETWORK_ANNOTATION, "test-vm", "test-ns").unwrap(),
            "test-vm.test-ns"
        );
        assert!(AttachmentReference::default_network().is_default());
    }

    #[test]
    fn test_nad_network_record() {
        assert_eq!(
            record_identifier_for("test-nad.test-ns.ovn.kubernetes.io", "test-vm", "test-ns").unwrap(),
            "test-vm.test-ns.test-nad.test-ns.ovn"
        );
    }

    #[test]
    fn test_empty_identity() {
        for (name, namespace) in [("", "test-ns"), ("test-vm", ""), ("", "")] {
            for reference in [DEFAULT_NETWORK_ANNOTATION, "test-nad.test-ns.ovn.kubernetes.io"] {
                let err = record_identifier_for(reference, name, namespace).unwrap_err();
                assert!(
                    matches!(err, NetInfoError::EmptyIdentity { .. }),
                    "{reference} with {name:?}/{namespace:?}: unexpected error {err:?}"
                );
            }
        }
    }

    #[test]
    fn test_invalid_suffix() {
        for reference in ["test-nad.test-ns.invalid", "invalid.suffix", "invalid-annotation", "fooovn.kubernetes.io", ""] {
            let err = record_identifier_for(reference, "test-vm", "test-ns").unwrap_err();
            assert!(
                matches!(err, NetInfoError::InvalidReferenceSuffix { .. }),
                "{reference:?}: unexpected error {err:?}"
            );
        }
    }

    #[test]
    fn test_malformed_nad_reference() {
        let cases = [
            "test-nad.ovn.kubernetes.io",
            "part1.part2.part3.ovn.kubernetes.io",
            ".test-ns.ovn.kubernetes.io",
            ".ovn.kubernetes.io",
        ];
        for reference in cases {
            let err = record_identifier_for(reference, "test-vm", "test-ns").unwrap_err();
            assert!(
                matches!(err, NetInfoError::MalformedReference { .. }),
                "{reference:?}: unexpected error {err:?}"
            );
        }
    }

    #[test]
    fn test_cross_namespace_rejected() {
        let err = record_identifier_for("nad.other-ns.ovn.kubernetes.io", "test-vm", "ns").unwrap_err();
        match err {
            NetInfoError::NamespaceMismatch {
                attachment_namespace,
                vm_namespace,
                ..
            } => {
                assert_eq!(attachment_namespace, "other-ns");
                assert_eq!(vm_namespace, "ns");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_through_reference() {
        for (vm, ns, name) in [("vm", "ns", "name"), ("test-vm", "test-ns", "test-nad"), ("a", "b", "c")] {
            let reference = AttachmentReference::from_network_name(&format!("{ns}/{name}")).unwrap();
            let identity = VmIdentity::new(vm, ns);
            assert_eq!(
                reference.record_identifier(&identity).unwrap(),
                format!("{vm}.{ns}.{name}.{ns}.ovn")
            );
        }
    }

    #[test]
    fn test_annotation_key() {
        let reference = AttachmentReference::from("nad.ns.ovn.kubernetes.io");
        assert_eq!(reference.annotation_key("mac_address"), "nad.ns.ovn.kubernetes.io/mac_address");
        assert_eq!(
            AttachmentReference::default_network().annotation_key("ip_address"),
            "ovn.kubernetes.io/ip_address"
        );
    }
}
