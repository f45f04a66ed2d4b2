//! Generic service with modeled auth and per-operation overrides.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sdkgen_auth_scheme::signer_property::{
        CHUNK_ENCODING_ENABLED, PAYLOAD_SIGNING_ENABLED, SignerPropertyValueProvider,
    };
    use sdkgen_auth_scheme::{
        AuthSchemeCodegenMetadata, ModelAuthSchemeClassesKnowledgeIndex,
        ModelAuthSchemeKnowledgeIndex, SigV4AuthSchemeCodegenKnowledgeIndex,
    };

    use crate::{generic_fixture, model};

    fn index() -> ModelAuthSchemeKnowledgeIndex {
        ModelAuthSchemeKnowledgeIndex::of(&model(generic_fixture()).unwrap()).unwrap()
    }

    fn scheme_ids(schemes: &[AuthSchemeCodegenMetadata]) -> Vec<&str> {
        schemes.iter().map(AuthSchemeCodegenMetadata::scheme_id).collect()
    }

    #[test]
    fn test_should_order_groups_for_generation() {
        let keys: Vec<String> = index()
            .operations_to_metadata()
            .keys()
            .map(|ops| ops.join(","))
            .collect();
        assert_eq!(
            keys,
            vec![
                "HealthCheck,PublicPing",
                "StreamEvents",
                "ImportBatch",
                "UploadMedia",
                "",
            ]
        );
    }

    #[test]
    fn test_should_partition_overridden_operations() {
        let index = index();
        let mut seen = HashSet::new();
        for ops in index.operations_to_metadata().keys() {
            for op in ops {
                assert!(seen.insert(op.clone()), "{op} appears in two groups");
            }
        }
        assert!(!seen.contains("DescribeItem"));
        assert!(!seen.contains("ListItems"));
        assert_eq!(index.service_defaults().len(), 2);
    }

    #[test]
    fn test_should_keep_modeled_default_order() {
        let index = index();
        assert_eq!(
            scheme_ids(index.service_defaults()),
            vec!["aws.auth#sigv4", "smithy.api#httpBearerAuth"]
        );
        assert_eq!(
            index.auth_schemes_for_operation("ListItems"),
            index.service_defaults()
        );
    }

    #[test]
    fn test_should_derive_chunked_sibling_from_plain_group() {
        let index = index();
        let plain = index.auth_schemes_for_operation("StreamEvents");
        let chunked = index.auth_schemes_for_operation("ImportBatch");

        assert_eq!(scheme_ids(plain), vec!["aws.auth#sigv4a", "aws.auth#sigv4"]);
        assert_eq!(plain.len(), chunked.len());
        for (plain, chunked) in plain.iter().zip(chunked) {
            assert_eq!(
                &plain.clone().with_property(SignerPropertyValueProvider::sigv4_flag(
                    CHUNK_ENCODING_ENABLED,
                    true
                )),
                chunked
            );
            assert_eq!(
                plain
                    .property(PAYLOAD_SIGNING_ENABLED)
                    .and_then(SignerPropertyValueProvider::as_bool),
                Some(false)
            );
        }
    }

    #[test]
    fn test_should_leave_bearer_unchanged_in_chunked_defaults() {
        let index = index();
        let upload = index.auth_schemes_for_operation("UploadMedia");
        assert_eq!(upload[0].property(CHUNK_ENCODING_ENABLED).unwrap().as_bool(), Some(true));
        assert_eq!(upload[1], AuthSchemeCodegenMetadata::bearer());
    }

    #[test]
    fn test_should_collect_sigv4_constants() {
        let sigv4 = SigV4AuthSchemeCodegenKnowledgeIndex::from_index(&index());
        assert!(!sigv4.has_default_sig_v4_overrides());

        let mut groups = Vec::new();
        sigv4.for_each_operations_overrides_group(|ops, scheme| {
            let fields: Vec<&str> = scheme.properties().iter().map(|p| p.field_name).collect();
            groups.push((ops.join(","), fields));
        });
        assert_eq!(
            groups,
            vec![
                ("StreamEvents".to_owned(), vec![PAYLOAD_SIGNING_ENABLED]),
                (
                    "ImportBatch".to_owned(),
                    vec![PAYLOAD_SIGNING_ENABLED, CHUNK_ENCODING_ENABLED]
                ),
                ("UploadMedia".to_owned(), vec![CHUNK_ENCODING_ENABLED]),
            ]
        );
    }

    #[test]
    fn test_should_list_every_scheme_class() {
        let m = model(generic_fixture()).unwrap();
        let classes = ModelAuthSchemeClassesKnowledgeIndex::of(&m).unwrap();
        let names: Vec<&str> = classes
            .service_concrete_auth_scheme_classes()
            .iter()
            .map(|c| c.simple_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "AwsV4AuthScheme",
                "AwsV4aAuthScheme",
                "BearerAuthScheme",
                "NoAuthAuthScheme"
            ]
        );
    }
}
