//! S3-shaped service: service-wide signer override and upload operations.

#[cfg(test)]
mod tests {
    use sdkgen_auth_scheme::signer_property::{
        CHUNK_ENCODING_ENABLED, DOUBLE_URL_ENCODE, NORMALIZE_PATH, PAYLOAD_SIGNING_ENABLED,
        SignerPropertyValueProvider,
    };
    use sdkgen_auth_scheme::{
        AuthSchemeCodegenKnowledgeIndex, AuthSchemeError, ModelAuthSchemeClassesKnowledgeIndex,
        ModelAuthSchemeKnowledgeIndex, SigV4AuthSchemeCodegenKnowledgeIndex,
    };
    use serde_json::json;

    use crate::{model, s3_fixture};

    fn flag(
        schemes: &[sdkgen_auth_scheme::AuthSchemeCodegenMetadata],
        field: &str,
    ) -> Option<bool> {
        schemes[0]
            .property(field)
            .and_then(SignerPropertyValueProvider::as_bool)
    }

    #[test]
    fn test_should_group_s3_operations() {
        let index = ModelAuthSchemeKnowledgeIndex::of(&model(s3_fixture()).unwrap()).unwrap();

        let keys: Vec<Vec<String>> = index.operations_to_metadata().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                vec!["UploadPart".to_owned()],
                vec!["PutObject".to_owned()],
                vec!["WriteGetObjectResponse".to_owned()],
                vec![],
            ]
        );
    }

    #[test]
    fn test_should_sign_uploads_with_chunked_encoding() {
        let index = ModelAuthSchemeKnowledgeIndex::of(&model(s3_fixture()).unwrap()).unwrap();

        for operation in ["PutObject", "UploadPart"] {
            let schemes = index.auth_schemes_for_operation(operation);
            assert_eq!(schemes.len(), 1);
            assert_eq!(flag(schemes, CHUNK_ENCODING_ENABLED), Some(true));
            assert_eq!(flag(schemes, PAYLOAD_SIGNING_ENABLED), Some(false));
            assert_eq!(flag(schemes, DOUBLE_URL_ENCODE), Some(false));
            assert_eq!(flag(schemes, NORMALIZE_PATH), Some(false));
        }
    }

    #[test]
    fn test_should_use_s3_constants_for_other_operations() {
        let index = ModelAuthSchemeKnowledgeIndex::of(&model(s3_fixture()).unwrap()).unwrap();

        let defaults = index.auth_schemes_for_operation("GetObject");
        assert_eq!(defaults, index.service_defaults());
        assert_eq!(flag(defaults, DOUBLE_URL_ENCODE), Some(false));
        assert_eq!(flag(defaults, NORMALIZE_PATH), Some(false));
        assert_eq!(flag(defaults, PAYLOAD_SIGNING_ENABLED), Some(false));
        assert_eq!(flag(defaults, CHUNK_ENCODING_ENABLED), None);
    }

    #[test]
    fn test_should_honor_write_get_object_response_auth() {
        let index = ModelAuthSchemeKnowledgeIndex::of(&model(s3_fixture()).unwrap()).unwrap();

        let schemes = index.auth_schemes_for_operation("WriteGetObjectResponse");
        assert_eq!(schemes[0].scheme_id(), "aws.auth#sigv4");
        assert_eq!(flag(schemes, PAYLOAD_SIGNING_ENABLED), Some(false));
        assert_eq!(flag(schemes, DOUBLE_URL_ENCODE), None);
    }

    #[test]
    fn test_should_reject_other_operation_auth() {
        let mut fixture = s3_fixture();
        fixture["operations"]["ListBuckets"] = json!({ "auth": ["v4"] });

        let err = ModelAuthSchemeKnowledgeIndex::of(&model(fixture).unwrap()).unwrap_err();
        assert_eq!(
            err,
            AuthSchemeError::OperationAuthOverride {
                operation: "ListBuckets".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Operation ListBuckets has auth trait and requires special handling"
        );
    }

    #[test]
    fn test_should_expose_s3_views() {
        let m = model(s3_fixture()).unwrap();

        let codegen = AuthSchemeCodegenKnowledgeIndex::of(&m).unwrap();
        assert!(codegen.has_per_operation_auth_schemes_overrides());
        assert_eq!(codegen.operations_overrides().count(), 3);

        let sigv4 = SigV4AuthSchemeCodegenKnowledgeIndex::of(&m).unwrap();
        assert!(sigv4.has_default_sig_v4_overrides());
        assert!(sigv4.has_per_operation_sig_v4_overrides());
        let mut groups = Vec::new();
        sigv4.for_each_operations_overrides_group(|ops, scheme| {
            groups.push((ops.to_vec(), scheme.properties().len()));
        });
        assert_eq!(
            groups,
            vec![
                (vec!["UploadPart".to_owned()], 4),
                (vec!["PutObject".to_owned()], 4),
                (vec!["WriteGetObjectResponse".to_owned()], 1),
            ]
        );

        let classes = ModelAuthSchemeClassesKnowledgeIndex::of(&m).unwrap();
        let names: Vec<&str> = classes
            .service_concrete_auth_scheme_classes()
            .iter()
            .map(|c| c.simple_name())
            .collect();
        assert_eq!(names, vec!["AwsV4AuthScheme", "AwsV4aAuthScheme", "NoAuthAuthScheme"]);
    }

    #[test]
    fn test_should_build_identical_indices_twice() {
        let m = model(s3_fixture()).unwrap();
        assert_eq!(
            ModelAuthSchemeKnowledgeIndex::of(&m).unwrap(),
            ModelAuthSchemeKnowledgeIndex::of(&m).unwrap()
        );
    }
}
