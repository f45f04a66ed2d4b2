//! Runtime resolution: modeled provider, preference, and selection.

#[cfg(test)]
mod tests {
    use sdkgen_auth::{
        AuthSchemeParams, AuthSchemePreference, AuthSchemeProvider, AuthSchemeRegistry,
        AuthSelectionError, IdentityKind, IdentityProviders, ModeledAuthSchemeProvider,
        PreferredAuthSchemeProvider, PropertyValue, select_auth_scheme,
    };
    use sdkgen_auth_scheme::signer_property::{
        CHUNK_ENCODING_ENABLED, REGION_NAME, REGION_SET, SERVICE_SIGNING_NAME,
    };

    use crate::{generic_fixture, model, s3_fixture};

    fn params(operation: &str) -> AuthSchemeParams {
        AuthSchemeParams::builder()
            .operation(operation)
            .region("us-west-2")
            .region_set("us-*")
            .build()
    }

    fn ids(options: &[sdkgen_auth::AuthSchemeOption]) -> Vec<&str> {
        options.iter().map(|o| o.scheme_id()).collect()
    }

    #[test]
    fn test_should_resolve_s3_upload_options() {
        let provider = ModeledAuthSchemeProvider::from_model(&model(s3_fixture()).unwrap()).unwrap();
        let options = provider.resolve_auth_scheme(&params("PutObject"));

        assert_eq!(ids(&options), vec!["aws.auth#sigv4"]);
        let option = &options[0];
        assert_eq!(
            option.signer_property(SERVICE_SIGNING_NAME),
            Some(&PropertyValue::Str("s3".to_owned()))
        );
        assert_eq!(
            option.signer_property(REGION_NAME),
            Some(&PropertyValue::Str("us-west-2".to_owned()))
        );
        assert_eq!(
            option.signer_property(CHUNK_ENCODING_ENABLED),
            Some(&PropertyValue::Bool(true))
        );
    }

    #[test]
    fn test_should_reorder_by_preference() {
        let provider = PreferredAuthSchemeProvider::new(
            ModeledAuthSchemeProvider::from_model(&model(generic_fixture()).unwrap()).unwrap(),
            AuthSchemePreference::parse("httpBearerAuth"),
        );

        let defaults = provider.resolve_auth_scheme(&params("DescribeItem"));
        assert_eq!(ids(&defaults), vec!["smithy.api#httpBearerAuth", "aws.auth#sigv4"]);

        let stream = provider.resolve_auth_scheme(&params("StreamEvents"));
        assert_eq!(ids(&stream), vec!["aws.auth#sigv4a", "aws.auth#sigv4"]);
        assert_eq!(
            stream[0].signer_property(REGION_SET),
            Some(&PropertyValue::Str("us-*".to_owned()))
        );
    }

    #[test]
    fn test_should_select_first_scheme_with_identity() {
        let provider = PreferredAuthSchemeProvider::new(
            ModeledAuthSchemeProvider::from_model(&model(generic_fixture()).unwrap()).unwrap(),
            AuthSchemePreference::parse("httpBearerAuth"),
        );
        let options = provider.resolve_auth_scheme(&params("DescribeItem"));
        let identities = IdentityProviders::new().with(IdentityKind::AwsCredentials);

        let selected = select_auth_scheme(&options, &AuthSchemeRegistry::modeled(), &identities)
            .unwrap();
        assert_eq!(selected.option.scheme_id(), "aws.auth#sigv4");
        assert_eq!(selected.identity, IdentityKind::AwsCredentials);
    }

    #[test]
    fn test_should_select_anonymous_for_no_auth_operation() {
        let provider =
            ModeledAuthSchemeProvider::from_model(&model(generic_fixture()).unwrap()).unwrap();
        let options = provider.resolve_auth_scheme(&params("PublicPing"));

        let selected =
            select_auth_scheme(&options, &AuthSchemeRegistry::modeled(), &IdentityProviders::new())
                .unwrap();
        assert_eq!(selected.identity, IdentityKind::Anonymous);
        assert!(selected.signer.is_none());
    }

    #[test]
    fn test_should_explain_failed_selection() {
        let provider =
            ModeledAuthSchemeProvider::from_model(&model(generic_fixture()).unwrap()).unwrap();
        let options = provider.resolve_auth_scheme(&params("DescribeItem"));

        let err = select_auth_scheme(&options, &AuthSchemeRegistry::new(), &IdentityProviders::new())
            .unwrap_err();
        match err {
            AuthSelectionError::NoUsableScheme { reasons } => assert_eq!(
                reasons,
                vec![
                    "'aws.auth#sigv4' is not enabled for this request.",
                    "'smithy.api#httpBearerAuth' is not enabled for this request.",
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }
}
