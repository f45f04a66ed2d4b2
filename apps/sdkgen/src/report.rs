//! JSON reports printed by the `sdkgen` subcommands.

use sdkgen_auth::AuthSchemeOption;
use sdkgen_auth_scheme::signer_property::{RenderContext, SignerPropertyValueProvider};
use sdkgen_auth_scheme::{
    AuthSchemeCodegenKnowledgeIndex, AuthSchemeCodegenMetadata, AuthSchemeResult,
    ModelAuthSchemeClassesKnowledgeIndex, ModelAuthSchemeKnowledgeIndex,
    SigV4AuthSchemeCodegenKnowledgeIndex,
};
use sdkgen_model::IntermediateModel;
use serde::Serialize;

/// Everything the code emitters learn about a service's auth schemes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexReport {
    service_name: String,
    signing_name: String,
    default_schemes: Vec<SchemeReport>,
    operation_groups: Vec<GroupReport>,
    sigv4_overrides: Vec<SigV4OverrideReport>,
    auth_scheme_classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupReport {
    operations: Vec<String>,
    schemes: Vec<SchemeReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemeReport {
    scheme_id: String,
    auth_scheme_class: String,
    properties: Vec<PropertyReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SigV4OverrideReport {
    operations: Vec<String>,
    properties: Vec<PropertyReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PropertyReport {
    key: String,
    value: String,
}

impl IndexReport {
    /// Build every index for `model` and collect them into a report.
    pub fn build(model: &IntermediateModel) -> AuthSchemeResult<Self> {
        let index = ModelAuthSchemeKnowledgeIndex::of(model)?;
        let ctx = RenderContext {
            signing_name: &model.metadata.signing_name,
        };

        let classes = ModelAuthSchemeClassesKnowledgeIndex::from_index(model, &index);
        let sigv4 = SigV4AuthSchemeCodegenKnowledgeIndex::from_index(&index);
        let codegen = AuthSchemeCodegenKnowledgeIndex::from_index(index);

        let mut operation_groups = Vec::new();
        codegen.for_each_operations_overrides_group(|operations, schemes| {
            operation_groups.push(GroupReport {
                operations: operations.to_vec(),
                schemes: schemes.iter().map(|s| SchemeReport::new(s, &ctx)).collect(),
            });
        });

        let mut sigv4_overrides = Vec::new();
        if let Some(defaults) = sigv4.default_sig_v4_overrides() {
            sigv4_overrides.push(SigV4OverrideReport::new(&[], defaults, &ctx));
        }
        sigv4.for_each_operations_overrides_group(|operations, scheme| {
            sigv4_overrides.push(SigV4OverrideReport::new(operations, scheme, &ctx));
        });

        Ok(Self {
            service_name: model.metadata.service_name.clone(),
            signing_name: model.metadata.signing_name.clone(),
            default_schemes: codegen
                .service_default_auth_schemes()
                .iter()
                .map(|s| SchemeReport::new(s, &ctx))
                .collect(),
            operation_groups,
            sigv4_overrides,
            auth_scheme_classes: classes
                .service_concrete_auth_scheme_classes()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }

    /// Number of per-operation override groups.
    pub fn override_groups(&self) -> usize {
        self.operation_groups.len()
    }
}

impl SchemeReport {
    fn new(metadata: &AuthSchemeCodegenMetadata, ctx: &RenderContext<'_>) -> Self {
        Self {
            scheme_id: metadata.scheme_id().to_owned(),
            auth_scheme_class: metadata.auth_scheme_class().to_string(),
            properties: PropertyReport::all(metadata.properties(), ctx),
        }
    }
}

impl SigV4OverrideReport {
    fn new(
        operations: &[String],
        metadata: &AuthSchemeCodegenMetadata,
        ctx: &RenderContext<'_>,
    ) -> Self {
        Self {
            operations: operations.to_vec(),
            properties: PropertyReport::all(metadata.properties(), ctx),
        }
    }
}

impl PropertyReport {
    fn all(properties: &[SignerPropertyValueProvider], ctx: &RenderContext<'_>) -> Vec<Self> {
        properties
            .iter()
            .map(|p| Self {
                key: format!("{}::{}", p.containing_type.simple_name(), p.field_name),
                value: p.value.render(ctx),
            })
            .collect()
    }
}

/// The ordered auth options of one operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveReport {
    operation: String,
    options: Vec<AuthSchemeOption>,
}

impl ResolveReport {
    /// Wrap resolved options.
    pub fn new(operation: impl Into<String>, options: Vec<AuthSchemeOption>) -> Self {
        Self {
            operation: operation.into(),
            options,
        }
    }
}

/// Serialize a report, optionally pretty-printed.
pub fn to_json<T: Serialize>(report: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}
