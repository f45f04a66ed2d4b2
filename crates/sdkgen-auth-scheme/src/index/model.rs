//! The canonical operations → auth-scheme metadata index.
//!
//! Operations are grouped by the auth traits they declare. Groups that match
//! the service defaults are folded into the default entry, operations that
//! stream a checksummed payload are split off with chunked encoding enabled,
//! and the service defaults are stored under the empty key. The resulting map
//! drives the case labels of generated switch statements, so its order is
//! fixed:
//!
//! 1. per-operation nodes of a service-wide signer override;
//! 2. auth-trait groups, sorted by their first operation name, each followed
//!    by its chunked-encoding sibling;
//! 3. remaining chunked-encoding operations;
//! 4. the service defaults (empty key).

use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use sdkgen_model::{AuthType, IntermediateModel, OperationModel};
use tracing::debug;

use crate::auth_trait::AuthTrait;
use crate::error::{AuthSchemeError, AuthSchemeResult};
use crate::metadata::{AuthSchemeCodegenMetadata, with_chunk_encoding};
use crate::registry;
use crate::signer_defaults::SigV4SignerDefaults;

/// Operation-name groups mapped to the auth schemes they resolve to.
pub type OperationsToMetadata = IndexMap<Vec<String>, Vec<AuthSchemeCodegenMetadata>>;

/// The only operation allowed to declare its own auth on a service whose auth
/// is driven by a service-wide signer override.
// TODO: move exemptions into the signer defaults node once a second service needs one.
pub const WRITE_GET_OBJECT_RESPONSE: &str = "WriteGetObjectResponse";

/// Computes and holds the operations → metadata map of one service.
///
/// # Examples
///
/// ```
/// use sdkgen_auth_scheme::ModelAuthSchemeKnowledgeIndex;
/// use sdkgen_model::{IntermediateModel, OperationModel, ServiceMetadata};
///
/// let model = IntermediateModel::builder()
///     .metadata(ServiceMetadata::builder().service_name("Echo").signing_name("echo").build())
///     .build()
///     .with_operation("Ping", OperationModel::default());
///
/// let index = ModelAuthSchemeKnowledgeIndex::of(&model).unwrap();
/// assert_eq!(index.operations_to_metadata().len(), 1);
/// assert_eq!(index.service_defaults()[0].scheme_id(), "aws.auth#sigv4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAuthSchemeKnowledgeIndex {
    operations_to_metadata: OperationsToMetadata,
    group_of_operation: HashMap<String, usize>,
}

impl ModelAuthSchemeKnowledgeIndex {
    /// Build the index for a model.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSchemeError::OperationAuthOverride`] when an operation
    /// declares auth on a service with a service-wide signer override, and the
    /// metadata resolution errors for unknown or unsupported auth types.
    pub fn of(model: &IntermediateModel) -> AuthSchemeResult<Self> {
        let operations_to_metadata = Resolver::new(model).resolve()?;
        let group_of_operation = operations_to_metadata
            .keys()
            .enumerate()
            .flat_map(|(position, ops)| ops.iter().map(move |op| (op.clone(), position)))
            .collect();
        Ok(Self {
            operations_to_metadata,
            group_of_operation,
        })
    }

    /// The full map, in generation order. The last entry is the empty key.
    #[must_use]
    pub fn operations_to_metadata(&self) -> &OperationsToMetadata {
        &self.operations_to_metadata
    }

    /// Consume the index, returning the map.
    #[must_use]
    pub fn into_operations_to_metadata(self) -> OperationsToMetadata {
        self.operations_to_metadata
    }

    /// Schemes of operations without an override.
    #[must_use]
    pub fn service_defaults(&self) -> &[AuthSchemeCodegenMetadata] {
        let empty: &[String] = &[];
        self.operations_to_metadata
            .get(empty)
            .map_or(&[], Vec::as_slice)
    }

    /// Schemes an operation resolves to: its group's, or the service defaults.
    #[must_use]
    pub fn auth_schemes_for_operation(&self, operation: &str) -> &[AuthSchemeCodegenMetadata] {
        self.group_of_operation
            .get(operation)
            .and_then(|position| self.operations_to_metadata.get_index(*position))
            .map_or_else(|| self.service_defaults(), |(_, schemes)| schemes.as_slice())
    }
}

/// Whether an operation signs its streaming payload with chunked encoding.
#[must_use]
pub fn requires_chunked_encoding(operation: &OperationModel) -> bool {
    operation.streaming
        && operation.http_checksum.as_ref().is_some_and(|checksum| {
            checksum.request_algorithm_member.is_some() || checksum.request_checksum_required
        })
}

/// Auth types used by operations without their own auth.
///
/// A legacy auth type other than `v4` wins over the modeled list; the modeled
/// list wins over the implicit `v4`.
#[must_use]
pub fn service_default_auth_types(model: &IntermediateModel) -> Vec<AuthType> {
    let metadata = &model.metadata;
    if metadata.auth_type != AuthType::default() {
        return vec![metadata.auth_type];
    }
    if !metadata.auth.is_empty() {
        return metadata.auth.clone();
    }
    vec![metadata.auth_type]
}

struct Resolver<'a> {
    model: &'a IntermediateModel,
    default_traits: Vec<AuthTrait>,
    service_override: Option<&'static SigV4SignerDefaults>,
}

impl<'a> Resolver<'a> {
    fn new(model: &'a IntermediateModel) -> Self {
        let default_auth_types = service_default_auth_types(model);
        let service_override = service_wide_override(model, &default_auth_types);
        Self {
            model,
            default_traits: AuthTrait::for_service(&default_auth_types),
            service_override,
        }
    }

    fn resolve(&self) -> AuthSchemeResult<OperationsToMetadata> {
        let service = self.model.metadata.service_name.as_str();
        let default_metadata = match self.service_override {
            Some(defaults) => vec![AuthSchemeCodegenMetadata::from_constants(defaults)?],
            None => AuthSchemeCodegenMetadata::from_auth_traits(&self.default_traits)?,
        };
        let chunked_operations: IndexSet<&str> = self
            .model
            .operations
            .iter()
            .filter(|(_, op)| requires_chunked_encoding(op))
            .map(|(name, _)| name.as_str())
            .collect();

        let mut result = OperationsToMetadata::new();
        let mut handled: HashSet<String> = HashSet::new();

        if let Some(defaults) = self.service_override {
            for (operation, node) in defaults.operations() {
                if !self.model.operations.contains_key(operation) {
                    continue;
                }
                debug!(
                    %service,
                    %operation,
                    auth_type = defaults.auth_type(),
                    "applying service-wide operation override"
                );
                result.insert(
                    vec![operation.clone()],
                    vec![AuthSchemeCodegenMetadata::from_constants(node)?],
                );
                handled.insert(operation.clone());
            }
        }

        for (traits, operations) in self.operations_to_auth_traits()? {
            let base = AuthSchemeCodegenMetadata::from_auth_traits(&traits)?;
            let (chunked, plain): (Vec<String>, Vec<String>) = operations
                .into_iter()
                .partition(|op| chunked_operations.contains(op.as_str()));

            if !plain.is_empty() {
                debug!(%service, operations = ?plain, "auth trait override group");
                result.insert(plain, base.clone());
            }
            if !chunked.is_empty() {
                debug!(%service, operations = ?chunked, "chunked auth trait override group");
                handled.extend(chunked.iter().cloned());
                result.insert(chunked, with_chunk_encoding(&base));
            }
        }

        let remaining: Vec<String> = chunked_operations
            .iter()
            .filter(|op| !handled.contains(**op))
            .map(|op| (*op).to_owned())
            .collect();
        if !remaining.is_empty() {
            debug!(%service, operations = ?remaining, "chunked encoding with service defaults");
            result.insert(remaining, with_chunk_encoding(&default_metadata));
        }

        result.insert(Vec::new(), default_metadata);
        debug!(%service, groups = result.len(), "resolved auth scheme groups");
        Ok(result)
    }

    /// Operations with declared auth, grouped by trait list and sorted by the
    /// first operation of each group. The group matching the service defaults
    /// is dropped. Under a service-wide override every annotated operation
    /// except the exempt one is rejected, registry-driven ones included.
    fn operations_to_auth_traits(&self) -> AuthSchemeResult<Vec<(Vec<AuthTrait>, Vec<String>)>> {
        let mut groups: IndexMap<Vec<AuthTrait>, Vec<String>> = IndexMap::new();
        for (name, operation) in &self.model.operations {
            if !operation.has_auth() {
                continue;
            }
            if self.service_override.is_some() && name != WRITE_GET_OBJECT_RESPONSE {
                return Err(AuthSchemeError::OperationAuthOverride {
                    operation: name.clone(),
                });
            }
            groups
                .entry(AuthTrait::for_operation(operation))
                .or_default()
                .push(name.clone());
        }

        if let Some(folded) = groups.shift_remove(self.default_traits.as_slice()) {
            debug!(operations = ?folded, "operations share the service default auth");
        }

        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by(|(_, a), (_, b)| a.first().cmp(&b.first()));
        Ok(groups)
    }
}

/// The registry node that drives auth for the whole service, if any.
fn service_wide_override(
    model: &IntermediateModel,
    default_auth_types: &[AuthType],
) -> Option<&'static SigV4SignerDefaults> {
    let [auth_type] = default_auth_types else {
        return None;
    };
    let defaults = registry::defaults_for(auth_type.as_str())?;
    (defaults.is_service_override_auth_scheme()
        && defaults.service() == Some(model.metadata.service_name.as_str()))
    .then_some(defaults)
}
