//! Per-type generation feature flags.

use ctxgen_manifest::TypeDescriptor;

/// The closed set of feature toggles a type's file assemblers read.
///
/// Computed once per type so the individual line builders branch on named
/// options instead of re-deriving them from the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeFeatures {
    /// At least one property synchronizes with the URL pathname.
    pub location_sync: bool,
    /// At least one property replaces the default location serialization
    /// with caller-supplied conversion functions.
    pub custom_location_mapping: bool,
    /// The provider owns its state internally; no state object or
    /// getter/setter surface is exposed to the caller.
    pub encapsulated_state: bool,
}

impl TypeFeatures {
    pub fn of(ty: &TypeDescriptor) -> Self {
        Self {
            location_sync: ty.props.iter().any(|p| p.should_update_location),
            custom_location_mapping: ty
                .props
                .iter()
                .any(|p| p.should_update_location && p.custom_update_location),
            encapsulated_state: ty.encapsulate_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ctxgen_manifest::Manifest;

    use super::*;

    #[test]
    fn test_features_of_plain_type() {
        let manifest = Manifest::from_str(
            r#"{ "types": [ { "name": "app", "props": [ { "name": "theme", "type": "string" } ] } ] }"#,
        )
        .unwrap();
        let features = TypeFeatures::of(&manifest.types[0]);
        assert!(!features.location_sync);
        assert!(!features.custom_location_mapping);
        assert!(!features.encapsulated_state);
    }

    #[test]
    fn test_features_of_location_synced_type() {
        let manifest = Manifest::from_str(
            r#"{ "types": [ { "name": "search", "props": [
                { "name": "query", "type": "string", "shouldUpdateLocation": true },
                { "name": "filter", "type": "IFilter", "shouldUpdateLocation": true, "customUpdateLocation": true }
            ] } ] }"#,
        )
        .unwrap();
        let features = TypeFeatures::of(&manifest.types[0]);
        assert!(features.location_sync);
        assert!(features.custom_location_mapping);
    }
}
