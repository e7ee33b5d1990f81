//! Structural validation of the parsed source document.

use std::collections::HashSet;

use ctxgen_core::{split_words, to_camel_case};

use crate::{Manifest, PropertyDescriptor, Result, TypeDescriptor, error::SourceContext};

/// Validate the document after parsing.
///
/// Rejects documents that would generate nothing, colliding output files,
/// or source text with invalid identifiers.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.types.is_empty() {
        return Err(ctx.validation_error("no types defined in the source document"));
    }
    if manifest.active_types().next().is_none() {
        return Err(ctx.validation_error("all types are disabled, nothing to generate"));
    }

    let mut seen = HashSet::new();
    for ty in &manifest.types {
        validate_name(&ty.name, "type", ctx)?;

        // File names derive from the camelCase form, so collisions there
        // would silently overwrite output files.
        if !seen.insert(to_camel_case(&ty.name)) {
            return Err(ctx.validation_error_for(
                &ty.name,
                format!("duplicate type name '{}'", ty.name),
            ));
        }

        validate_type(ty, ctx)?;
    }

    Ok(())
}

fn validate_type(ty: &TypeDescriptor, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();
    for prop in ty.props.iter().chain(ty.builder_props()) {
        validate_prop(&ty.name, prop, ctx)?;
        if !seen.insert(to_camel_case(&prop.name)) {
            return Err(ctx.validation_error_for(
                &prop.name,
                format!("duplicate property '{}' in type '{}'", prop.name, ty.name),
            ));
        }
    }

    if ty.encapsulate_state
        && ty.props.iter().any(|p| p.should_update_location)
    {
        return Err(ctx.validation_error_for(
            &ty.name,
            format!(
                "type '{}' encapsulates its state but has location-synchronized properties",
                ty.name
            ),
        ));
    }

    Ok(())
}

fn validate_prop(type_name: &str, prop: &PropertyDescriptor, ctx: &SourceContext) -> Result<()> {
    validate_name(&prop.name, "property", ctx)?;

    if prop.ty.trim().is_empty() {
        return Err(ctx.validation_error_for(
            &prop.name,
            format!(
                "property '{}' in type '{}' has an empty type expression",
                prop.name, type_name
            ),
        ));
    }

    if prop.custom_update_location && !prop.should_update_location {
        return Err(ctx.validation_error_for(
            &prop.name,
            format!(
                "property '{}' in type '{}' sets customUpdateLocation without shouldUpdateLocation",
                prop.name, type_name
            ),
        ));
    }

    Ok(())
}

fn validate_name(name: &str, kind: &str, ctx: &SourceContext) -> Result<()> {
    let words = split_words(name);
    if words.is_empty() {
        return Err(ctx.validation_error(format!(
            "{} name '{}' contains no identifier characters",
            kind, name
        )));
    }
    if words[0].starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ctx.validation_error_for(
            name,
            format!("{} name '{}' starts with a digit", kind, name),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{Error, Manifest};

    fn validation_message(err: Box<Error>) -> String {
        match *err {
            Error::Validation { message, .. } => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_types_rejected() {
        let err = Manifest::from_str(r#"{ "types": [] }"#).unwrap_err();
        assert_eq!(validation_message(err), "no types defined in the source document");
    }

    #[test]
    fn test_all_disabled_rejected() {
        let err = Manifest::from_str(r#"{ "types": [ { "name": "app", "disable": true } ] }"#)
            .unwrap_err();
        assert_eq!(
            validation_message(err),
            "all types are disabled, nothing to generate"
        );
    }

    #[test]
    fn test_duplicate_type_names_rejected() {
        let err = Manifest::from_str(
            r#"{ "types": [ { "name": "userProfile" }, { "name": "user profile" } ] }"#,
        )
        .unwrap_err();
        assert_eq!(
            validation_message(err),
            "duplicate type name 'user profile'"
        );
    }

    #[test]
    fn test_duplicate_props_rejected() {
        let err = Manifest::from_str(
            r#"{ "types": [ { "name": "app", "props": [
                { "name": "theme", "type": "string" },
                { "name": "theme", "type": "string" }
            ] } ] }"#,
        )
        .unwrap_err();
        assert_eq!(
            validation_message(err),
            "duplicate property 'theme' in type 'app'"
        );
    }

    #[test]
    fn test_empty_type_expression_rejected() {
        let err = Manifest::from_str(
            r#"{ "types": [ { "name": "app", "props": [ { "name": "theme", "type": " " } ] } ] }"#,
        )
        .unwrap_err();
        assert!(validation_message(err).contains("empty type expression"));
    }

    #[test]
    fn test_custom_without_should_rejected() {
        let err = Manifest::from_str(
            r#"{ "types": [ { "name": "app", "props": [
                { "name": "theme", "type": "string", "customUpdateLocation": true }
            ] } ] }"#,
        )
        .unwrap_err();
        assert!(validation_message(err).contains("customUpdateLocation"));
    }

    #[test]
    fn test_encapsulated_location_sync_rejected() {
        let err = Manifest::from_str(
            r#"{ "types": [ { "name": "app", "encapsulateState": true, "props": [
                { "name": "theme", "type": "string", "shouldUpdateLocation": true }
            ] } ] }"#,
        )
        .unwrap_err();
        assert!(validation_message(err).contains("encapsulates its state"));
    }

    #[test]
    fn test_digit_leading_name_rejected() {
        let err =
            Manifest::from_str(r#"{ "types": [ { "name": "2fast" } ] }"#).unwrap_err();
        assert!(validation_message(err).contains("starts with a digit"));
    }

    #[test]
    fn test_valid_document_accepted() {
        let manifest = Manifest::from_str(
            r#"{ "types": [
                { "name": "app", "props": [ { "name": "theme", "type": "string" } ] },
                { "name": "menu", "disable": true }
            ] }"#,
        )
        .unwrap();
        assert_eq!(manifest.active_types().count(), 1);
    }
}
