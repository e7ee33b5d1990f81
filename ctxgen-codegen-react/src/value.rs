//! Default-value rendering into TypeScript literals.

use serde_json::Value;

/// Render a property default value as the TypeScript expression seeding its
/// `Default<Name>` constant.
///
/// String-typed properties get single-quoted literals, objects and arrays a
/// compact JSON literal, absent values `undefined`, everything else its
/// verbatim form. A string default on a non-string type passes through
/// unquoted, so it may reference an imported symbol.
pub fn render_default(value: &Value, ty: &str) -> String {
    if value.is_null() {
        return "undefined".to_string();
    }
    if ty == "string" {
        return format!("'{}'", render_raw(value));
    }
    match value {
        Value::Object(_) | Value::Array(_) => value.to_string(),
        other => render_raw(other),
    }
}

/// Render a builder-only property default verbatim.
///
/// Builder props carry raw expressions (they may reference imported
/// symbols), so string values are emitted without quoting.
pub fn render_raw(value: &Value) -> String {
    match value {
        Value::Null => "undefined".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_string_default_is_quoted() {
        assert_eq!(render_default(&json!("anon"), "string"), "'anon'");
    }

    #[test]
    fn test_missing_default_is_undefined() {
        assert_eq!(render_default(&Value::Null, "string"), "undefined");
    }

    #[test]
    fn test_object_default_is_compact_json() {
        assert_eq!(
            render_default(&json!({ "page": 1 }), "IFilter"),
            r#"{"page":1}"#
        );
        assert_eq!(render_default(&json!([1, 2]), "number[]"), "[1,2]");
    }

    #[test]
    fn test_scalar_defaults_are_verbatim() {
        assert_eq!(render_default(&json!(42), "number"), "42");
        assert_eq!(render_default(&json!(true), "boolean"), "true");
    }

    #[test]
    fn test_string_default_on_custom_type_is_raw() {
        assert_eq!(render_default(&json!("Color.Red"), "Color"), "Color.Red");
    }

    #[test]
    fn test_raw_string_is_unquoted() {
        assert_eq!(render_raw(&json!("DefaultTheme")), "DefaultTheme");
        assert_eq!(render_raw(&Value::Null), "undefined");
        assert_eq!(render_raw(&json!(7)), "7");
    }
}
