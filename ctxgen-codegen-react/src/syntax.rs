//! Small TypeScript syntax fragments shared by both file assemblers.

use ctxgen_manifest::PropertyDescriptor;

use crate::naming::prop_name;

/// A `name: type` or `name?: type` field fragment, without trailing
/// punctuation.
pub fn field(name: &str, ty_or_value: &str, optional: bool) -> String {
    format!("{}{}: {}", name, if optional { "?" } else { "" }, ty_or_value)
}

/// The type of a property's set-event-handler: `(theme?: string) => void`.
pub fn handler_type(prop: &PropertyDescriptor) -> String {
    format!(
        "({}{}: {}) => void",
        prop_name(&prop.name),
        if prop.is_optional { "?" } else { "" },
        prop.ty
    )
}

/// The type of a custom state-to-location mapper.
pub fn custom_location_from_state_type(prop: &PropertyDescriptor) -> String {
    let state_ty = if prop.is_optional {
        format!("{} | undefined", prop.ty)
    } else {
        prop.ty.clone()
    };
    format!(
        "({}: {}, pathName: any, urlParam: string) => any",
        prop_name(&prop.name),
        state_ty
    )
}

/// The type of a custom location-to-state mapper.
pub fn custom_state_from_location_type(prop: &PropertyDescriptor) -> String {
    format!("(pathName: any, urlParam: string) => {} | null", prop.ty)
}

/// Whether location serialization needs a JSON round trip for this type
/// expression. String-typed values travel as-is.
pub fn needs_json_round_trip(ty: &str) -> bool {
    !ty.contains("string")
}
