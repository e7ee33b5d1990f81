//! The source document model.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// The parsed source document: the list of types to generate artifacts for,
/// plus options tuning the output shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub types: Vec<TypeDescriptor>,
    #[serde(default)]
    pub options: Options,
}

impl Manifest {
    /// The types that participate in generation.
    pub fn active_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|t| !t.disable)
    }
}

/// Output-shape options; they never alter the type list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Target major version per dependency key (e.g. `"react-router-dom": 5`).
    #[serde(default)]
    pub major_version: BTreeMap<String, u32>,
}

impl Options {
    /// The targeted react-router-dom major version. Defaults to 6.
    pub fn react_router_dom_version(&self) -> u32 {
        self.major_version
            .get("react-router-dom")
            .copied()
            .unwrap_or(6)
    }
}

/// One named entity in the source document, describing an output artifact
/// family: a context file and, optionally, a context-builder file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub props: Vec<PropertyDescriptor>,
    /// Skip this type entirely.
    #[serde(default)]
    pub disable: bool,
    /// Generate the context file only, no builder file.
    #[serde(default)]
    pub disable_context_builder: bool,
    /// The provider owns its state internally instead of receiving a state
    /// object from the caller.
    #[serde(default)]
    pub encapsulate_state: bool,
    #[serde(default)]
    pub context: Option<ContextSection>,
    #[serde(default)]
    pub context_builder: Option<ContextBuilderSection>,
}

impl TypeDescriptor {
    /// Extra import lines for the context file header.
    pub fn context_imports(&self) -> &[String] {
        self.context.as_ref().map(|c| c.imports.as_slice()).unwrap_or(&[])
    }

    /// Extra import lines for the context-builder file header.
    pub fn builder_imports(&self) -> &[String] {
        self.context_builder
            .as_ref()
            .map(|c| c.imports.as_slice())
            .unwrap_or(&[])
    }

    /// Additional builder-only properties threaded through the props bag.
    pub fn builder_props(&self) -> &[PropertyDescriptor] {
        self.context_builder
            .as_ref()
            .map(|c| c.props.as_slice())
            .unwrap_or(&[])
    }

    /// JSX lines rendered inside the provider element. Defaults to the
    /// plain `{children}` slot.
    pub fn provider_content(&self) -> Vec<String> {
        self.context_builder
            .as_ref()
            .filter(|c| !c.context_provider_content.is_empty())
            .map(|c| c.context_provider_content.clone())
            .unwrap_or_else(|| vec!["{children}".to_string()])
    }
}

/// Context-file customization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContextSection {
    #[serde(default)]
    pub imports: Vec<String>,
}

/// Context-builder-file customization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContextBuilderSection {
    #[serde(default)]
    pub props: Vec<PropertyDescriptor>,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub context_provider_content: Vec<String>,
}

/// One field of a type, with its type expression, optionality, and
/// behavioral flags.
///
/// The `type` expression is copied verbatim into the output; this system
/// does not validate it for well-formedness.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub default_value: Value,
    /// Synchronize this property's state with the URL pathname.
    #[serde(default)]
    pub should_update_location: bool,
    /// Replace the default location serialization with caller-supplied
    /// conversion functions.
    #[serde(default)]
    pub custom_update_location: bool,
}
