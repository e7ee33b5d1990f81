//! The `<name>Context.tsx` file assembler.
//!
//! Emits the reactive state surface for one type: state interfaces, default
//! values, a state hook, the context object, and the provider component.

use ctxgen_codegen::{CodeBuilder, CodeFile, DocBlock, GeneratorInfo, LineEnding};
use ctxgen_core::{SourceFile, to_pascal_case};
use ctxgen_manifest::{PropertyDescriptor, TypeDescriptor};

use crate::{
    TypeFeatures,
    naming::{
        context_file_name, context_name, context_provider_name, context_value_interface_name,
        default_context_value_name, default_state_name, default_value_name, prop_name,
        provider_props_interface_name, set_event_handler_prop_name, set_prop_name,
        set_state_prop_name, state_hook_name, state_interface_name, state_prop_name,
        state_props_interface_name,
    },
    syntax::{field, handler_type},
    value::render_default,
};

/// The context file for one type.
pub struct ContextTsx<'a> {
    ty: &'a TypeDescriptor,
    info: &'a GeneratorInfo,
    features: TypeFeatures,
}

impl<'a> ContextTsx<'a> {
    pub fn new(ty: &'a TypeDescriptor, info: &'a GeneratorInfo) -> Self {
        Self {
            ty,
            info,
            features: TypeFeatures::of(ty),
        }
    }

    pub fn file_name(&self) -> String {
        context_file_name(&self.ty.name)
    }

    /// Render the full file text.
    pub fn render(&self) -> String {
        CodeFile::new()
            .block(self.header())
            .block(self.state_props_interface())
            .block(self.state_interface())
            .block(self.provider_props_interface())
            .block(self.context_value_interface())
            .block(self.default_values())
            .block(self.default_state())
            .block(self.default_context_value())
            .block(self.state_hook())
            .block(self.context())
            .block(self.provider())
            .render(LineEnding::CrLf)
    }

    pub fn into_source_file(self) -> SourceFile {
        SourceFile::new(self.file_name(), self.render())
    }

    fn pascal(&self) -> String {
        to_pascal_case(&self.ty.name)
    }

    fn props(&self) -> &[PropertyDescriptor] {
        &self.ty.props
    }

    fn header(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_line(&self.info.stamp());
        b.push_line("// Do not edit this file manually unless you disabled its code generation.");
        b.push_line("import React from 'react';");
        for import in self.ty.context_imports() {
            b.push_line(import);
        }
        b.into_lines()
    }

    fn state_props_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The {} state props interface.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export interface {} {{",
            state_props_interface_name(&self.ty.name)
        ));
        b.push_indent();
        for p in self.props() {
            // With encapsulated state the provider seeds every slot from its
            // defaults, so all initial values become optional.
            let optional = p.is_optional || self.features.encapsulated_state;
            b.push_line(&format!("{};", field(&prop_name(&p.name), &p.ty, optional)));
        }
        b.push_dedent();
        b.push_line("}");
        b.into_lines()
    }

    fn state_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The {} state interface.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export interface {} {{",
            state_interface_name(&self.ty.name)
        ));
        b.push_indent();
        for p in self.props() {
            b.push_line(&format!(
                "{};",
                field(&state_prop_name(&p.name), &p.ty, p.is_optional)
            ));
            let dispatch = format!(
                "React.Dispatch<React.SetStateAction<{}{}>>",
                p.ty,
                if p.is_optional { " | undefined" } else { "" }
            );
            b.push_line(&format!(
                "{};",
                field(&set_state_prop_name(&p.name), &dispatch, true)
            ));
        }
        b.push_dedent();
        b.push_line("}");
        b.into_lines()
    }

    fn provider_props_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The {} context provider props interface.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export interface {} {{",
            provider_props_interface_name(&self.ty.name)
        ));
        b.push_indent();
        b.push_line(&format!("{};", field("children", "React.ReactNode", false)));
        if self.features.encapsulated_state {
            for p in self.props() {
                b.push_line(&format!("{};", field(&prop_name(&p.name), &p.ty, true)));
            }
        } else {
            b.push_line(&format!(
                "{};",
                field(
                    &state_prop_name(&self.ty.name),
                    &state_interface_name(&self.ty.name),
                    false
                )
            ));
        }
        for p in self.props() {
            b.push_line(&format!(
                "{};",
                field(&set_event_handler_prop_name(&p.name), &handler_type(p), true)
            ));
        }
        b.push_dedent();
        b.push_line("}");
        b.into_lines()
    }

    fn context_value_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The {} context value interface.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export interface {} {{",
            context_value_interface_name(&self.ty.name)
        ));
        b.push_indent();
        for p in self.props() {
            b.push_line(&format!(
                "{};",
                field(&prop_name(&p.name), &p.ty, p.is_optional)
            ));
            b.push_line(&format!(
                "{};",
                field(&set_prop_name(&p.name), &handler_type(p), false)
            ));
        }
        b.push_dedent();
        b.push_line("}");
        b.into_lines()
    }

    fn default_values(&self) -> Vec<String> {
        self.props()
            .iter()
            .map(|p| {
                format!(
                    "export const {} = {};",
                    default_value_name(&p.name),
                    render_default(&p.default_value, &p.ty)
                )
            })
            .collect()
    }

    fn default_state(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The default {} state.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export const {}: {} = {{",
            default_state_name(&self.ty.name),
            state_interface_name(&self.ty.name)
        ));
        b.push_indent();
        for p in self.props() {
            b.push_line(&format!(
                "{}: {},",
                state_prop_name(&p.name),
                default_value_name(&p.name)
            ));
            b.push_line(&format!("{}: undefined,", set_state_prop_name(&p.name)));
        }
        b.push_dedent();
        b.push_line("};");
        b.into_lines()
    }

    fn default_context_value(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The default {} context value.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export const {}: {} = {{",
            default_context_value_name(&self.ty.name),
            context_value_interface_name(&self.ty.name)
        ));
        b.push_indent();
        for p in self.props() {
            b.push_line(&format!(
                "{}: {},",
                prop_name(&p.name),
                default_value_name(&p.name)
            ));
            b.push_line(&format!(
                "{}: ({}{}: {}) => {{}},",
                set_prop_name(&p.name),
                prop_name(&p.name),
                if p.is_optional { "?" } else { "" },
                p.ty
            ));
        }
        b.push_dedent();
        b.push_line("};");
        b.into_lines()
    }

    fn state_hook(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!("The {} state.", self.pascal())));
        b.push_line(&format!(
            "export const {} = ({{",
            state_hook_name(&self.ty.name)
        ));
        for p in self.props() {
            b.at(3).push_line(&format!("{},", prop_name(&p.name)));
        }
        b.at(2).push_line(&format!(
            "}}: {}) => {{",
            state_props_interface_name(&self.ty.name)
        ));
        b.at(0).push_blank();
        for p in self.props() {
            let state_ty = format!(
                "{}{}",
                p.ty,
                if p.is_optional { " | undefined" } else { "" }
            );
            b.at(1).push_line(&format!(
                "const [ {}, {} ] = React.useState<{}>({} || {});",
                state_prop_name(&p.name),
                set_state_prop_name(&p.name),
                state_ty,
                prop_name(&p.name),
                default_value_name(&p.name)
            ));
        }
        if !self.props().is_empty() {
            b.push_blank();
        }
        b.at(1).push_line(&format!(
            "const {}: {} = {{",
            state_prop_name(&self.ty.name),
            state_interface_name(&self.ty.name)
        ));
        for p in self.props() {
            b.at(2).push_line(&format!("{},", state_prop_name(&p.name)));
            b.at(2).push_line(&format!("{},", set_state_prop_name(&p.name)));
        }
        b.at(1).push_line("};");
        b.push_blank();
        b.at(1)
            .push_line(&format!("return {};", state_prop_name(&self.ty.name)));
        b.at(0).push_line("};");
        b.into_lines()
    }

    fn context(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!("The {} context.", self.pascal())));
        b.push_line(&format!(
            "export const {} = React.createContext<{}>({});",
            context_name(&self.ty.name),
            context_value_interface_name(&self.ty.name),
            default_context_value_name(&self.ty.name)
        ));
        b.into_lines()
    }

    fn provider(&self) -> Vec<String> {
        let state_name = state_prop_name(&self.ty.name);
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The {} context provider.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export const {} = ({{",
            context_provider_name(&self.ty.name)
        ));
        b.at(3).push_line("children,");
        if self.features.encapsulated_state {
            for p in self.props() {
                b.push_line(&format!("{},", prop_name(&p.name)));
            }
        } else {
            b.push_line(&format!("{},", state_name));
        }
        for p in self.props() {
            b.push_line(&format!("{},", set_event_handler_prop_name(&p.name)));
        }
        b.at(2).push_line(&format!(
            "}}: {}) => {{",
            provider_props_interface_name(&self.ty.name)
        ));
        b.at(0).push_blank();

        if self.features.encapsulated_state {
            b.at(1)
                .push_line(&format!("const {} = {}({{", state_name, state_hook_name(&self.ty.name)));
            for p in self.props() {
                b.at(2).push_line(&format!("{},", prop_name(&p.name)));
            }
            b.at(1).push_line("});");
            b.at(1).push_line("const {");
            for p in self.props() {
                b.at(2).push_line(&format!("{},", state_prop_name(&p.name)));
                b.at(2).push_line(&format!("{},", set_state_prop_name(&p.name)));
            }
            b.at(1).push_line(&format!("}} = {};", state_name));
        } else {
            b.at(1).push_line("const {");
            for p in self.props() {
                b.at(2).push_line(&format!("{},", state_prop_name(&p.name)));
                b.at(2).push_line(&format!("{},", set_state_prop_name(&p.name)));
            }
            b.at(1).push_line(&format!("}} = {} || {{}};", state_name));
        }
        b.at(0).push_blank();

        for p in self.props() {
            let handler = set_event_handler_prop_name(&p.name);
            b.at(1).push_line("React.useEffect(() => {");
            b.at(2)
                .push_line(&format!("{} && {}({});", handler, handler, state_prop_name(&p.name)));
            b.at(1).push_line(&format!(
                "}}, [ {}, {}, {} ]);",
                state_prop_name(&p.name),
                set_state_prop_name(&p.name),
                handler
            ));
            b.at(0).push_blank();
        }

        b.at(1).push_line(&format!(
            "const contextValue: {} = {{",
            context_value_interface_name(&self.ty.name)
        ));
        for p in self.props() {
            b.at(2)
                .push_line(&format!("{}: {},", prop_name(&p.name), state_prop_name(&p.name)));
            b.at(2).push_line(&format!(
                "{}: ({}{}: {}) => {} && {}({}),",
                set_prop_name(&p.name),
                prop_name(&p.name),
                if p.is_optional { "?" } else { "" },
                p.ty,
                set_state_prop_name(&p.name),
                set_state_prop_name(&p.name),
                prop_name(&p.name)
            ));
        }
        b.at(1).push_line("};");
        b.at(0).push_blank();
        b.at(1).push_line("return (");
        b.at(2).push_line(&format!(
            "<{}.Provider value={{contextValue}}>",
            context_name(&self.ty.name)
        ));
        b.at(3).push_line("{children}");
        b.at(2).push_line(&format!("</{}.Provider>", context_name(&self.ty.name)));
        b.at(1).push_line(");");
        b.at(0).push_line("};");
        b.into_lines()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ctxgen_manifest::Manifest;

    use super::*;

    fn info() -> GeneratorInfo {
        GeneratorInfo::new("ctxgen", "0.3.0", "T")
    }

    fn render(doc: &str) -> String {
        let manifest = Manifest::from_str(doc).unwrap();
        ContextTsx::new(&manifest.types[0], &info()).render()
    }

    #[test]
    fn test_file_name() {
        let manifest =
            Manifest::from_str(r#"{ "types": [ { "name": "user profile" } ] }"#).unwrap();
        let info = info();
        let file = ContextTsx::new(&manifest.types[0], &info);
        assert_eq!(file.file_name(), "userProfileContext.tsx");
    }

    #[test]
    fn test_header_stamp() {
        let content = render(r#"{ "types": [ { "name": "app" } ] }"#);
        assert!(content.starts_with("// Generated by ctxgen@0.3.0 on T.\r\n"));
        assert!(content.contains("// Do not edit this file manually"));
        assert!(content.contains("import React from 'react';"));
    }

    #[test]
    fn test_interfaces_and_defaults() {
        let content = render(
            r#"{ "types": [ { "name": "app", "props": [
                { "name": "theme", "type": "string", "defaultValue": "dark" },
                { "name": "count", "type": "number", "isOptional": true, "defaultValue": 0 }
            ] } ] }"#,
        );

        assert!(content.contains("export interface IAppStateProps {"));
        assert!(content.contains("    theme: string;"));
        assert!(content.contains("    count?: number;"));
        assert!(content.contains("export interface IAppState {"));
        assert!(content.contains("    themeState: string;"));
        assert!(
            content.contains(
                "    setThemeState?: React.Dispatch<React.SetStateAction<string>>;"
            )
        );
        assert!(
            content.contains(
                "    setCountState?: React.Dispatch<React.SetStateAction<number | undefined>>;"
            )
        );
        assert!(content.contains("export const DefaultTheme = 'dark';"));
        assert!(content.contains("export const DefaultCount = 0;"));
        assert!(content.contains("export const DefaultAppState: IAppState = {"));
        assert!(content.contains("export const DefaultAppContextValue: IAppContextValue = {"));
    }

    #[test]
    fn test_state_hook() {
        let content = render(
            r#"{ "types": [ { "name": "app", "props": [
                { "name": "theme", "type": "string", "defaultValue": "dark" }
            ] } ] }"#,
        );

        assert!(content.contains("export const AppState = ({"));
        assert!(content.contains(
            "    const [ themeState, setThemeState ] = React.useState<string>(theme || DefaultTheme);"
        ));
        assert!(content.contains("    const appState: IAppState = {"));
        assert!(content.contains("    return appState;"));
    }

    #[test]
    fn test_provider_effects_and_context_value() {
        let content = render(
            r#"{ "types": [ { "name": "app", "props": [
                { "name": "theme", "type": "string", "defaultValue": "dark" }
            ] } ] }"#,
        );

        assert!(content.contains("export const AppContextProvider = ({"));
        assert!(content.contains("    } = appState || {};"));
        assert!(content.contains(
            "        themeSetEventHandler && themeSetEventHandler(themeState);"
        ));
        assert!(content.contains(
            "        setTheme: (theme: string) => setThemeState && setThemeState(theme),"
        ));
        assert!(content.contains("        <AppContext.Provider value={contextValue}>"));
        assert!(content.contains("            {children}"));
    }

    #[test]
    fn test_empty_props_still_renders_skeleton() {
        let content = render(r#"{ "types": [ { "name": "app" } ] }"#);

        assert!(content.contains("export interface IAppStateProps {"));
        assert!(content.contains("export const AppState = ({"));
        assert!(content.contains(
            "export const AppContext = React.createContext<IAppContextValue>(DefaultAppContextValue);"
        ));
        assert!(content.contains("export const AppContextProvider = ({"));
        // No double blank lines from empty per-prop sections
        assert!(!content.contains("\r\n\r\n\r\n"));
    }

    #[test]
    fn test_encapsulated_state_provider_owns_hook() {
        let content = render(
            r#"{ "types": [ { "name": "app", "encapsulateState": true, "props": [
                { "name": "theme", "type": "string", "defaultValue": "dark" }
            ] } ] }"#,
        );

        // Initial values become optional props of the provider itself.
        assert!(content.contains("    theme?: string;"));
        assert!(!content.contains("    appState: IAppState;"));
        assert!(content.contains("    const appState = AppState({"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = render(r#"{ "types": [ { "name": "app" } ] }"#);
        assert!(content.ends_with("\r\n"));
        assert!(!content.replace("\r\n", "").contains('\n'));
    }
}
