//! The `<name>ContextBuilder.tsx` file assembler.
//!
//! Emits the fluent construction API around a generated context: a props
//! bag, a `build()` method producing a renderable component plus property
//! accessors, and one `with*` mutator per configurable property.

use ctxgen_codegen::{CodeBuilder, CodeFile, DocBlock, GeneratorInfo, LineEnding};
use ctxgen_core::{SourceFile, to_pascal_case, to_words};
use ctxgen_manifest::{Options, PropertyDescriptor, TypeDescriptor};

use crate::{
    TypeFeatures,
    files::support::BUILDER_UTILS_MODULE,
    naming::{
        context_builder_file_name, context_builder_name, context_interface_name,
        context_module_name, context_provider_name, custom_location_from_state_name,
        custom_state_from_location_name, default_state_name, get_prop_name, initial_prop_name,
        prop_name, set_event_handler_prop_name, set_prop_name, set_state_prop_name,
        state_hook_name, state_interface_name, state_prop_name, url_param_prop_name,
        with_prop_name,
    },
    syntax::{
        custom_location_from_state_type, custom_state_from_location_type, field, handler_type,
        needs_json_round_trip,
    },
    value::{render_default, render_raw},
};

const COMPONENT_PROPS_INTERFACE: &str = "IComponentProps";
const CONTEXT_PROPS_INTERFACE: &str = "IContextProps";

/// The context-builder file for one type.
pub struct ContextBuilderTsx<'a> {
    ty: &'a TypeDescriptor,
    options: &'a Options,
    info: &'a GeneratorInfo,
    features: TypeFeatures,
}

impl<'a> ContextBuilderTsx<'a> {
    pub fn new(ty: &'a TypeDescriptor, options: &'a Options, info: &'a GeneratorInfo) -> Self {
        Self {
            ty,
            options,
            info,
            features: TypeFeatures::of(ty),
        }
    }

    pub fn file_name(&self) -> String {
        context_builder_file_name(&self.ty.name)
    }

    /// Render the full file text.
    pub fn render(&self) -> String {
        CodeFile::new()
            .block(self.header())
            .block(self.component_props_interface())
            .block(self.context_interface())
            .block(self.context_props_interface())
            .block(self.builder_class())
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

    fn sync_props(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.props().iter().filter(|p| p.should_update_location)
    }

    fn state_name(&self) -> String {
        state_prop_name(&self.ty.name)
    }

    fn header(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_line(&self.info.stamp());
        b.push_line("// Do not edit this file manually unless you disabled its code generation.");
        b.push_line("import React from 'react';");
        if self.options.react_router_dom_version() <= 5 {
            b.push_line("import ReactDOM from 'react-dom';");
        } else {
            b.push_line("import ReactDOM from 'react-dom/client';");
        }
        if self.features.location_sync {
            b.push_line("import { History, Location } from 'history';");
        }

        let context_imports = if self.features.encapsulated_state {
            context_provider_name(&self.ty.name)
        } else {
            [
                context_provider_name(&self.ty.name),
                state_interface_name(&self.ty.name),
                state_hook_name(&self.ty.name),
                default_state_name(&self.ty.name),
            ]
            .join(", ")
        };
        b.push_line(&format!(
            "import {{ {} }} from './{}';",
            context_imports,
            context_module_name(&self.ty.name)
        ));

        let utils_imports = if self.features.location_sync {
            "createChildren, getHistory, deserializePathname, serializePathname"
        } else {
            "createChildren, getHistory"
        };
        b.push_line(&format!(
            "import {{ {} }} from './{}';",
            utils_imports, BUILDER_UTILS_MODULE
        ));

        for import in self.ty.builder_imports() {
            b.push_line(import);
        }
        b.into_lines()
    }

    fn component_props_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new("The component props interface."));
        b.push_line(&format!("interface {} {{", COMPONENT_PROPS_INTERFACE));
        b.push_indent();
        b.push_line(&format!("{};", field("rendered", "() => void", true)));
        b.push_dedent();
        b.push_line("}");
        b.into_lines()
    }

    fn context_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new(format!(
            "The {} context interface.",
            self.pascal()
        )));
        b.push_line(&format!(
            "export interface {} {{",
            context_interface_name(&self.ty.name)
        ));
        b.at(1)
            .push_doc(&DocBlock::new("The component to be rendered."));
        b.push_line(&format!(
            "{};",
            field(
                "Component",
                &format!("(props: {}) => JSX.Element", COMPONENT_PROPS_INTERFACE),
                false
            )
        ));
        b.at(0).push_blank();
        b.at(1).push_doc(
            &DocBlock::new("Renders the component.").param(
                "Element | DocumentFragment | null",
                "container",
                "The container. Optional parameter.",
            ),
        );
        b.push_line(&format!(
            "{};",
            field(
                "render",
                "(container: Element | DocumentFragment | null) => Promise<void>",
                false
            )
        ));

        if !self.features.encapsulated_state {
            for p in self.props() {
                b.at(0).push_blank();
                b.at(1)
                    .push_doc(&DocBlock::new(format!("Gets the {}.", prop_name(&p.name))));
                let getter_ty = format!(
                    "() => {}{}",
                    p.ty,
                    if p.is_optional { " | undefined" } else { "" }
                );
                b.push_line(&format!("{};", field(&get_prop_name(&p.name), &getter_ty, false)));
                b.at(0).push_blank();
                b.at(1)
                    .push_doc(&DocBlock::new(format!("Sets the {}.", prop_name(&p.name))));
                b.push_line(&format!(
                    "{};",
                    field(&set_prop_name(&p.name), &handler_type(p), false)
                ));
            }
        }
        b.at(0).push_line("}");
        b.into_lines()
    }

    fn context_props_interface(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::new("The context props interface."));
        b.push_line(&format!("interface {} {{", CONTEXT_PROPS_INTERFACE));
        b.push_indent();
        b.push_line(&format!("{};", field("children", "React.ReactNode", false)));
        if !self.features.encapsulated_state {
            b.push_line(&format!(
                "{};",
                field(&self.state_name(), &state_interface_name(&self.ty.name), false)
            ));
        }
        for p in self.props() {
            // With encapsulated state the initial value may be omitted.
            let optional = p.is_optional || self.features.encapsulated_state;
            b.push_line(&format!("{};", field(&prop_name(&p.name), &p.ty, optional)));
            b.push_line(&format!(
                "{};",
                field(&set_event_handler_prop_name(&p.name), &handler_type(p), true)
            ));
            if p.should_update_location {
                b.push_line(&format!(
                    "{};",
                    field(&url_param_prop_name(&p.name), "string", true)
                ));
                if p.custom_update_location {
                    b.push_line(&format!(
                        "{};",
                        field(
                            &custom_location_from_state_name(&p.name),
                            &custom_location_from_state_type(p),
                            true
                        )
                    ));
                    b.push_line(&format!(
                        "{};",
                        field(
                            &custom_state_from_location_name(&p.name),
                            &custom_state_from_location_type(p),
                            true
                        )
                    ));
                }
            }
        }
        for p in self.ty.builder_props() {
            b.push_line(&format!(
                "{};",
                field(&prop_name(&p.name), &p.ty, p.is_optional)
            ));
        }
        b.push_dedent();
        b.push_line("}");
        b.into_lines()
    }

    fn builder_class(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.push_doc(&DocBlock::with_lines([
            format!("The {} context builder.", self.pascal()),
            format!(
                "Helps to build the {} context and manage its state.",
                self.pascal()
            ),
        ]));
        b.push_line(&format!(
            "export class {} {{",
            context_builder_name(&self.ty.name)
        ));
        b.push_raw_lines(self.props_bag());
        b.at(0).push_blank();
        b.push_raw_lines(self.build_method());
        b.at(0).push_blank();
        b.push_raw_lines(self.with_methods());
        b.at(0).push_line("}");
        b.push_blank();
        b.push_line(&format!(
            "export default {};",
            context_builder_name(&self.ty.name)
        ));
        b.into_lines()
    }

    fn props_bag(&self) -> Vec<String> {
        let default_state = default_state_name(&self.ty.name);
        let mut b = CodeBuilder::tsx();
        b.at(1).push_line(&format!(
            "private props: {} = {{",
            CONTEXT_PROPS_INTERFACE
        ));
        b.at(2).push_line("children: undefined,");
        if !self.features.encapsulated_state {
            b.push_line(&format!("{}: {},", self.state_name(), default_state));
        }
        for p in self.props() {
            if self.features.encapsulated_state {
                b.push_line(&format!("{}: undefined,", prop_name(&p.name)));
            } else {
                b.push_line(&format!(
                    "{}: {}.{},",
                    prop_name(&p.name),
                    default_state,
                    state_prop_name(&p.name)
                ));
            }
            b.push_line(&format!("{}: undefined,", set_event_handler_prop_name(&p.name)));
            if p.should_update_location {
                b.push_line(&format!("{}: undefined,", url_param_prop_name(&p.name)));
                if p.custom_update_location {
                    b.push_line(&format!(
                        "{}: undefined,",
                        custom_location_from_state_name(&p.name)
                    ));
                    b.push_line(&format!(
                        "{}: undefined,",
                        custom_state_from_location_name(&p.name)
                    ));
                }
            }
        }
        for p in self.ty.builder_props() {
            b.push_line(&format!(
                "{}: {},",
                prop_name(&p.name),
                render_raw(&p.default_value)
            ));
        }
        b.at(1).push_line("};");
        b.into_lines()
    }

    fn build_method(&self) -> Vec<String> {
        let mut sections: Vec<Vec<String>> = Vec::new();
        if !self.features.encapsulated_state {
            sections.push(self.build_var_declarations());
        }
        if self.features.location_sync {
            sections.push(self.build_sync_state_with_location());
            sections.push(self.build_sync_location_with_state());
        }
        sections.push(self.build_component());
        sections.push(self.build_render());
        if !self.features.encapsulated_state {
            for p in self.props() {
                sections.push(self.build_prop_getter(p));
                sections.push(self.build_prop_setter(p));
            }
        }
        sections.push(self.build_context_object());

        let mut b = CodeBuilder::tsx();
        b.at(1).push_doc(
            &DocBlock::new(format!("Builds the {} Context.", self.pascal())).returns(
                context_interface_name(&self.ty.name),
                format!("The {} Context Interface.", self.pascal()),
            ),
        );
        b.at(1).push_line("build() {");
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                b.at(0).push_blank();
            }
            b.push_raw_lines(section.clone());
        }
        b.at(1).push_line("}");
        b.into_lines()
    }

    fn build_var_declarations(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.at(2).push_line("const {");
        for p in self.props() {
            b.at(3).push_line(&format!(
                "{}: {},",
                prop_name(&p.name),
                initial_prop_name(&p.name)
            ));
            if p.should_update_location {
                b.push_line(&format!("{},", url_param_prop_name(&p.name)));
                if p.custom_update_location {
                    b.push_line(&format!("{},", custom_location_from_state_name(&p.name)));
                    b.push_line(&format!("{},", custom_state_from_location_name(&p.name)));
                }
            }
        }
        b.at(2).push_line("} = this.props;");
        b.into_lines()
    }

    fn build_sync_state_with_location(&self) -> Vec<String> {
        let state_name = self.state_name();
        let mut b = CodeBuilder::tsx();
        b.at(2).push_line(&format!(
            "const syncStateWithLocation = ({}: {}, location: Location) => {{",
            state_name,
            state_interface_name(&self.ty.name)
        ));
        b.at(3).push_line("const {");
        for p in self.sync_props() {
            b.at(4).push_line(&format!("{},", set_state_prop_name(&p.name)));
        }
        b.at(3).push_line(&format!("}} = {};", state_name));
        b.at(3)
            .push_line("const pathname = deserializePathname(location.pathname);");
        for p in self.sync_props() {
            let url_param = url_param_prop_name(&p.name);
            let decoded = format!("decodeURIComponent(pathname[{}])", url_param);
            let parsed = if needs_json_round_trip(&p.ty) {
                format!("JSON.parse({})", decoded)
            } else {
                decoded
            };
            if p.custom_update_location {
                let custom = custom_state_from_location_name(&p.name);
                b.at(3).push_line(&format!("const {} =", prop_name(&p.name)));
                b.at(4).push_line(&format!(
                    "({} && {} && {}(pathname, {}) ||",
                    url_param, custom, custom, url_param
                ));
                b.at(4).push_line(&format!(
                    "({} && pathname[{}] && {}));",
                    url_param, url_param, parsed
                ));
            } else {
                b.at(3).push_line(&format!(
                    "const {} = {} && pathname[{}] && {};",
                    prop_name(&p.name),
                    url_param,
                    url_param,
                    parsed
                ));
            }
        }
        for p in self.sync_props() {
            let set_state = set_state_prop_name(&p.name);
            b.at(3).push_line(&format!(
                "{} && {} && {}({});",
                prop_name(&p.name),
                set_state,
                set_state,
                prop_name(&p.name)
            ));
        }
        b.at(2).push_line("};");
        b.into_lines()
    }

    fn build_sync_location_with_state(&self) -> Vec<String> {
        let state_name = self.state_name();
        let mut b = CodeBuilder::tsx();
        b.at(2).push_line(&format!(
            "const syncLocationWithState = ({}: {}, history: History) => {{",
            state_name,
            state_interface_name(&self.ty.name)
        ));
        b.at(3).push_line("const {");
        for p in self.sync_props() {
            b.at(4).push_line(&format!("{},", state_prop_name(&p.name)));
        }
        b.at(3).push_line(&format!("}} = {};", state_name));
        b.at(3)
            .push_line("const pathname = deserializePathname(history.location.pathname);");
        for p in self.sync_props() {
            let url_param = url_param_prop_name(&p.name);
            let state_prop = state_prop_name(&p.name);
            let stringified = if needs_json_round_trip(&p.ty) {
                format!("JSON.stringify({})", state_prop)
            } else {
                state_prop.clone()
            };
            let encoded = format!("encodeURIComponent({})", stringified);
            if p.custom_update_location {
                let custom = custom_location_from_state_name(&p.name);
                b.at(3).push_line(&format!(
                    "({} && {} && {}({}, pathname, {})) ||",
                    url_param, custom, custom, state_prop, url_param
                ));
                b.at(4).push_line(&format!(
                    "({} && (pathname[{}] = {} && {}));",
                    url_param, url_param, state_prop, encoded
                ));
            } else {
                b.at(3).push_line(&format!(
                    "{} && (pathname[{}] = {} && {});",
                    url_param, url_param, state_prop, encoded
                ));
            }
        }
        b.at(3)
            .push_line("const serializedPathname = serializePathname(pathname);");
        b.at(3)
            .push_line("history.replace({ pathname: serializedPathname });");
        b.at(2).push_line("};");
        b.into_lines()
    }

    fn build_component(&self) -> Vec<String> {
        let state_name = self.state_name();
        let mut b = CodeBuilder::tsx();
        b.at(2).push_line(&format!(
            "const Component = (props: {}) => {{",
            COMPONENT_PROPS_INTERFACE
        ));
        if self.features.location_sync {
            b.at(3).push_line("const didMount = React.useRef(false);");
            b.at(3).push_line("const history = getHistory();");
        }
        if !self.features.encapsulated_state {
            b.at(3).push_line(&format!(
                "const {} = {}({{",
                state_name,
                state_hook_name(&self.ty.name)
            ));
            for p in self.props() {
                b.at(4).push_line(&format!(
                    "{}: {},",
                    prop_name(&p.name),
                    initial_prop_name(&p.name)
                ));
            }
            b.at(3).push_line("});");
        }
        b.at(3).push_line("const {");
        b.at(4).push_line("children,");
        for p in self.props() {
            b.push_line(&format!("{},", prop_name(&p.name)));
            if p.should_update_location {
                b.push_line(&format!("{},", url_param_prop_name(&p.name)));
                if p.custom_update_location {
                    b.push_line(&format!("{},", custom_location_from_state_name(&p.name)));
                    b.push_line(&format!("{},", custom_state_from_location_name(&p.name)));
                }
            }
        }
        for p in self.ty.builder_props() {
            b.push_line(&format!("{},", prop_name(&p.name)));
        }
        b.push_line("...rest");
        b.at(3).push_line("} = this.props;");
        b.at(3).push_line("const {");
        b.at(4).push_line("rendered");
        b.at(3).push_line("} = props;");
        b.at(3)
            .push_line("React.useEffect(rendered ? rendered : () => {}, []);");
        if self.features.location_sync {
            b.at(3).push_line(&format!(
                "React.useEffect(() => syncStateWithLocation({}, history.location), []);",
                state_name
            ));
            b.at(3).push_line("React.useEffect(() => {");
            b.at(4).push_line("if (didMount.current) {");
            b.at(5)
                .push_line(&format!("syncLocationWithState({}, history);", state_name));
            b.at(4).push_line("} else {");
            b.at(5).push_line("didMount.current = true;");
            b.at(4).push_line("}");
            b.at(3)
                .push_line(&format!("}}, [{}, history]);", state_name));
        }
        if !self.features.encapsulated_state {
            b.at(3)
                .push_line(&format!("this.props.{} = {};", state_name, state_name));
        }
        b.at(3).push_line("return (");
        let provider_attrs = if self.features.encapsulated_state {
            self.props()
                .iter()
                .map(|p| format!(" {}={{{}}}", prop_name(&p.name), prop_name(&p.name)))
                .collect::<String>()
        } else {
            format!(" {}={{{}}}", state_name, state_name)
        };
        b.at(4).push_line(&format!(
            "<{} {{...rest}}{}>",
            context_provider_name(&self.ty.name),
            provider_attrs
        ));
        for line in self.ty.provider_content() {
            b.at(5).push_line(&line);
        }
        b.at(4).push_line(&format!(
            "</{}>",
            context_provider_name(&self.ty.name)
        ));
        b.at(3).push_line(");");
        b.at(2).push_line("};");
        b.into_lines()
    }

    fn build_render(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.at(2)
            .push_line("const render = (container: Element | DocumentFragment | null) =>");
        b.at(3).push_line("new Promise<void>((resolve, reject) => {");
        b.at(4).push_line("try {");
        b.at(5).push_line("const rendered = () => resolve();");
        b.at(5).push_line("const props = {");
        b.at(6).push_line("rendered");
        b.at(5).push_line("};");
        if self.options.react_router_dom_version() <= 5 {
            b.at(5).push_line("ReactDOM.render(");
            b.at(6).push_line("<React.StrictMode>");
            b.at(7).push_line("<Component { ...props } />");
            b.at(6).push_line("</React.StrictMode>,");
            b.at(6)
                .push_line("container || document.createElement('div')");
            b.at(5).push_line(");");
        } else {
            b.at(5).push_line("ReactDOM");
            b.at(6)
                .push_line(".createRoot((container || document.createElement('div')) as HTMLElement)");
            b.at(6).push_line(".render(");
            b.at(7).push_line("<React.StrictMode>");
            b.at(8).push_line("<Component { ...props } />");
            b.at(7).push_line("</React.StrictMode>");
            b.at(6).push_line(");");
        }
        b.at(4).push_line("} catch (e) {");
        b.at(5).push_line("reject(e);");
        b.at(4).push_line("}");
        b.at(3).push_line("});");
        b.into_lines()
    }

    fn build_prop_getter(&self, prop: &PropertyDescriptor) -> Vec<String> {
        let state_prop = state_prop_name(&prop.name);
        let mut b = CodeBuilder::tsx();
        b.at(2)
            .push_line(&format!("const {} = () => {{", get_prop_name(&prop.name)));
        b.at(3).push_line(&format!(
            "const {{ {} }} = this.props.{} || {{}};",
            state_prop,
            self.state_name()
        ));
        b.at(3).push_line(&format!("return {};", state_prop));
        b.at(2).push_line("};");
        b.into_lines()
    }

    fn build_prop_setter(&self, prop: &PropertyDescriptor) -> Vec<String> {
        let set_state = set_state_prop_name(&prop.name);
        let mut b = CodeBuilder::tsx();
        b.at(2).push_line(&format!(
            "const {} = ({}{}: {}) => {{",
            set_prop_name(&prop.name),
            prop_name(&prop.name),
            if prop.is_optional { "?" } else { "" },
            prop.ty
        ));
        b.at(3).push_line(&format!(
            "const {{ {} }} = this.props.{} || {{}};",
            set_state,
            self.state_name()
        ));
        b.at(3).push_line(&format!(
            "{} && {}({});",
            set_state,
            set_state,
            prop_name(&prop.name)
        ));
        b.at(2).push_line("};");
        b.into_lines()
    }

    fn build_context_object(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.at(2).push_line(&format!(
            "const context: {} = {{",
            context_interface_name(&self.ty.name)
        ));
        b.at(3).push_line("Component,");
        b.at(3).push_line("render,");
        if !self.features.encapsulated_state {
            for p in self.props() {
                b.push_line(&format!("{},", get_prop_name(&p.name)));
                b.push_line(&format!("{},", set_prop_name(&p.name)));
            }
        }
        b.at(2).push_line("};");
        b.at(0).push_blank();
        b.at(2).push_line("return context;");
        b.into_lines()
    }

    fn with_methods(&self) -> Vec<String> {
        let mut b = CodeBuilder::tsx();
        b.at(1).push_doc(
            &DocBlock::with_lines([
                "Sets the children.",
                "All the children within the context will have the same state.",
            ])
            .param(
                "(() => JSX.Element) | (Array<() => JSX.Element>)",
                "children",
                "The children.",
            ),
        );
        b.at(1)
            .push_line("withChildren(children: (() => JSX.Element) | (Array<() => JSX.Element>)) {");
        b.at(2)
            .push_line("this.props.children = createChildren(children);");
        b.at(2).push_line("return this;");
        b.at(1).push_line("}");

        for (name, ty, doc_suffix) in self.with_method_entries() {
            b.at(0).push_blank();
            self.push_with_method(&mut b, &name, &ty, &doc_suffix);
        }
        b.into_lines()
    }

    /// The (name, type, doc suffix) triple of every `with*` mutator after
    /// `withChildren`, in emission order.
    fn with_method_entries(&self) -> Vec<(String, String, String)> {
        let mut entries = Vec::new();
        for p in self.props() {
            entries.push((
                p.name.clone(),
                p.ty.clone(),
                format!(". Default value: {}", render_default(&p.default_value, &p.ty)),
            ));
            entries.push((
                set_event_handler_prop_name(&p.name),
                handler_type(p),
                String::new(),
            ));
            if p.should_update_location {
                entries.push((
                    url_param_prop_name(&p.name),
                    "string".to_string(),
                    format!(" to be synchronized with the {} state", prop_name(&p.name)),
                ));
                if p.custom_update_location {
                    entries.push((
                        custom_location_from_state_name(&p.name),
                        custom_location_from_state_type(p),
                        " function".to_string(),
                    ));
                    entries.push((
                        custom_state_from_location_name(&p.name),
                        custom_state_from_location_type(p),
                        " function".to_string(),
                    ));
                }
            }
        }
        for p in self.ty.builder_props() {
            entries.push((
                p.name.clone(),
                p.ty.clone(),
                format!(". Default value: {}", render_default(&p.default_value, &p.ty)),
            ));
        }
        entries
    }

    fn push_with_method(&self, b: &mut CodeBuilder, name: &str, ty: &str, doc_suffix: &str) {
        let words = to_words(name);
        b.at(1).push_doc(
            &DocBlock::new(format!("Sets the {}{}.", words, doc_suffix)).param(
                ty,
                prop_name(name),
                format!("The {}.", words),
            ),
        );
        b.at(1).push_line(&format!(
            "{}({}: {}) {{",
            with_prop_name(name),
            prop_name(name),
            ty
        ));
        b.at(2).push_line(&format!(
            "this.props.{} = {};",
            prop_name(name),
            prop_name(name)
        ));
        b.at(2).push_line("return this;");
        b.at(1).push_line("}");
    }
}
