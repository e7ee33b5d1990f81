//! Shared support files emitted alongside the context-builder files.
//!
//! Both files are static apart from the router wrapper, whose shape depends
//! on the targeted react-router-dom major version. They are emitted once
//! per run when at least one builder file was produced.

use ctxgen_codegen::{CodeBuilder, CodeFile, LineEnding};
use ctxgen_core::SourceFile;
use ctxgen_manifest::Options;

/// Module name of the builder utilities, used in import paths.
pub const BUILDER_UTILS_MODULE: &str = "contextBuilderUtils";

/// File name of the builder utilities.
pub const BUILDER_UTILS_FILE_NAME: &str = "contextBuilderUtils.ts";

/// The `contextBuilderUtils.ts` support file: children helpers, the shared
/// hash-history singleton, and pathname (de)serialization.
pub fn builder_utils_file() -> SourceFile {
    let content = CodeFile::new()
        .block(lines(&[
            "import React from 'react';",
            "import { createHashHistory } from 'history';",
        ]))
        .block(lines(&[
            "const createKey = () => Math.random().toString(36).substr(2, 5);",
        ]))
        .block(lines(&[
            "const createChild = (type: () => JSX.Element) => React.createElement(type);",
        ]))
        .block(lines(&[
            "const createChildWithKey = (type: () => JSX.Element) => React.createElement(type, { key: createKey() });",
        ]))
        .block(create_children())
        .block(lines(&["const history = createHashHistory();"]))
        .block(lines(&["export const getHistory = () => history;"]))
        .block(deserialize_pathname())
        .block(serialize_pathname())
        .render(LineEnding::CrLf);

    SourceFile::new(BUILDER_UTILS_FILE_NAME, content)
}

fn create_children() -> Vec<String> {
    let mut b = CodeBuilder::tsx();
    b.push_line(
        "export const createChildren = (content: (() => JSX.Element) | (Array<() => JSX.Element>)) => {",
    );
    b.push_indent();
    b.push_line("let children: React.ReactNode;");
    b.push_blank();
    b.push_line("if (Array.isArray(content)) {");
    b.push_indent();
    b.push_line("children = (content as Array<() => JSX.Element>).map(createChildWithKey);");
    b.push_dedent();
    b.push_line("} else {");
    b.push_indent();
    b.push_line("children = createChild(content as () => JSX.Element);");
    b.push_dedent();
    b.push_line("}");
    b.push_blank();
    b.push_line("return children;");
    b.push_dedent();
    b.push_line("};");
    b.into_lines()
}

fn deserialize_pathname() -> Vec<String> {
    let mut b = CodeBuilder::tsx();
    b.push_line("export const deserializePathname = (pathname: string) => {");
    b.at(1).push_line(
        "const normalizedPathname = (pathname ? (pathname[0] === '/' ? pathname.substr(1) : pathname) : '');",
    );
    b.at(1).push_line("const deserializedPathname = normalizedPathname.length");
    b.at(2).push_line("? normalizedPathname");
    b.at(3).push_line(".split('&')");
    b.at(3).push_line(".reduce((acc, kv) => {");
    b.at(4).push_line("const [key, value] = kv.split('=');");
    b.at(4).push_line("acc[key] = value;");
    b.at(4).push_line("return acc;");
    b.at(3).push_line("}, {} as any)");
    b.at(2).push_line(": {};");
    b.at(1).push_line("return deserializedPathname;");
    b.at(0).push_line("};");
    b.into_lines()
}

fn serialize_pathname() -> Vec<String> {
    let mut b = CodeBuilder::tsx();
    b.push_line("export const serializePathname = (pathname: any) =>");
    b.at(1).push_line("Object.keys(pathname)");
    b.at(2).push_line(".map(key => `${key}=${pathname[key]}`)");
    b.at(2).push_line(".sort()");
    b.at(2).push_line(".join('&');");
    b.into_lines()
}

/// The `CustomRouter.tsx` support file: a history-driven router wrapper
/// whose listener and element shape follow the targeted react-router-dom
/// major version.
pub fn custom_router_file(options: &Options) -> SourceFile {
    let v6 = options.react_router_dom_version() >= 6;

    let mut listener = CodeBuilder::tsx();
    if v6 {
        listener
            .at(1)
            .push_line("React.useLayoutEffect(() => history.listen(setState), [history]);");
    } else {
        listener.at(1).push_line(
            "React.useLayoutEffect(() => history.listen((location, action) => setState({ location, action })), [history]);",
        );
    }

    let router_element = if v6 {
        "<Router {...props} location={state.location} navigationType={state.action} navigator={history} />"
    } else {
        "<Router {...props} history={history} />"
    };

    let mut component = CodeBuilder::tsx();
    component.push_line("export const CustomRouter = ({ history, ...props }: ICustomRouterProps) => {");
    component.at(1).push_line("const [state, setState] = React.useState({");
    component.at(2).push_line("action: history.action,");
    component.at(2).push_line("location: history.location");
    component.at(1).push_line("});");
    component.at(0).push_blank();
    component.push_raw_lines(listener.into_lines());
    component.at(0).push_blank();
    component.at(1).push_line("return (");
    component.at(2).push_line(router_element);
    component.at(1).push_line(");");
    component.at(0).push_line("};");

    let content = CodeFile::new()
        .block(lines(&[
            "import React from 'react';",
            "import { Router } from 'react-router-dom';",
            "import { History } from 'history';",
        ]))
        .block(lines(&[
            "export interface ICustomRouterProps {",
            "    children: React.ReactNode;",
            "    history: History;",
            "}",
        ]))
        .block(component.into_lines())
        .block(lines(&["export default CustomRouter;"]))
        .render(LineEnding::CrLf);

    SourceFile::new("CustomRouter.tsx", content)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
