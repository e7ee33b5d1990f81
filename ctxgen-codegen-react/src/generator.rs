//! The source-code generator entry point.

use ctxgen_codegen::GeneratorInfo;
use ctxgen_core::SourceFile;
use ctxgen_manifest::Manifest;
use eyre::Result;

use crate::files::{ContextBuilderTsx, ContextTsx, builder_utils_file, custom_router_file};

/// Produces the full set of generated files for one source document.
///
/// Each non-disabled type yields one context file unconditionally and one
/// context-builder file unless the type disables it; the shared support
/// files are appended exactly once when any builder file was produced.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    info: &'a GeneratorInfo,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest, info: &'a GeneratorInfo) -> Self {
        Self { manifest, info }
    }

    /// Generate all file descriptors. Pure: no I/O, deterministic for a
    /// given manifest and generator info.
    pub fn generate(&self) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();

        for ty in self.manifest.active_types() {
            files.push(ContextTsx::new(ty, self.info).into_source_file());
        }

        let mut has_builders = false;
        for ty in self
            .manifest
            .active_types()
            .filter(|t| !t.disable_context_builder)
        {
            files.push(
                ContextBuilderTsx::new(ty, &self.manifest.options, self.info).into_source_file(),
            );
            has_builders = true;
        }

        if has_builders {
            files.push(builder_utils_file());
            files.push(custom_router_file(&self.manifest.options));
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn info() -> GeneratorInfo {
        GeneratorInfo::new("ctxgen", "0.3.0", "T")
    }

    fn generate(doc: &str) -> Vec<SourceFile> {
        let manifest = Manifest::from_str(doc).unwrap();
        Generator::new(&manifest, &info()).generate().unwrap()
    }

    #[test]
    fn test_generates_context_builder_and_support_files() {
        let files = generate(r#"{ "types": [ { "name": "app" } ] }"#);
        let names: Vec<_> = files.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "appContext.tsx",
                "appContextBuilder.tsx",
                "contextBuilderUtils.ts",
                "CustomRouter.tsx"
            ]
        );
    }

    #[test]
    fn test_disabled_builder_skips_support_files() {
        let files = generate(
            r#"{ "types": [ { "name": "app", "disableContextBuilder": true } ] }"#,
        );
        let names: Vec<_> = files.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["appContext.tsx"]);
    }

    #[test]
    fn test_disabled_type_is_skipped() {
        let files = generate(
            r#"{ "types": [
                { "name": "app" },
                { "name": "menu", "disable": true }
            ] }"#,
        );
        assert!(!files.iter().any(|f| f.name().contains("menu")));
    }

    #[test]
    fn test_support_files_emitted_once() {
        let files = generate(r#"{ "types": [ { "name": "app" }, { "name": "menu" } ] }"#);
        let utils = files
            .iter()
            .filter(|f| f.name() == "contextBuilderUtils.ts")
            .count();
        assert_eq!(utils, 1);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let manifest = Manifest::from_str(
            r#"{ "types": [ { "name": "search", "props": [
                { "name": "query", "type": "string", "shouldUpdateLocation": true }
            ] } ] }"#,
        )
        .unwrap();
        let info = info();
        let first = Generator::new(&manifest, &info).generate().unwrap();
        let second = Generator::new(&manifest, &info).generate().unwrap();
        assert_eq!(first, second);
    }
}
