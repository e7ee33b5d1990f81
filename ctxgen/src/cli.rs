use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use ctxgen_codegen::GeneratorInfo;
use ctxgen_codegen_react::Generator;
use ctxgen_manifest::Manifest;
use eyre::{Result, WrapErr};

use crate::report;

#[derive(Parser)]
#[command(name = "ctxgen")]
#[command(version)]
#[command(about = "Generate React context and context-builder files from a JSON source document")]
pub(crate) struct Cli {
    /// Path to the JSON source document
    pub src: PathBuf,

    /// Destination directory for the generated files
    pub dest: PathBuf,

    /// Extra arguments, accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Run the generation pipeline: read, validate, generate, write, with a
    /// progress report after each stage.
    pub fn run(&self) -> Result<()> {
        let info = GeneratorInfo::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            Utc::now().to_rfc2822(),
        );

        report::header(&info);
        report::args(&self.src, &self.dest);

        let manifest = match Manifest::from_file(&self.src) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        };
        report::read_file(&self.src);

        let files = Generator::new(&manifest, &info)
            .generate()
            .wrap_err("failed to generate source code")?;
        report::generated(&files);

        let mut written = Vec::new();
        for file in &files {
            written.push(file.write_to(&self.dest)?);
        }
        report::saved(&written);

        report::footer();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_src_and_dest() {
        let cli = Cli::try_parse_from(["ctxgen", "contexts.json", "out"]).unwrap();
        assert_eq!(cli.src, PathBuf::from("contexts.json"));
        assert_eq!(cli.dest, PathBuf::from("out"));
        assert!(cli.rest.is_empty());
    }

    #[test]
    fn test_extra_args_are_accepted() {
        let cli = Cli::try_parse_from(["ctxgen", "contexts.json", "out", "extra", "args"]).unwrap();
        assert_eq!(cli.rest, vec!["extra", "args"]);
    }

    #[test]
    fn test_missing_dest_is_an_error() {
        assert!(Cli::try_parse_from(["ctxgen", "contexts.json"]).is_err());
    }

    #[test]
    fn test_run_writes_generated_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("contexts.json");
        let dest = temp.path().join("out");
        fs::write(
            &src,
            r#"{ "types": [ { "name": "app", "props": [
                { "name": "theme", "type": "string", "defaultValue": "dark" }
            ] } ] }"#,
        )
        .unwrap();

        let cli = Cli {
            src,
            dest: dest.clone(),
            rest: Vec::new(),
        };
        cli.run().unwrap();

        for name in [
            "appContext.tsx",
            "appContextBuilder.tsx",
            "contextBuilderUtils.ts",
            "CustomRouter.tsx",
        ] {
            assert!(dest.join(name).exists(), "{} was not written", name);
        }

        let context = fs::read_to_string(dest.join("appContext.tsx")).unwrap();
        assert!(context.contains("export const DefaultTheme = 'dark';"));
        assert!(context.contains("\r\n"));
    }
}
