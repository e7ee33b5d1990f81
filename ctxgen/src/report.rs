//! Progress reporting for the generation pipeline.
//!
//! Purely presentational: the report has no effect on the generation
//! outcome.

use std::path::{Path, PathBuf};

use ctxgen_codegen::GeneratorInfo;
use ctxgen_core::SourceFile;

fn horizontal_line() {
    println!("==========================================");
}

pub(crate) fn header(info: &GeneratorInfo) {
    println!();
    horizontal_line();
    println!("{} {}", info.name, info.version);
    println!();
}

pub(crate) fn args(src: &Path, dest: &Path) {
    println!("args:");
    println!("- src: {}", src.display());
    println!("- dest: {}", dest.display());
}

pub(crate) fn read_file(src: &Path) {
    println!();
    println!("read file:");
    println!("- {}", src.display());
}

pub(crate) fn generated(files: &[SourceFile]) {
    println!();
    println!("generated source:");
    for file in files {
        println!("- {}", file.name());
    }
}

pub(crate) fn saved(paths: &[PathBuf]) {
    println!();
    println!("saved file:");
    for path in paths {
        println!("- {}", path.display());
    }
}

pub(crate) fn footer() {
    println!();
    println!("done");
    horizontal_line();
}
