use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("the first argument must point to a JSON source document"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the source document")]
    #[diagnostic(code(ctxgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(ctxgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Source context for error reporting.
///
/// Encapsulates the document content and filename, reducing parameter
/// passing in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error labelling the first occurrence of the given
    /// name in the document.
    pub fn validation_error_for(&self, name: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(name),
            message: message.into(),
        })
    }

    /// Find the span of a JSON string value in the source.
    fn find_span(&self, name: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", name);
        self.src
            .find(&quoted)
            .map(|offset| SourceSpan::new(offset.into(), quoted.len()))
    }
}

/// Byte offset of a 1-based line/column position, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(|l| l.len())
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"types\": []\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        // Clamped to the document length
        assert_eq!(offset_of(src, 9, 9), Some(src.len()));
    }

    #[test]
    fn test_find_span() {
        let ctx = SourceContext::new(r#"{ "name": "app" }"#, "contexts.json");
        let err = ctx.validation_error_for("app", "duplicate type name 'app'");
        match *err {
            Error::Validation { span, .. } => {
                let span = span.expect("span");
                assert_eq!(span.offset(), 10);
                assert_eq!(span.len(), 5);
            }
            _ => panic!("expected validation error"),
        }
    }
}
