//! Code builder utility for generating properly indented lines.

use super::Indent;
use crate::DocBlock;

/// Accumulates lines of code with indentation tracking.
///
/// Lines are collected individually so callers can assemble them into
/// blank-line separated blocks; see `CodeFile`.
///
/// # Example
///
/// ```
/// use ctxgen_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::tsx();
/// builder
///     .push_line("export const App = () => {")
///     .push_indent()
///     .push_line("return null;")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(
///     builder.into_lines(),
///     vec!["export const App = () => {", "    return null;", "};"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            lines: Vec::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (TSX default).
    pub fn tsx() -> Self {
        Self::new(Indent::TSX)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.lines.push(format!("{}{}", self.indent.prefix(self.level), s));
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Add pre-formatted lines verbatim, ignoring the current indentation.
    pub fn push_raw_lines(&mut self, lines: impl IntoIterator<Item = String>) -> &mut Self {
        self.lines.extend(lines);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Jump to an absolute indentation level.
    ///
    /// The emitted TSX has fixed-level fragments rather than strictly nested
    /// blocks, so builders address levels directly.
    pub fn at(&mut self, level: usize) -> &mut Self {
        self.level = level;
        self
    }

    /// Add a documentation comment block at the current indentation.
    pub fn push_doc(&mut self, doc: &DocBlock) -> &mut Self {
        let prefix = self.indent.prefix(self.level);
        self.lines.extend(doc.lines(&prefix));
        self
    }

    /// Get the current indentation level.
    pub fn current_level(&self) -> usize {
        self.level
    }

    /// Consume the builder and return the collected lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::tsx()
    }
}
