//! Whole-file assembly from blank-line separated blocks.

/// Line terminator for rendered files.
///
/// Generated source files use CRLF terminators throughout, regardless of the
/// platform the generator runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    Lf,
    #[default]
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// A structured representation of one generated file.
///
/// The file is an ordered sequence of blocks, each block an ordered sequence
/// of lines. Rendering separates consecutive blocks with exactly one blank
/// line and ends the file with a final terminator. Empty blocks are skipped,
/// so conditional builders may contribute nothing without leaving stray
/// blank lines behind.
///
/// # Example
///
/// ```
/// use ctxgen_codegen::{CodeFile, LineEnding};
///
/// let text = CodeFile::new()
///     .block(vec!["import React from 'react';".into()])
///     .block(vec!["export const App = () => null;".into()])
///     .render(LineEnding::Lf);
///
/// assert_eq!(text, "import React from 'react';\n\nexport const App = () => null;\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    blocks: Vec<Vec<String>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block of lines. Empty blocks are dropped.
    pub fn block(mut self, lines: Vec<String>) -> Self {
        if !lines.is_empty() {
            self.blocks.push(lines);
        }
        self
    }

    /// Append blocks from an iterator.
    pub fn blocks(mut self, blocks: impl IntoIterator<Item = Vec<String>>) -> Self {
        for lines in blocks {
            self = self.block(lines);
        }
        self
    }

    /// Check if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render the file with the given line terminator.
    pub fn render(&self, ending: LineEnding) -> String {
        let terminator = ending.as_str();
        let mut text = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                text.push_str(terminator);
            }
            for line in block {
                text.push_str(line);
                text.push_str(terminator);
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(LineEnding::CrLf), "");
        assert!(CodeFile::new().is_empty());
    }

    #[test]
    fn test_single_block_crlf() {
        let text = CodeFile::new()
            .block(lines(&["const a = 1;", "const b = 2;"]))
            .render(LineEnding::CrLf);
        assert_eq!(text, "const a = 1;\r\nconst b = 2;\r\n");
    }

    #[test]
    fn test_blocks_separated_by_one_blank_line() {
        let text = CodeFile::new()
            .block(lines(&["const a = 1;"]))
            .block(lines(&["const b = 2;"]))
            .render(LineEnding::CrLf);
        assert_eq!(text, "const a = 1;\r\n\r\nconst b = 2;\r\n");
    }

    #[test]
    fn test_empty_blocks_are_skipped() {
        let text = CodeFile::new()
            .block(lines(&["const a = 1;"]))
            .block(Vec::new())
            .block(lines(&["const b = 2;"]))
            .render(LineEnding::Lf);
        assert_eq!(text, "const a = 1;\n\nconst b = 2;\n");
    }
}
