//! Documentation comment blocks for generated code.

/// A `@param` entry of a documentation block.
#[derive(Debug, Clone)]
pub struct DocParam {
    pub ty: String,
    pub name: String,
    pub description: String,
}

/// A `@returns` entry of a documentation block.
#[derive(Debug, Clone)]
pub struct DocReturn {
    pub ty: String,
    pub description: String,
}

/// A structured documentation comment: description line(s), optional
/// parameters, optional return value.
///
/// # Example
///
/// ```
/// use ctxgen_codegen::DocBlock;
///
/// let lines = DocBlock::new("Builds the App Context.")
///     .returns("IAppContext", "The App Context Interface.")
///     .lines("");
///
/// assert_eq!(lines[0], "/**");
/// assert_eq!(lines[1], " * Builds the App Context.");
/// assert_eq!(lines[3], " * @returns {IAppContext} The App Context Interface.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocBlock {
    description: Vec<String>,
    params: Vec<DocParam>,
    returns: Option<DocReturn>,
}

impl DocBlock {
    /// Create a documentation block with a single description line.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: vec![description.into()],
            params: Vec::new(),
            returns: None,
        }
    }

    /// Create a documentation block with multiple description lines.
    pub fn with_lines(description: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            description: description.into_iter().map(Into::into).collect(),
            params: Vec::new(),
            returns: None,
        }
    }

    /// Add a `@param` entry.
    pub fn param(
        mut self,
        ty: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.params.push(DocParam {
            ty: ty.into(),
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Set the `@returns` entry.
    pub fn returns(mut self, ty: impl Into<String>, description: impl Into<String>) -> Self {
        self.returns = Some(DocReturn {
            ty: ty.into(),
            description: description.into(),
        });
        self
    }

    /// Render the block, prefixing every line with `indentation`.
    pub fn lines(&self, indentation: &str) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push(format!("{}/**", indentation));

        for entry in &self.description {
            lines.push(format!("{} * {}", indentation, entry));
        }

        if !self.params.is_empty() {
            lines.push(format!("{} *", indentation));
            for param in &self.params {
                lines.push(format!(
                    "{} * @param {{{}}} {} {}",
                    indentation, param.ty, param.name, param.description
                ));
            }
        }

        if let Some(ret) = &self.returns {
            lines.push(format!("{} *", indentation));
            lines.push(format!(
                "{} * @returns {{{}}} {}",
                indentation, ret.ty, ret.description
            ));
        }

        lines.push(format!("{} */", indentation));
        lines
    }
}
