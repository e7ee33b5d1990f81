use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A generated source file: a name and its full text content.
///
/// The content is final once the file is constructed; writing it out is the
/// only remaining operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    content: String,
}

impl SourceFile {
    /// Create a new file with the given name and content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file into the destination directory, overwriting any
    /// existing file. Parent directories are created as needed.
    pub fn write_to(&self, dest: &Path) -> Result<PathBuf> {
        let path = dest.join(&self.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();

        let file = SourceFile::new("appContext.tsx", "content");
        let path = file.write_to(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("appContext.tsx"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("appContext.tsx");

        fs::write(&path, "original").unwrap();
        SourceFile::new("appContext.tsx", "updated")
            .write_to(temp.path())
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("a").join("b");

        let file = SourceFile::new("appContext.tsx", "nested");
        let path = file.write_to(&dest).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }
}
