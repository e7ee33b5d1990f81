//! Generator identity stamped into generated file headers.

/// Name, version, and run timestamp of the generator.
///
/// Immutable for the duration of one generation run; every generated file's
/// header carries the same stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
    pub time: String,
}

impl GeneratorInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            time: time.into(),
        }
    }

    /// The `generated by` stamp line.
    pub fn stamp(&self) -> String {
        format!(
            "// Generated by {}@{} on {}.",
            self.name, self.version, self.time
        )
    }
}
