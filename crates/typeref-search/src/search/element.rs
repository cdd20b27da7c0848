use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(normalized_path(path).display().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn normalized_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Full text of a compilation unit.
///
/// Parser offsets count UTF-16 code units, so the text is kept both as a
/// string and as a UTF-16 buffer that offsets index into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    units: Vec<u16>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let units = text.encode_utf16().collect();
        Self {
            text,
            units,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn utf16(&self) -> &[u16] {
        &self.units
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Text covered by `offset..offset + length`, clamped to the unit. A
    /// surrogate pair cut by the bounds decodes as U+FFFD.
    pub fn slice(
        &self,
        offset: usize,
        length: usize,
    ) -> String {
        let start = offset.min(self.units.len());
        let end = offset.saturating_add(length).min(self.units.len());
        String::from_utf16_lossy(&self.units[start..end])
    }
}

/// A source file whose contents are already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub id: UnitId,
    pub contents: SourceText,
}

impl CompilationUnit {
    pub fn new(
        id: UnitId,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            contents: SourceText::new(text),
        }
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(UnitId::from_path(path), text))
    }
}

/// The declaration (method, field, type, ...) a visited node sits inside.
///
/// Matches are reported against it, and its owning compilation unit is the
/// text offset recovery scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosingElement {
    /// Stable identifier of the element, e.g. `Bar.groovy/Bar#run()`.
    pub handle: String,
    #[serde(default)]
    pub resource: Option<PathBuf>,
    #[serde(skip)]
    pub unit: Option<Arc<CompilationUnit>>,
}

impl EnclosingElement {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            resource: None,
            unit: None,
        }
    }

    pub fn with_resource(
        mut self,
        resource: impl Into<PathBuf>,
    ) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_unit(
        mut self,
        unit: Arc<CompilationUnit>,
    ) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn compilation_unit(&self) -> Option<&CompilationUnit> {
        self.unit.as_deref()
    }
}

impl PartialEq for EnclosingElement {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.handle == other.handle && self.resource == other.resource
    }
}

impl Eq for EnclosingElement {}

impl std::fmt::Display for EnclosingElement {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(&self.handle)
    }
}
