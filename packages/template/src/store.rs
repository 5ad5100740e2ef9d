//! Template persistence.
//!
//! [`TemplateStore`] is the seam to whatever backend keeps templates.
//! Two implementations ship here: [`MemoryStore`] for tests and previews,
//! and [`FsStore`], one pretty-printed JSON file per template.

use crate::record::TemplateRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Invalid template name: {0:?}")]
    InvalidName(String),
}

pub trait TemplateStore {
    /// Insert or overwrite the record under its name
    fn save(&mut self, record: &TemplateRecord) -> Result<(), StoreError>;

    fn load(&self, name: &str) -> Result<TemplateRecord, StoreError>;

    /// Names of all stored templates, sorted
    fn list(&self) -> Result<Vec<String>, StoreError>;

    fn delete(&mut self, name: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, TemplateRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TemplateStore for MemoryStore {
    fn save(&mut self, record: &TemplateRecord) -> Result<(), StoreError> {
        validate_name(record.name())?;
        self.records.insert(record.name().to_string(), record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<TemplateRecord, StoreError> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.records.keys().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

/// Stores each template as `<root>/<name>.json`
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

pub(crate) const TEMPLATE_EXTENSION: &str = "json";

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    /// Read a record from any path, independent of the store root
    /// Reads a record file; the stored name must itself be a valid name
    pub fn read_record(path: &Path) -> Result<TemplateRecord, StoreError> {
        let source = fs::read_to_string(path)?;
        let record: TemplateRecord = serde_json::from_str(&source)?;
        validate_name(record.name())?;
        Ok(record)
    }

    pub fn write_record(path: &Path, record: &TemplateRecord) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(record)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

impl TemplateStore for FsStore {
    fn save(&mut self, record: &TemplateRecord) -> Result<(), StoreError> {
        validate_name(record.name())?;
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(record.name());
        Self::write_record(&path, record)?;

        tracing::debug!(path = %path.display(), "saved template");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<TemplateRecord, StoreError> {
        validate_name(name)?;
        let path = self.path_for(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        Self::read_record(&path)
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().map_or(true, |ext| ext != TEMPLATE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        let path = self.path_for(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

/// Names double as file stems, so no separators or leading dots
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.trim().is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && name.chars().all(|c| !c.is_control());

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}
