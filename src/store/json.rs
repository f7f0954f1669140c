//! JSON file storage.

use super::TemplateRepository;
use crate::error::{MsgtplError, Result};
use crate::fs::atomic_write_file;
use crate::template::MessageTemplate;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the template collection as a pretty-printed JSON array.
///
/// A missing file is an empty collection.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateRepository for JsonFileRepository {
    fn try_load(&self) -> Result<Vec<MessageTemplate>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no template store yet");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            MsgtplError::StorageError(format!(
                "failed to read template store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let templates: Vec<MessageTemplate> = serde_json::from_str(&content).map_err(|e| {
            MsgtplError::StorageError(format!(
                "failed to parse template store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), count = templates.len(), "loaded templates");
        Ok(templates)
    }

    fn save(&self, templates: &[MessageTemplate]) -> Result<()> {
        let json = serde_json::to_string_pretty(templates).map_err(|e| {
            MsgtplError::StorageError(format!("failed to serialize templates: {}", e))
        })?;

        atomic_write_file(&self.path, &json)?;
        debug!(path = %self.path.display(), count = templates.len(), "saved templates");
        Ok(())
    }
}
