//! Template persistence.
//!
//! The [`TemplateRepository`] trait is the only way the rest of the crate
//! touches stored templates. Two implementations are provided:
//!
//! - [`JsonFileRepository`]: the whole collection as one JSON array in one file
//! - [`InMemoryRepository`]: a mutex-guarded vector, for tests
//!
//! # Concurrency
//!
//! Mutations are load-modify-save over the whole collection and are not
//! atomic across processes. Callers serialize writes.

mod json;
mod memory;


pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;

use crate::error::Result;
use crate::template::MessageTemplate;
use tracing::warn;

/// Storage for the template collection.
pub trait TemplateRepository {
    /// Read every stored template, in stored order.
    fn try_load(&self) -> Result<Vec<MessageTemplate>>;

    /// Replace the stored collection with `templates`.
    fn save(&self, templates: &[MessageTemplate]) -> Result<()>;

    /// Read every stored template, degrading to an empty list on failure.
    fn load(&self) -> Vec<MessageTemplate> {
        match self.try_load() {
            Ok(templates) => templates,
            Err(e) => {
                warn!(error = %e, "failed to load templates, continuing with none");
                Vec::new()
            }
        }
    }

    /// Look up one template by id.
    fn find(&self, id: &str) -> Result<Option<MessageTemplate>> {
        Ok(self.try_load()?.into_iter().find(|t| t.id == id))
    }

    /// Append a template and save.
    ///
    /// Unlike [`load`](Self::load) this refuses to proceed when the existing
    /// collection cannot be read, so an unreadable store is never overwritten.
    fn insert(&self, template: MessageTemplate) -> Result<()> {
        let mut templates = self.try_load()?;
        templates.push(template);
        self.save(&templates)
    }

    /// Remove the template with `id` and save.
    ///
    /// Returns whether a template was removed. An unknown id leaves the
    /// store untouched.
    fn delete(&self, id: &str) -> Result<bool> {
        let templates = self.try_load()?;
        let before = templates.len();
        let remaining: Vec<MessageTemplate> =
            templates.into_iter().filter(|t| t.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }
        self.save(&remaining)?;
        Ok(true)
    }
}
