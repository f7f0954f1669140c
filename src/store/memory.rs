//! In-memory storage.

use super::TemplateRepository;
use crate::error::{MsgtplError, Result};
use crate::template::MessageTemplate;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps the collection in memory. Writes can be made to fail on demand to
/// exercise error paths.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    templates: Mutex<Vec<MessageTemplate>>,
    fail_writes: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Vec<MessageTemplate>) -> Self {
        Self {
            templates: Mutex::new(templates),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `save` fail with a storage error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl TemplateRepository for InMemoryRepository {
    fn try_load(&self) -> Result<Vec<MessageTemplate>> {
        let guard = self.templates.lock().unwrap_or_else(|poison| poison.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, templates: &[MessageTemplate]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MsgtplError::StorageError(
                "in-memory store is read-only".to_string(),
            ));
        }

        let mut guard = self.templates.lock().unwrap_or_else(|poison| poison.into_inner());
        *guard = templates.to_vec();
        Ok(())
    }
}
