//! Id generation for templates and fields.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// What an id is being generated for. Determines the id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Template,
    Field,
}

impl IdKind {
    fn prefix(self) -> &'static str {
        match self {
            IdKind::Template => "template",
            IdKind::Field => "field",
        }
    }
}

/// Source of unique ids.
///
/// Passed explicitly to anything that creates templates or fields so tests
/// can substitute [`SequentialIds`] and assert exact ids.
pub trait IdGenerator {
    /// Produce a new id, unique among all ids this generator has returned.
    fn next_id(&self, kind: IdKind) -> String;
}

/// Random ids of the form `template_<uuid>` / `field_<uuid>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self, kind: IdKind) -> String {
        format!("{}_{}", kind.prefix(), Uuid::new_v4().simple())
    }
}

/// Deterministic ids: `template_1`, `field_1`, `field_2`, ...
///
/// Each kind has its own counter.
#[derive(Debug, Default)]
pub struct SequentialIds {
    templates: AtomicU64,
    fields: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, kind: IdKind) -> String {
        let counter = match kind {
            IdKind::Template => &self.templates,
            IdKind::Field => &self.fields,
        };
        let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{}", kind.prefix(), n)
    }
}
