//! Template and field records.

use super::extract::extract_fields_with;
use super::ids::{IdGenerator, IdKind};
use crate::error::{MsgtplError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A fillable slot derived from one distinct placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Unique, stable identity.
    pub id: String,

    /// Trimmed placeholder text; the substitution key.
    pub name: String,

    /// Hint shown when asking for a value (e.g. "Enter name").
    pub placeholder: String,

    /// Current value. Empty means "not filled in".
    #[serde(default)]
    pub value: String,

    /// Keys this crate does not model, carried through rewrites unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateField {
    /// Return a copy of this field carrying `value`.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }
}

/// A named, persisted template: raw content plus the fields extracted from it.
///
/// `fields` is captured once at creation and is not re-derived from `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub fields: Vec<TemplateField>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageTemplate {
    /// Author a new template.
    ///
    /// Name and content are trimmed; either being empty afterwards is a user
    /// error. Fields are extracted from the trimmed content.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use msgtpl::template::{MessageTemplate, SequentialIds};
    ///
    /// let ids = SequentialIds::new();
    /// let template =
    ///     MessageTemplate::create("Pickup", "Hi {name}, order {order} is ready.", &ids, "Enter", Utc::now())
    ///         .unwrap();
    ///
    /// assert_eq!(template.id, "template_1");
    /// assert_eq!(template.field_names(), vec!["name", "order"]);
    /// ```
    pub fn create<G: IdGenerator + ?Sized>(
        name: &str,
        content: &str,
        ids: &G,
        placeholder_prefix: &str,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MsgtplError::UserError(
                "template name must not be empty".to_string(),
            ));
        }

        let content = content.trim();
        if content.is_empty() {
            return Err(MsgtplError::UserError(
                "template content must not be empty".to_string(),
            ));
        }

        let fields = extract_fields_with(content, ids, placeholder_prefix);

        Ok(Self {
            id: ids.next_id(IdKind::Template),
            name: name.to_string(),
            content: content.to_string(),
            fields,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        })
    }

    /// The stored fields with every value cleared.
    ///
    /// This is the starting state for filling in a template, and what a
    /// "clear all" action resets to.
    pub fn blank_fields(&self) -> Vec<TemplateField> {
        self.fields.iter().map(|f| f.with_value("")).collect()
    }

    /// Names of the stored fields, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
