//! Section entity model

use serde::{Deserialize, Serialize};

/// A grouping container for questions
///
/// Sections pass through the combination unchanged; they exist so that
/// downstream consumers can present results grouped the way the
/// questionnaire was authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section identifier, unique within a project
    pub id: String,
    /// Display name, if one was authored
    #[serde(default)]
    pub name: Option<String>,
}

impl Section {
    /// Create a section without a display name
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
