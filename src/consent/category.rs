use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a cookie category (e.g. "analytics").
///
/// Membership checks and persistence go through this id, never through
/// the descriptor's display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One class of data collection the visitor can consent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieCategory {
    pub id: CategoryId,
    /// Display text for the category row.
    pub label: String,
    pub description: Option<String>,
}

impl CookieCategory {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
