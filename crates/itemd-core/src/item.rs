// ABOUTME: Defines the Item struct, the single record type managed by itemd.
// ABOUTME: Items carry a caller-supplied id, a required name, and an optional description.

use serde::{Deserialize, Serialize};

/// A single record in the store. The id is supplied by the caller and is not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Create an item with no description.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Builder-style setter for the optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
