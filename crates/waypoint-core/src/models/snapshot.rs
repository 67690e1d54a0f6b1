//! Persisted state layout.

use serde::{Deserialize, Serialize};

use super::{Plan, Theme};

/// Everything that survives a restart: the plans and the theme.
///
/// Serializes as `{ "flows": [...], "theme": "peach" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Snapshot {
    /// All plans, newest first
    #[serde(default)]
    pub flows: Vec<Plan>,

    /// Selected colour theme
    #[serde(default)]
    pub theme: Theme,
}

impl Snapshot {
    /// Decodes a snapshot from its JSON form.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the snapshot as compact JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
