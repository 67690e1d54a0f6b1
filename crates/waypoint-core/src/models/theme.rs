//! Persisted colour theme preference.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Colour theme stored alongside the plans in a snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Peach,
    Onyx,
    Cyber,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "peach" => Ok(Theme::Peach),
            "onyx" => Ok(Theme::Onyx),
            "cyber" => Ok(Theme::Cyber),
            _ => Err(format!("Invalid theme: {s} (expected peach, onyx or cyber)")),
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Peach => "peach",
            Theme::Onyx => "onyx",
            Theme::Cyber => "cyber",
        }
    }

    /// Fill colour used for graph nodes that are not yet completed.
    pub fn primary_color(&self) -> &'static str {
        match self {
            Theme::Peach => "#fb923c",
            Theme::Onyx => "#a1a1aa",
            Theme::Cyber => "#22d3ee",
        }
    }
}
