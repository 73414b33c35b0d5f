//! Source domain entity
//!
//! A channel (bot, landing page, ...) through which leads reach out.

use serde::{Deserialize, Serialize};

/// Unique identifier for a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(pub i32);

impl From<i32> for SourceId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    /// Optional short machine code, unique when present
    pub code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSource {
    pub name: String,
    pub code: Option<String>,
}

impl NewSource {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Source name must not be empty".to_string());
        }
        if matches!(&self.code, Some(code) if code.trim().is_empty()) {
            return Err("Source code must not be blank".to_string());
        }
        Ok(())
    }
}
