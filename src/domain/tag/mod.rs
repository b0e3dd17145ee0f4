//! Document tags attached to uploaded service documents.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TagId, Timestamp, ValidationError};

/// A tag an operator can attach to uploaded documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTag {
    pub id: TagId,
    pub name: TagName,
    /// Display color as `#RRGGBB`, when set.
    pub color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DocumentTag {
    pub fn create(id: TagId, name: TagName, color: Option<String>, now: Timestamp) -> Self {
        Self {
            id,
            name,
            color,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rename(&mut self, name: TagName, now: Timestamp) {
        self.name = name;
        self.updated_at = now;
    }

    pub fn recolor(&mut self, color: Option<String>, now: Timestamp) {
        self.color = color;
        self.updated_at = now;
    }
}

/// Trimmed, non-empty tag name, at most 40 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    pub fn try_new(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("tag_name"));
        }
        if trimmed.len() > 40 {
            return Err(ValidationError::out_of_range(
                "tag_name_length",
                1,
                40,
                trimmed.len() as i64,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks a `#RRGGBB` color string.
pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            "tag_color",
            "expected #RRGGBB",
        ))
    }
}
