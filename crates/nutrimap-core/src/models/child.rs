use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Biological sex code used to select the WHO reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Normalize a free-text gender value ("Male", "F", "female", ...) to a
    /// sex code. Any trimmed, case-insensitive value starting with `M` or `F`
    /// maps; everything else is `None`.
    pub fn from_gender(gender: &str) -> Option<Sex> {
        let g = gender.trim();
        let first = g.chars().next()?;
        match first.to_ascii_uppercase() {
            'M' => Some(Sex::Male),
            'F' => Some(Sex::Female),
            _ => None,
        }
    }

    /// Single-letter code as stored in exports ("M" / "F").
    pub fn as_code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::from_gender(s).ok_or_else(|| CoreError::InvalidSex(s.to_string()))
    }
}

/// A registered child, as the store hands it to the engine.
///
/// `gender` and `date_of_birth` keep their stored string form: the source
/// data sometimes carries free-text gender and occasionally malformed dates,
/// and the engine normalizes both itself rather than rejecting the record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Child {
    pub id: i64,
    pub full_name: String,
    pub gender: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date_of_birth: String,
}

impl Child {
    /// Normalized sex code, if the stored gender is recognizable.
    pub fn sex(&self) -> Option<Sex> {
        Sex::from_gender(&self.gender)
    }
}
