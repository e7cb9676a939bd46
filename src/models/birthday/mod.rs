//! Birthday record model.
//!
//! A birthday tracks one person: their name, date of birth, and how they
//! relate to the user (Friend, Family, Work). Relations drive card styling
//! and gift-suggestion selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How the tracked person relates to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    Friend,
    Family,
    Work,
}

impl Relation {
    /// All relations, in the order the UI presents them.
    pub const ALL: [Relation; 3] = [Relation::Friend, Relation::Family, Relation::Work];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Friend => "Friend",
            Relation::Family => "Family",
            Relation::Work => "Work",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked birthday.
///
/// `date_of_birth` is a plain calendar date. Keeping it a `NaiveDate` (no
/// time, no timezone) avoids the off-by-one shifts that come from parsing
/// "YYYY-MM-DD" as a timestamped instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    /// Unique identifier, stable across sessions.
    pub id: String,
    /// Display name (non-empty).
    pub name: String,
    /// Serialized as "YYYY-MM-DD".
    pub date_of_birth: NaiveDate,
    pub relation: Relation,
}

impl Birthday {
    /// Create a new birthday with a freshly generated id.
    ///
    /// The name is trimmed and validated; the date is already guaranteed
    /// valid by its type, so there is no date failure mode here.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        relation: Relation,
    ) -> Result<Self, BirthdayValidationError> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(BirthdayValidationError::EmptyName);
        }
        if name.len() > 100 {
            return Err(BirthdayValidationError::NameTooLong);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            date_of_birth,
            relation,
        })
    }
}

/// Validation errors for Birthday.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthdayValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name must be 100 characters or less")]
    NameTooLong,
}

/// Sample birthdays shown on first launch (or after a corrupt data file).
pub fn seed_birthdays() -> Vec<Birthday> {
    vec![
        Birthday {
            id: "1".to_string(),
            name: "Emma Wilson".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 10, 24).unwrap(),
            relation: Relation::Friend,
        },
        Birthday {
            id: "2".to_string(),
            name: "Mom".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1965, 5, 12).unwrap(),
            relation: Relation::Family,
        },
        Birthday {
            id: "3".to_string(),
            name: "James from Acct".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 3, 15).unwrap(),
            relation: Relation::Work,
        },
    ]
}
