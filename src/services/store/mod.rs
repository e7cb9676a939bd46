//! Local persistence for birthday records.
//!
//! The whole collection lives in one JSON file and is rewritten on every
//! mutation. No partial writes, no migration versioning. A missing or
//! unreadable file silently falls back to the seed records; corruption is
//! logged but never surfaced to the user.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::birthday::{seed_birthdays, Birthday};

/// Owns the in-memory birthday collection and its persisted mirror.
///
/// Passed explicitly to the UI rather than living in ambient global state,
/// so tests can point it at a temp file.
pub struct BirthdayStore {
    path: PathBuf,
    birthdays: Vec<Birthday>,
}

impl BirthdayStore {
    /// Load the collection from `path`, seeding with sample data when the
    /// file is absent or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let birthdays = match read_snapshot(&path) {
            Ok(Some(birthdays)) => birthdays,
            Ok(None) => {
                log::info!("No birthday data at {}, starting with seed data", path.display());
                seed_birthdays()
            }
            Err(err) => {
                log::warn!(
                    "Failed to load birthdays from {}, starting with seed data: {err:#}",
                    path.display()
                );
                seed_birthdays()
            }
        };

        Self { path, birthdays }
    }

    /// Persist the full collection, replacing any prior snapshot.
    pub fn save(&self) -> Result<()> {
        write_snapshot(&self.path, &self.birthdays)
    }

    /// Append a birthday and persist. Persistence failures are logged only;
    /// the in-memory state always reflects the mutation.
    pub fn add(&mut self, birthday: Birthday) {
        self.birthdays.push(birthday);
        self.save_best_effort();
    }

    /// Remove the birthday with the given id, preserving the order of the
    /// rest. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.birthdays.len();
        self.birthdays.retain(|b| b.id != id);
        let removed = self.birthdays.len() != before;
        if removed {
            self.save_best_effort();
        }
        removed
    }

    pub fn birthdays(&self) -> &[Birthday] {
        &self.birthdays
    }

    pub fn len(&self) -> usize {
        self.birthdays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birthdays.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_best_effort(&self) {
        if let Err(err) = self.save() {
            log::error!("Failed to save birthdays to {}: {err:#}", self.path.display());
        }
    }
}

fn read_snapshot(path: &Path) -> Result<Option<Vec<Birthday>>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read birthdays from {}", path.display()))?;
    let birthdays = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize birthdays from {}", path.display()))?;
    Ok(Some(birthdays))
}

fn write_snapshot(path: &Path, birthdays: &[Birthday]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(birthdays)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write birthdays to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::birthday::Relation;
    use chrono::NaiveDate;

    fn sample(id: &str, name: &str) -> Birthday {
        Birthday {
            id: id.to_string(),
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            relation: Relation::Friend,
        }
    }

    #[test]
    fn test_missing_file_seeds_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = BirthdayStore::load(dir.path().join("birthdays.json"));
        assert_eq!(store.len(), 3);
        assert_eq!(store.birthdays()[0].name, "Emma Wilson");
    }

    #[test]
    fn test_corrupt_file_seeds_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("birthdays.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = BirthdayStore::load(&path);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("birthdays.json");

        let mut store = BirthdayStore::load(&path);
        store.add(sample("x", "New Person"));

        let reloaded = BirthdayStore::load(&path);
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.birthdays()[3].name, "New Person");
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("birthdays.json");

        let mut store = BirthdayStore::load(&path);
        assert!(store.remove("2"));

        let ids: Vec<_> = store.birthdays().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = BirthdayStore::load(dir.path().join("birthdays.json"));
        assert!(!store.remove("no-such-id"));
        assert_eq!(store.len(), 3);
    }
}
