// src/roster.rs
//! Driver roster: the static reference list every scraped row is checked against.
//!
//! The roster is ground truth for identity (number, team, car). The page only
//! supplies the volatile numbers. A scraped driver the roster does not know is
//! dropped by the caller, never emitted half-filled.

use std::{collections::HashMap, fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::data::{StandingRecord, Stats};
use crate::error::{Result, ScrapeError};

/// Roster shipped with the binary.
const BUILTIN_ROSTER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/roster.toml"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceEntry {
    pub first: String,
    pub last: String,
    pub number: u32,
    pub team: String,
    pub car: String,
}

impl ReferenceEntry {
    /// "First Last" with the roster's own casing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    pub fn key(&self) -> String {
        name_key(&self.first, &self.last)
    }
}

/// Lookup key: trimmed, lower-cased, space-joined.
pub fn name_key(first: &str, last: &str) -> String {
    format!("{} {}", first.trim().to_lowercase(), last.trim().to_lowercase())
}

#[derive(Deserialize)]
struct RosterFile {
    #[serde(rename = "driver", default)]
    drivers: Vec<ReferenceEntry>,
}

/// Ordered, validated driver list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<ReferenceEntry>,
}

impl Roster {
    /// Validate and wrap. Rejects an empty list and duplicate name keys.
    pub fn new(entries: Vec<ReferenceEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ScrapeError::Roster(s!("no drivers defined")));
        }
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            if let Some(prev) = seen.insert(e.key(), i) {
                return Err(ScrapeError::Roster(format!(
                    "duplicate driver '{}' (entries {} and {})",
                    e.full_name(),
                    prev + 1,
                    i + 1
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: RosterFile =
            toml::from_str(text).map_err(|e| ScrapeError::Roster(e.to_string()))?;
        Self::new(file.drivers)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScrapeError::Roster(format!("{}: {e}", path.display())))?;
        let roster = Self::from_toml(&text)?;
        info!("Loaded {} drivers from {}", roster.len(), path.display());
        Ok(roster)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_ROSTER)
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> RosterIndex<'_> {
        RosterIndex::build(self)
    }
}

/// Case-insensitive "first last" → entry lookup. Exact match only.
pub struct RosterIndex<'a> {
    by_name: HashMap<String, &'a ReferenceEntry>,
}

impl<'a> RosterIndex<'a> {
    pub fn build(roster: &'a Roster) -> Self {
        let by_name = roster.entries.iter().map(|e| (e.key(), e)).collect();
        Self { by_name }
    }

    pub fn resolve(&self, first: &str, last: &str) -> Option<&'a ReferenceEntry> {
        self.by_name.get(&name_key(first, last)).copied()
    }
}

/// Zeroed standings straight from the roster, in roster order.
/// Used before the first race, when the live table has nothing in it.
pub fn build_fallback(roster: &Roster) -> Vec<StandingRecord> {
    debug!("Building zeroed standings for {} drivers", roster.len());
    roster
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| StandingRecord::new(i as u32 + 1, e, e.full_name(), Stats::default()))
        .collect()
}
