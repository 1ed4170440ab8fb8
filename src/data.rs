// src/data.rs
//! Output records. Field names serialize exactly as the consumer expects them.

use serde::{Deserialize, Serialize};

use crate::roster::ReferenceEntry;

/// Placeholder for every bookmaker price; the page carries no odds.
pub const ODDS_SENTINEL: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odds {
    pub bet365: String,
    pub sportsbet: String,
    pub dabble: String,
}

impl Default for Odds {
    fn default() -> Self {
        Self {
            bet365: s!(ODDS_SENTINEL),
            sportsbet: s!(ODDS_SENTINEL),
            dabble: s!(ODDS_SENTINEL),
        }
    }
}

/// Volatile per-driver numbers read from the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub points: u32,
    pub wins: u32,
    pub poles: u32,
}

/// One driver's line in the championship output.
///
/// `number`, `team` and `car` always come from a single roster entry;
/// `name` is whatever spelling the caller hands in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub place: u32,
    pub number: u32,
    pub team: String,
    pub name: String,
    pub car: String,
    pub poles: u32,
    pub wins: u32,
    pub points: u32,
    pub odds: Odds,
}

impl StandingRecord {
    pub fn new(place: u32, entry: &ReferenceEntry, name: String, stats: Stats) -> Self {
        Self {
            place,
            number: entry.number,
            team: entry.team.clone(),
            name,
            car: entry.car.clone(),
            poles: stats.poles,
            wins: stats.wins,
            points: stats.points,
            odds: Odds::default(),
        }
    }
}
