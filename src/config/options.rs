// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Datelike;

use super::consts::*;
use crate::error::Result;
use crate::roster::Roster;

/// Everything one run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub year: i32,
    /// Fetch this instead of the templated season URL.
    pub url: Option<String>,
    pub out: PathBuf,
    /// Roster file; the built-in roster when `None`.
    pub roster: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            year: chrono::Local::now().year(),
            url: None,
            out: PathBuf::from(DEFAULT_OUT_FILE),
            roster: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl RunOptions {
    pub fn url(&self) -> String {
        match &self.url {
            Some(u) => u.clone(),
            None => standings_url(self.year),
        }
    }

    pub fn load_roster(&self) -> Result<Roster> {
        match self.roster.as_deref() {
            Some(path) => Roster::load(path),
            None => Roster::builtin(),
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.out
    }
}

pub fn standings_url(year: i32) -> String {
    STANDINGS_URL_TMPL.replace("{year}", &year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_templated_by_year() {
        let opts = RunOptions { year: 2026, ..RunOptions::default() };
        assert_eq!(opts.url(), "https://www.formula1.com/en/results/2026/drivers");
    }

    #[test]
    fn url_override_wins() {
        let opts = RunOptions { url: Some(s!("http://127.0.0.1:9/x")), ..RunOptions::default() };
        assert_eq!(opts.url(), "http://127.0.0.1:9/x");
    }

    #[test]
    fn defaults() {
        let opts = RunOptions::default();
        assert_eq!(opts.out_path(), Path::new("f1_championship_standing.json"));
        assert_eq!(opts.timeout, Duration::from_secs(20));
        assert!(opts.roster.is_none());
        assert!(opts.year >= 2024);
    }
}
