// src/runner.rs
use std::path::PathBuf;

use log::{error, info};

use crate::{
    config::options::RunOptions,
    core::net,
    data::StandingRecord,
    error::Result,
    file,
    roster::{self, Roster},
    specs::standings::{self, Interpretation},
};

/// Where the written records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Parsed from the live standings table.
    Live,
    /// Zeroed roster; the live table had no results.
    Fallback,
}

/// Summary of what was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source: Source,
    pub records: usize,
    pub path: PathBuf,
}

/// One full run: fetch, parse, fall back if empty, write.
///
/// Fetch and page-structure failures return `Err` before anything is written.
/// An empty standings table is not a failure.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let roster = opts.load_roster()?;
    let url = opts.url();

    info!("Fetching standings from {url}");
    let page = net::http_get(&url, opts.timeout)
        .inspect_err(|e| error!("Could not fetch standings page: {e}"))?;

    let (source, records) = collect(&page, &roster)
        .inspect_err(|e| error!("Could not read standings table: {e}"))?;

    let path = opts.out_path().to_path_buf();
    file::write_json(&path, &records)?;
    info!("Saved {} entries to {}", records.len(), path.display());

    Ok(RunSummary { source, records: records.len(), path })
}

/// Parse a fetched page into the records to emit.
/// No network and no disk; the live/fallback choice is made here.
pub fn collect(page: &str, roster: &Roster) -> Result<(Source, Vec<StandingRecord>)> {
    let index = roster.index();
    let parsed = standings::parse_page(page, &index)?;

    if parsed.is_empty() {
        if matches!(parsed, Interpretation::Records(_)) {
            info!("Live table yielded no usable rows");
        }
        info!("Building pre-season standings from roster (all zeros)");
        return Ok((Source::Fallback, roster::build_fallback(roster)));
    }
    Ok((Source::Live, parsed.into_records()))
}
