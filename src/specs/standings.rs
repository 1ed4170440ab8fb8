// src/specs/standings.rs
//! Scraping *spec* for the drivers' championship standings page.
//!
//! Purpose:
//! - Find the page's single `<table>`, read its header labels and body rows.
//! - Work out which column holds what from the header text (`detect_columns`),
//!   so reordered, renamed, added or removed columns do not need a code change.
//! - Turn body rows into `StandingRecord`s, merging each with its roster entry.
//!
//! Non-Responsibilities:
//! - No fetching, no fallback decision, no writing. The runner owns those.
//!
//! The one page-layout-specific step is `extract_name`; a different site
//! markup only needs that function replaced.

use std::collections::BTreeMap;
use std::fmt;

use log::{info, warn};
use scraper::ElementRef;

use crate::core::html::{self, children_named, find_all, find_first, leaf_fragments, text_of};
use crate::core::sanitize::{clean_int, is_nation_code};
use crate::data::{StandingRecord, Stats};
use crate::error::{Result, ScrapeError};
use crate::roster::RosterIndex;

/// Semantic column kinds the standings table may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Position,
    Name,
    Nationality,
    Group,
    Points,
    Wins,
    Poles,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Position => "position",
            Field::Name => "name",
            Field::Nationality => "nationality",
            Field::Group => "team",
            Field::Points => "points",
            Field::Wins => "wins",
            Field::Poles => "poles",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header keyword table, checked top to bottom; first hit wins per header.
/// Substring match on the lower-cased label, so "Pts" and "Points" both land
/// on `Points`.
const KEYWORDS: &[(&[&str], Field)] = &[
    (&["pos"], Field::Position),
    (&["driver"], Field::Name),
    (&["nation"], Field::Nationality),
    (&["team", "constructor"], Field::Group),
    (&["pts", "point"], Field::Points),
    (&["win"], Field::Wins),
    (&["pole"], Field::Poles),
];

/// Columns a page must have before any row is read.
pub const REQUIRED: [Field; 3] = [Field::Position, Field::Name, Field::Points];

/// Tags that may hold one piece of a driver's name inside the name cell.
const NAME_PART_TAGS: &[&str] = &["span", "p", "div"];

/// Field → zero-based column index for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    cols: BTreeMap<Field, usize>,
}

impl ColumnMap {
    pub fn get(&self, field: Field) -> Option<usize> {
        self.cols.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.cols.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Required fields that no header mapped to, in `REQUIRED` order.
    pub fn missing_required(&self) -> Vec<Field> {
        REQUIRED.iter().copied().filter(|f| !self.contains(*f)).collect()
    }
}

impl fmt::Display for ColumnMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.cols.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Map header labels to fields. Unrecognised labels are ignored; when two
/// labels resolve to the same field the later column wins.
pub fn detect_columns<S: AsRef<str>>(headers: &[S]) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (i, label) in headers.iter().enumerate() {
        let lc = label.as_ref().to_lowercase();
        let hit = KEYWORDS
            .iter()
            .find(|(words, _)| words.iter().any(|w| lc.contains(w)))
            .map(|(_, field)| *field);
        if let Some(field) = hit {
            map.cols.insert(field, i);
        }
    }
    map
}

/// One table cell: its flat text plus the innermost text pieces it is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub fragments: Vec<String>,
}

impl Cell {
    /// Plain-text cell with no inner structure.
    pub fn flat(text: &str) -> Self {
        Self { text: s!(text), fragments: Vec::new() }
    }

    fn from_element(el: ElementRef<'_>) -> Self {
        Self {
            text: text_of(el),
            fragments: leaf_fragments(el, NAME_PART_TAGS),
        }
    }
}

pub type Row = Vec<Cell>;

/// Header labels and body rows of the standings table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// What the body produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    Records(Vec<StandingRecord>),
    /// The body held a single spanning "no results" cell.
    NoData,
}

impl Interpretation {
    /// True for the placeholder and for a body that yielded nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Interpretation::Records(r) => r.is_empty(),
            Interpretation::NoData => true,
        }
    }

    pub fn into_records(self) -> Vec<StandingRecord> {
        match self {
            Interpretation::Records(r) => r,
            Interpretation::NoData => Vec::new(),
        }
    }
}

/// Pull header labels and body rows out of the first `<table>` in the page.
///
/// The body section must be written in the markup; the `<tbody>` the parser
/// implies around bare rows does not count.
pub fn locate_table(page: &str) -> Result<StandingsTable> {
    let doc = html::parse_document(page);
    let table = find_first(doc.root_element(), "table")
        .ok_or(ScrapeError::Structure("no <table> on the standings page"))?;

    let (Some(thead), Some(tbody)) = (find_first(table, "thead"), find_first(table, "tbody")) else {
        return Err(ScrapeError::Structure("table is missing <thead> or <tbody>"));
    };
    if !html::has_open_tag(page, "tbody") {
        return Err(ScrapeError::Structure("table is missing <thead> or <tbody>"));
    }

    let header_row = find_first(thead, "tr").ok_or(ScrapeError::Structure("no header row in <thead>"))?;
    let headers = find_all(header_row, "th").map(text_of).collect();

    let rows = find_all(tbody, "tr")
        .map(|tr| children_named(tr, &["td", "th"]).map(Cell::from_element).collect::<Row>())
        .collect();

    Ok(StandingsTable { headers, rows })
}

/// Split the driver cell into (first, last).
///
/// Prefers the cell's inner pieces with nationality codes dropped: first piece
/// is the first name, second is the last name, anything after is ignored.
/// With fewer than two pieces, splits the flat text on whitespace instead.
pub fn extract_name(cell: &Cell) -> (String, String) {
    let parts: Vec<&str> = cell
        .fragments
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty() && !is_nation_code(f))
        .collect();

    if let [first, last, ..] = parts.as_slice() {
        return (s!(*first), s!(*last));
    }

    let mut words = cell.text.split_whitespace();
    let first = words.next().map(String::from).unwrap_or_default();
    let last = words.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Turn body rows into records, in table order.
///
/// A one-cell row is the site's "no results yet" placeholder and ends the
/// page as `NoData`. Rows whose driver is not in the roster are dropped.
pub fn interpret_rows(rows: &[Row], cols: &ColumnMap, roster: &RosterIndex<'_>) -> Interpretation {
    let mut out = Vec::with_capacity(rows.len());

    for (n, cells) in rows.iter().enumerate() {
        if cells.is_empty() {
            warn!("Row {}: no cells, skipped", n + 1);
            continue;
        }
        if cells.len() == 1 {
            info!("Table is empty: no race results yet this season");
            return Interpretation::NoData;
        }

        let cell = |field: Field| cols.get(field).and_then(|i| cells.get(i));
        let number = |field: Field| cell(field).map_or(0, |c| clean_int(&c.text));

        let place = number(Field::Position);
        let (first, last) = cell(Field::Name).map(extract_name).unwrap_or_default();
        let full_name = format!("{first} {last}").trim().to_string();

        let Some(entry) = roster.resolve(&first, &last) else {
            warn!("Driver '{full_name}' not in roster, skipping");
            continue;
        };

        let stats = Stats {
            points: number(Field::Points),
            wins: number(Field::Wins),
            poles: number(Field::Poles),
        };
        out.push(StandingRecord::new(place, entry, full_name, stats));
    }

    Interpretation::Records(out)
}

/// Full page pass: locate the table, map columns, read rows.
///
/// Structural problems (no table, missing sections, required columns absent)
/// are errors; an empty body is not.
pub fn parse_page(page: &str, roster: &RosterIndex<'_>) -> Result<Interpretation> {
    let table = locate_table(page)?;

    let cols = detect_columns(&table.headers);
    info!("Detected columns: {cols}");

    let missing = cols.missing_required();
    if !missing.is_empty() {
        return Err(ScrapeError::MissingColumns(missing));
    }

    let result = interpret_rows(&table.rows, &cols, roster);
    if let Interpretation::Records(recs) = &result {
        info!("Parsed {} of {} rows from the live standings table", recs.len(), table.rows.len());
    }
    Ok(result)
}
