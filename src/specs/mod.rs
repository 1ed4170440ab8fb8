// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec covers a single page and
//! encodes *where the ground truth lives in the HTML* and *how to read it
//! robustly*.
//!
//! ## What lives here
//! - **Pure HTML interpretation** of an already-fetched page.
//! - **Tolerant extraction**: tag-name walking via `core::html`, header
//!   detection by keyword rather than fixed positions, whitespace-insensitive
//!   text.
//! - **Light shaping** of results into output records, joined against the
//!   roster.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **writing** (`file`).
//! - **Fallback policy**: a spec reports “no data”; the runner decides what
//!   to emit instead.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → core::net::http_get
//!                   ↘ runner::collect → specs::standings::parse_page
//!                                     ↘ roster::build_fallback (empty table)
//!                   → file::write_json
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixtures (`tests/fixtures`).
pub mod standings;
