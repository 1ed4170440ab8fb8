// src/config/consts.rs

// Net config
pub const STANDINGS_URL_TMPL: &str = "https://www.formula1.com/en/results/{year}/drivers";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Export
pub const DEFAULT_OUT_FILE: &str = "f1_championship_standing.json";
