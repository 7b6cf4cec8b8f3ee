// src/config/consts.rs

// Net config
pub const SITE_BASE_URL: &str = "https://www.imdb.com/";
pub const DATASET_URL: &str = "https://datasets.imdbws.com/name.basics.tsv.gz";

// Sent with the profile request; the site is less eager to serve a
// bot-check page when these look like a browser's.
pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.5, image/webp,*/*;q=0.5";
pub const ACCEPT_LANGUAGE: &str = "en-US;q=0.5,en;q=0.3";

// Reference data
pub const DATA_FILE: &str = "data.tsv";
pub const ARCHIVE_FILE: &str = "name.basics.tsv.gz";
pub const PART_SUFFIX: &str = "part";

// Prompt
pub const PROMPT: &str = "Enter the actor's id from IMDB database: ";

// Extraction
pub const NO_YEAR: &str = "No Year";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const SHEET_HEADERS: [&str; 3] = ["Title", "Link", "Year"];

// Local store (debug log lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Retry
pub const DEFAULT_ATTEMPTS: u32 = 1;
pub const REQUEST_PAUSE_MS: u64 = 750; // between retries
