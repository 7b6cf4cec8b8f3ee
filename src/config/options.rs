// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub reference: ReferenceOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/* ---------------- Reference data ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceOptions {
    /// Directory holding `data.tsv` and `name.basics.tsv.gz`.
    pub data_dir: PathBuf,
    pub dataset_url: String,
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            data_dir: program_dir(),
            dataset_url: DATASET_URL.to_string(),
        }
    }
}

impl ReferenceOptions {
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE)
    }

    pub fn archive_file(&self) -> PathBuf {
        self.data_dir.join(ARCHIVE_FILE)
    }
}

/// Directory of the running executable, or `.` when it cannot be determined.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Skip the interactive prompt. Still validated against the reference set.
    pub actor_id: Option<String>,
    pub base_url: String,
    pub attempts: u32,
    /// `None` = wait as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            actor_id: None,
            base_url: SITE_BASE_URL.to_string(),
            attempts: DEFAULT_ATTEMPTS,
            timeout: None,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub json: bool,
    pub xlsx: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            json: true,
            xlsx: true,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<name with spaces as underscores>.json`
    pub fn json_path(&self, full_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", json_file_stem(full_name)))
    }

    /// `<out_dir>/<name>.xlsx`
    ///
    /// Unlike the JSON file, spaces are kept. Both names have always been
    /// derived this way and existing users may rely on either one.
    pub fn xlsx_path(&self, full_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.xlsx", xlsx_file_stem(full_name)))
    }
}

pub fn json_file_stem(full_name: &str) -> String {
    full_name.replace(' ', "_")
}

pub fn xlsx_file_stem(full_name: &str) -> String {
    full_name.to_string()
}
