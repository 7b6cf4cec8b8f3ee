// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::config::options::ExportOptions;
use crate::data::ActorRecord;
use crate::{json, xlsx};

/// Write every enabled export for `record` into `export.out_dir`.
/// JSON first, then the workbook. Returns the paths written, in that order.
pub fn export_record(
    export: &ExportOptions,
    record: &ActorRecord,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(&export.out_dir)?;
    let mut written = Vec::with_capacity(2);

    if export.json {
        let path = export.json_path(record.full_name());
        json::write_filmography(&path, record.filmography())?;
        info!("Export: JSON → {}", path.display());
        written.push(path);
    }

    if export.xlsx {
        let path = export.xlsx_path(record.full_name());
        xlsx::write_workbook(&path, record.filmography())?;
        info!("Export: XLSX → {}", path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
