// src/xlsx.rs
//
// One worksheet per category:
//
//   | Title | Link | Year |   bold, medium border
//   | ...   | ...  | ...  |   thin border, one row per film
//
// Styling is described by `CellStyle` and only turned into a
// rust_xlsxwriter `Format` at write time, so the layout can be checked
// without opening the file.

use std::{error::Error, path::Path};

use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet};

use crate::config::consts::SHEET_HEADERS;
use crate::data::{Film, Filmography, FilmographyCategory};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderWeight {
    Thin,
    Medium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    /// Applied to all four sides.
    pub border: BorderWeight,
}

pub const HEADER_STYLE: CellStyle = CellStyle { bold: true, border: BorderWeight::Medium };
pub const DATA_STYLE: CellStyle = CellStyle { bold: false, border: BorderWeight::Thin };

impl CellStyle {
    pub fn to_format(self) -> Format {
        let border = match self.border {
            BorderWeight::Thin => FormatBorder::Thin,
            BorderWeight::Medium => FormatBorder::Medium,
        };
        let format = Format::new().set_border(border);
        if self.bold { format.set_bold() } else { format }
    }
}

/// One worksheet row: three cell values and their shared style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetRow<'a> {
    pub cells: [&'a str; 3],
    pub style: CellStyle,
}

/// Header row followed by one row per film, in film order.
pub fn sheet_rows(category: &FilmographyCategory) -> Vec<SheetRow<'_>> {
    let mut rows = Vec::with_capacity(category.count() + 1);
    rows.push(SheetRow { cells: SHEET_HEADERS, style: HEADER_STYLE });
    rows.extend(category.films().iter().map(film_row));
    rows
}

fn film_row(film: &Film) -> SheetRow<'_> {
    SheetRow {
        cells: [film.title.as_str(), film.link.as_str(), film.year.as_str()],
        style: DATA_STYLE,
    }
}

/// Build the workbook for `filmography` and save it to `path`.
///
/// Sheet names are the category keys as-is; a key Excel refuses (too long,
/// `[]:*?/\`) surfaces as the writer's error.
pub fn write_workbook(path: &Path, filmography: &Filmography) -> Result<(), Box<dyn Error>> {
    if filmography.is_empty() {
        return Err("no filmography categories to export; a workbook needs at least one sheet".into());
    }

    let header_format = HEADER_STYLE.to_format();
    let data_format = DATA_STYLE.to_format();

    let mut workbook = Workbook::new();
    for (key, category) in filmography {
        let sheet = workbook.add_worksheet();
        sheet.set_name(key.as_str())?;
        fill_sheet(sheet, category, &header_format, &data_format)?;
    }
    workbook.save(path)?;
    Ok(())
}

fn fill_sheet(
    sheet: &mut Worksheet,
    category: &FilmographyCategory,
    header_format: &Format,
    data_format: &Format,
) -> Result<(), Box<dyn Error>> {
    for (r, row) in sheet_rows(category).iter().enumerate() {
        let format = if row.style == HEADER_STYLE { header_format } else { data_format };
        let r = u32::try_from(r).map_err(|_| "too many rows for one worksheet")?;
        for (c, value) in row.cells.iter().enumerate() {
            sheet.write_string_with_format(r, c as u16, *value, format)?;
        }
    }
    Ok(())
}
