// src/process/mod.rs

pub mod rules;
pub mod unify;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;
use tracing::{debug, info};

/// One sheet of a salary workbook after row rules and column augmentation.
#[derive(Debug)]
pub struct SheetTable {
    pub sheet_name: String,
    /// Cleaned rows: original cells as strings, with the injected `id`
    /// cell in position 2 where applicable, then `year` and `month_name`.
    pub rows: Vec<Vec<String>>,
}

/// Read every sheet of `dir/file_name` and apply the cleanup rules:
/// header-skip by sheet name, footer-drop by exception set and sheet
/// position, `id` injection, and the constant `year`/`month_name` columns
/// parsed from the filename.
///
/// Returns one table per sheet, in workbook order. Any read or parse
/// failure propagates; the consolidation phase has no per-file isolation.
pub fn normalize_workbook(dir: impl AsRef<Path>, file_name: &str) -> Result<Vec<SheetTable>> {
    info!("reading {}", file_name);
    let (year, month_name) = rules::year_and_month(file_name)?;

    let path = dir.as_ref().join(file_name);
    let mut workbook: Xlsx<_> =
        open_workbook(&path).with_context(|| format!("opening workbook {:?}", path))?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut tables = Vec::with_capacity(sheet_names.len());
    for (idx, sheet_name) in sheet_names.iter().enumerate() {
        debug!(sheet = %sheet_name, "reading sheet");
        let range = workbook
            .worksheet_range(sheet_name)
            .with_context(|| format!("reading sheet {:?} of {}", sheet_name, file_name))?;
        let raw: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        let is_last = idx + 1 == sheet_names.len();
        let rows = normalize_sheet(file_name, sheet_name, is_last, raw, &year, &month_name);
        tables.push(SheetTable {
            sheet_name: sheet_name.clone(),
            rows,
        });
    }

    Ok(tables)
}

/// Apply the row rules to one sheet's raw rows. Skip and drop counts
/// saturate, so a sheet shorter than its header or footer just empties.
fn normalize_sheet(
    file_name: &str,
    sheet_name: &str,
    is_last_sheet: bool,
    rows: Vec<Vec<String>>,
    year: &str,
    month_name: &str,
) -> Vec<Vec<String>> {
    let skip = rules::header_rows(sheet_name);
    let drop = rules::footer_rows(file_name, sheet_name, is_last_sheet);
    let end = rows.len().saturating_sub(drop);
    let inject_id = !rules::has_native_id(file_name);

    rows.into_iter()
        .take(end)
        .skip(skip)
        .map(|mut row| {
            if inject_id {
                let at = row.len().min(1);
                row.insert(at, String::new());
            }
            row.push(year.to_string());
            row.push(month_name.to_string());
            row
        })
        .collect()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}
