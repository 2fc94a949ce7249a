// src/process/rules.rs
//
// Hand-maintained exception data for the source workbooks, plus the row
// rules driven by it. These are closed lists observed in the published
// files, not heuristics.

use anyhow::{anyhow, Result};

/// Workbooks whose native columns already carry a personnel identifier.
/// Every other workbook gets an empty `id` column injected in position 2.
pub static FILES_WITH_ID: &[&str] = &["2015_julio.xlsx", "2015_mayo.xlsx"];

/// Workbooks whose trailing summary block sits on "Table 2" (3 footer
/// rows) instead of the usual 7-row footer on the last sheet.
pub static IRREGULAR_FILES: &[&str] = &["2015_junio.xlsx", "2016_febrero.xlsx"];

pub fn has_native_id(file_name: &str) -> bool {
    FILES_WITH_ID.contains(&file_name)
}

pub fn is_irregular(file_name: &str) -> bool {
    IRREGULAR_FILES.contains(&file_name)
}

/// Header-noise rows to skip at the top of a sheet, by sheet name.
pub fn header_rows(sheet_name: &str) -> usize {
    match sheet_name {
        "Table 1" => 3,
        "Table 2" => 1,
        _ => 0,
    }
}

/// Footer rows to drop from the bottom of a sheet. Irregular files carry
/// their footer on "Table 2"; everything else carries it on the last sheet.
pub fn footer_rows(file_name: &str, sheet_name: &str, is_last_sheet: bool) -> usize {
    if is_irregular(file_name) {
        if sheet_name == "Table 2" {
            3
        } else {
            0
        }
    } else if is_last_sheet {
        7
    } else {
        0
    }
}

/// Split `<year>_<month>.<ext>` into year and month name. Splits on the
/// first underscore and strips the extension from the remainder.
pub fn year_and_month(file_name: &str) -> Result<(String, String)> {
    let (year, rest) = file_name
        .split_once('_')
        .ok_or_else(|| anyhow!("filename {:?} has no year_month form", file_name))?;
    let month = rest.split('.').next().unwrap_or(rest);
    Ok((year.to_string(), month.to_string()))
}
