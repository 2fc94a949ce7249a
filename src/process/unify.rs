// src/process/unify.rs

use anyhow::{Context, Result};
use csv::WriterBuilder;
use glob::glob;
use std::{
    fs::{self, OpenOptions},
    io::BufWriter,
    path::Path,
};
use tracing::info;

use super::{normalize_workbook, SheetTable};

/// Rebuild `out_path` from every `.xlsx` workbook under `dir`.
///
/// Any previous output is deleted first; every normalized sheet table is
/// then appended in file × sheet order, headerless. One failing workbook
/// or write aborts the phase and leaves a partial file behind.
pub fn unify_salary_workbooks(dir: impl AsRef<Path>, out_path: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    let out_path = out_path.as_ref();

    if out_path.exists() {
        fs::remove_file(out_path)
            .with_context(|| format!("removing old output {:?}", out_path))?;
    }
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {:?}", parent))?;
    }

    let pattern = format!("{}/*.xlsx", dir.display());
    let mut files = 0usize;
    let mut rows = 0usize;
    for entry in glob(&pattern).context("building xlsx glob pattern")? {
        let path = entry?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("non-UTF-8 workbook name {:?}", path))?
            .to_string();

        let tables = normalize_workbook(dir, &file_name)?;
        for table in &tables {
            append_table(out_path, table)?;
            rows += table.rows.len();
        }
        files += 1;
    }

    info!(files, rows, "unified output written to {:?}", out_path);
    Ok(())
}

/// Append one sheet table to the output CSV, creating the file on first
/// use. No header row is ever written; row widths vary across source
/// files, so the writer is flexible.
fn append_table(out_path: &Path, table: &SheetTable) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(out_path)
        .with_context(|| format!("opening output {:?}", out_path))?;
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::new(file));

    for row in &table.rows {
        writer.write_record(row).context("writing output row")?;
    }
    writer.flush().context("flushing output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use csv::ReaderBuilder;
    use rust_xlsxwriter::Workbook;
    use std::fs::File;
    use tempfile::tempdir;

    fn write_workbook(path: &Path, sheets: &[(&str, usize, usize)]) -> Result<()> {
        let mut workbook = Workbook::new();
        for &(name, n_rows, n_cols) in sheets {
            let sheet = workbook.add_worksheet().set_name(name)?;
            for r in 0..n_rows {
                for c in 0..n_cols {
                    sheet.write(r as u32, c as u16, format!("{name}-r{r}c{c}"))?;
                }
            }
        }
        workbook.save(path)?;
        Ok(())
    }

    fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(File::open(path)?);
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    #[test]
    fn unifies_every_sheet_of_every_workbook() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("input").join("salaries.csv");

        // 10 rows survive "Table 1" (skip 3), 3 survive "Hoja2" (drop 7).
        write_workbook(&dir.path().join("2018_marzo.xlsx"), &[("Table 1", 13, 2), ("Hoja2", 10, 2)])?;
        // Single "Table 1" sheet, last by definition: skip 3 and drop 7.
        write_workbook(&dir.path().join("2019_abril.xlsx"), &[("Table 1", 20, 2)])?;

        unify_salary_workbooks(dir.path(), &out)?;

        let rows = read_rows(&out)?;
        assert_eq!(rows.len(), 10 + 3 + 10);
        assert!(rows.iter().any(|r| r.contains(&"2018".to_string())));
        assert!(rows.iter().any(|r| r.contains(&"2019".to_string())));
        Ok(())
    }

    #[test]
    fn rerun_rebuilds_instead_of_accumulating() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("salaries.csv");
        write_workbook(&dir.path().join("2018_mayo.xlsx"), &[("Hoja1", 12, 2)])?;

        unify_salary_workbooks(dir.path(), &out)?;
        let first = read_rows(&out)?.len();
        unify_salary_workbooks(dir.path(), &out)?;
        let second = read_rows(&out)?.len();

        assert_eq!(first, 5);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn ignores_files_with_other_extensions() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("salaries.csv");
        std::fs::write(dir.path().join("notes.txt"), "not a workbook")?;
        write_workbook(&dir.path().join("2020_julio.xlsx"), &[("Hoja1", 9, 2)])?;

        unify_salary_workbooks(dir.path(), &out)?;
        assert_eq!(read_rows(&out)?.len(), 2);
        Ok(())
    }

    #[test]
    fn empty_folder_produces_no_output_file() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("salaries.csv");
        unify_salary_workbooks(dir.path(), &out)?;
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn output_is_headerless_and_carries_year_month_columns() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("salaries.csv");
        write_workbook(&dir.path().join("2021_agosto.xlsx"), &[("Hoja1", 8, 3)])?;

        unify_salary_workbooks(dir.path(), &out)?;
        let rows = read_rows(&out)?;

        assert_eq!(rows.len(), 1);
        // raw cols + injected id + year + month_name
        assert_eq!(rows[0].len(), 3 + 3);
        assert_eq!(rows[0][0], "Hoja1-r0c0");
        assert_eq!(rows[0][1], "");
        assert_eq!(&rows[0][4..], ["2021", "agosto"]);
        Ok(())
    }

    #[test]
    fn malformed_workbook_aborts_the_phase() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("salaries.csv");
        std::fs::write(dir.path().join("2018_enero.xlsx"), "not a zip container")?;

        assert!(unify_salary_workbooks(dir.path(), &out).is_err());
        Ok(())
    }
}
