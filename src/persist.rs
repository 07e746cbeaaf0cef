use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::correlation::CorrelationTable;
use crate::teams;

const TABLE_FILE_TAG: &str = "assist_point_same_goal";

/// Tables collected from a directory scan, keyed by full team name.
/// Unrecognized or unreadable files are reported as warnings, never as
/// errors; partial coverage is the normal case.
#[derive(Debug, Default)]
pub struct TableScan {
    pub tables: HashMap<String, CorrelationTable>,
    pub warnings: Vec<String>,
}

pub fn table_file_name(abbr: &str, season: &str) -> String {
    format!("{abbr}_{TABLE_FILE_TAG}_{season}.csv")
}

/// Persist one team's table as the durable CSV artifact: row labels in the
/// first column, one column per point scorer, probabilities as decimal text.
/// Written to a temp file and swapped in place.
pub fn save_table(
    dir: &Path,
    abbr: &str,
    season: &str,
    table: &CorrelationTable,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create tables dir {}", dir.display()))?;
    let path = dir.join(table_file_name(abbr, season));
    let tmp = path.with_extension("csv.tmp");

    let mut writer = csv::Writer::from_path(&tmp)
        .with_context(|| format!("open table file {}", tmp.display()))?;

    // Leading empty cell over the row-label column, like any indexed frame
    // dump; loaders key on position, not on that header.
    let mut header: Vec<&str> = Vec::with_capacity(table.columns().len() + 1);
    header.push("");
    header.extend(table.columns().iter().map(String::as_str));
    writer
        .write_record(&header)
        .context("write table header")?;

    for assister in table.rows() {
        let values = table
            .row_values(assister)
            .context("row labels and values out of sync")?;
        let mut record: Vec<String> = Vec::with_capacity(values.len() + 1);
        record.push(assister.clone());
        record.extend(values.iter().map(|value| value.to_string()));
        writer
            .write_record(&record)
            .with_context(|| format!("write table row for {assister}"))?;
    }

    writer.flush().context("flush table file")?;
    drop(writer);
    fs::rename(&tmp, &path).with_context(|| format!("swap table file {}", path.display()))?;
    Ok(path)
}

/// Load one persisted table. Row set, column set, and values must come back
/// exactly as saved; empty cells read as zero.
pub fn load_table(path: &Path) -> Result<CorrelationTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open table file {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("read table header {}", path.display()))?
        .iter()
        .skip(1)
        .map(str::to_string)
        .collect();

    let mut assisters = Vec::new();
    let mut values = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("read table row in {}", path.display()))?;
        let Some(label) = record.get(0) else {
            continue;
        };
        let mut row = Vec::with_capacity(columns.len());
        for cell in record.iter().skip(1) {
            let cell = cell.trim();
            if cell.is_empty() {
                row.push(0.0);
                continue;
            }
            let value = cell
                .parse::<f64>()
                .with_context(|| format!("bad probability cell {cell:?} in {}", path.display()))?;
            row.push(value);
        }
        assisters.push(label.to_string());
        values.push(row);
    }

    CorrelationTable::from_parts(assisters, columns, values)
        .with_context(|| format!("malformed table {}", path.display()))
}

/// Collect every recognizable team table in `dir`. File names that do not
/// yield a known team abbreviation, and files that fail to load, are skipped
/// with a warning.
pub fn scan_tables_dir(dir: &Path) -> Result<TableScan> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read tables dir {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    let mut scan = TableScan::default();
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(abbr) = teams::abbr_from_table_file_name(file_name) else {
            scan.warnings
                .push(format!("cannot detect team abbreviation from {file_name}"));
            continue;
        };
        let Some(team) = teams::team_by_abbr(abbr) else {
            scan.warnings
                .push(format!("skipping {file_name}: abbreviation {abbr} not recognized"));
            continue;
        };
        match load_table(&path) {
            Ok(table) => {
                scan.tables.insert(team.name.to_string(), table);
            }
            Err(err) => scan
                .warnings
                .push(format!("skipping {file_name}: {err:#}")),
        }
    }
    Ok(scan)
}
