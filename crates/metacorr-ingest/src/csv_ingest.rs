//! CSV study-table loading.
//!
//! The table format mirrors an edited data-entry grid: a header row naming
//! `n` and `r` columns (plus an optional study-name column), one study per
//! row. Rows with missing or non-numeric `n`/`r` are dropped before the
//! snapshot reaches the statistics, counted, and logged.

use std::path::Path;

use tracing::{debug, warn};

use metacorr_model::{StudyRecord, StudySet};

use crate::error::{IngestError, Result};

/// Outcome of loading a study table.
#[derive(Debug, Clone)]
pub struct CsvLoad {
    /// Records that survived cleaning, in file order.
    pub records: StudySet,
    /// Count of rows that produced a record.
    pub loaded: usize,
    /// Count of rows dropped for missing or non-numeric values.
    pub dropped: usize,
}

/// Column indices resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    name: Option<usize>,
    n: usize,
    r: usize,
}

/// Load and clean a study table from a headered CSV file.
///
/// Column headers are matched case-insensitively: `n` for sample size,
/// `r` for correlation, and any of `study name`/`study`/`name` for the
/// optional display name.
///
/// # Errors
///
/// Fails when the file cannot be read or when a required column is absent.
/// Malformed rows are not errors; they are cleaned away and reported in
/// [`CsvLoad::dropped`].
pub fn load_study_csv(path: &Path) -> Result<CsvLoad> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let layout = resolve_columns(&headers)?;

    let mut records = StudySet::new();
    let mut dropped = 0usize;
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let row_number = index + 2; // 1-based, counting the header
        match parse_row(&row, layout) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
                warn!(
                    source = %path.display(),
                    row = row_number,
                    "dropping row with missing or non-numeric n/r"
                );
            }
        }
    }

    let loaded = records.len();
    debug!(source = %path.display(), loaded, dropped, "study table loaded");
    Ok(CsvLoad {
        records,
        loaded,
        dropped,
    })
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnLayout> {
    let find = |candidates: &[&str]| {
        headers.iter().position(|header| {
            candidates
                .iter()
                .any(|candidate| header.trim().eq_ignore_ascii_case(candidate))
        })
    };
    let n = find(&["n"]).ok_or_else(|| IngestError::MissingColumn { name: "n".into() })?;
    let r = find(&["r"]).ok_or_else(|| IngestError::MissingColumn { name: "r".into() })?;
    let name = find(&["study name", "study", "name"]);
    Ok(ColumnLayout { name, n, r })
}

fn parse_row(row: &csv::StringRecord, layout: ColumnLayout) -> Option<StudyRecord> {
    let n = parse_sample_size(row.get(layout.n)?)?;
    let r = parse_correlation(row.get(layout.r)?)?;
    let name = layout
        .name
        .and_then(|index| row.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);
    Some(StudyRecord { name, n, r })
}

/// Sample sizes are integers, but spreadsheet exports often render them as
/// `10.0`; accept any finite non-negative whole number.
fn parse_sample_size(field: &str) -> Option<u64> {
    let value: f64 = field.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

fn parse_correlation(field: &str) -> Option<f64> {
    let value: f64 = field.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp csv");
        file.write_all(content.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_a_clean_table() {
        let file = write_csv("Study name,n,r\nA,10,0.81\nB,12,0.84\n");
        let load = load_study_csv(file.path()).unwrap();
        assert_eq!(load.loaded, 2);
        assert_eq!(load.dropped, 0);
        assert_eq!(load.records.records()[0].name.as_deref(), Some("A"));
        assert_eq!(load.records.records()[1].n, 12);
        assert_eq!(load.records.records()[1].r, 0.84);
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let file = write_csv("NAME,N,R\nA,10,0.5\n");
        let load = load_study_csv(file.path()).unwrap();
        assert_eq!(load.loaded, 1);
        assert_eq!(load.records.records()[0].name.as_deref(), Some("A"));
    }

    #[test]
    fn study_name_is_optional() {
        let file = write_csv("n,r\n10,0.5\n");
        let load = load_study_csv(file.path()).unwrap();
        assert_eq!(load.loaded, 1);
        assert!(load.records.records()[0].name.is_none());
    }

    #[test]
    fn malformed_rows_are_dropped_not_fatal() {
        let file = write_csv("name,n,r\nA,10,0.81\nB,,0.5\nC,twelve,0.3\nD,8,\nE,9,0.58\n");
        let load = load_study_csv(file.path()).unwrap();
        assert_eq!(load.loaded, 2);
        assert_eq!(load.dropped, 3);
    }

    #[test]
    fn spreadsheet_style_integers_are_accepted() {
        let file = write_csv("n,r\n10.0,0.81\n12.5,0.84\n");
        let load = load_study_csv(file.path()).unwrap();
        // 12.5 is not a whole sample size
        assert_eq!(load.loaded, 1);
        assert_eq!(load.dropped, 1);
        assert_eq!(load.records.records()[0].n, 10);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let file = write_csv("name,r\nA,0.81\n");
        let error = load_study_csv(file.path()).unwrap_err();
        assert!(matches!(error, IngestError::MissingColumn { name } if name == "n"));
    }
}
