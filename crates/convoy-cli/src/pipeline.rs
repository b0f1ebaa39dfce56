//! Stage converters.
//!
//! Each converter reads one artifact, writes the next, reports what it did
//! and returns the artifact it produced. The database converter is terminal
//! and returns the export paths instead.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use convoy_ingest::{VEHICLES_SHEET, read_csv_table, read_sheet, write_csv_table};
use convoy_model::{
    Artifact, ExportPaths, Outcome, Reporter, database_path, delimited_path, export_paths,
    validated_path,
};
use convoy_output::{DataOptions, MarkupOptions, write_data_export, write_markup_export};
use convoy_store::{DEFAULT_TABLE, TableSchema, insert_records, integer_rows, read_table};
use convoy_transform::{DEFAULT_SCORE_THRESHOLD, ScoreColumns, partition_by_score, sanitize_table};

use crate::error::Result;

const LINE: &str = "line";
const CELL: &str = "cell";
const RECORD: &str = "record";
const VEHICLE: &str = "vehicle";

/// Knobs shared by every stage.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Worksheet read by the spreadsheet stage.
    pub sheet_name: String,
    /// Table written by the database stage and read by the export stage.
    pub table_name: String,
    /// Vehicles scoring above this go to the data export.
    pub score_threshold: i64,
    pub markup: MarkupOptions,
    pub data: DataOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            sheet_name: VEHICLES_SHEET.to_string(),
            table_name: DEFAULT_TABLE.to_string(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            markup: MarkupOptions::default(),
            data: DataOptions::default(),
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    #[must_use]
    pub fn with_score_threshold(mut self, score_threshold: i64) -> Self {
        self.score_threshold = score_threshold;
        self
    }
}

/// `fleet.xlsx` -> `fleet.csv`.
pub fn import_spreadsheet(
    path: &Path,
    options: &PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<Artifact> {
    let start = Instant::now();
    let table = read_sheet(path, &options.sheet_name)?;
    let output = delimited_path(path);
    write_csv_table(&output, &table)?;
    info!(
        rows = table.row_count(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "spreadsheet imported"
    );
    reporter.report(&Outcome::new(table.row_count(), LINE, "imported to", &output))?;
    Ok(Artifact::Delimited(output))
}

/// `fleet.csv` -> `fleet[CHECKED].csv`.
pub fn validate_delimited(path: &Path, reporter: &mut dyn Reporter) -> Result<Artifact> {
    let start = Instant::now();
    let table = read_csv_table(path)?;
    let (sanitized, corrections) = sanitize_table(&table);
    let output = validated_path(path);
    write_csv_table(&output, &sanitized)?;
    info!(
        rows = sanitized.row_count(),
        corrections = corrections.count(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "delimited file validated"
    );
    reporter.report(&Outcome::new(corrections.count(), CELL, "corrected in", &output))?;
    Ok(Artifact::ValidatedDelimited(output))
}

/// `fleet[CHECKED].csv` -> `fleet.s3db`.
///
/// The scoring columns are located before anything touches the database, so a
/// schema error leaves no file behind.
pub fn load_database(
    path: &Path,
    options: &PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<Artifact> {
    let start = Instant::now();
    let table = read_csv_table(path)?;
    let columns = ScoreColumns::locate(&table.headers)?;
    let records: Vec<Vec<i64>> = integer_rows(&table)?
        .into_iter()
        .map(|record| columns.append_score(record))
        .collect();
    let schema = TableSchema::from_headers(&options.table_name, &table.headers);
    debug!(sql = %schema.create_sql(), "derived schema");

    let output = database_path(path);
    let inserted = insert_records(&output, &schema, &records)?;
    info!(
        records = inserted,
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "records stored"
    );
    reporter.report(&Outcome::new(inserted, RECORD, "inserted into", &output))?;
    Ok(Artifact::Database(output))
}

/// `fleet.s3db` -> `fleet.json` and `fleet.xml`.
///
/// High scorers go to the data export, the rest to the markup export. The data
/// outcome is reported first.
pub fn export_database(
    path: &Path,
    options: &PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<ExportPaths> {
    let start = Instant::now();
    let table = read_table(path, &options.table_name)?;
    let partition = partition_by_score(&table, options.score_threshold)?;
    let exports = export_paths(path);

    let markup_count = write_markup_export(&exports.markup, &partition.low, &options.markup)?;
    let data_count = write_data_export(&exports.data, &partition.high, &options.data)?;
    info!(
        data = data_count,
        markup = markup_count,
        duration_ms = start.elapsed().as_millis(),
        "exports written"
    );
    reporter.report(&Outcome::new(data_count, VEHICLE, "saved into", &exports.data))?;
    reporter.report(&Outcome::new(markup_count, VEHICLE, "saved into", &exports.markup))?;
    Ok(exports)
}

/// Run the converter for `artifact`. `None` means the pipeline is finished.
pub fn advance(
    artifact: &Artifact,
    options: &PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<Option<Artifact>> {
    match artifact {
        Artifact::Spreadsheet(path) => import_spreadsheet(path, options, reporter).map(Some),
        Artifact::Delimited(path) => validate_delimited(path, reporter).map(Some),
        Artifact::ValidatedDelimited(path) => load_database(path, options, reporter).map(Some),
        Artifact::Database(path) => export_database(path, options, reporter).map(|_| None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ConsoleReporter;
    use convoy_model::RecordingReporter;
    use std::fs;
    use std::io::{self, Write};

    const CHECKED_FLEET: &str = "\
vehicle_id,engine_capacity,fuel_consumption,maximum_load
1,90,40,25
2,100,60,10
";

    #[test]
    fn options_builders() {
        let options = PipelineOptions::default()
            .with_sheet_name("Trucks")
            .with_table_name("fleet")
            .with_score_threshold(4);
        assert_eq!(options.sheet_name, "Trucks");
        assert_eq!(options.table_name, "fleet");
        assert_eq!(options.score_threshold, 4);
        assert_eq!(options.markup.root, "convoy");
    }

    #[test]
    fn validation_reports_zero_corrections() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("fleet.csv");
        fs::write(&input, CHECKED_FLEET).expect("write csv");
        let mut reporter = RecordingReporter::default();

        let next = validate_delimited(&input, &mut reporter).expect("validate");

        let checked = dir.path().join("fleet[CHECKED].csv");
        assert_eq!(next, Artifact::ValidatedDelimited(checked.clone()));
        assert_eq!(
            fs::read_to_string(&checked).expect("read checked"),
            CHECKED_FLEET
        );
        assert_eq!(
            reporter.messages(),
            vec![format!("0 cells were corrected in {}", checked.display())]
        );
    }

    #[test]
    fn missing_scoring_column_creates_no_database() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("fleet[CHECKED].csv");
        fs::write(&input, "vehicle_id,engine_capacity\n1,90\n").expect("write csv");
        let mut reporter = RecordingReporter::default();

        let error = load_database(&input, &PipelineOptions::default(), &mut reporter)
            .expect_err("missing columns");

        assert_eq!(error.category(), "schema");
        assert!(!dir.path().join("fleet.s3db").exists());
        assert!(reporter.outcomes.is_empty());
    }

    #[test]
    fn database_stage_then_exports() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("fleet[CHECKED].csv");
        fs::write(&input, CHECKED_FLEET).expect("write csv");
        let options = PipelineOptions::default();
        let mut reporter = RecordingReporter::default();

        let next = load_database(&input, &options, &mut reporter).expect("load");
        let db = dir.path().join("fleet.s3db");
        assert_eq!(next, Artifact::Database(db.clone()));

        let exports = export_database(&db, &options, &mut reporter).expect("export");
        assert_eq!(exports.data, dir.path().join("fleet.json"));
        assert_eq!(exports.markup, dir.path().join("fleet.xml"));
        assert_eq!(
            reporter.messages(),
            vec![
                format!("2 records were inserted into {}", db.display()),
                format!("1 vehicle was saved into {}", exports.data.display()),
                format!("1 vehicle was saved into {}", exports.markup.display()),
            ]
        );
    }

    #[test]
    fn database_is_terminal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("fleet[CHECKED].csv");
        fs::write(&input, CHECKED_FLEET).expect("write csv");
        let options = PipelineOptions::default();
        let mut reporter = RecordingReporter::default();

        let db = advance(&Artifact::ValidatedDelimited(input), &options, &mut reporter)
            .expect("load")
            .expect("database artifact");
        let after = advance(&db, &options, &mut reporter).expect("export");
        assert!(after.is_none());
    }

    struct ClosedStdout;

    impl Write for ClosedStdout {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unprintable_outcome_fails_the_stage() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("fleet.csv");
        fs::write(&input, CHECKED_FLEET).expect("write csv");
        let mut reporter = ConsoleReporter::new(ClosedStdout);

        let error = validate_delimited(&input, &mut reporter).expect_err("closed stdout");

        assert_eq!(error.category(), "report");
        assert!(error.to_string().starts_with("failed to report outcome"));
    }
}
