use std::fs;

use convoy_ingest::{IngestError, read_csv_table, write_csv_table};
use convoy_model::TextTable;

#[test]
fn reads_headers_and_rows_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fleet.csv");
    fs::write(
        &path,
        "vehicle_id,engine_capacity,fuel_consumption,maximum_load\n1,200,58,5t\n2, 90 ,40,25\n",
    )
    .expect("write csv");

    let table = read_csv_table(&path).expect("read csv");

    assert_eq!(
        table.headers,
        vec!["vehicle_id", "engine_capacity", "fuel_consumption", "maximum_load"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", "200", "58", "5t"]);
    assert_eq!(table.rows[1], vec!["2", " 90 ", "40", "25"]);
}

#[test]
fn writes_one_record_per_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    let table = TextTable::new(
        vec!["vehicle_id".to_string(), "note".to_string()],
        vec![
            vec!["1".to_string(), "a, b".to_string()],
            vec!["2".to_string(), String::new()],
        ],
    );

    write_csv_table(&path, &table).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "vehicle_id,note\n1,\"a, b\"\n2,\n");
    assert_eq!(read_csv_table(&path).expect("reread"), table);
}

#[test]
fn ragged_rows_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "a,b\n1,2\n3\n").expect("write csv");

    let error = read_csv_table(&path).expect_err("ragged row");
    assert!(matches!(error, IngestError::CsvParse { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = read_csv_table(&dir.path().join("absent.csv")).expect_err("missing");
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_has_no_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").expect("write csv");

    let error = read_csv_table(&path).expect_err("empty");
    assert!(matches!(error, IngestError::MissingHeader { .. }));
}
