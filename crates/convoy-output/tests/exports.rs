use std::fs;

use convoy_model::IntegerTable;
use convoy_output::{
    DataOptions, MarkupOptions, OutputError, write_data_export, write_markup_export,
};

fn vehicles() -> IntegerTable {
    IntegerTable::new(
        vec![
            "vehicle_id".to_string(),
            "engine_capacity".to_string(),
            "fuel_consumption".to_string(),
            "maximum_load".to_string(),
        ],
        vec![vec![2, 100, 60, 10], vec![3, 200, 58, 5]],
    )
}

#[test]
fn markup_export_snapshot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fleet.xml");

    let written =
        write_markup_export(&path, &vehicles(), &MarkupOptions::default()).expect("write");
    assert_eq!(written, 2);

    let xml = fs::read_to_string(&path).expect("read back");
    insta::assert_snapshot!(xml, @r"
    <convoy>
      <vehicle>
        <vehicle_id>2</vehicle_id>
        <engine_capacity>100</engine_capacity>
        <fuel_consumption>60</fuel_consumption>
        <maximum_load>10</maximum_load>
      </vehicle>
      <vehicle>
        <vehicle_id>3</vehicle_id>
        <engine_capacity>200</engine_capacity>
        <fuel_consumption>58</fuel_consumption>
        <maximum_load>5</maximum_load>
      </vehicle>
    </convoy>
    ");
}

#[test]
fn data_export_snapshot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fleet.json");
    let table = IntegerTable::new(
        vec!["vehicle_id".to_string(), "maximum_load".to_string()],
        vec![vec![1, 25]],
    );

    let written = write_data_export(&path, &table, &DataOptions::default()).expect("write");
    assert_eq!(written, 1);

    let json = fs::read_to_string(&path).expect("read back");
    insta::assert_snapshot!(json, @r#"
    {
        "convoy": [
            {
                "vehicle_id": 1,
                "maximum_load": 25
            }
        ]
    }
    "#);
}

#[test]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing-dir").join("fleet.json");

    let error = write_data_export(&path, &vehicles(), &DataOptions::default()).expect_err("no dir");
    assert!(matches!(error, OutputError::FileCreate { .. }));
}
