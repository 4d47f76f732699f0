mod common;

use chrono::NaiveDate;
use common::{days_from_ref, reference, stock, StockBuilder};
use datacerta::services::export::{export_stock, export_stock_to_path, DATE_FORMAT};

#[test]
fn export_starts_with_bom_and_header() {
    let out = export_stock(&[], reference()).unwrap();
    assert!(out.starts_with('\u{feff}'));
    let header = out.trim_start_matches('\u{feff}').lines().next().unwrap();
    assert_eq!(
        header,
        "PRODUCT;CODE;STORE;LOCATION;QUANTITY;EXPIRATION;BATCH;STATUS_TEXT;DAYS_REMAINING"
    );
}

#[test]
fn rows_carry_status_labels_and_day_counts() {
    let records = vec![
        stock("Vencido", days_from_ref(-3)),
        stock("Hoje", days_from_ref(0)),
        stock("Amanha", days_from_ref(1)),
        stock("Semana", days_from_ref(7)),
    ];

    let out = export_stock(&records, reference()).unwrap();
    let rows: Vec<&str> = out.trim_start_matches('\u{feff}').lines().skip(1).collect();
    assert_eq!(rows.len(), 4);

    let status_of = |row: &str| row.split(';').nth(7).unwrap().to_string();
    let days_of = |row: &str| row.split(';').nth(8).unwrap().to_string();

    assert_eq!(status_of(rows[0]), "VENCIDO");
    assert_eq!(days_of(rows[0]), "-3");
    assert_eq!(status_of(rows[1]), "VENCE HOJE");
    assert_eq!(status_of(rows[2]), "VENCE EM 1 DIA");
    assert_eq!(status_of(rows[3]), "VENCE EM 7 DIAS");
}

#[test]
fn missing_optional_fields_export_as_empty_columns() {
    let records = vec![stock("Sem nada", days_from_ref(2))];
    let out = export_stock(&records, reference()).unwrap();
    let row = out.trim_start_matches('\u{feff}').lines().nth(1).unwrap();
    let fields: Vec<&str> = row.split(';').collect();
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[1], ""); // code
    assert_eq!(fields[3], ""); // location
    assert_eq!(fields[6], ""); // batch
}

#[test]
fn quantities_and_dates_round_trip() {
    let records = vec![
        StockBuilder::new("Leite", days_from_ref(4)).quantity(12).build(),
        StockBuilder::new("Queijo", days_from_ref(-8)).quantity(3).build(),
    ];

    let out = export_stock(&records, reference()).unwrap();
    let rows: Vec<&str> = out.trim_start_matches('\u{feff}').lines().skip(1).collect();
    assert_eq!(rows.len(), records.len());

    for (row, record) in rows.iter().zip(&records) {
        let fields: Vec<&str> = row.split(';').collect();
        let quantity: i32 = fields[4].parse().unwrap();
        let date = NaiveDate::parse_from_str(fields[5], DATE_FORMAT).unwrap();
        assert_eq!(quantity, record.quantity);
        assert_eq!(date, record.expiration_date);
    }
}

#[test]
fn export_to_path_writes_the_same_bytes() {
    let records = vec![stock("Arquivo", days_from_ref(2))];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estoque_validade.csv");

    export_stock_to_path(&records, reference(), &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, export_stock(&records, reference()).unwrap());
}
