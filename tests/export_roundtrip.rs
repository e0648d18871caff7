// tests/export_roundtrip.rs
use std::fs;
use std::path::PathBuf;

use sunbiz_scrape::config::options::ExportFormat;
use sunbiz_scrape::data::{ResultRow, HEADERS};
use sunbiz_scrape::file::{export, to_delimited, to_xlsx, write_export};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("sunbiz_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn sample_rows() -> Vec<ResultRow> {
    vec![
        ResultRow {
            business_name: "ACME, \"THE\" WIDGETS LLC".into(),
            status: "Active".into(),
            document_number: "L21000123456".into(),
            fei_number: "87-1234567".into(),
            owner_name: "SMITH, JOHN".into(),
            owner_title: "President".into(),
            owner_email: "owner@acme.com".into(),
            address: "123 Main St\r\nSuite 4".into(),
            filing_date: "03/15/2021".into(),
            detail_url: "https://search.sunbiz.org/Inquiry/CorporationSearch/SearchResultDetail/1".into(),
        },
        ResultRow {
            business_name: "BETA INC".into(),
            document_number: "12345".into(),
            ..Default::default()
        },
    ]
}

fn flattened(rows: &[ResultRow]) -> Vec<ResultRow> {
    rows.iter()
        .cloned()
        .map(|mut r| {
            r.address = r.address.replace(['\r', '\n'], " ");
            r
        })
        .collect()
}

#[test]
fn csv_reparses_to_the_same_rows() {
    let rows = sample_rows();
    let bytes = to_delimited(&rows, b',').unwrap();

    let mut rdr = csv::Reader::from_reader(bytes.as_slice());
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, HEADERS);

    let back: Vec<ResultRow> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(back, flattened(&rows));
}

#[test]
fn tsv_reparses_with_tab_delimiter() {
    let rows = sample_rows();
    let bytes = to_delimited(&rows, b'\t').unwrap();
    assert!(String::from_utf8_lossy(&bytes).lines().next().unwrap().contains('\t'));

    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(bytes.as_slice());
    let back: Vec<ResultRow> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(back, flattened(&rows));
}

#[test]
fn text_fields_are_quoted() {
    let bytes = to_delimited(&sample_rows(), b',').unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\"Active\""));
    assert!(text.contains("\"ACME, \"\"THE\"\" WIDGETS LLC\""));
}

#[test]
fn xlsx_is_a_zip_container() {
    let bytes = to_xlsx(&sample_rows()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn payload_names_and_types() {
    let rows = sample_rows();

    let csv = export(&rows, "Acme Widgets", ExportFormat::Csv).unwrap();
    assert_eq!(csv.file_name, "sunbiz_results_Acme_Widgets.csv");
    assert_eq!(csv.content_type, "text/csv");

    let tsv = export(&rows, "Acme Widgets", ExportFormat::Tsv).unwrap();
    assert_eq!(tsv.file_name, "sunbiz_results_Acme_Widgets.tsv");

    let xlsx = export(&rows, "a/b:c", ExportFormat::Xlsx).unwrap();
    assert_eq!(xlsx.file_name, "sunbiz_results_abc.xlsx");
    assert_eq!(
        xlsx.content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

#[test]
fn write_export_creates_the_directory() {
    let dir = tmp_dir("write").join("nested");
    let payload = export(&sample_rows(), "acme", ExportFormat::Csv).unwrap();

    let path = write_export(&dir, &payload).unwrap();
    assert_eq!(path, dir.join("sunbiz_results_acme.csv"));
    assert_eq!(fs::read(&path).unwrap(), payload.bytes);
}

#[test]
fn empty_session_exports_header_only() {
    let payload = export(&[], "", ExportFormat::Csv).unwrap();
    assert_eq!(payload.file_name, "sunbiz_results_results.csv");
    let text = String::from_utf8(payload.bytes).unwrap();
    assert_eq!(text.lines().count(), 1);
}
