// tests/common/matchers.rs
//! アサーションヘルパー

use serde_json::Value;

/// `files[]` の 1 要素を検証
#[allow(dead_code)]
pub fn assert_file_entry(entry: &Value, filename: &str, numwhile: u64, numdowhile: u64, numfor: u64) {
    assert_eq!(entry["filename"], filename, "unexpected entry: {entry}");
    assert_eq!(entry["numwhile"], numwhile, "numwhile of {filename}");
    assert_eq!(entry["numdowhile"], numdowhile, "numdowhile of {filename}");
    assert_eq!(entry["numfor"], numfor, "numfor of {filename}");
}

/// `totals` を検証
#[allow(dead_code)]
pub fn assert_totals(report: &Value, totfiles: u64, totwhile: u64, totdowhile: u64, totfor: u64) {
    let totals = &report["totals"];
    assert_eq!(totals["totfiles"], totfiles, "totfiles in {totals}");
    assert_eq!(totals["totwhile"], totwhile, "totwhile in {totals}");
    assert_eq!(totals["totdowhile"], totdowhile, "totdowhile in {totals}");
    assert_eq!(totals["totfor"], totfor, "totfor in {totals}");
}

/// totals が files の合計と一致することを検証
#[allow(dead_code)]
pub fn assert_totals_consistent(report: &Value) {
    let files = report["files"].as_array().expect("files array");
    let sum = |key: &str| files.iter().map(|f| f[key].as_u64().unwrap()).sum::<u64>();
    assert_totals(report, files.len() as u64, sum("numwhile"), sum("numdowhile"), sum("numfor"));
}
