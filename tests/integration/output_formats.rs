// tests/integration/output_formats.rs
use std::fs;

use count_loops::{Config, app};
use count_loops_infra::{JsonStyle, ReportFormat};

#[path = "../common/mod.rs"]
mod common;
use common::{MIXED_LOOPS, TempDir, sample_tree};

fn single_file_config(dir: &TempDir) -> Config {
    dir.write_file("main.c", MIXED_LOOPS);
    let mut config = Config::for_root(dir.path());
    config.frontend.use_cpp = false;
    config
}

#[test]
fn compact_json_is_byte_exact() {
    let dir = TempDir::new("count_loops_compact");
    let mut config = single_file_config(&dir);
    config.format = ReportFormat::Json(JsonStyle::Compact);

    assert_eq!(
        app::generate_report(&config).unwrap(),
        r#"{"files":[{"filename":"main.c","numwhile":1,"numdowhile":1,"numfor":2}],"totals":{"totfiles":1,"totwhile":1,"totdowhile":1,"totfor":2}}"#
    );
}

#[test]
fn pretty_json_keeps_key_order() {
    let dir = TempDir::new("count_loops_pretty");
    let text = app::generate_report(&single_file_config(&dir)).unwrap();

    let keys = ["\"files\"", "\"filename\"", "\"numwhile\"", "\"numdowhile\"", "\"numfor\"", "\"totals\"", "\"totfiles\"", "\"totwhile\"", "\"totdowhile\"", "\"totfor\""];
    let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order:\n{text}");
    assert!(text.contains("\n    \"files\": ["));
}

#[test]
fn output_file_receives_report_with_newline() {
    let dir = TempDir::new("count_loops_outfile");
    let mut config = single_file_config(&dir);
    let out = dir.path().join("reports").join("loops.json");
    fs::create_dir_all(out.parent().unwrap()).unwrap();
    config.output_path = Some(out.clone());

    app::run(&config).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["totals"]["totfor"], 2);
}

#[test]
fn csv_lists_one_row_per_file() {
    let dir = sample_tree();
    let mut config = Config::for_root(dir.path());
    config.frontend.use_cpp = false;
    config.report.relative_names = true;
    config.format = ReportFormat::Csv;

    assert_eq!(
        app::generate_report(&config).unwrap(),
        "filename,numwhile,numdowhile,numfor\n\"a.c\",0,0,2\n\"sub/b.c\",3,1,0\n"
    );
}

#[test]
fn directory_summary_groups_by_parent() {
    let dir = sample_tree();
    dir.write_file("sub/deep/c.c", "void k(void) { while (0); }\n");
    let mut config = Config::for_root(dir.path());
    config.frontend.use_cpp = false;

    config.format = ReportFormat::Directories { depth: None };
    let text = app::generate_report(&config).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(
        rows,
        [
            "directory,files,numwhile,numdowhile,numfor,total",
            "\"sub\",1,3,1,0,4",
            "\".\",1,0,0,2,2",
            "\"sub/deep\",1,1,0,0,1",
        ]
    );

    config.format = ReportFormat::Directories { depth: Some(1) };
    let text = app::generate_report(&config).unwrap();
    assert!(text.contains("\"sub\",2,4,1,0,5\n"), "{text}");
}

#[test]
fn csv_output_file_is_not_double_terminated() {
    let dir = TempDir::new("count_loops_csv_outfile");
    let mut config = single_file_config(&dir);
    config.format = ReportFormat::Csv;
    let out = dir.path().join("loops.csv");
    config.output_path = Some(out.clone());

    app::run(&config).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "filename,numwhile,numdowhile,numfor\n\"main.c\",1,1,2\n");
}
