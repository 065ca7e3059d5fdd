// tests/integration/end_to_end.rs
use std::path::Path;

use count_loops::{Config, app};
use count_loops_domain::SkipReason;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{
    BROKEN, MIXED_LOOPS, NO_LOOPS, ONE_WHILE, TempDir, assert_file_entry, assert_totals, assert_totals_consistent,
    sample_tree,
};

fn base_config(root: &Path) -> Config {
    let mut config = Config::for_root(root);
    config.frontend.use_cpp = false;
    config
}

fn report_json(config: &Config) -> Value {
    serde_json::from_str(&app::generate_report(config).unwrap()).unwrap()
}

#[test]
fn counts_every_c_file_in_the_tree() {
    let dir = sample_tree();
    let report = report_json(&base_config(dir.path()));

    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_file_entry(&files[0], "a.c", 0, 0, 2);
    assert_file_entry(&files[1], "b.c", 3, 1, 0);
    assert_totals(&report, 2, 3, 1, 2);
}

#[test]
fn relative_names_keep_directories() {
    let dir = sample_tree();
    let mut config = base_config(dir.path());
    config.report.relative_names = true;
    let report = report_json(&config);

    assert_eq!(report["files"][0]["filename"], "a.c");
    assert_eq!(report["files"][1]["filename"], "sub/b.c");
}

#[test]
fn counts_are_per_file_not_cumulative() {
    let dir = TempDir::new("count_loops_local");
    dir.write_file("x.c", ONE_WHILE);
    dir.write_file("y.c", ONE_WHILE);
    let report = report_json(&base_config(dir.path()));

    assert_file_entry(&report["files"][0], "x.c", 1, 0, 0);
    assert_file_entry(&report["files"][1], "y.c", 1, 0, 0);
    assert_totals(&report, 2, 2, 0, 0);
}

#[test]
fn file_without_loops_is_listed_with_zeros() {
    let dir = TempDir::new("count_loops_zero");
    dir.write_file("plain.c", NO_LOOPS);
    let report = report_json(&base_config(dir.path()));

    assert_file_entry(&report["files"][0], "plain.c", 0, 0, 0);
    assert_totals(&report, 1, 0, 0, 0);
}

#[test]
fn empty_tree_yields_empty_report() {
    let dir = TempDir::new("count_loops_empty");
    dir.write_file("README.md", "nothing here\n");
    let report = report_json(&base_config(dir.path()));

    assert_eq!(report["files"], Value::Array(vec![]));
    assert_totals(&report, 0, 0, 0, 0);
}

#[test]
fn unparsable_file_is_skipped_and_the_rest_reported() {
    let dir = TempDir::new("count_loops_broken");
    dir.write_file("good.c", MIXED_LOOPS);
    dir.write_file("bad.c", BROKEN);
    let config = base_config(dir.path());

    let outcome = app::count(&config).unwrap();
    assert_eq!(outcome.report.files.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::Parse);

    let report = report_json(&config);
    assert_file_entry(&report["files"][0], "good.c", 1, 1, 2);
    assert_totals(&report, 1, 1, 1, 2);
}

#[test]
fn lenient_mode_counts_broken_files() {
    let dir = TempDir::new("count_loops_lenient");
    dir.write_file("bad.c", "int main(void) { while (1) { @@@ } }\n");
    let mut config = base_config(dir.path());
    config.frontend.lenient = true;

    let report = report_json(&config);
    assert_eq!(report["totals"]["totfiles"], 1);
    assert_eq!(report["files"][0]["numwhile"], 1);
}

#[test]
fn missing_root_is_fatal() {
    let dir = TempDir::new("count_loops_missing");
    let config = base_config(&dir.path().join("nope"));
    assert!(app::generate_report(&config).is_err());
}

#[test]
fn bad_exclude_glob_is_fatal() {
    let dir = sample_tree();
    let mut config = base_config(dir.path());
    config.plan.exclude = vec!["[".to_string()];
    assert!(app::generate_report(&config).is_err());
}

#[test]
fn exclude_glob_drops_matching_files() {
    let dir = sample_tree();
    let mut config = base_config(dir.path());
    config.plan.exclude = vec!["sub/**".to_string()];
    let report = report_json(&config);

    assert_eq!(report["files"].as_array().unwrap().len(), 1);
    assert_file_entry(&report["files"][0], "a.c", 0, 0, 2);
}

#[test]
fn repeated_runs_are_identical() {
    let dir = sample_tree();
    let config = base_config(dir.path());
    assert_eq!(app::generate_report(&config).unwrap(), app::generate_report(&config).unwrap());
}

#[test]
fn parallel_run_matches_sequential() {
    let dir = TempDir::new("count_loops_parallel");
    for i in 0..12 {
        let body = "void f(int n) { while (n) n--; }\n".repeat(i % 4 + 1).replace("f(", &format!("f{i}_("));
        dir.write_file(&format!("d{}/f{i:02}.c", i % 3), &body);
    }
    let sequential = base_config(dir.path());
    let mut parallel = sequential.clone();
    parallel.report.jobs = 4;

    let seq = app::generate_report(&sequential).unwrap();
    assert_eq!(seq, app::generate_report(&parallel).unwrap());
    assert_totals_consistent(&serde_json::from_str(&seq).unwrap());
}
