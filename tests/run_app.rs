use std::fs;
use std::path::Path;

use clap::Parser;
use euler_circuit::app::{run_app, AppError, Cli};
use tempfile::TempDir;

const SMALL: &str = "\
3
0 1 1
1 0 1
1 1 0
3
0 1 0
1 0 1
0 1 0
2 0 2
2 1
";

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("euler-circuit").chain(args.iter().copied())).unwrap()
}

#[test]
fn counts_circuits_in_a_file() {
    let dir = TempDir::new().unwrap();
    let small = write(dir.path(), "small", SMALL);

    let summary = run_app(cli(&[small.as_str(), "--expected", "2", "--quiet"])).unwrap();
    assert_eq!(summary.total_graphs(), 3);
    assert_eq!(summary.total_valid_circuits(), 2);
    assert_eq!(summary.score(), (1, 1));
}

#[test]
fn writes_report_file() {
    let dir = TempDir::new().unwrap();
    let small = write(dir.path(), "small", SMALL);
    let report_path = dir.path().join("report.txt");
    let log_path = dir.path().join("euler.log");

    run_app(cli(&[
        small.as_str(),
        "--connectivity",
        "--output",
        report_path.to_str().unwrap(),
        "--log-file",
        log_path.to_str().unwrap(),
    ]))
    .unwrap();

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Graph has 3 vertices, and 3 edges."));
    assert!(report.contains("0 1 2 0"));
    assert!(report.contains("Graph has no Eulerian circuit"));
    assert!(report.contains("Graph is connected"));
    assert!(report.contains("Eulerian circuits found: 2 in 3 graph(s)"));
    assert!(report.trim_end().ends_with("Total: 3 graph(s), 2 valid Eulerian circuit(s)."));

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("[STEP 2] Searching for an Eulerian circuit..."));
}

#[test]
fn random_batch_is_processed() {
    let summary = run_app(cli(&[
        "--random",
        "4",
        "--max-parallel",
        "2",
        "--count",
        "5",
        "--seed",
        "11",
        "--quiet",
    ]))
    .unwrap();
    assert_eq!(summary.sources.len(), 1);
    assert_eq!(summary.total_graphs(), 5);
    assert_eq!(summary.sources[0].expected, None);
}

#[test]
fn malformed_graph_aborts() {
    let dir = TempDir::new().unwrap();
    let bad = write(dir.path(), "bad", "2 0 1 0 0\n");

    match run_app(cli(&[bad.as_str(), "--quiet"])) {
        Err(AppError::MalformedGraph { index, .. }) => assert_eq!(index, 0),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope").display().to_string();
    assert!(matches!(
        run_app(cli(&[missing.as_str(), "--quiet"])),
        Err(AppError::InvalidPath(_))
    ));
}

#[test]
fn nothing_to_do_is_rejected() {
    assert!(matches!(
        run_app(cli(&["--quiet"])),
        Err(AppError::InvalidArguments(_))
    ));
}

#[test]
fn too_many_expectations_are_rejected() {
    let dir = TempDir::new().unwrap();
    let small = write(dir.path(), "small", SMALL);
    assert!(matches!(
        run_app(cli(&[small.as_str(), "-e", "1", "-e", "2", "--quiet"])),
        Err(AppError::InvalidArguments(_))
    ));
}
