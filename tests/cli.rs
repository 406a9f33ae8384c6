use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vectorpad_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vectorpad").expect("binary exists");
    // Keep the user's real config out of test runs.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent-config-home");
    cmd
}

#[test]
fn help_prints_usage() {
    vectorpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vector drawing documents: inspect, export, create",
        ));
}

#[test]
fn new_creates_an_empty_document() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("drawing.json");

    vectorpad_cmd()
        .args(["new", doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("created "));

    let raw = std::fs::read_to_string(&doc).unwrap();
    assert!(raw.contains("\"objects\""));
    assert!(raw.contains("\"images\""));
}

#[test]
fn info_summarizes_object_counts() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("drawing.json");
    std::fs::write(
        &doc,
        r##"{
            "objects": [
                {"type": "line", "coords": [0.0, 0.0, 10.0, 10.0], "color": "#ff0000", "width": 2},
                {"type": "rectangle", "coords": [5.0, 5.0, 20.0, 20.0], "color": "", "outline": "#000000", "width": 1},
                {"type": "rectangle", "coords": [30.0, 5.0, 45.0, 20.0], "color": "#00ff00", "outline": "", "width": 1}
            ],
            "images": []
        }"##,
    )
    .unwrap();

    vectorpad_cmd()
        .args(["info", doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("objects: 3"))
        .stdout(predicate::str::contains("line: 1"))
        .stdout(predicate::str::contains("rectangle: 2"));
}

#[test]
fn info_reports_skipped_records() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("drawing.json");
    std::fs::write(
        &doc,
        r##"{
            "objects": [
                {"type": "line", "coords": [0.0, 0.0, 10.0, 10.0], "color": "#ff0000", "width": 1},
                {"type": "polygon", "coords": [1.0, 2.0, 3.0], "color": "", "outline": "#000000", "width": 1}
            ],
            "images": []
        }"##,
    )
    .unwrap();

    vectorpad_cmd()
        .args(["info", doc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("objects: 1"))
        .stdout(predicate::str::contains("skipped records: 1"));
}

#[test]
fn info_fails_on_missing_file() {
    vectorpad_cmd()
        .args(["info", "/no/such/drawing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn export_writes_a_png_with_requested_size() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("drawing.json");
    let png = temp.path().join("out.png");
    std::fs::write(
        &doc,
        r##"{
            "objects": [
                {"type": "oval", "coords": [10.0, 10.0, 50.0, 40.0], "color": "#0000ff", "outline": "#000000", "width": 2}
            ],
            "images": []
        }"##,
    )
    .unwrap();

    vectorpad_cmd()
        .args([
            "export",
            doc.to_str().unwrap(),
            "--output",
            png.to_str().unwrap(),
            "--width",
            "64",
            "--height",
            "48",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote "));

    let (width, height) = image::image_dimensions(&png).unwrap();
    assert_eq!((width, height), (64, 48));
}
