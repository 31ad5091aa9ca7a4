//! バイナリの入出力テスト
//!
//! 標準出力には常にJSONオブジェクトが1つだけ出ることを確認する

use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

fn run(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_garment-scan"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("GARMENT_SCAN_MODEL")
        .output()
        .expect("バイナリ実行失敗")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("標準出力がJSONではない")
}

#[test]
fn test_no_argument_is_usage_error() {
    let home = tempdir().unwrap();
    let output = run(&home, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"error":"image path is required"}"#
    );
}

#[test]
fn test_missing_image_is_json_error() {
    let home = tempdir().unwrap();
    let output = run(&home, &["/nonexistent/laundry.jpg"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("/nonexistent/laundry.jpg"));
}

#[test]
fn test_missing_model_is_json_error() {
    let home = tempdir().unwrap();
    let image = home.path().join("laundry.png");
    std::fs::write(&image, b"dummy").unwrap();
    let model = home.path().join("missing.rten");

    let output = run(
        &home,
        &[image.to_str().unwrap(), "--model", model.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("missing.rten"));
}

#[test]
fn test_labels_mode() {
    let home = tempdir().unwrap();
    let labels = home.path().join("labels.json");
    std::fs::write(&labels, r#"["red shirt", "blue jean", "red shirt"]"#).unwrap();

    let output = run(&home, &["--labels", labels.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["fabric"], "Mixed garments");
    assert_eq!(json["count"], 3);
    assert_eq!(json["price"], 50);
    assert_eq!(json["eco_score"], "94%");
    assert_eq!(json["items"][0]["type"], "shirt");
    assert_eq!(json["items"][1]["price_per_piece"], 20);
    assert_eq!(json["raw_items"].as_array().unwrap().len(), 3);
}

#[test]
fn test_output_file() {
    let home = tempdir().unwrap();
    let labels = home.path().join("labels.json");
    std::fs::write(&labels, "[]").unwrap();
    let out = home.path().join("result").join("scan.json");

    let output = run(
        &home,
        &["--labels", labels.to_str().unwrap(), "-o", out.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let content = std::fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["price"], 12);
    assert_eq!(json["items"][0]["type"], "other");
}

#[test]
fn test_show_config() {
    let home = tempdir().unwrap();
    let output = run(&home, &["--show-config", "--model", "fashion.rten"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["model_path"], "fashion.rten");
    assert_eq!(json["input_size"], 640);
}

#[test]
fn test_bad_confidence_value_is_json_error() {
    let home = tempdir().unwrap();
    let output = run(&home, &["photo.jpg", "--confidence", "abc"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("--confidence"));
}

#[test]
fn test_unknown_flag_is_json_error() {
    let home = tempdir().unwrap();
    let output = run(&home, &["photo.jpg", "--no-such-flag"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("--no-such-flag"));
}

#[test]
fn test_help_is_not_an_error() {
    let home = tempdir().unwrap();
    let output = run(&home, &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("garment-scan"));
}
