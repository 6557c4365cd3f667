//! End-to-end command runs against temporary files.

use clap::Parser;
use gateink_app::{AppError, Cli, execute};
use std::fs;

fn run(args: &[&str]) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(std::iter::once("gateink").chain(args.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    execute(&cli.command, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_render_writes_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circuit.svg");
    let stdout = run(&["render", "AB+A'C", "-o", path.to_str().unwrap()]).unwrap();
    assert!(stdout.is_empty());

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"height="450""#));
    assert!(svg.contains(">AND</text>"));
    assert!(svg.contains(">OR</text>"));
}

#[test]
fn test_render_with_hover_reports_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hover.svg");

    // First learn where the output wire is, then point at it.
    let wires: serde_json::Value = serde_json::from_str(&run(&["wires", "AB"]).unwrap()).unwrap();
    let output = wires["wire_paths"]
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["id"] == "output")
        .unwrap();
    let x = (output["points"][0]["x"].as_f64().unwrap() + output["points"][1]["x"].as_f64().unwrap()) / 2.0;
    let y = output["points"][0]["y"].as_f64().unwrap();
    let hover = format!("{x},{y}");

    let stdout = run(&["render", "AB", "-o", path.to_str().unwrap(), "--hover", &hover]).unwrap();
    assert_eq!(stdout.trim(), "Hovered: Output");
    assert!(fs::read_to_string(&path).unwrap().contains("drop-shadow"));
}

#[test]
fn test_render_to_stdout_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("gateink.json");
    fs::write(
        &config,
        r#"{"layout": {"min_height": 640}, "theme": {"background": {"r": 255, "g": 255, "b": 255, "a": 255}}}"#,
    )
    .unwrap();

    let svg = run(&["render", "(A+B)(A'+C)", "--config", config.to_str().unwrap()]).unwrap();
    assert!(svg.contains(r#"height="640""#));
    assert!(svg.contains(r##"fill="#ffffff""##));
    assert!(svg.contains("POS circuit: (A+B)(A&apos;+C)"));
}

#[test]
fn test_render_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.svg");
    let err = run(&["render", "AB", "-o", path.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, AppError::Render(_)));
}

#[test]
fn test_bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.json");
    fs::write(&config, r#"{"layout": {"term_spacing": 0}}"#).unwrap();
    let err = run(&["wires", "AB", "--config", config.to_str().unwrap()]).unwrap_err();
    assert!(err.to_string().contains("term_spacing"));
}

#[test]
fn test_parse_and_table() {
    let parsed: serde_json::Value = serde_json::from_str(&run(&["parse", "(a+b)*(a'+c)"]).unwrap()).unwrap();
    assert_eq!(parsed["form"], "ProductOfSums");
    assert_eq!(parsed["canonical"], "(A+B)(A'+C)");
    assert_eq!(parsed["terms"].as_array().unwrap().len(), 2);

    let table = run(&["table", "(A+B)(A'+C)"]).unwrap();
    // (A+B)(A'+C) is true for 010, 011, 101, 111.
    assert!(table.contains("minterms: 2, 3, 5, 7"));
    assert!(table.contains("maxterms: 0, 1, 4, 6"));
}

#[test]
fn test_invalid_expression() {
    let err = run(&["table", "123"]).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    let err = run(&["render", ""]).unwrap_err();
    assert_eq!(err.to_string(), "Enter a boolean expression");
}
