// End-to-end runs of the gapscout binary

use std::process::{Command, Output};

fn gapscout(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gapscout"))
        .args(args)
        .env_remove("DATAFORSEO_LOGIN")
        .env_remove("DATAFORSEO_PASSWORD")
        .output()
        .expect("failed to run gapscout")
}

#[test]
fn test_analyze_json_on_stdout_is_parseable() {
    // Nothing listens on the discard port, so every keyword falls back
    let output = gapscout(&[
        "analyze",
        "--team",
        "Hershey Bears",
        "--email",
        "me@example.com",
        "--format",
        "json",
        "--login",
        "user",
        "--password",
        "secret",
        "--base-url",
        "http://127.0.0.1:9/v3",
        "--delay-ms",
        "0",
        "--timeout-ms",
        "500",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["run"]["teamName"], "Hershey Bears");
    assert_eq!(value["run"]["meta"]["dataQuality"], "Simulated Gap Analysis");
    assert_eq!(value["run"]["meta"]["keywordsAnalyzed"], 8);
    assert!(value["run"]["analyses"].as_array().unwrap().len() <= 3);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Analyzing search gaps for"));
}

#[test]
fn test_rules_json_on_stdout_is_parseable() {
    let output = gapscout(&["rules"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["franchises"][0]["name"], "Hershey Bears");
    assert_eq!(value["exclusions"][0], "chicagobears");
}

#[test]
fn test_analyze_without_credentials_fails() {
    let output = gapscout(&["analyze", "--team", "Hershey Bears", "--email", "me@example.com"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Analysis failed"));
}

#[test]
fn test_analyze_blank_team_reports_input_error() {
    let output = gapscout(&["analyze", "--team", "   ", "--email", "me@example.com"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Team name is required"));
}
