use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "tokokue-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_tokokue-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("random-shopper"));
}

#[test]
fn cli_runs_logic_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_tokokue-tester");
    let output_path = temp_path("logic");
    let status = Command::new(exe)
        .args([
            "--scenarios",
            "smoke,checkout,random-shopper",
            "--seeds",
            "1,2",
            "--iterations",
            "3",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let json_end = content.rfind(']').expect("json array");
    let results: serde_json::Value =
        serde_json::from_str(&content[..=json_end]).expect("parse report");
    assert_eq!(results.as_array().map(Vec::len), Some(6));
}

#[test]
fn cli_runs_with_unknown_browser_and_json_report() {
    let exe = env!("CARGO_BIN_EXE_tokokue-tester");
    let output_path = temp_path("browser");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "unknown",
            "--report",
            "json",
            "--scenarios",
            "smoke",
            "--seeds",
            "1",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Toko Kue Automated Tester"));
    assert!(stderr.contains("Unknown browser"));
}

#[test]
fn cli_rejects_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_tokokue-tester");
    let output = Command::new(exe)
        .args(["--seeds", "strawberry"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
