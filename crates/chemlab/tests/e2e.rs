//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn chemlab() -> Command {
    let mut cmd = Command::cargo_bin("chemlab").expect("binary not found");
    cmd.env_remove("CHEMLAB_SERVER").env("NO_COLOR", "1");
    cmd
}

/// A local port with nothing listening on it.
fn dead_server() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}")
}

#[test]
fn help_flag() {
    chemlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chemistry"));
}

#[test]
fn run_help_describes_experiments() {
    chemlab()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mix an acid and a base"))
        .stdout(predicate::str::contains("balloon of gas"));
}

#[test]
fn version_flag() {
    chemlab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chemlab"));
}

#[test]
fn acid_base_defaults_neutral() {
    chemlab()
        .args(["run", "acid-base", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.00"));
}

#[test]
fn acid_base_panel() {
    chemlab()
        .args(["run", "acid-base", "--acid-m", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acidic"));
}

#[test]
fn sulfuric_acid_doubles_equivalents() {
    chemlab()
        .args(["run", "acid-base", "--acid", "H2SO4", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"acidic\""));
}

#[test]
fn dilution_json() {
    let out = chemlab()
        .args(["run", "dilution", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["experiment"], "dilution");
    assert!((value["c2"].as_f64().unwrap() - 0.1).abs() < 1e-12);
    assert_eq!(value["solute"], "Salt Water");
}

#[test]
fn gas_law_quiet() {
    chemlab()
        .args(["run", "gas-law", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12.23"));
}

#[test]
fn zero_temperature_is_invalid_input() {
    chemlab()
        .args(["run", "gas-law", "--temperature", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("T must be greater than zero"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn negative_volume_is_invalid_input() {
    chemlab()
        .args(["run", "dilution", "--v2", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("v2"));
}

#[test]
fn unknown_acid_rejected() {
    chemlab()
        .args(["run", "acid-base", "--acid", "HF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HF"));
}

#[test]
fn unreachable_server_exit_code() {
    chemlab()
        .args(["--server", &dead_server(), "--timeout", "2s", "run", "gas-law"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("service unavailable"));
}

#[test]
fn server_from_env() {
    chemlab()
        .env("CHEMLAB_SERVER", dead_server())
        .args(["run", "dilution"])
        .assert()
        .code(3);
}

#[test]
fn invalid_input_checked_before_server() {
    chemlab()
        .args(["--server", &dead_server(), "run", "gas-law", "--pressure", "0"])
        .assert()
        .code(2);
}

#[test]
fn bad_timeout_is_config_error() {
    chemlab()
        .args(["--server", &dead_server(), "--timeout", "soon", "run", "gas-law"])
        .assert()
        .code(4);
}

#[test]
fn examples_single_kind() {
    chemlab()
        .args(["examples", "gas-law"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"T\": 298"));
}

#[test]
fn examples_all_kinds() {
    let out = chemlab()
        .arg("examples")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn completion_bash() {
    chemlab()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chemlab"));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gas.json");
    chemlab()
        .args(["run", "gas-law", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"experiment\": \"gas_law\""));
}
