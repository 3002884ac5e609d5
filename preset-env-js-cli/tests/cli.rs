use assert_cmd::Command;
use serde_json::json;
use serde_json::Value;
use std::time::Duration;

fn preset_env_js_cli() -> Command {
  let mut cmd = Command::cargo_bin("preset-env-js").unwrap();
  cmd.timeout(Duration::from_secs(5));
  cmd
}

fn stdout_of(cmd: &mut Command) -> String {
  let assert = cmd.assert().success().code(0);
  assert!(
    assert.get_output().stderr.is_empty(),
    "expected stderr to be empty, got: {}",
    String::from_utf8_lossy(&assert.get_output().stderr)
  );
  String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn targets_json_output_is_prettified() {
  let stdout = stdout_of(
    preset_env_js_cli()
      .arg("targets")
      .arg("--json")
      .write_stdin(r#"{"chrome": "60.0.0", "ie": 11, "safari": "tp", "firefox": "60.5.0"}"#),
  );
  let value: Value = serde_json::from_str(&stdout).expect("stdout to be valid JSON");
  assert_eq!(
    value,
    json!({"chrome": "60", "ie": 11, "safari": "tp", "firefox": "60.5"})
  );
}

#[test]
fn targets_listing() {
  let stdout = stdout_of(
    preset_env_js_cli()
      .arg("targets")
      .write_stdin(r#"{"node": "8.10.0"}"#),
  );
  assert_eq!(stdout, "Using targets:\n{\n  \"node\": \"8.10\"\n}\n");
}

#[test]
fn invalid_targets_fail() {
  let assert = preset_env_js_cli()
    .arg("targets")
    .write_stdin("[]")
    .assert()
    .failure()
    .code(1);
  let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
  assert!(stderr.contains("invalid targets"), "got: {stderr}");
}

#[test]
fn lowest_prefers_concrete_over_unreleased() {
  assert_eq!(
    stdout_of(preset_env_js_cli().args(["lowest", "tp", "11.1", "--env", "safari"])),
    "11.1\n"
  );
  assert_eq!(
    stdout_of(preset_env_js_cli().args(["lowest", "64", "60", "--env", "chrome"])),
    "60\n"
  );
}

#[test]
fn config_file_replaces_labels() {
  let dir = std::env::temp_dir().join(format!("preset-env-js-cli-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("config.json");
  std::fs::write(&path, r#"{"unreleasedLabels": {"chrome": "unreleased"}}"#).unwrap();

  let stdout = stdout_of(preset_env_js_cli().arg("--config").arg(&path).args([
    "lowest",
    "unreleased",
    "64",
    "--env",
    "chrome",
  ]));
  assert_eq!(stdout, "64\n");
  std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn version_helpers() {
  assert_eq!(stdout_of(preset_env_js_cli().args(["semverify", "2.5"])), "2.5.0\n");
  assert_eq!(stdout_of(preset_env_js_cli().args(["prettify", "6.0.1"])), "6.0.1\n");
  assert_eq!(stdout_of(preset_env_js_cli().args(["prettify", "6.1.0"])), "6.1\n");
}

#[test]
fn import_statements() {
  assert_eq!(
    stdout_of(preset_env_js_cli().args(["import", "es.map", "--regenerator"])),
    "import \"core-js/modules/es.map\";\nimport \"regenerator-runtime/runtime\";\n"
  );
  assert_eq!(
    stdout_of(preset_env_js_cli().args(["import", "es.map", "--style", "require"])),
    "require(\"core-js/modules/es.map\");\n"
  );
}

#[test]
fn unknown_import_style_is_rejected() {
  preset_env_js_cli()
    .args(["import", "es.map", "--style", "dynamic"])
    .assert()
    .failure()
    .code(2);
}
