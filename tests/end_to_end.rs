//! Runs the `glyph-arm` binary in a scratch directory and checks the console
//! line and the file it leaves behind.

use rexpect::session::spawn_command;
use serde_json::Value;
use std::fs;
use std::process::Command;

const TIMEOUT_MS: Option<u64> = Some(10_000);

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_glyph-arm"));
    command.env_remove("GLYPH_ARM_CONFIG").env("RUST_LOG", "off");
    command
}

#[test]
fn default_run_writes_robot_arm_angles() {
    let dir = tempfile::tempdir().unwrap();
    let mut command = binary();
    command.current_dir(dir.path());

    let mut session = spawn_command(command, TIMEOUT_MS).expect("failed to spawn glyph-arm");
    session
        .exp_string("have been saved to 'robot_arm_angles.json'.")
        .expect("confirmation line not printed");
    session.exp_eof().expect("glyph-arm did not exit");

    let text = fs::read_to_string(dir.path().join("robot_arm_angles.json")).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 88);
    assert_eq!(value["!"].as_array().unwrap().len(), 3);
}

#[test]
fn config_file_overrides_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("arm.json");
    fs::write(
        &config_path,
        r#"{"input": "Hi!", "solver": "two_link", "output": {"path": "custom.json", "layout": "named_steps"}}"#,
    )
    .unwrap();

    let mut command = binary();
    command
        .current_dir(dir.path())
        .env("GLYPH_ARM_CONFIG", &config_path);

    let mut session = spawn_command(command, TIMEOUT_MS).expect("failed to spawn glyph-arm");
    session
        .exp_string("Angles for input 'Hi!' have been saved to 'custom.json'.")
        .expect("confirmation line not printed");
    session.exp_eof().expect("glyph-arm did not exit");

    let value: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("custom.json")).unwrap()).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(value["i"]["move_down"]["theta2"].is_f64());
    assert!(!dir.path().join("robot_arm_angles.json").exists());
}
