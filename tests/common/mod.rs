//! Shared helpers for fmview CLI tests.
//!
//! - `TestEnv`: a temp project directory plus a runner for the built binary
//! - Fixtures: feature models and configurations reused across tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Car model: prefixed names, a description, an `alt` group and declared
/// mandatory features.
pub const CAR_MODEL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<featureModel>
  <properties/>
  <struct>
    <and abstract="true" mandatory="true" name="Car">
      <description>A configurable car</description>
      <and mandatory="true" name="A_1_Engine">
        <alt name="B_1_Fuel">
          <feature name="C_1_Petrol"/>
          <feature name="C_2_Diesel"/>
        </alt>
        <feature name="B_2_Turbo"/>
      </and>
      <feature name="A_2_Radio"/>
      <feature mandatory="true" name="A_3_Wheels"/>
    </and>
  </struct>
  <constraints/>
</featureModel>
"#;

/// `struct` with a mandatory `Base` and an optional `Ext`
pub const BASE_MODEL: &str = r#"<featureModel>
  <struct>
    <feature mandatory="true" name="Base"/>
    <feature name="Ext"/>
  </struct>
</featureModel>
"#;

pub const CAR_DEFAULT_CONFIG: &str = "C_1_Petrol\nA_3_Wheels\n";
pub const CAR_SPORT_CONFIG: &str = "C_2_Diesel\nB_2_Turbo\nA_3_Wheels\nA_2_Radio\n";

/// Result of running the fmview binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Project with `model.xml` (car model) and two car configurations
    pub fn car() -> Self {
        let env = Self::new();
        env.write("model.xml", CAR_MODEL);
        env.write("car.default.config", CAR_DEFAULT_CONFIG);
        env.write("sport.config", CAR_SPORT_CONFIG);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Writes `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read output")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.root.path(), args, env_vars)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn run_in(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fmview"));
    cmd.current_dir(cwd)
        .args(args)
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env("FMVIEW_USER_CONFIG_PATH", cwd.join("no-user-settings.toml"))
        .env_remove("RUST_LOG");
    for key in [
        "FMVIEW_MODEL",
        "FMVIEW_FONT_SIZE",
        "FMVIEW_MAX_DEPTH",
        "FMVIEW_DIFF_TOLERANCE",
        "FMVIEW_CORPUS",
        "FMVIEW_COLOR",
    ] {
        cmd.env_remove(key);
    }
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("failed to execute fmview");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
