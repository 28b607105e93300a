//! Settings file resolution and warnings

mod common;

use common::*;

#[test]
fn unknown_keys_warn_but_do_not_fail() {
    let env = TestEnv::new();
    env.write("model.xml", BASE_MODEL);
    env.write("fmview.toml", "[render]\nfont_sise = 12\n");

    let result = env.run(&["dump"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("Unknown settings keys"));
    assert!(result.stderr.contains("unknown key 'font_sise' in"));
    assert!(result.stderr.contains("did you mean 'font_size'?"));
}

#[test]
fn settings_flag_selects_another_file() {
    let env = TestEnv::new();
    env.write("models/base.xml", BASE_MODEL);
    env.write("alt.toml", "[model]\npath = \"models/base.xml\"\n");

    let result = env.run(&["dump", "--settings", "alt.toml"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("feature Base"));
}

#[test]
fn missing_settings_flag_file_is_fatal() {
    let env = TestEnv::new();

    let result = env.run(&["dump", "--settings", "nope.toml"]);

    assert_eq!(result.exit_code, 1);
}

#[test]
fn invalid_settings_are_fatal_when_named() {
    let env = TestEnv::new();
    env.write("bad.toml", "[render]\nfont_size = \"large\"\n");

    let result = env.run(&["dump", "--settings", "bad.toml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid settings in bad.toml"));
}

#[test]
fn user_settings_apply_without_project_file() {
    let env = TestEnv::new();
    env.write("models/base.xml", BASE_MODEL);
    let user = env.write("home/config.toml", "[model]\npath = \"models/base.xml\"\n");

    let result = env.run_with_env(&["dump"], &[("FMVIEW_USER_CONFIG_PATH", user.to_str().unwrap())]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("feature Ext"));
}

#[test]
fn console_prefix_stripping_is_configurable() {
    let env = TestEnv::car();
    env.write("fmview.toml", "[render]\nstrip_prefix_console = true\nconnect_char = \"=\"\n");

    let result = env.run(&["render", "car.default.config", "--no-svg"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "Car\n|===Engine\n|   |===Fuel\n|   |   |===Petrol\n|===Wheels\n"
    );
}
