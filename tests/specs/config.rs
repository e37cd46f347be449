//! Behavioral specs for `jscs-task config` (resolved options as JSON).

use crate::prelude::*;
use serde_json::json;

#[test]
fn explicit_config_file() {
    let json = config()
        .on("configs")
        .args(&["--config", "example.json"])
        .passes()
        .json();

    assert_eq!(json, json!({"example": true}));
}

/// > .jscsrc is relaxed JSON: comments and trailing commas are accepted
#[test]
fn discovered_rc_file_with_comments() {
    let json = config().on("configs").passes().json();

    assert_eq!(
        json,
        json!({"example": true, "requireCurlyBraces": ["if", "else"]})
    );
}

#[test]
fn empty_config_file_exits_2() {
    config()
        .on("configs")
        .args(&["--config", "empty.json"])
        .exits(2)
        .stderr_has(r#""empty.json" config is empty"#);
}

#[test]
fn missing_config_file_exits_2() {
    config()
        .on("configs")
        .args(&["--config", "not-existed"])
        .exits(2)
        .stderr_has(r#"config file "not-existed" was not found"#);
}

/// > Inline options win over file options; meta-options never reach the checker
#[test]
fn inline_options_merge_over_the_file() {
    let json = config()
        .on("configs")
        .args(&[
            "--config",
            "merge.json",
            "-O",
            r#"requireCurlyBraces=["if"]"#,
            "-O",
            "validateIndentation=2",
        ])
        .passes()
        .json();

    assert_eq!(
        json,
        json!({
            "requireCurlyBraces": ["if"],
            "disallowMultipleVarDecl": true,
            "validateIndentation": 2
        })
    );
}

#[test]
fn package_json_config_key() {
    let json = config().on("package-config").passes().json();

    assert_eq!(
        json,
        json!({"example": "from-package", "validateIndentation": 4})
    );
}

#[test]
fn package_json_is_read_from_lib_subdirectory() {
    let json = config()
        .pwd(fixture("package-config").join("lib"))
        .passes()
        .json();

    assert_eq!(json["example"], "from-package");
}

#[test]
fn no_config_uses_inline_options_only() {
    let json = config()
        .on("configs")
        .args(&["--no-config", "-O", "x=[1,2]"])
        .passes()
        .json();

    assert_eq!(json, json!({"x": [1, 2]}));
}

#[test]
fn no_config_and_no_options_exits_2() {
    config()
        .on("configs")
        .args(&["--no-config"])
        .exits(2)
        .stderr_has("neither a config file nor inline options were found");
}

#[test]
fn yaml_config_file() {
    let temp = Project::empty();
    temp.file(
        ".jscs.yaml",
        "requireCurlyBraces:\n  - if\nvalidateIndentation: 4\n",
    );

    let json = config().pwd(temp.path()).passes().json();

    assert_eq!(
        json,
        json!({"requireCurlyBraces": ["if"], "validateIndentation": 4})
    );
}

#[test]
fn target_options_from_manifest() {
    let temp = Project::empty();
    temp.file(".jscsrc", r#"{"requireCurlyBraces": ["if"]}"#);
    temp.manifest(
        r#"
[options]
validateIndentation = 2

[targets.lib]
files = ["lib"]

[targets.lib.options]
reporter = "inline"
disallowKeywords = ["with"]
"#,
    );

    let json = config()
        .pwd(temp.path())
        .args(&["--target", "lib", "-O", "validateIndentation=4"])
        .passes()
        .json();

    assert_eq!(
        json,
        json!({
            "requireCurlyBraces": ["if"],
            "validateIndentation": 4,
            "disallowKeywords": ["with"]
        })
    );
}

#[test]
fn unknown_target_exits_2() {
    let temp = Project::empty();
    temp.manifest("[targets.lib]\nfiles = [\"lib\"]\n");

    config()
        .pwd(temp.path())
        .args(&["--target", "docs"])
        .exits(2)
        .stderr_has("unknown target `docs`");
}
