//! Tests for manifest functionality.

use super::*;
use crate::error::SubcmdError;
use crate::exit_codes;
use crate::test_support::{manifest, write_manifest};
use std::path::PathBuf;

const SAMPLE: &str = r#"
commands:
  upgrade:
    about: Upgrade everything
    run: apt-get upgrade -y
  repo:
    commands:
      sync:
        run: git pull --ff-only
      status:
        run: "git status --short"
"#;

fn validation_error(yaml: &str) -> String {
    match Manifest::from_yaml(yaml) {
        Err(SubcmdError::ManifestError(message)) => message,
        other => panic!("expected a manifest error, got {other:?}"),
    }
}

#[test]
fn parses_nested_commands() {
    let m = manifest(SAMPLE);

    assert_eq!(m.env_prefix, DEFAULT_ENV_PREFIX);
    assert_eq!(m.commands.len(), 2);

    let upgrade = &m.commands["upgrade"];
    assert!(upgrade.is_terminal());
    assert_eq!(upgrade.about.as_deref(), Some("Upgrade everything"));

    let repo = &m.commands["repo"];
    assert!(!repo.is_terminal());
    assert_eq!(repo.commands.len(), 2);
    assert!(repo.commands["sync"].is_terminal());
}

#[test]
fn custom_env_prefix() {
    let m = manifest("env_prefix: OPS_\ncommands:\n  hi:\n    run: echo hi\n");
    assert_eq!(m.env_prefix, "OPS_");
}

#[test]
fn unknown_fields_are_ignored() {
    let m = manifest("future_field: 1\ncommands:\n  hi:\n    run: echo hi\n    shell: zsh\n");
    assert!(m.commands["hi"].is_terminal());
}

#[test]
fn argv_splits_shell_words() {
    let m = manifest("commands:\n  greet:\n    run: printf '%s %s' \"hello world\" there\n");
    assert_eq!(
        m.commands["greet"].argv().unwrap(),
        vec!["printf".to_string(), "%s %s".to_string(), "hello world".to_string(), "there".to_string()]
    );
}

#[test]
fn argv_of_intermediate_is_empty() {
    let m = manifest(SAMPLE);
    assert!(m.commands["repo"].argv().unwrap().is_empty());
}

#[test]
fn empty_manifest_is_rejected() {
    let message = validation_error("");
    assert!(message.contains("at least one command"));
}

#[test]
fn invalid_yaml_is_rejected() {
    let message = validation_error("commands: [not, a, map");
    assert!(message.contains("failed to parse manifest YAML"));
}

#[test]
fn node_with_run_and_commands_is_rejected() {
    let message = validation_error(
        "commands:\n  repo:\n    run: git\n    commands:\n      sync:\n        run: git pull\n",
    );
    assert!(message.contains("'repo'"));
    assert!(message.contains("not both"));
}

#[test]
fn node_without_action_is_rejected() {
    let message = validation_error("commands:\n  repo:\n    about: nothing here\n");
    assert!(message.contains("must set either 'run' or 'commands'"));
}

#[test]
fn nested_errors_name_the_full_path() {
    let message = validation_error("commands:\n  repo:\n    commands:\n      sync: {}\n");
    assert!(message.contains("'repo sync'"));
}

#[test]
fn flag_shaped_name_is_rejected() {
    let message = validation_error("commands:\n  --help:\n    run: echo help\n");
    assert!(message.contains("must not start with '-'"));
}

#[test]
fn whitespace_in_name_is_rejected() {
    let message = validation_error("commands:\n  \"two words\":\n    run: echo hi\n");
    assert!(message.contains("whitespace"));
}

#[test]
fn blank_run_line_is_rejected() {
    let message = validation_error("commands:\n  noop:\n    run: \"   \"\n");
    assert!(message.contains("empty run line"));
}

#[test]
fn unbalanced_quotes_are_rejected() {
    let message = validation_error("commands:\n  bad:\n    run: echo \"oops\n");
    assert!(message.contains("failed to split run line"));
}

#[test]
fn bad_env_prefix_is_rejected() {
    let message = validation_error("env_prefix: \"MY-FLAGS\"\ncommands:\n  hi:\n    run: echo hi\n");
    assert!(message.contains("env_prefix"));

    let message = validation_error("env_prefix: \"\"\ncommands:\n  hi:\n    run: echo hi\n");
    assert!(message.contains("env_prefix"));
}

#[test]
fn manifest_errors_are_config_errors() {
    let err = Manifest::from_yaml("").unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
}

#[test]
fn yaml_round_trip_preserves_tree() {
    let original = manifest(SAMPLE);
    let yaml = original.to_yaml().unwrap();
    let parsed = Manifest::from_yaml(&yaml).unwrap();
    assert_eq!(original, parsed);
}

#[test]
fn load_reads_file() {
    let (_dir, path) = write_manifest(SAMPLE);
    let m = Manifest::load(&path).unwrap();
    assert_eq!(m.commands.len(), 2);
}

#[test]
fn load_missing_file_fails() {
    let (dir, _path) = write_manifest(SAMPLE);
    let err = Manifest::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read manifest"));
    assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
}

#[test]
fn resolve_path_prefers_flag_then_env_then_default() {
    assert_eq!(
        Manifest::resolve_path(Some("from-flag.yaml"), Some("from-env.yaml")),
        PathBuf::from("from-flag.yaml")
    );
    assert_eq!(
        Manifest::resolve_path(None, Some("from-env.yaml")),
        PathBuf::from("from-env.yaml")
    );
    assert_eq!(
        Manifest::resolve_path(Some(""), Some("from-env.yaml")),
        PathBuf::from("from-env.yaml")
    );
    assert_eq!(
        Manifest::resolve_path(None, Some("")),
        PathBuf::from(DEFAULT_MANIFEST_FILE)
    );
    assert_eq!(Manifest::resolve_path(None, None), PathBuf::from(DEFAULT_MANIFEST_FILE));
}
