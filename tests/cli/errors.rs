//! Tests for configuration errors, flags, and commands that need no backend.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_verbs() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for verb in ["put", "get", "delete", "put-batch", "create-batch-file"] {
        assert!(out.contains(verb), "help missing {}: {}", verb, out);
    }
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("secrets-vault"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_put_requires_key_and_value_flags() {
    let t = Test::configured();
    assert_failure(&t.cmd().args(["put", "-k", "db-pass"]).output().unwrap());
    assert_failure(&t.cmd().args(["put", "-v", "x"]).output().unwrap());
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("secrets-vault"));
}

#[test]
fn test_get_without_settings_reports_missing_bucket() {
    let t = Test::new();

    t.cmd()
        .args(["get", "-k", "db-pass"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("✗ bucket name is not set")
                .and(predicate::str::contains("→ set bucket_name")),
        );
}

#[test]
fn test_put_without_key_id_reports_missing_key() {
    let t = Test::new();
    t.write_settings(&t.settings("", PREFIX));

    let output = t.put("db-pass", "hunter2");
    assert_failure(&output);
    assert_stderr_contains(&output, "KMS key id is not set");
}

#[test]
fn test_blank_bucket_from_env_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECRETS_VAULT_BUCKET_NAME", "   ")
        .args(["get", "-k", "db-pass"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "bucket name is not set");
}

#[test]
fn test_malformed_settings() {
    let t = Test::new();
    t.write_settings("[vault\nbucket_name = ");

    let output = t.get("db-pass");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_missing_explicit_settings_file() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "does-not-exist.toml", "get", "-k", "db-pass"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config file");
}

#[test]
fn test_unknown_store() {
    let t = Test::new();
    t.write_settings("[vault]\nbucket_name = 'b'\nstore = 'gcs'\n");

    let output = t.get("db-pass");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown store: gcs");
}

#[cfg(not(feature = "aws"))]
#[test]
fn test_s3_store_requires_aws_feature() {
    let t = Test::new();
    t.write_settings("[vault]\nkms_key_id = 'k'\nbucket_name = 'b'\n");

    let output = t.get("db-pass");
    assert_failure(&output);
    assert_stderr_contains(&output, "support not compiled");
    assert_stderr_contains(&output, "--features aws");
}

#[test]
fn test_create_batch_file() {
    let t = Test::new();
    let path = t.dir.path().join("batch.json");

    let output = t.create_batch_file(&path, false);
    assert_success(&output);
    assert_stderr_contains(&output, "created");

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    for record in records {
        assert_eq!(record["key"], "");
        assert_eq!(record["value"], "");
    }
}

#[test]
fn test_create_batch_file_refuses_to_clobber() {
    let t = Test::new();
    let path = t.write_file("batch.json", "keep me");

    let output = t.create_batch_file(&path, false);
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

    let output = t.create_batch_file(&path, true);
    assert_success(&output);
    assert_stderr_contains(&output, "overwrote");
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"key\""));
}

#[test]
fn test_prompt_flag_without_terminal_does_not_block() {
    let t = Test::new();
    let path = t.dir.path().join("batch.json");

    let output = t
        .cmd()
        .arg("-p")
        .arg("create-batch-file")
        .arg("-f")
        .arg(&path)
        .output()
        .unwrap();
    assert_success(&output);
}
