//! Tests for put, get, and delete through the CLI.
//!
//! Needs the mock KMS: `cargo test --features test-kms`.

#![cfg(feature = "test-kms")]

use crate::support::*;

#[test]
fn test_put_get_roundtrip() {
    let t = Test::configured();
    for (key, value) in STANDARD_SECRETS {
        assert_roundtrip(&t, key, value);
    }
}

#[test]
fn test_put_writes_ciphertext_at_object_key() {
    let t = Test::configured();

    assert_success(&t.put("db-pass", "hunter2"));

    let blob = std::fs::read(t.object_path("app/db-pass")).unwrap();
    assert!(!blob.is_empty());
    assert!(!String::from_utf8_lossy(&blob).contains("hunter2"));
}

#[test]
fn test_put_reports_success() {
    let t = Test::configured();

    let output = t.put("db-pass", "hunter2");
    assert_success(&output);
    assert_stderr_contains(&output, "stored db-pass");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_key_is_trimmed() {
    let t = Test::configured();

    assert_success(&t.put("  db-pass ", "hunter2"));
    assert!(t.object_path("app/db-pass").exists());

    let output = t.get("db-pass");
    assert_success(&output);
    assert_eq!(stdout(&output), "hunter2\n");
}

#[test]
fn test_prefix_without_separator() {
    let t = Test::with_prefix("app");

    assert_success(&t.put("db-pass", "hunter2"));
    assert!(t.object_path("appdb-pass").exists());
}

#[test]
fn test_value_is_stored_verbatim() {
    let t = Test::configured();
    assert_roundtrip(&t, "spaced", "  leading and trailing  ");
    assert_roundtrip(&t, "unicode", "pässwörd-🔑");
    assert_roundtrip(&t, "dashed", "-starts-with-dash");
}

#[test]
fn test_put_overwrites() {
    let t = Test::configured();
    assert_success(&t.put("db-pass", "first"));
    assert_success(&t.put("db-pass", "second"));

    let output = t.get("db-pass");
    assert_eq!(stdout(&output), "second\n");
}

#[test]
fn test_empty_value_rejected_without_writing() {
    let t = Test::configured();

    let output = t.put("db-pass", "");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret value cannot be empty");
    assert_bucket_untouched(&t);
}

#[test]
fn test_blank_key_rejected() {
    let t = Test::configured();

    let output = t.put("   ", "hunter2");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret key cannot be empty");

    let output = t.get("");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret key cannot be empty");
}

#[test]
fn test_get_missing() {
    let t = Test::configured();

    let output = t.get("nope");
    assert_failure(&output);
    assert_stderr_contains(&output, "object not found");
    assert_stderr_contains(&output, "app/nope");
}

#[test]
fn test_get_and_delete_without_key_id() {
    let t = Test::configured();
    assert_success(&t.put("db-pass", "hunter2"));

    t.write_settings(&t.settings("", PREFIX));

    let output = t.get("db-pass");
    assert_success(&output);
    assert_eq!(stdout(&output), "hunter2\n");
    assert_success(&t.delete("db-pass"));

    let output = t.put("db-pass", "again");
    assert_failure(&output);
    assert_stderr_contains(&output, "KMS key id is not set");
}

#[test]
fn test_delete() {
    let t = Test::configured();
    assert_success(&t.put("db-pass", "hunter2"));

    let output = t.delete("db-pass");
    assert_success(&output);
    assert_stderr_contains(&output, "deleted db-pass");
    assert!(!t.object_path("app/db-pass").exists());

    assert_failure(&t.get("db-pass"));
}

#[test]
fn test_delete_never_written_succeeds() {
    let t = Test::configured();
    assert_success(&t.delete("never-written"));
    assert_success(&t.delete("never-written"));
}

#[test]
fn test_region_flag_accepted() {
    let t = Test::configured();

    let output = t
        .cmd()
        .args(["--region", "eu-west-1", "put", "-k", "db-pass", "-v", "x"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.cmd().args(["-r", "eu-west-1", "get", "-k", "db-pass"]).output().unwrap();
    assert_success(&output);
}

#[test]
fn test_settings_from_env_only() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECRETS_VAULT_KMS_KEY_ID", KMS_KEY)
        .env("SECRETS_VAULT_BUCKET_NAME", BUCKET)
        .env("SECRETS_VAULT_PREFIX", "env/")
        .env("SECRETS_VAULT_STORE", "fs")
        .env("SECRETS_VAULT_STORE_ROOT", t.store.path())
        .args(["put", "-k", "db-pass", "-v", "hunter2"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.object_path("env/db-pass").exists());
}

#[test]
fn test_explicit_config_path() {
    let t = Test::new();
    let path = t.write_file("custom.toml", &t.settings(KMS_KEY, "custom/"));

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["put", "-k", "db-pass", "-v", "hunter2"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.object_path("custom/db-pass").exists());
}

#[test]
fn test_similar_keys_do_not_overwrite_each_other() {
    let t = Test::configured();
    assert_success(&t.put("a/b", "first"));
    assert_success(&t.put("a//b", "second"));
    assert_success(&t.put("db", "short"));
    assert_success(&t.put("db/pass", "long"));

    assert_eq!(stdout(&t.get("a/b")), "first\n");
    assert_eq!(stdout(&t.get("a//b")), "second\n");
    assert_eq!(stdout(&t.get("db")), "short\n");
    assert_eq!(stdout(&t.get("db/pass")), "long\n");

    assert_success(&t.delete("a//b"));
    assert_eq!(stdout(&t.get("a/b")), "first\n");
}
