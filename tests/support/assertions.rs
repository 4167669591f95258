//! Assertions over command output and the fs object store.

use std::process::Output;

use super::{Test, BUCKET};

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Exit status 0, otherwise panic with the captured stderr.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "secrets-vault exited with {:?}:\n{}",
        output.status.code(),
        stderr(output)
    );
}

/// Exit status 1, the code every handled error exits with.
///
/// clap usage errors exit with 2, so those count as failures too.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, got success. stdout:\n{}",
        stdout(output)
    );
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing {:?}:\n{}",
        expected,
        err
    );
}

/// `put` then `get` through the binary yields the value on stdout.
pub fn assert_roundtrip(t: &Test, key: &str, value: &str) {
    assert_success(&t.put(key, value));

    let output = t.get(key);
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{}\n", value));
}

/// Nothing was ever written to the test bucket.
pub fn assert_bucket_untouched(t: &Test) {
    assert!(
        !t.store.path().join(BUCKET).exists(),
        "bucket directory should not exist"
    );
}
