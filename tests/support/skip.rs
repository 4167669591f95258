/// Skip a test if AWS credentials or test resources are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() && std::env::var("AWS_PROFILE").is_err() {
            eprintln!("SKIPPED: no AWS credentials (AWS_ACCESS_KEY_ID or AWS_PROFILE)");
            return;
        }
        if std::env::var("SECRETS_VAULT_TEST_KMS_KEY").is_err() {
            eprintln!("SKIPPED: SECRETS_VAULT_TEST_KMS_KEY not set (set to a KMS key ARN)");
            return;
        }
        if std::env::var("SECRETS_VAULT_TEST_BUCKET").is_err() {
            eprintln!("SKIPPED: SECRETS_VAULT_TEST_BUCKET not set (set to a writable bucket)");
            return;
        }
    };
}
