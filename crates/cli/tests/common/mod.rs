//! Shared test utilities for awsecrets integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading and
//!   host AWS configuration from leaking into tests.
//! - Write shared config, credentials, and secrets files into a temp directory.
//!
//! Invariants / Assumptions:
//! - `AWS_CONFIG_FILE` and `AWS_SHARED_CREDENTIALS_FILE` point at paths that do
//!   not exist unless a test overrides them, so `~/.aws` is never read.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AWS_VARS: [&str; 7] = [
    "AWS_PROFILE",
    "AWS_DEFAULT_PROFILE",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
];

/// Returns a hermetic `awsecrets` command for integration testing.
pub fn awsecrets_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("awsecrets");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    let missing = Path::new(env!("CARGO_TARGET_TMPDIR")).join("awsecrets-no-such-dir");
    cmd.env("AWS_CONFIG_FILE", missing.join("config"));
    cmd.env("AWS_SHARED_CREDENTIALS_FILE", missing.join("credentials"));

    for var in AWS_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");

    cmd
}

/// Shared AWS files plus an optional secrets file in a temp directory.
#[allow(dead_code)]
pub struct AwsFiles {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl AwsFiles {
    pub fn new(config: &str, credentials: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config"), config).unwrap();
        fs::write(dir.path().join("credentials"), credentials).unwrap();
        Self { dir }
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn credentials(&self) -> PathBuf {
        self.dir.path().join("credentials")
    }

    pub fn write_secrets(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("secrets.yml");
        fs::write(&path, content).unwrap();
        path
    }

    /// A hermetic command pointed at these files through the CLI flags.
    pub fn cmd(&self) -> Command {
        let mut cmd = awsecrets_cmd();
        cmd.arg("--config-file")
            .arg(self.config())
            .arg("--credentials-file")
            .arg(self.credentials());
        cmd
    }
}

#[allow(dead_code)]
pub const CONFIG: &str = "\
[default]
region = us-east-1

[profile dev]
region = us-west-2
";

#[allow(dead_code)]
pub const CREDENTIALS: &str = "\
[default]
aws_access_key_id = AKID_DEFAULT
aws_secret_access_key = SECRET_DEFAULT

[dev]
aws_access_key_id = AKID_DEV
aws_secret_access_key = SECRET_DEV
aws_session_token = TOKEN_DEV
";
