//! `env` command.
//!
//! Responsibilities:
//! - Render shell statements exporting the resolved region and credentials.
//!
//! Invariants:
//! - Values are always single-quoted for the target shell.
//! - When the credentials carry no session token, the variable is unset so a
//!   stale token from the calling shell is never paired with new keys.

use anyhow::Result;
use secrecy::ExposeSecret;

use awsecrets_config::ResolvedConfig;
use awsecrets_config::constants::{
    ENV_ACCESS_KEY_ID, ENV_REGION, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
};

use crate::args::ShellKind;

fn quote(shell: ShellKind, value: &str) -> String {
    match shell {
        ShellKind::Posix => format!("'{}'", value.replace('\'', r"'\''")),
        ShellKind::Fish => format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'")),
    }
}

fn export(shell: ShellKind, name: &str, value: &str) -> String {
    let value = quote(shell, value);
    match shell {
        ShellKind::Posix => format!("export {name}={value}\n"),
        ShellKind::Fish => format!("set -gx {name} {value};\n"),
    }
}

fn unset(shell: ShellKind, name: &str) -> String {
    match shell {
        ShellKind::Posix => format!("unset {name}\n"),
        ShellKind::Fish => format!("set -e {name};\n"),
    }
}

pub fn render(config: &ResolvedConfig, shell: ShellKind) -> String {
    let credentials = &config.credentials;
    let mut out = String::new();
    out.push_str(&export(shell, ENV_REGION, &config.region));
    out.push_str(&export(shell, ENV_ACCESS_KEY_ID, &credentials.access_key_id));
    out.push_str(&export(
        shell,
        ENV_SECRET_ACCESS_KEY,
        credentials.secret_access_key.expose_secret(),
    ));
    match &credentials.session_token {
        Some(token) => out.push_str(&export(shell, ENV_SESSION_TOKEN, token.expose_secret())),
        None => out.push_str(&unset(shell, ENV_SESSION_TOKEN)),
    }
    out
}

pub fn run(config: &ResolvedConfig, shell: ShellKind) -> Result<()> {
    print!("{}", render(config, shell));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awsecrets_config::{SettingSource, StaticCredentials};
    use secrecy::SecretString;

    fn config(secret: &str, token: Option<&str>) -> ResolvedConfig {
        ResolvedConfig {
            region: "eu-west-1".to_string(),
            credentials: StaticCredentials {
                access_key_id: "AKID".to_string(),
                secret_access_key: SecretString::new(secret.to_string().into()),
                session_token: token.map(|t| SecretString::new(t.to_string().into())),
            },
            profile: None,
            region_source: SettingSource::Options,
            credentials_source: SettingSource::SecretsDefault,
        }
    }

    #[test]
    fn test_posix_exports() {
        let out = render(&config("SECRET", Some("TOKEN")), ShellKind::Posix);
        assert_eq!(
            out,
            "export AWS_REGION='eu-west-1'\n\
             export AWS_ACCESS_KEY_ID='AKID'\n\
             export AWS_SECRET_ACCESS_KEY='SECRET'\n\
             export AWS_SESSION_TOKEN='TOKEN'\n"
        );
    }

    #[test]
    fn test_posix_unsets_missing_token() {
        let out = render(&config("SECRET", None), ShellKind::Posix);
        assert!(out.ends_with("unset AWS_SESSION_TOKEN\n"));
    }

    #[test]
    fn test_fish_exports() {
        let out = render(&config("SECRET", None), ShellKind::Fish);
        assert!(out.contains("set -gx AWS_REGION 'eu-west-1';\n"));
        assert!(out.contains("set -gx AWS_SECRET_ACCESS_KEY 'SECRET';\n"));
        assert!(out.ends_with("set -e AWS_SESSION_TOKEN;\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let out = render(&config("it's/a\\key", None), ShellKind::Posix);
        assert!(out.contains(r"export AWS_SECRET_ACCESS_KEY='it'\''s/a\key'"));

        let out = render(&config("it's/a\\key", None), ShellKind::Fish);
        assert!(out.contains(r"set -gx AWS_SECRET_ACCESS_KEY 'it\'s/a\\key';"));
    }
}
