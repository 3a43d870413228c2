//! `show` command.
//!
//! Responsibilities:
//! - Render the resolved region, access key id, and source of each as text or JSON.
//!
//! Invariants:
//! - The secret access key and the session token value are never rendered.

use anyhow::Result;
use serde::Serialize;

use awsecrets_config::ResolvedConfig;

use crate::args::OutputFormat;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    profile: Option<&'a str>,
    region: &'a str,
    region_source: String,
    access_key_id: &'a str,
    session_token: bool,
    credentials_source: String,
}

impl<'a> From<&'a ResolvedConfig> for ShowOutput<'a> {
    fn from(config: &'a ResolvedConfig) -> Self {
        Self {
            profile: config.profile.as_deref(),
            region: &config.region,
            region_source: config.region_source.to_string(),
            access_key_id: &config.credentials.access_key_id,
            session_token: config.credentials.session_token.is_some(),
            credentials_source: config.credentials_source.to_string(),
        }
    }
}

pub fn render(config: &ResolvedConfig, format: OutputFormat) -> Result<String> {
    let output = ShowOutput::from(config);
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&output)?)),
        OutputFormat::Text => Ok(format!(
            "profile: {}\nregion: {} ({})\naccess_key_id: {} ({})\nsession_token: {}\n",
            output.profile.unwrap_or("-"),
            output.region,
            output.region_source,
            output.access_key_id,
            output.credentials_source,
            if output.session_token { "present" } else { "absent" },
        )),
    }
}

pub fn run(config: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    print!("{}", render(config, format)?);
    Ok(())
}
