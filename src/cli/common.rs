//! Shared helpers for CLI commands

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::config::flavor::ConfigFlavor;
use crate::core::error::McpcfgError;

/// Resolve the `--tool` / `--path` pair into a flavor and a concrete file
/// path. An explicit path wins over the flavor's default location and gets
/// tilde expansion.
pub fn resolve_target(tool: &str, path: Option<&str>) -> Result<(ConfigFlavor, PathBuf)> {
    let flavor = ConfigFlavor::from_name(tool).ok_or_else(|| McpcfgError::UnknownTool {
        name: tool.to_string(),
    })?;

    let path = match path {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => flavor.default_config_path()?,
    };

    Ok((flavor, path))
}

/// Parse one `KEY=VALUE` pair from a `--env` flag.
pub fn parse_env_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("invalid --env value '{raw}', expected KEY=VALUE"),
    }
}
