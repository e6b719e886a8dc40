//! Make-compatible environment file generation

use crate::document::Document;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

/// Textual form of a config value: strings raw, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Double every `$` so Make doesn't treat it as a variable reference.
pub fn escape_make_value(value: &str) -> String {
    value.replace('$', "$$")
}

/// Render one `export KEY := value` line per key, under a do-not-edit header.
pub fn render_env_file(config: &Document, source_name: &str) -> String {
    let mut lines = Vec::with_capacity(config.len() + 1);
    lines.push(format!("# Auto-generated from {source_name} - do not edit manually"));

    for (key, value) in config {
        let env_key = key.to_uppercase();
        let env_value = escape_make_value(&display_value(value));
        lines.push(format!("export {env_key} := {env_value}"));
    }

    format!("{}\n", lines.join("\n"))
}

/// Render and overwrite the env file at `env_path`.
pub fn write_env_file(env_path: &Path, config: &Document, source_name: &str) -> Result<()> {
    std::fs::write(env_path, render_env_file(config, source_name))?;
    tracing::debug!("Wrote {} variables to {}", config.len(), env_path.display());
    Ok(())
}
