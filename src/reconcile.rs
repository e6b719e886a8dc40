//! Template/config reconciliation
//!
//! Aligns the configuration document's key set with the template's: keys the
//! template gained are prompted for, keys it dropped are pruned, and keys
//! present in both are never touched.

use crate::document::{load_document, load_document_or_absent, save_document, Document};
use crate::envfile::write_env_file;
use crate::layout::ProjectLayout;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use console::Emoji;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

static SETUP: Emoji<'_, '_> = Emoji("🔧 ", "");
static NEW_KEY: Emoji<'_, '_> = Emoji("🆕 ", "");
static OBSOLETE: Emoji<'_, '_> = Emoji("🗑️  ", "");
static UPDATED: Emoji<'_, '_> = Emoji("✅ ", "");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMode {
    /// No usable configuration existed; every key was prompted for.
    FirstTime,
    Incremental,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub config: Document,
    pub mode: SetupMode,
    /// Keys that were prompted for, in prompt order.
    pub added: Vec<String>,
    /// Keys pruned because the template no longer declares them.
    pub removed: Vec<String>,
}

impl Reconciliation {
    /// True when any key was added or pruned. A first-time run against an
    /// empty template changes nothing.
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Reconcile `existing` against `template` in memory.
///
/// `None` means first-time setup. Notices go to `out`; prompting goes through
/// `prompter`. Nothing touches the filesystem.
pub fn reconcile_documents<P, W>(
    template: &Document,
    existing: Option<Document>,
    prompter: &mut P,
    out: &mut W,
) -> Result<Reconciliation>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let Some(mut config) = existing else {
        writeln!(out, "{SETUP}First time setup - please provide values for configuration:")?;
        let mut config = Document::new();
        let mut added = Vec::with_capacity(template.len());
        for (key, template_value) in template {
            let value = ask(prompter, key, template_value)?;
            config.insert(key.clone(), Value::String(value));
            added.push(key.clone());
        }
        let mode = SetupMode::FirstTime;
        return Ok(Reconciliation { config, mode, added, removed: Vec::new() });
    };

    let mut added = Vec::new();
    for (key, template_value) in template {
        if config.contains_key(key) {
            continue;
        }
        writeln!(out, "{NEW_KEY}New configuration key detected: {key}")?;
        let value = ask(prompter, key, template_value)?;
        config.insert(key.clone(), Value::String(value));
        added.push(key.clone());
    }

    let removed: Vec<String> =
        config.keys().filter(|key| !template.contains_key(*key)).cloned().collect();
    for key in &removed {
        writeln!(out, "{OBSOLETE}Removing obsolete key: {key}")?;
        config.remove(key);
    }

    if !added.is_empty() || !removed.is_empty() {
        writeln!(out, "{UPDATED}Configuration updated")?;
    }

    Ok(Reconciliation { config, mode: SetupMode::Incremental, added, removed })
}

fn ask<P>(prompter: &mut P, key: &str, template_value: &Value) -> Result<String>
where
    P: Prompter + ?Sized,
{
    prompter
        .prompt(key, template_value)
        .with_context(|| format!("failed to read value for '{key}'"))
}

/// Load both documents, reconcile, and persist the configuration.
///
/// A missing or malformed template is fatal; a missing or malformed
/// configuration starts first-time setup.
pub fn reconcile_paths<P, W>(
    template_path: &Path,
    config_path: &Path,
    prompter: &mut P,
    out: &mut W,
) -> Result<Reconciliation>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let template = load_document(template_path).context("failed to load template")?;
    tracing::debug!("Loaded {} template keys from {}", template.len(), template_path.display());

    let existing = load_document_or_absent(config_path);
    let outcome = reconcile_documents(&template, existing, prompter, out)?;

    save_document(config_path, &outcome.config).context("failed to save config")?;
    Ok(outcome)
}

/// Drives a full `ensure` run for a project root.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    layout: ProjectLayout,
}

impl Reconciler {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    /// Reconcile the project's config and regenerate its env file.
    ///
    /// The config is saved before the env file is written; a failure in the
    /// latter leaves the saved config in place.
    pub fn ensure<P, W>(
        &self,
        project_root: &Path,
        prompter: &mut P,
        out: &mut W,
    ) -> Result<Reconciliation>
    where
        P: Prompter + ?Sized,
        W: Write + ?Sized,
    {
        let paths = self.layout.resolve(project_root);
        let outcome = reconcile_paths(&paths.template, &paths.config, prompter, out)?;

        write_env_file(&paths.env, &outcome.config, &self.layout.config_file)
            .context("failed to generate env makefile")?;

        tracing::info!(
            added = outcome.added.len(),
            removed = outcome.removed.len(),
            "Reconciled {}",
            paths.config.display()
        );
        Ok(outcome)
    }
}
