//! Ensure command implementation

use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;

use local_config::{LinePrompter, Reconciler};

#[derive(Args)]
pub struct EnsureArgs {
    /// Project root holding local-config.template.json
    #[arg(value_name = "PROJECT_ROOT")]
    pub project_root: PathBuf,

    /// Extra arguments after the project root are ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

pub fn run(args: EnsureArgs) -> Result<()> {
    if !args.extra.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", args.extra);
    }

    let reconciler = Reconciler::default();
    let mut prompter = LinePrompter::stdio();
    let mut stdout = io::stdout();

    let outcome = reconciler.ensure(&args.project_root, &mut prompter, &mut stdout)?;
    tracing::debug!(mode = ?outcome.mode, "ensure finished in {}", args.project_root.display());
    Ok(())
}
