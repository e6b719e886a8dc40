//! local-config: reconcile a local JSON config with its checked-in template
//!
//! Prompts for keys the template gained, prunes keys it dropped, and writes a
//! Make-compatible env file for build tooling.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
