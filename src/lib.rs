//! local-config: keep an untracked local config in step with its template
//!
//! Reads `local-config.template.json`, reconciles `local-config.json` against it
//! (prompting for new keys, pruning obsolete ones) and writes a Make-compatible
//! `.env.mk` derived from the result.

pub mod document;
pub mod envfile;
pub mod layout;
pub mod prompt;
pub mod reconcile;

pub use document::{load_document, load_document_or_absent, save_document, Document, LoadError};
pub use envfile::{render_env_file, write_env_file};
pub use layout::{ProjectLayout, ProjectPaths};
pub use prompt::{LinePrompter, Prompter};
pub use reconcile::{reconcile_documents, reconcile_paths, Reconciler, Reconciliation, SetupMode};
