//! Project file layout

use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE_FILE: &str = "local-config.template.json";
pub const DEFAULT_CONFIG_FILE: &str = "local-config.json";
pub const DEFAULT_ENV_FILE: &str = ".env.mk";

/// Names of the three files the reconciler touches, relative to a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub template_file: String,
    pub config_file: String,
    pub env_file: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            env_file: DEFAULT_ENV_FILE.to_string(),
        }
    }
}

impl ProjectLayout {
    /// Set the template file name
    pub fn template_file(mut self, name: impl Into<String>) -> Self {
        self.template_file = name.into();
        self
    }

    /// Set the configuration file name
    pub fn config_file(mut self, name: impl Into<String>) -> Self {
        self.config_file = name.into();
        self
    }

    /// Set the environment file name
    pub fn env_file(mut self, name: impl Into<String>) -> Self {
        self.env_file = name.into();
        self
    }

    /// Join every file name onto `root`.
    pub fn resolve(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            template: root.join(&self.template_file),
            config: root.join(&self.config_file),
            env: root.join(&self.env_file),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub template: PathBuf,
    pub config: PathBuf,
    pub env: PathBuf,
}
