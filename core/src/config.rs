//! # Project Configuration
//!
//! Where generated files go inside a Go project, loaded from `goscaffold.yaml`
//! when present. The Go module path falls back to the `module` directive of
//! `go.mod`.

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the optional configuration file in the project root.
pub const CONFIG_FILE: &str = "goscaffold.yaml";

const MODULE_DIRECTIVE: &str = r#"(?m)^\s*module\s+"?([^\s"]+)"?\s*$"#;

/// Project layout settings. All paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding one sub-directory per module.
    pub app_dir: String,
    /// Directory of the shared models package.
    pub models_dir: String,
    /// File carrying the registration markers.
    pub init_file: String,
    /// Go module path; read from `go.mod` when unset.
    pub module_path: Option<String>,
    /// Directory with `<name>.go.tmpl` template overrides.
    pub templates_dir: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: "app".to_string(),
            models_dir: "app/models".to_string(),
            init_file: "app/init.go".to_string(),
            module_path: None,
            templates_dir: None,
        }
    }
}

impl ProjectConfig {
    /// Loads `goscaffold.yaml` from `root`, or the defaults when absent.
    pub fn load(root: &Path) -> AppResult<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(root = %root.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    /// Parses a YAML document. Missing keys take their default values.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// The configured module path, or the one declared in `<root>/go.mod`.
    pub fn resolve_module_path(&self, root: &Path) -> AppResult<String> {
        if let Some(path) = self.module_path.as_deref().filter(|p| !p.is_empty()) {
            return Ok(path.trim_end_matches('/').to_string());
        }

        let go_mod = root.join("go.mod");
        let content = fs::read_to_string(&go_mod)
            .map_err(|_| AppError::ModulePathNotFound(go_mod.clone()))?;
        parse_module_directive(&content).ok_or(AppError::ModulePathNotFound(go_mod))
    }

    /// Absolute directory of one module's package.
    pub fn module_dir(&self, root: &Path, dir_name: &str) -> PathBuf {
        root.join(&self.app_dir).join(dir_name)
    }

    /// Absolute path of one model file.
    pub fn model_file(&self, root: &Path, file_name: &str) -> PathBuf {
        root.join(&self.models_dir).join(file_name)
    }

    /// Absolute path of the init file.
    pub fn init_path(&self, root: &Path) -> PathBuf {
        root.join(&self.init_file)
    }

    /// Absolute template override directory, if configured.
    pub fn templates_path(&self, root: &Path) -> Option<PathBuf> {
        self.templates_dir.as_ref().map(|d| root.join(d))
    }
}

/// Extracts the module path from the contents of a `go.mod` file.
pub fn parse_module_directive(go_mod: &str) -> Option<String> {
    Regex::new(MODULE_DIRECTIVE)
        .ok()?
        .captures(go_mod)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
