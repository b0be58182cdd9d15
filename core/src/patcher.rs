#![deny(missing_docs)]

//! # Init File Patching
//!
//! Registers generated modules in the shared init file and unregisters them on
//! destroy.
//!
//! The init file carries two anchor comments. Generated lines are inserted on
//! their own line directly above the anchor, using the anchor's indentation:
//!
//! ```go
//! import (
//!     "example.com/blog/app/posts"
//!     // MODULE_IMPORT_MARKER - Do not remove this comment
//! )
//! ```
//!
//! Removal deletes exactly the lines insertion added, so insert followed by
//! remove restores the original bytes.

use crate::error::{AppError, AppResult};
use crate::naming::NamingConvention;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anchor above which module import lines are inserted.
pub const MODULE_IMPORT_MARKER: &str = "MODULE_IMPORT_MARKER";

/// Anchor above which module initializer lines are inserted.
pub const MODULE_INITIALIZER_MARKER: &str = "MODULE_INITIALIZER_MARKER";

/// The two lines that register one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistration {
    /// Quoted import path, e.g. `"example.com/blog/app/posts"`.
    pub import_line: String,
    /// Constructor call, e.g. `posts.NewPostModule(db),`.
    pub initializer_line: String,
}

impl ModuleRegistration {
    /// Builds the registration for a module living in `<app_dir>/<package>`.
    pub fn for_module(naming: &NamingConvention, module_path: &str, app_dir: &str) -> Self {
        Self {
            import_line: format!(
                "\"{}/{}/{}\"",
                module_path,
                app_dir.trim_matches('/'),
                naming.package_name
            ),
            initializer_line: format!("{}.New{}Module(db),", naming.package_name, naming.model),
        }
    }

    fn lines(&self) -> [(&'static str, &str); 2] {
        [
            (MODULE_IMPORT_MARKER, self.import_line.as_str()),
            (MODULE_INITIALIZER_MARKER, self.initializer_line.as_str()),
        ]
    }
}

/// Adds and removes module registrations.
///
/// Returns whether anything changed.
pub trait InitPatcher {
    /// Registers a module. Already registered lines are left alone.
    fn insert_module(&self, registration: &ModuleRegistration) -> AppResult<bool>;

    /// Unregisters a module. Missing lines are ignored.
    fn remove_module(&self, registration: &ModuleRegistration) -> AppResult<bool>;

    /// Fails if `insert_module` would fail, without changing anything.
    fn check_module(&self, _registration: &ModuleRegistration) -> AppResult<()> {
        Ok(())
    }
}

/// Marker-comment based patcher for an init file on disk.
#[derive(Debug, Clone)]
pub struct MarkerPatcher {
    path: PathBuf,
}

impl MarkerPatcher {
    /// Creates a patcher for the init file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The patched file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts the registration lines into `source`.
    pub fn splice(&self, source: &str, registration: &ModuleRegistration) -> AppResult<String> {
        let mut patched = source.to_string();

        for (marker, line) in registration.lines() {
            if contains_line(&patched, line) {
                debug!(line, "registration line already present");
                continue;
            }

            let marker_pos = patched.find(marker).ok_or_else(|| AppError::MarkerNotFound {
                marker: marker.to_string(),
                path: self.path.clone(),
            })?;

            let line_start = patched[..marker_pos].rfind('\n').map_or(0, |i| i + 1);
            let indent: String = patched[line_start..]
                .chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect();

            patched.insert_str(line_start, &format!("{indent}{line}\n"));
        }

        Ok(patched)
    }

    /// Removes every line of `source` matching a registration line.
    pub fn unsplice(&self, source: &str, registration: &ModuleRegistration) -> String {
        source
            .split_inclusive('\n')
            .filter(|l| {
                let trimmed = l.trim();
                trimmed != registration.import_line && trimmed != registration.initializer_line
            })
            .collect()
    }

    fn read(&self) -> AppResult<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            AppError::General(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }

    fn write_if_changed(&self, before: &str, after: &str) -> AppResult<bool> {
        if before == after {
            return Ok(false);
        }
        fs::write(&self.path, after).map_err(|e| {
            AppError::General(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        Ok(true)
    }
}

impl InitPatcher for MarkerPatcher {
    fn insert_module(&self, registration: &ModuleRegistration) -> AppResult<bool> {
        let source = self.read()?;
        let patched = self.splice(&source, registration)?;
        self.write_if_changed(&source, &patched)
    }

    fn remove_module(&self, registration: &ModuleRegistration) -> AppResult<bool> {
        let source = self.read()?;
        let patched = self.unsplice(&source, registration);
        self.write_if_changed(&source, &patched)
    }

    fn check_module(&self, registration: &ModuleRegistration) -> AppResult<()> {
        let source = self.read()?;
        self.splice(&source, registration).map(|_| ())
    }
}

fn contains_line(source: &str, line: &str) -> bool {
    source.lines().any(|l| l.trim() == line)
}
