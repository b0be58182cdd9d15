//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Invalid `goscaffold.yaml`.
    #[display("Config Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Template could not be parsed or rendered.
    #[display("Template Error: {_0}")]
    Template(minijinja::Error),

    /// The model name is empty or not a valid identifier.
    #[from(ignore)]
    #[display("Invalid model name: '{_0}'")]
    InvalidModelName(String),

    /// A field declaration could not be parsed.
    #[from(ignore)]
    #[display("Invalid field '{token}': {reason}")]
    InvalidField {
        /// The raw `name:type` token.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An anchor comment is missing from the init file.
    #[from(ignore)]
    #[display("Marker '{marker}' not found in {}", path.display())]
    MarkerNotFound {
        /// The marker text that was searched for.
        marker: String,
        /// The file that was searched.
        path: PathBuf,
    },

    /// Generation target already exists.
    #[from(ignore)]
    #[display("Module already exists at {} (use --force to overwrite)", _0.display())]
    ModuleExists(PathBuf),

    /// Destroy target does not exist.
    #[from(ignore)]
    #[display("Module not found at {}", _0.display())]
    ModuleNotFound(PathBuf),

    /// No `module_path` in config and no readable `go.mod`.
    #[from(ignore)]
    #[display("Could not determine Go module path from {}", _0.display())]
    ModulePathNotFound(PathBuf),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_marker_display_includes_path() {
        let err = AppError::MarkerNotFound {
            marker: "MODULE_IMPORT_MARKER".into(),
            path: PathBuf::from("app/init.go"),
        };
        assert_eq!(
            err.to_string(),
            "Marker 'MODULE_IMPORT_MARKER' not found in app/init.go"
        );
    }

    #[test]
    fn test_invalid_field_display() {
        let err = AppError::InvalidField {
            token: ":string".into(),
            reason: "empty field name".into(),
        };
        assert_eq!(err.to_string(), "Invalid field ':string': empty field name");
    }
}
