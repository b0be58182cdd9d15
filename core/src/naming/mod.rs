#![deny(missing_docs)]

//! # Naming
//!
//! - **case**: PascalCase, camelCase, snake_case and kebab-case conversion.
//! - **inflector**: pluralization and singularization.
//! - **convention**: the per-model naming record shared by every generated file.

/// Case conversion helpers.
pub mod case;

/// Model naming convention.
pub mod convention;

/// English inflection.
pub mod inflector;

pub use case::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
pub use convention::NamingConvention;
pub use inflector::Inflector;
