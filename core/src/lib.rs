#![deny(missing_docs)]

//! # goscaffold core
//!
//! Turns a model name and a list of `name:type` field declarations into a Go
//! CRUD module: model, service, controller and module files, plus the
//! registration lines in the project's init file.

/// Shared error types.
pub mod error;

/// Case conversion, inflection and per-model naming.
pub mod naming;

/// Field type aliases, field records and the declaration parser.
pub mod fields;

/// The record templates render from.
pub mod template_data;

/// Embedded Go templates.
pub mod render;

/// Init file registration.
pub mod patcher;

/// `goscaffold.yaml` and `go.mod` handling.
pub mod config;

/// Planning, writing and destroying modules.
pub mod generator;

pub use config::ProjectConfig;
pub use error::{AppError, AppResult};
pub use fields::{BelongsToMode, Field, FieldParser, ParsedField, RelationKind, TypeCategory};
pub use generator::{DestroyReport, GeneratedFile, GenerationPlan, Project};
pub use naming::{Inflector, NamingConvention};
pub use patcher::{InitPatcher, MarkerPatcher, ModuleRegistration};
pub use render::{RenderContext, TemplateKind, TemplateRenderer};
pub use template_data::{GoImport, TemplateData};
