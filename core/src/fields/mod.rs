#![deny(missing_docs)]

//! # Fields
//!
//! - **alias**: type token resolution (`image` -> `*storage.Attachment`).
//! - **field**: the structured field record.
//! - **parser**: the `name[:type[:extra]]` declaration parser.

/// Type alias resolution.
pub mod alias;

/// Field records.
pub mod field;

/// Field declaration parsing.
pub mod parser;

pub use alias::{
    is_relationship_type, is_storage_type, is_translation_type, resolve, FieldTypeAlias,
    TypeCategory,
};
pub use field::{Field, RelationKind};
pub use parser::{infer_type, BelongsToMode, FieldParser, ParsedField};
