#![deny(missing_docs)]

//! # Template Data
//!
//! Combines the naming convention and the parsed fields of one model into the
//! single record every template renders from.
//!
//! Aggregate flags are the logical OR of the matching per-field predicate, and
//! the import set is the union of a fixed per-type mapping plus `time` and
//! `gorm`. Assembling twice from the same input yields equal records.

use crate::error::AppResult;
use crate::fields::alias::{ATTACHMENT_TYPE, JSON_TYPE, SOFT_DELETE_TYPE, TIME_TYPE, TRANSLATION_TYPE};
use crate::fields::{BelongsToMode, Field, FieldParser, RelationKind};
use crate::naming::{Inflector, NamingConvention};
use serde::Serialize;
use std::collections::BTreeSet;

/// A Go package the model file imports.
///
/// Variant order is the emitted order: standard library, third party, project local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoImport {
    /// `time`
    Time,
    /// `gorm.io/datatypes`
    Datatypes,
    /// `gorm.io/gorm`
    Gorm,
    /// `<module>/core/storage`
    Storage,
    /// `<module>/core/translation`
    Translation,
}

impl GoImport {
    /// Import required by a Go field type, if any.
    pub fn for_type(go_type: &str) -> Option<Self> {
        match go_type {
            TIME_TYPE => Some(GoImport::Time),
            SOFT_DELETE_TYPE => Some(GoImport::Gorm),
            JSON_TYPE => Some(GoImport::Datatypes),
            ATTACHMENT_TYPE => Some(GoImport::Storage),
            TRANSLATION_TYPE => Some(GoImport::Translation),
            _ => None,
        }
    }

    /// Full import path, resolving project-local packages against `module_path`.
    pub fn path(self, module_path: &str) -> String {
        match self {
            GoImport::Time => "time".to_string(),
            GoImport::Datatypes => "gorm.io/datatypes".to_string(),
            GoImport::Gorm => "gorm.io/gorm".to_string(),
            GoImport::Storage => format!("{module_path}/core/storage"),
            GoImport::Translation => format!("{module_path}/core/translation"),
        }
    }
}

/// Everything the model, service, controller and module templates need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    /// Naming variants, flattened so templates read `{{ model }}` directly.
    #[serde(flatten)]
    pub naming: NamingConvention,
    /// Struct fields in declaration order.
    pub fields: Vec<Field>,
    /// Any association object.
    pub has_relations: bool,
    /// Any belongs-to foreign key or association object.
    pub has_belongs_to: bool,
    /// Any has-many association.
    pub has_has_many: bool,
    /// Any has-one association.
    pub has_has_one: bool,
    /// Any many-to-many association.
    pub has_many_to_many: bool,
    /// Any storage attachment (images and files included).
    pub has_attachments: bool,
    /// Any `image` attachment.
    pub has_images: bool,
    /// Any `file` attachment.
    pub has_files: bool,
    /// Any translation field.
    pub has_translatable_fields: bool,
    /// A declared `deleted_at` field.
    pub has_soft_delete: bool,
    /// A declared `created_at` or `updated_at` field.
    pub has_timestamps: bool,
    /// Any `time.Time` field.
    pub has_time_fields: bool,
    /// Any `datatypes.JSON` field.
    pub has_json_fields: bool,
    /// Association names to preload when fetching records.
    pub preloads: Vec<String>,
    /// Packages the model file imports.
    pub imports: BTreeSet<GoImport>,
}

impl TemplateData {
    /// Assembles template data with the default belongs-to expansion.
    pub fn assemble<S: AsRef<str>>(
        inflector: &Inflector,
        model_name: &str,
        field_tokens: &[S],
    ) -> AppResult<Self> {
        Self::assemble_with(inflector, model_name, field_tokens, BelongsToMode::default())
    }

    /// Assembles template data, choosing how belongs-to declarations expand.
    pub fn assemble_with<S: AsRef<str>>(
        inflector: &Inflector,
        model_name: &str,
        field_tokens: &[S],
        belongs_to_mode: BelongsToMode,
    ) -> AppResult<Self> {
        let naming = NamingConvention::build(inflector, model_name)?;

        let fields = {
            let parser = FieldParser::new(inflector, &naming).with_belongs_to_mode(belongs_to_mode);
            let mut fields = Vec::with_capacity(field_tokens.len());
            for token in field_tokens {
                fields.extend(parser.parse(token.as_ref())?.into_fields());
            }
            fields
        };

        let mut data = Self {
            naming,
            fields: Vec::new(),
            has_relations: false,
            has_belongs_to: false,
            has_has_many: false,
            has_has_one: false,
            has_many_to_many: false,
            has_attachments: false,
            has_images: false,
            has_files: false,
            has_translatable_fields: false,
            has_soft_delete: false,
            has_timestamps: false,
            has_time_fields: false,
            has_json_fields: false,
            preloads: Vec::new(),
            imports: BTreeSet::from([GoImport::Time, GoImport::Gorm]),
        };
        for field in &fields {
            data.fold(field);
        }
        data.fields = fields;

        Ok(data)
    }

    fn fold(&mut self, field: &Field) {
        self.has_relations |= field.is_relation;
        self.has_belongs_to |= matches!(
            field.relation_kind,
            RelationKind::BelongsTo | RelationKind::BelongsToObject
        );
        self.has_has_many |= field.relation_kind == RelationKind::HasMany;
        self.has_has_one |= field.relation_kind == RelationKind::HasOne;
        self.has_many_to_many |= field.relation_kind == RelationKind::ManyToMany;
        self.has_attachments |= field.is_attachment;
        self.has_images |= field.is_image;
        self.has_files |= field.is_file;
        self.has_translatable_fields |= field.is_translation;
        self.has_soft_delete |= field.is_soft_delete;
        self.has_timestamps |= field.is_timestamp;
        self.has_time_fields |= field.is_time;
        self.has_json_fields |= field.is_json();

        if field.is_relation || field.is_attachment {
            self.preloads.push(field.name.clone());
        }
        if let Some(import) = GoImport::for_type(&field.go_type) {
            self.imports.insert(import);
        }
    }

    /// Fields stored inline in the model table.
    pub fn columns(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_column)
    }

    /// Resolved import paths for the model file.
    pub fn import_paths(&self, module_path: &str) -> Vec<String> {
        self.imports.iter().map(|i| i.path(module_path)).collect()
    }
}
