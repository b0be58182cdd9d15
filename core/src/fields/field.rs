//! # Field Records
//!
//! The structured form of one Go struct field, shared read-only by the
//! template data assembler and every template.

use super::alias::{TypeCategory, ATTACHMENT_TYPE, JSON_TYPE, SOFT_DELETE_TYPE, TIME_TYPE};
use crate::naming::to_pascal_case;
use serde::Serialize;
use std::fmt::Display;

/// Cardinality of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Plain column.
    #[default]
    None,
    /// Foreign key column of a belongs-to association.
    BelongsTo,
    /// Slice of child records holding our id.
    HasMany,
    /// Single child record holding our id.
    HasOne,
    /// Slice of records joined through a join table.
    ManyToMany,
    /// Association object of a belongs-to, paired with its `BelongsTo` column.
    BelongsToObject,
}

impl RelationKind {
    /// Kinds that carry an association object rather than a column.
    pub fn is_association(self) -> bool {
        matches!(
            self,
            RelationKind::BelongsToObject
                | RelationKind::HasMany
                | RelationKind::HasOne
                | RelationKind::ManyToMany
        )
    }

    /// Parses a canonical relationship type name (`belongs_to`, `has_many`, ...).
    pub fn from_canonical(canonical: &str) -> Option<Self> {
        match canonical {
            "belongs_to" => Some(RelationKind::BelongsTo),
            "has_many" => Some(RelationKind::HasMany),
            "has_one" => Some(RelationKind::HasOne),
            "many_to_many" => Some(RelationKind::ManyToMany),
            _ => None,
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RelationKind::None => "none",
            RelationKind::BelongsTo => "belongs_to",
            RelationKind::HasMany => "has_many",
            RelationKind::HasOne => "has_one",
            RelationKind::ManyToMany => "many_to_many",
            RelationKind::BelongsToObject => "belongs_to_object",
        };
        f.write_str(s)
    }
}

/// One derived struct field.
///
/// Invariant: `is_relation` implies `relation_kind.is_association()` and a
/// non-empty `related_model`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Go field name (PascalCase).
    pub name: String,
    /// Normalized declaration name (snake_case).
    pub snake_name: String,
    /// JSON key.
    pub json_name: String,
    /// Go type.
    pub go_type: String,
    /// Canonical type from the alias table (or the custom token).
    pub canonical_type: String,
    /// Alias category the type resolved to.
    pub category: TypeCategory,
    /// Contents of the `json:"..."` tag.
    pub json_tag: String,
    /// Database column name; empty for associations.
    pub db_tag: String,
    /// Contents of the `gorm:"..."` tag.
    pub gorm_tag: String,
    /// The complete struct tag, as rendered by [`Field::struct_tag`].
    pub tag: String,
    /// Association object (not a column).
    pub is_relation: bool,
    /// Relation role of this field.
    pub relation_kind: RelationKind,
    /// Related Go model, empty for plain columns.
    pub related_model: String,
    /// Go field name of the foreign key this field uses, if any.
    pub foreign_key: String,
    /// `*storage.Attachment` field.
    pub is_attachment: bool,
    /// Attachment declared as `image`.
    pub is_image: bool,
    /// Attachment declared as `file`.
    pub is_file: bool,
    /// `translation.Field` field.
    pub is_translation: bool,
    /// Declared with the `required` modifier.
    pub is_required: bool,
    /// Declared with the `unique` modifier.
    pub is_unique: bool,
    /// Declared with the `index` modifier (or a foreign key).
    pub is_index: bool,
    /// `time.Time` column.
    pub is_time: bool,
    /// `created_at` / `updated_at`.
    pub is_timestamp: bool,
    /// `deleted_at`, typed `gorm.DeletedAt`.
    pub is_soft_delete: bool,
    /// Stored inline in the model's own table.
    pub is_column: bool,
}

impl Field {
    /// A plain inline column.
    pub(crate) fn column(
        snake_name: &str,
        go_type: &str,
        canonical_type: &str,
        category: TypeCategory,
    ) -> Self {
        Self {
            name: to_pascal_case(snake_name),
            snake_name: snake_name.to_string(),
            json_name: snake_name.to_string(),
            go_type: go_type.to_string(),
            canonical_type: canonical_type.to_string(),
            category,
            json_tag: snake_name.to_string(),
            db_tag: snake_name.to_string(),
            gorm_tag: String::new(),
            tag: String::new(),
            is_relation: false,
            relation_kind: RelationKind::None,
            related_model: String::new(),
            foreign_key: String::new(),
            is_attachment: go_type == ATTACHMENT_TYPE,
            is_image: false,
            is_file: false,
            is_translation: false,
            is_required: false,
            is_unique: false,
            is_index: false,
            is_time: go_type == TIME_TYPE,
            is_timestamp: false,
            is_soft_delete: go_type == SOFT_DELETE_TYPE,
            is_column: true,
        }
    }

    /// A field backed by another table; never a column of its own.
    pub(crate) fn association(
        snake_name: &str,
        go_type: &str,
        canonical_type: &str,
        category: TypeCategory,
        gorm_tag: String,
    ) -> Self {
        Self {
            json_tag: format!("{snake_name},omitempty"),
            db_tag: String::new(),
            gorm_tag,
            is_column: false,
            is_time: false,
            ..Self::column(snake_name, go_type, canonical_type, category)
        }
    }

    /// `datatypes.JSON` column.
    pub fn is_json(&self) -> bool {
        self.go_type == JSON_TYPE
    }

    /// Renders the complete Go struct tag, without the surrounding backticks.
    pub fn struct_tag(&self) -> String {
        let mut tag = format!("json:\"{}\"", self.json_tag);
        if !self.gorm_tag.is_empty() {
            tag.push_str(&format!(" gorm:\"{}\"", self.gorm_tag));
        }
        if self.is_required {
            tag.push_str(" binding:\"required\"");
        }
        tag
    }

    /// Completes tag rendering once every flag is set.
    pub(crate) fn finish(mut self) -> Self {
        self.refresh_column_tag();
        self.tag = self.struct_tag();
        self
    }

    /// Rebuilds `gorm_tag` for a column from its modifiers and canonical type.
    fn refresh_column_tag(&mut self) {
        if !self.is_column {
            return;
        }
        let mut parts = vec![format!("column:{}", self.db_tag)];
        match self.canonical_type.as_str() {
            "text" => parts.push("type:text".into()),
            "decimal" => parts.push("type:decimal(10,2)".into()),
            "date" => parts.push("type:date".into()),
            _ => {}
        }
        if self.is_unique {
            parts.push("uniqueIndex".into());
        } else if self.is_index {
            parts.push("index".into());
        }
        if self.is_required {
            parts.push("not null".into());
        }
        self.gorm_tag = parts.join(";");
    }
}
