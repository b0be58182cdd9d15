#![deny(missing_docs)]

//! # Field Parser
//!
//! Turns one `name[:type[:extra]]` declaration into structured [`Field`] records.
//!
//! - Omitted types are inferred from the field name by an ordered rule table.
//! - Relationship types are expanded into association fields. A belongs-to
//!   declaration yields the foreign key column followed by the association object.
//! - `attachment`, `file` and `image` produce storage associations.
//! - For non-relationship types, `extra` is a `+` separated modifier list
//!   (`required`, `unique`, `index`). For relationships it names the related model.
//!   An implicit belongs-to (`author_id:uint`) accepts either.
//! - `id` is generated for every model and cannot be declared.

use super::alias::{
    resolve, FieldTypeAlias, TypeCategory, ATTACHMENT_TYPE, SOFT_DELETE_TYPE, TIME_TYPE,
};
use super::field::{Field, RelationKind};
use crate::error::{AppError, AppResult};
use crate::naming::{to_pascal_case, to_snake_case, Inflector, NamingConvention};
use tracing::{debug, warn};

/// How a name fragment is matched by an inference rule.
#[derive(Debug, Clone, Copy)]
enum NameMatch {
    Suffix,
    Contains,
}

/// Ordered type inference rules, first match wins.
///
/// The order is normative: `published_at` is a datetime, not a bool, and
/// `active_url` is a url, not a bool.
const INFERENCE_RULES: &[(NameMatch, &[&str], &str)] = &[
    (NameMatch::Suffix, &["_id"], "uint"),
    (NameMatch::Suffix, &["_at", "_date", "_time"], "datetime"),
    (NameMatch::Suffix, &["_count", "_number"], "int"),
    (NameMatch::Contains, &["email"], "email"),
    (NameMatch::Contains, &["phone"], "phone"),
    (NameMatch::Contains, &["url", "link"], "url"),
    (NameMatch::Contains, &["description", "content", "text"], "text"),
    (NameMatch::Contains, &["active", "enabled", "published"], "bool"),
];

/// Type token used when no inference rule matches.
const DEFAULT_TYPE: &str = "string";

/// Field modifiers accepted in the third part of a column declaration.
const MODIFIERS: &[&str] = &["required", "unique", "index"];

/// Association hint used by side-table backed fields (attachments, translations).
const SIDE_TABLE_TAG: &str = "foreignKey:ModelId;references:Id";

/// Infers a type token from a snake_case field name.
pub fn infer_type(snake_name: &str) -> &'static str {
    INFERENCE_RULES
        .iter()
        .find(|(how, needles, _)| {
            needles.iter().any(|needle| match how {
                NameMatch::Suffix => snake_name.ends_with(needle),
                NameMatch::Contains => snake_name.contains(needle),
            })
        })
        .map(|(_, _, ty)| *ty)
        .unwrap_or(DEFAULT_TYPE)
}

/// Whether a belongs-to declaration also emits its association object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BelongsToMode {
    /// Foreign key column followed by the association object.
    #[default]
    WithAssociation,
    /// Foreign key column only.
    ForeignKeyOnly,
}

/// Result of parsing one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedField {
    /// A single field.
    Single(Field),
    /// Foreign key column and its association object, in declaration order.
    BelongsTo {
        /// `AuthorId uint`
        foreign_key: Field,
        /// `Author *User`
        association: Field,
    },
}

impl ParsedField {
    /// Flattens into declaration order.
    pub fn into_fields(self) -> Vec<Field> {
        match self {
            ParsedField::Single(field) => vec![field],
            ParsedField::BelongsTo {
                foreign_key,
                association,
            } => vec![foreign_key, association],
        }
    }

    /// Number of struct fields this declaration produces.
    pub fn len(&self) -> usize {
        match self {
            ParsedField::Single(_) => 1,
            ParsedField::BelongsTo { .. } => 2,
        }
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Parses field declarations for one owning model.
#[derive(Debug, Clone)]
pub struct FieldParser<'a> {
    inflector: &'a Inflector,
    owner: &'a NamingConvention,
    belongs_to_mode: BelongsToMode,
}

impl<'a> FieldParser<'a> {
    /// Creates a parser for fields of `owner`.
    pub fn new(inflector: &'a Inflector, owner: &'a NamingConvention) -> Self {
        Self {
            inflector,
            owner,
            belongs_to_mode: BelongsToMode::default(),
        }
    }

    /// Overrides the belongs-to expansion mode.
    pub fn with_belongs_to_mode(mut self, mode: BelongsToMode) -> Self {
        self.belongs_to_mode = mode;
        self
    }

    /// Parses one `name[:type[:extra]]` token.
    pub fn parse(&self, token: &str) -> AppResult<ParsedField> {
        let mut parts = token.splitn(3, ':').map(str::trim);
        let raw_name = parts.next().unwrap_or_default();
        let type_token = parts.next().filter(|t| !t.is_empty());
        let extra = parts.next().filter(|t| !t.is_empty());

        let name = to_snake_case(raw_name);
        if name.is_empty() {
            return Err(AppError::InvalidField {
                token: token.to_string(),
                reason: "empty field name".into(),
            });
        }
        if name == "id" {
            return Err(AppError::InvalidField {
                token: token.to_string(),
                reason: "`id` is the generated primary key".into(),
            });
        }

        let type_token = match type_token {
            Some(t) => t,
            None => {
                let inferred = infer_type(&name);
                debug!(field = %name, inferred, "inferred field type from name");
                inferred
            }
        };

        let alias = resolve(type_token);
        let parsed = match alias.category {
            TypeCategory::Storage => ParsedField::Single(attachment(&name, &alias)),
            TypeCategory::Relationship => self.relationship(&name, &alias, extra),
            TypeCategory::Translation => ParsedField::Single(translation(&name, &alias)),
            TypeCategory::Basic | TypeCategory::Custom => {
                if name.ends_with("_id") && alias.canonical_type == "uint" {
                    match extra {
                        Some(m) if is_modifier_list(m) => self.belongs_to(&name, None, Some(m)),
                        related => self.belongs_to(&name, related.map(to_pascal_case), None),
                    }
                } else {
                    ParsedField::Single(plain(&name, &alias, extra))
                }
            }
        };

        debug!(
            token,
            category = %alias.category,
            fields = parsed.len(),
            "parsed field declaration"
        );
        Ok(parsed)
    }

    fn relationship(
        &self,
        name: &str,
        alias: &FieldTypeAlias,
        related_override: Option<&str>,
    ) -> ParsedField {
        let related = related_override.map(to_pascal_case);
        match RelationKind::from_canonical(&alias.canonical_type) {
            Some(RelationKind::HasMany) => {
                let related =
                    related.unwrap_or_else(|| to_pascal_case(&self.inflector.singularize(name)));
                let tag = format!("foreignKey:{}Id", self.owner.model);
                ParsedField::Single(self.collection(name, related, RelationKind::HasMany, tag))
            }
            Some(RelationKind::ManyToMany) => {
                let related =
                    related.unwrap_or_else(|| to_pascal_case(&self.inflector.singularize(name)));
                let tag = format!("many2many:{}_{}", self.owner.model_snake, name);
                ParsedField::Single(self.collection(name, related, RelationKind::ManyToMany, tag))
            }
            Some(RelationKind::HasOne) => {
                let related = related.unwrap_or_else(|| to_pascal_case(name));
                let mut field = Field::association(
                    name,
                    &format!("*{related}"),
                    &alias.canonical_type,
                    TypeCategory::Relationship,
                    format!("foreignKey:{}Id", self.owner.model),
                );
                field.is_relation = true;
                field.relation_kind = RelationKind::HasOne;
                field.foreign_key = format!("{}Id", self.owner.model);
                field.related_model = related;
                ParsedField::Single(field.finish())
            }
            _ => self.belongs_to(name, related, None),
        }
    }

    fn collection(&self, name: &str, related: String, kind: RelationKind, tag: String) -> Field {
        let mut field = Field::association(
            name,
            &format!("[]*{related}"),
            &kind.to_string(),
            TypeCategory::Relationship,
            tag,
        );
        field.is_relation = true;
        field.relation_kind = kind;
        if kind == RelationKind::HasMany {
            field.foreign_key = format!("{}Id", self.owner.model);
        }
        field.related_model = related;
        field.finish()
    }

    fn belongs_to(
        &self,
        name: &str,
        related: Option<String>,
        modifiers: Option<&str>,
    ) -> ParsedField {
        let stripped = name
            .strip_suffix("_id")
            .or_else(|| name.strip_suffix("id"))
            .filter(|base| !base.is_empty());
        let (fk_column, base) = match stripped {
            Some(base) => (name.to_string(), base.to_string()),
            None => (format!("{name}_id"), name.to_string()),
        };
        let related = related.unwrap_or_else(|| to_pascal_case(&base));

        let mut foreign_key = Field::column(&fk_column, "uint", "uint", TypeCategory::Relationship);
        foreign_key.json_tag = format!("{fk_column},omitempty");
        foreign_key.relation_kind = RelationKind::BelongsTo;
        foreign_key.related_model = related.clone();
        foreign_key.foreign_key = foreign_key.name.clone();
        foreign_key.is_index = true;
        if let Some(modifiers) = modifiers {
            apply_modifiers(&mut foreign_key, modifiers);
        }
        let foreign_key = foreign_key.finish();

        if self.belongs_to_mode == BelongsToMode::ForeignKeyOnly {
            return ParsedField::Single(foreign_key);
        }

        let mut association = Field::association(
            &base,
            &format!("*{related}"),
            "belongs_to",
            TypeCategory::Relationship,
            format!("foreignKey:{}", foreign_key.name),
        );
        association.is_relation = true;
        association.relation_kind = RelationKind::BelongsToObject;
        association.related_model = related;
        association.foreign_key = foreign_key.name.clone();

        ParsedField::BelongsTo {
            foreign_key,
            association: association.finish(),
        }
    }
}

fn attachment(name: &str, alias: &FieldTypeAlias) -> Field {
    let mut field = Field::association(
        name,
        ATTACHMENT_TYPE,
        &alias.canonical_type,
        TypeCategory::Storage,
        SIDE_TABLE_TAG.to_string(),
    );
    field.is_image = alias.canonical_type == "image";
    field.is_file = alias.canonical_type == "file";
    field.finish()
}

fn translation(name: &str, alias: &FieldTypeAlias) -> Field {
    let mut field = Field::association(
        name,
        &alias.target_type,
        &alias.canonical_type,
        TypeCategory::Translation,
        SIDE_TABLE_TAG.to_string(),
    );
    field.is_translation = true;
    field.finish()
}

fn plain(name: &str, alias: &FieldTypeAlias, modifiers: Option<&str>) -> Field {
    let timestamp = matches!(name, "created_at" | "updated_at");
    let go_type = match name {
        "deleted_at" => SOFT_DELETE_TYPE,
        _ if timestamp => {
            if alias.target_type != TIME_TYPE {
                warn!(field = %name, declared = %alias.target_type, "timestamp columns are always time.Time");
            }
            TIME_TYPE
        }
        _ => alias.target_type.as_ref(),
    };
    let mut field = Field::column(name, go_type, &alias.canonical_type, alias.category);
    field.is_timestamp = timestamp && field.go_type == TIME_TYPE;

    if let Some(modifiers) = modifiers {
        apply_modifiers(&mut field, modifiers);
    }

    field.finish()
}

fn is_modifier_list(extra: &str) -> bool {
    extra
        .split('+')
        .map(|m| m.trim().to_lowercase())
        .all(|m| MODIFIERS.contains(&m.as_str()))
}

fn apply_modifiers(field: &mut Field, modifiers: &str) {
    for modifier in modifiers.split('+') {
        match modifier.trim().to_lowercase().as_str() {
            "required" => field.is_required = true,
            "unique" => field.is_unique = true,
            "index" => field.is_index = true,
            "" => {}
            other => {
                warn!(field = %field.snake_name, modifier = other, "ignoring unknown field modifier")
            }
        }
    }
}
