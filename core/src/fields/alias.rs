#![deny(missing_docs)]

//! # Field Type Aliases
//!
//! Maps the user-facing type token of a field declaration (`image`, `belongsTo`,
//! `text`, ...) onto a canonical type and the Go type emitted for it.
//!
//! Resolution never fails: tokens missing from the table pass through verbatim
//! as a `Custom` type, so `address:Address` produces a field of type `Address`.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Display;

/// Broad family a type token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// Backed by the storage side table (`*storage.Attachment`).
    Storage,
    /// Association with another generated model.
    Relationship,
    /// Plain inline column.
    Basic,
    /// Backed by the translation side table.
    Translation,
    /// Unknown token, passed through verbatim.
    Custom,
}

impl Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeCategory::Storage => write!(f, "storage"),
            TypeCategory::Relationship => write!(f, "relationship"),
            TypeCategory::Basic => write!(f, "basic"),
            TypeCategory::Translation => write!(f, "translation"),
            TypeCategory::Custom => write!(f, "custom"),
        }
    }
}

/// One resolved alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTypeAlias {
    /// The token as matched (table spelling) or as typed (custom).
    pub alias: Cow<'static, str>,
    /// Normalized identifier shared by all aliases of the same type.
    pub canonical_type: Cow<'static, str>,
    /// Go type emitted in the model struct.
    pub target_type: Cow<'static, str>,
    /// Category used for dispatch in the field parser.
    pub category: TypeCategory,
}

struct AliasEntry {
    alias: &'static str,
    canonical: &'static str,
    target: &'static str,
    category: TypeCategory,
}

const fn entry(
    alias: &'static str,
    canonical: &'static str,
    target: &'static str,
    category: TypeCategory,
) -> AliasEntry {
    AliasEntry {
        alias,
        canonical,
        target,
        category,
    }
}

use TypeCategory::{Basic, Relationship, Storage, Translation};

/// Go type of the attachment association.
pub const ATTACHMENT_TYPE: &str = "*storage.Attachment";
/// Go type of a translatable field.
pub const TRANSLATION_TYPE: &str = "translation.Field";
/// Go type of the soft delete column.
pub const SOFT_DELETE_TYPE: &str = "gorm.DeletedAt";
/// Go type of date and time columns.
pub const TIME_TYPE: &str = "time.Time";
/// Go type of JSON columns.
pub const JSON_TYPE: &str = "datatypes.JSON";

const ALIASES: &[AliasEntry] = &[
    // Strings
    entry("string", "string", "string", Basic),
    entry("str", "string", "string", Basic),
    entry("varchar", "string", "string", Basic),
    entry("text", "text", "string", Basic),
    entry("longtext", "text", "string", Basic),
    entry("richtext", "text", "string", Basic),
    entry("email", "email", "string", Basic),
    entry("url", "url", "string", Basic),
    entry("link", "url", "string", Basic),
    entry("phone", "phone", "string", Basic),
    entry("tel", "phone", "string", Basic),
    entry("slug", "slug", "string", Basic),
    entry("uuid", "uuid", "string", Basic),
    // Numbers
    entry("int", "int", "int", Basic),
    entry("integer", "int", "int", Basic),
    entry("int64", "int64", "int64", Basic),
    entry("bigint", "int64", "int64", Basic),
    entry("uint", "uint", "uint", Basic),
    entry("unsigned", "uint", "uint", Basic),
    entry("float", "float64", "float64", Basic),
    entry("float64", "float64", "float64", Basic),
    entry("double", "float64", "float64", Basic),
    entry("float32", "float32", "float32", Basic),
    entry("decimal", "decimal", "float64", Basic),
    entry("money", "decimal", "float64", Basic),
    entry("price", "decimal", "float64", Basic),
    // Booleans
    entry("bool", "bool", "bool", Basic),
    entry("boolean", "bool", "bool", Basic),
    // Time
    entry("datetime", "datetime", TIME_TYPE, Basic),
    entry("timestamp", "datetime", TIME_TYPE, Basic),
    entry("time", "datetime", TIME_TYPE, Basic),
    entry("date", "date", TIME_TYPE, Basic),
    // Structured
    entry("json", "json", JSON_TYPE, Basic),
    entry("jsonb", "json", JSON_TYPE, Basic),
    // Storage
    entry("attachment", "attachment", ATTACHMENT_TYPE, Storage),
    entry("file", "file", ATTACHMENT_TYPE, Storage),
    entry("image", "image", ATTACHMENT_TYPE, Storage),
    // Relationships. Target types describe the shape; the parser fills in the model.
    entry("belongsto", "belongs_to", "uint", Relationship),
    entry("belongs_to", "belongs_to", "uint", Relationship),
    entry("references", "belongs_to", "uint", Relationship),
    entry("ref", "belongs_to", "uint", Relationship),
    entry("hasone", "has_one", "*", Relationship),
    entry("has_one", "has_one", "*", Relationship),
    entry("hasmany", "has_many", "[]*", Relationship),
    entry("has_many", "has_many", "[]*", Relationship),
    entry("manytomany", "many_to_many", "[]*", Relationship),
    entry("many_to_many", "many_to_many", "[]*", Relationship),
    entry("m2m", "many_to_many", "[]*", Relationship),
    // Translations
    entry("translation", "translation", TRANSLATION_TYPE, Translation),
    entry("translatable", "translation", TRANSLATION_TYPE, Translation),
    entry("translatedfield", "translation", TRANSLATION_TYPE, Translation),
    entry("i18n", "translation", TRANSLATION_TYPE, Translation),
];

/// Resolves a type token. Matching is case-insensitive and exact.
pub fn resolve(token: &str) -> FieldTypeAlias {
    let lowered = token.to_lowercase();
    match ALIASES.iter().find(|e| e.alias == lowered) {
        Some(e) => FieldTypeAlias {
            alias: Cow::Borrowed(e.alias),
            canonical_type: Cow::Borrowed(e.canonical),
            target_type: Cow::Borrowed(e.target),
            category: e.category,
        },
        None => FieldTypeAlias {
            alias: Cow::Owned(token.to_string()),
            canonical_type: Cow::Owned(token.to_string()),
            target_type: Cow::Owned(token.to_string()),
            category: TypeCategory::Custom,
        },
    }
}

/// `belongsTo`, `hasMany`, `m2m`, ...
pub fn is_relationship_type(token: &str) -> bool {
    resolve(token).category == TypeCategory::Relationship
}

/// `attachment`, `file`, `image`.
pub fn is_storage_type(token: &str) -> bool {
    resolve(token).category == TypeCategory::Storage
}

/// `translation`, `i18n`, ...
pub fn is_translation_type(token: &str) -> bool {
    resolve(token).category == TypeCategory::Translation
}

/// All aliases known to the resolver, in table order.
pub fn known_aliases() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().map(|e| e.alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_case_insensitive_match() {
        let alias = resolve("belongsTo");
        assert_eq!(alias.canonical_type, "belongs_to");
        assert_eq!(alias.category, TypeCategory::Relationship);

        let image = resolve("Image");
        assert_eq!(image.canonical_type, "image");
        assert_eq!(image.target_type, ATTACHMENT_TYPE);
        assert_eq!(image.category, TypeCategory::Storage);
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        for token in ["Address", "[]string", "map[string]any", "", "uuid4"] {
            let alias = resolve(token);
            assert_eq!(alias.category, TypeCategory::Custom);
            assert_eq!(alias.canonical_type, token);
            assert_eq!(alias.target_type, token);
        }
    }

    #[test]
    fn test_every_alias_is_reachable() {
        let mut seen = HashSet::new();
        for alias in known_aliases() {
            assert_eq!(alias, alias.to_lowercase(), "table keys are lowercase");
            assert!(seen.insert(alias), "duplicate alias {alias}");
            assert_eq!(resolve(alias).alias, alias);
            assert_ne!(resolve(alias).category, TypeCategory::Custom);
        }
    }

    #[test]
    fn test_category_predicates() {
        assert!(is_relationship_type("hasMany"));
        assert!(is_relationship_type("M2M"));
        assert!(!is_relationship_type("string"));
        assert!(is_storage_type("file"));
        assert!(is_translation_type("i18n"));
        assert!(!is_translation_type("text"));
    }

    #[test]
    fn test_aliases_share_canonical_types() {
        assert_eq!(resolve("money").canonical_type, "decimal");
        assert_eq!(resolve("money").target_type, "float64");
        assert_eq!(resolve("timestamp").target_type, TIME_TYPE);
        assert_eq!(resolve("link").canonical_type, resolve("url").canonical_type);
    }
}
