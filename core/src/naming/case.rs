#![deny(missing_docs)]

//! # Case Conversion
//!
//! Helper functions for deriving Go identifiers, file names and URL segments
//! from user supplied model and field names.
//!
//! Go initialisms are intentionally not applied: `author_id` becomes `AuthorId`,
//! which keeps every generated file agreeing on a single spelling.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// `blog_post` / `blog-post` / `blogPost` -> `BlogPost`.
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// `blog_post` -> `blogPost`.
pub fn to_camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Converts a mixed-case string (PascalCase or camelCase) to snake_case.
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// `BlogPost` -> `blog-post`. Used for route segments.
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}
