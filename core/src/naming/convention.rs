#![deny(missing_docs)]

//! # Naming Convention
//!
//! Derives the closed set of names one model needs across the model, service,
//! controller and module files, the init file registration and the database.
//!
//! Everything here is a pure function of the input string. Tables, packages and
//! directories always use the plural snake_case form, whether the user typed
//! `post`, `Post` or `posts`.

use super::case::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
use super::inflector::Inflector;
use crate::error::{AppError, AppResult};
use serde::Serialize;

/// Every case and plurality variant of a model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingConvention {
    /// Go struct name, e.g. `BlogPost`.
    pub model: String,
    /// `blog_post`
    pub model_snake: String,
    /// `blogPost`
    pub model_camel: String,
    /// `blog-post`
    pub model_kebab: String,
    /// `blogpost`
    pub model_lower: String,
    /// `BlogPosts`
    pub plural: String,
    /// `blog_posts`
    pub plural_snake: String,
    /// `blogPosts`
    pub plural_camel: String,
    /// `blog-posts`
    pub plural_kebab: String,
    /// `blogposts`
    pub plural_lower: String,
    /// Go package name of the generated module.
    pub package_name: String,
    /// Directory holding service, controller and module files.
    pub dir_name: String,
    /// Database table name.
    pub table_name: String,
    /// `/blog-posts`
    pub route_path: String,
    /// `blog-posts`
    pub route_group: String,
    /// `BlogPostController`
    pub controller: String,
    /// `BlogPostService`
    pub service: String,
    /// `BlogPostModule`
    pub module: String,
    /// Local variable holding one record.
    pub var_single: String,
    /// Local variable holding a slice of records.
    pub var_plural: String,
    /// Local variable holding a record id.
    pub var_id: String,
    /// `blog_post.go`
    pub model_file: String,
}

impl NamingConvention {
    /// Builds the naming convention for `model_name`.
    ///
    /// The input is normalized to snake_case and singularized before any other
    /// name is derived, so singular and plural spellings land on the same record.
    pub fn build(inflector: &Inflector, model_name: &str) -> AppResult<Self> {
        let trimmed = model_name.trim();
        let snake = to_snake_case(trimmed);
        if snake.is_empty() {
            return Err(AppError::InvalidModelName(model_name.to_string()));
        }

        let model_snake = inflector.singularize(&snake);
        let plural_snake = inflector.pluralize(&model_snake);

        let model = to_pascal_case(&model_snake);
        let plural = to_pascal_case(&plural_snake);
        let model_camel = to_camel_case(&model_snake);
        let plural_camel = to_camel_case(&plural_snake);
        let plural_kebab = to_kebab_case(&plural_snake);

        Ok(Self {
            model_kebab: to_kebab_case(&model_snake),
            model_lower: model.to_lowercase(),
            plural_lower: plural.to_lowercase(),
            package_name: plural_snake.clone(),
            dir_name: plural_snake.clone(),
            table_name: plural_snake.clone(),
            route_path: format!("/{plural_kebab}"),
            route_group: plural_kebab.clone(),
            controller: format!("{model}Controller"),
            service: format!("{model}Service"),
            module: format!("{model}Module"),
            var_single: model_camel.clone(),
            var_plural: plural_camel.clone(),
            var_id: format!("{model_camel}Id"),
            model_file: format!("{model_snake}.go"),
            model,
            model_snake,
            model_camel,
            plural,
            plural_snake,
            plural_camel,
            plural_kebab,
        })
    }
}
