#![deny(missing_docs)]

//! # Template Rendering
//!
//! Renders the embedded Go templates (model, service, controller, module)
//! against a [`RenderContext`].
//!
//! Templates are compiled into the binary. A project may shadow any of them by
//! placing `<name>.go.tmpl` in its configured templates directory.

use crate::error::AppResult;
use crate::template_data::TemplateData;
use minijinja::Environment;
use serde::Serialize;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The four generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `<models_dir>/<model>.go`
    Model,
    /// `<app_dir>/<package>/service.go`
    Service,
    /// `<app_dir>/<package>/controller.go`
    Controller,
    /// `<app_dir>/<package>/module.go`
    Module,
}

impl TemplateKind {
    /// Every template, in the order files are generated.
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Model,
        TemplateKind::Service,
        TemplateKind::Controller,
        TemplateKind::Module,
    ];

    /// Template name inside the environment.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Model => "model",
            TemplateKind::Service => "service",
            TemplateKind::Controller => "controller",
            TemplateKind::Module => "module",
        }
    }

    /// File name a project uses to override this template.
    pub fn override_file_name(self) -> String {
        format!("{}.go.tmpl", self.name())
    }

    fn embedded_source(self) -> &'static str {
        match self {
            TemplateKind::Model => include_str!("../templates/model.go.tmpl"),
            TemplateKind::Service => include_str!("../templates/service.go.tmpl"),
            TemplateKind::Controller => include_str!("../templates/controller.go.tmpl"),
            TemplateKind::Module => include_str!("../templates/module.go.tmpl"),
        }
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Values visible to templates: the template data plus project paths.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    /// Naming, fields and flags.
    #[serde(flatten)]
    pub data: &'a TemplateData,
    /// Go module path from `go.mod`.
    pub module_path: &'a str,
    /// Import path of the models package.
    pub models_import: String,
    /// Resolved imports of the model file.
    pub model_imports: Vec<String>,
}

impl<'a> RenderContext<'a> {
    /// Builds the context for a project whose models live in `models_dir`.
    pub fn new(data: &'a TemplateData, module_path: &'a str, models_dir: &str) -> Self {
        Self {
            data,
            module_path,
            models_import: format!("{}/{}", module_path, models_dir.trim_matches('/')),
            model_imports: data.import_paths(module_path),
        }
    }
}

/// Holds the compiled templates.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Compiles the embedded templates.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        for kind in TemplateKind::ALL {
            env.add_template(kind.name(), kind.embedded_source())?;
        }
        Ok(Self { env })
    }

    /// Compiles the embedded templates, replacing any that `dir` overrides.
    pub fn with_overrides(dir: &Path) -> AppResult<Self> {
        let mut renderer = Self::new()?;
        for kind in TemplateKind::ALL {
            let path = dir.join(kind.override_file_name());
            if path.is_file() {
                debug!(template = %kind, path = %path.display(), "using template override");
                let source = fs::read_to_string(&path)?;
                renderer.env.add_template_owned(kind.name(), source)?;
            }
        }
        Ok(renderer)
    }

    /// Renders one template.
    pub fn render(&self, kind: TemplateKind, ctx: &RenderContext<'_>) -> AppResult<String> {
        let template = self.env.get_template(kind.name())?;
        Ok(template.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::Inflector;
    use pretty_assertions::assert_eq;

    fn render(kind: TemplateKind, model: &str, tokens: &[&str]) -> String {
        let data = TemplateData::assemble(&Inflector::english(), model, tokens).unwrap();
        let ctx = RenderContext::new(&data, "example.com/blog", "app/models");
        TemplateRenderer::new().unwrap().render(kind, &ctx).unwrap()
    }

    #[test]
    fn test_model_struct_fields_and_tags() {
        let code = render(
            TemplateKind::Model,
            "post",
            &["title:string", "published:bool", "author_id:uint"],
        );
        assert!(code.starts_with("package models\n"));
        assert!(code.contains("type Post struct {\n\tId uint `json:\"id\" gorm:\"primaryKey\"`\n"));
        assert!(code.contains("\tTitle string `json:\"title\" gorm:\"column:title\"`\n"));
        assert!(code.contains(
            "\tAuthorId uint `json:\"author_id,omitempty\" gorm:\"column:author_id;index\"`\n"
        ));
        assert!(code.contains("\tAuthor *Author `json:\"author,omitempty\" gorm:\"foreignKey:AuthorId\"`\n"));
        assert!(code.contains("\tDeletedAt gorm.DeletedAt"));
        assert!(code.contains("return \"posts\""));
        assert!(!code.contains("\tAuthor *Author `json:\"author\"`"));
        assert!(code.contains("\tAuthorId *uint `json:\"author_id,omitempty\"`\n"));
    }

    #[test]
    fn test_model_imports_follow_fields() {
        let plain = render(TemplateKind::Model, "task", &["title"]);
        assert!(plain.contains("import (\n\t\"time\"\n\t\"gorm.io/gorm\"\n)\n"));

        let with_image = render(TemplateKind::Model, "post", &["cover:image"]);
        assert!(with_image.contains("\t\"example.com/blog/core/storage\"\n"));
    }

    #[test]
    fn test_declared_timestamps_are_not_duplicated() {
        let code = render(TemplateKind::Model, "event", &["created_at", "deleted_at"]);
        assert_eq!(code.matches("CreatedAt").count(), 1);
        assert_eq!(code.matches("\tDeletedAt ").count(), 1);
        assert!(!code.contains("UpdatedAt"));
    }

    #[test]
    fn test_mistyped_timestamp_still_compiles() {
        let code = render(TemplateKind::Model, "event", &["created_at:string"]);
        assert_eq!(code.matches("\tCreatedAt ").count(), 1);
        assert!(code.contains("\tCreatedAt time.Time `json:\"created_at\""));
        assert!(code.contains("\t\"time\"\n"));

        let controller = render(TemplateKind::Controller, "event", &["created_at:string"]);
        assert_eq!(controller.matches("\"created_at\":").count(), 1);
    }

    #[test]
    fn test_service_storage_only_with_attachments() {
        let plain = render(TemplateKind::Service, "task", &["title"]);
        assert!(!plain.contains("storage"));
        assert!(!plain.contains("Preload"));
        assert!(plain.contains("func NewTaskService(db *gorm.DB) *TaskService {"));

        let with_file = render(TemplateKind::Service, "report", &["document:file", "owner:belongsTo:User"]);
        assert!(with_file.contains("\"example.com/blog/core/storage\""));
        assert!(with_file.contains("\"mime/multipart\""));
        assert!(with_file.contains("func (s *ReportService) UploadDocument("));
        assert!(with_file.contains("query = query.Preload(\"Document\")"));
        assert!(with_file.contains("query = query.Preload(\"Owner\")"));
    }

    #[test]
    fn test_controller_routes() {
        let code = render(TemplateKind::Controller, "test_item", &["name", "cover_photo:image"]);
        assert!(code.contains("package test_items\n"));
        assert!(code.contains("group := r.Group(\"/test-items\")"));
        assert!(code.contains("group.PUT(\"/:id/cover-photo\", c.UploadCoverPhoto)"));
        assert!(code.contains("\"name\": true,"));
    }

    #[test]
    fn test_module_file() {
        let code = render(TemplateKind::Module, "category", &["name"]);
        let expected = "package categories

import (
\t\"example.com/blog/app/models\"
\t\"example.com/blog/core/module\"
\t\"example.com/blog/core/router\"

\t\"gorm.io/gorm\"
)

// CategoryModule wires the categories service and controller into the application.
type CategoryModule struct {
\tmodule.DefaultModule
\tDB         *gorm.DB
\tService    *CategoryService
\tController *CategoryController
}

// NewCategoryModule creates the categories module.
func NewCategoryModule(db *gorm.DB) module.Module {
\tservice := NewCategoryService(db)
\treturn &CategoryModule{
\t\tDB:         db,
\t\tService:    service,
\t\tController: NewCategoryController(service),
\t}
}

// Routes mounts the /categories endpoints.
func (m *CategoryModule) Routes(r *router.RouterGroup) {
\tm.Controller.Routes(r)
}

// Migrate creates or updates the categories table.
func (m *CategoryModule) Migrate() error {
\treturn m.DB.AutoMigrate(&models.Category{})
}

// GetModels lists the models owned by this module.
func (m *CategoryModule) GetModels() []any {
\treturn []any{&models.Category{}}
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_override_directory_replaces_template() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("module.go.tmpl"), "package {{ package_name }}\n").unwrap();

        let data = TemplateData::assemble(&Inflector::english(), "tag", &["name"]).unwrap();
        let ctx = RenderContext::new(&data, "example.com/blog", "app/models");
        let renderer = TemplateRenderer::with_overrides(dir.path()).unwrap();

        assert_eq!(renderer.render(TemplateKind::Module, &ctx).unwrap(), "package tags\n");
        assert!(renderer
            .render(TemplateKind::Model, &ctx)
            .unwrap()
            .contains("type Tag struct"));
    }
}
