#![deny(missing_docs)]

//! # Module Generation
//!
//! Ties configuration, template data, rendering and init patching together.
//!
//! A [`GenerationPlan`] holds every rendered file in memory. Nothing touches the
//! disk until [`GenerationPlan::write`] is called, and `write` checks the init
//! file before creating any file, so neither a template error nor a missing
//! marker leaves a half generated module behind.

use crate::config::ProjectConfig;
use crate::error::{AppError, AppResult};
use crate::fields::BelongsToMode;
use crate::naming::{Inflector, NamingConvention};
use crate::patcher::{InitPatcher, MarkerPatcher, ModuleRegistration};
use crate::render::{RenderContext, TemplateKind, TemplateRenderer};
use crate::template_data::TemplateData;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A Go project that modules are generated into.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
    module_path: String,
    inflector: Inflector,
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Template it was rendered from.
    pub kind: TemplateKind,
    /// Absolute destination.
    pub path: PathBuf,
    /// Rendered Go source.
    pub contents: String,
}

/// Everything `generate` would do, computed up front.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// The data the files were rendered from.
    pub data: TemplateData,
    /// Files in generation order: model, service, controller, module.
    pub files: Vec<GeneratedFile>,
    /// Package directory of the module.
    pub module_dir: PathBuf,
    /// Lines added to the init file.
    pub registration: ModuleRegistration,
}

/// What `destroy` removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestroyReport {
    /// Files and directories deleted.
    pub removed: Vec<PathBuf>,
    /// Whether the init file changed.
    pub unregistered: bool,
}

impl Project {
    /// Opens the project at `root`, reading `goscaffold.yaml` and `go.mod`.
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        let config = ProjectConfig::load(&root)?;
        Self::with_config(root, config)
    }

    /// Opens the project at `root` with an explicit configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: ProjectConfig) -> AppResult<Self> {
        let root = root.into();
        let module_path = config.resolve_module_path(&root)?;
        debug!(root = %root.display(), module_path, "opened project");
        Ok(Self {
            root,
            config,
            module_path,
            inflector: Inflector::english(),
        })
    }

    /// Replaces the inflector used for model and relation names.
    pub fn with_inflector(mut self, inflector: Inflector) -> Self {
        self.inflector = inflector;
        self
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Active configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Go module path.
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Inflector used for naming.
    pub fn inflector(&self) -> &Inflector {
        &self.inflector
    }

    /// Patcher for this project's init file.
    pub fn init_patcher(&self) -> MarkerPatcher {
        MarkerPatcher::new(self.config.init_path(&self.root))
    }

    fn renderer(&self) -> AppResult<TemplateRenderer> {
        match self.config.templates_path(&self.root) {
            Some(dir) => TemplateRenderer::with_overrides(&dir),
            None => TemplateRenderer::new(),
        }
    }

    fn registration(&self, naming: &NamingConvention) -> ModuleRegistration {
        ModuleRegistration::for_module(naming, &self.module_path, &self.config.app_dir)
    }

    /// Parses the declarations and renders every file of a new module.
    pub fn plan<S: AsRef<str>>(
        &self,
        model_name: &str,
        field_tokens: &[S],
        belongs_to_mode: BelongsToMode,
    ) -> AppResult<GenerationPlan> {
        let data =
            TemplateData::assemble_with(&self.inflector, model_name, field_tokens, belongs_to_mode)?;
        let renderer = self.renderer()?;
        let ctx = RenderContext::new(&data, &self.module_path, &self.config.models_dir);
        let module_dir = self.config.module_dir(&self.root, &data.naming.dir_name);

        let mut files = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            let path = match kind {
                TemplateKind::Model => self.config.model_file(&self.root, &data.naming.model_file),
                TemplateKind::Service => module_dir.join("service.go"),
                TemplateKind::Controller => module_dir.join("controller.go"),
                TemplateKind::Module => module_dir.join("module.go"),
            };
            let contents = renderer.render(kind, &ctx)?;
            files.push(GeneratedFile {
                kind,
                path,
                contents,
            });
        }

        let registration = self.registration(&data.naming);
        Ok(GenerationPlan {
            data,
            files,
            module_dir,
            registration,
        })
    }

    /// Deletes a module's directory and model file, then unregisters it.
    pub fn destroy(&self, model_name: &str, patcher: &dyn InitPatcher) -> AppResult<DestroyReport> {
        let naming = NamingConvention::build(&self.inflector, model_name)?;
        let module_dir = self.config.module_dir(&self.root, &naming.dir_name);
        let model_file = self.config.model_file(&self.root, &naming.model_file);

        if !module_dir.exists() && !model_file.exists() {
            return Err(AppError::ModuleNotFound(module_dir));
        }

        let mut report = DestroyReport::default();
        if module_dir.is_dir() {
            fs::remove_dir_all(&module_dir)?;
            info!(path = %module_dir.display(), "removed module directory");
            report.removed.push(module_dir);
        }
        if model_file.is_file() {
            fs::remove_file(&model_file)?;
            info!(path = %model_file.display(), "removed model file");
            report.removed.push(model_file);
        }

        report.unregistered = patcher.remove_module(&self.registration(&naming))?;
        Ok(report)
    }
}

impl GenerationPlan {
    /// Destination paths, in generation order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    /// Writes every file and registers the module.
    ///
    /// Fails with [`AppError::ModuleExists`] when the module directory is already
    /// present, unless `force` is set. Init file errors are reported before any
    /// file is written.
    pub fn write(&self, force: bool, patcher: &dyn InitPatcher) -> AppResult<Vec<PathBuf>> {
        if self.module_dir.exists() && !force {
            return Err(AppError::ModuleExists(self.module_dir.clone()));
        }
        patcher.check_module(&self.registration)?;

        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            if let Some(parent) = file.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&file.path, &file.contents)?;
            info!(template = %file.kind, path = %file.path.display(), "wrote file");
            written.push(file.path.clone());
        }

        if patcher.insert_module(&self.registration)? {
            info!(module = %self.data.naming.module, "registered module");
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPatcher {
        inserted: RefCell<Vec<ModuleRegistration>>,
        removed: RefCell<Vec<ModuleRegistration>>,
        missing_marker: bool,
    }

    impl InitPatcher for RecordingPatcher {
        fn check_module(&self, _registration: &ModuleRegistration) -> AppResult<()> {
            if self.missing_marker {
                return Err(AppError::MarkerNotFound {
                    marker: "MODULE_IMPORT_MARKER".into(),
                    path: PathBuf::from("app/init.go"),
                });
            }
            Ok(())
        }

        fn insert_module(&self, registration: &ModuleRegistration) -> AppResult<bool> {
            self.inserted.borrow_mut().push(registration.clone());
            Ok(true)
        }

        fn remove_module(&self, registration: &ModuleRegistration) -> AppResult<bool> {
            self.removed.borrow_mut().push(registration.clone());
            Ok(true)
        }
    }

    fn project() -> (tempfile::TempDir, Project) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/blog\n").unwrap();
        let project = Project::open(dir.path()).unwrap();
        (dir, project)
    }

    #[test]
    fn test_plan_does_not_touch_disk() {
        let (dir, project) = project();
        let plan = project
            .plan("post", &["title"], BelongsToMode::default())
            .unwrap();

        let relative: Vec<_> = plan
            .paths()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            relative,
            [
                PathBuf::from("app/models/post.go"),
                PathBuf::from("app/posts/service.go"),
                PathBuf::from("app/posts/controller.go"),
                PathBuf::from("app/posts/module.go"),
            ]
        );
        assert!(!dir.path().join("app").exists());
    }

    #[test]
    fn test_write_registers_and_refuses_existing() {
        let (_dir, project) = project();
        let patcher = RecordingPatcher::default();
        let plan = project
            .plan("post", &["title"], BelongsToMode::default())
            .unwrap();

        let written = plan.write(false, &patcher).unwrap();
        assert_eq!(written.len(), 4);
        assert!(written.iter().all(|p| p.is_file()));
        assert_eq!(patcher.inserted.borrow().len(), 1);

        assert!(matches!(
            plan.write(false, &patcher),
            Err(AppError::ModuleExists(_))
        ));
        assert!(plan.write(true, &patcher).is_ok());
    }

    #[test]
    fn test_init_file_error_writes_nothing() {
        let (dir, project) = project();
        let patcher = RecordingPatcher {
            missing_marker: true,
            ..RecordingPatcher::default()
        };
        let plan = project
            .plan("post", &["title"], BelongsToMode::default())
            .unwrap();

        assert!(matches!(
            plan.write(false, &patcher),
            Err(AppError::MarkerNotFound { .. })
        ));
        assert!(!dir.path().join("app").exists());
        assert!(patcher.inserted.borrow().is_empty());
    }

    #[test]
    fn test_destroy() {
        let (dir, project) = project();
        let patcher = RecordingPatcher::default();

        assert!(matches!(
            project.destroy("post", &patcher),
            Err(AppError::ModuleNotFound(_))
        ));

        project
            .plan("post", &["title"], BelongsToMode::default())
            .unwrap()
            .write(false, &patcher)
            .unwrap();

        let report = project.destroy("Posts", &patcher).unwrap();
        assert_eq!(report.removed.len(), 2);
        assert!(report.unregistered);
        assert!(!dir.path().join("app/posts").exists());
        assert!(!dir.path().join("app/models/post.go").exists());
        assert_eq!(
            patcher.removed.borrow()[0].initializer_line,
            "posts.NewPostModule(db),"
        );
    }
}
