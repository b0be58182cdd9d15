#![deny(missing_docs)]

//! # Destroy Command
//!
//! `goscaffold destroy <Model>` deletes a generated module and unregisters it.

use crate::error::CliResult;
use crate::generate::display_relative;
use goscaffold_core::{InitPatcher, NamingConvention, Project};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments for the destroy command.
#[derive(clap::Args, Debug, Clone)]
pub struct DestroyArgs {
    /// Model name used when the module was generated.
    pub name: String,
}

/// Files a destroy would delete, deepest first.
pub fn files_to_remove(project: &Project, naming: &NamingConvention) -> Vec<PathBuf> {
    let module_dir = project.config().module_dir(project.root(), &naming.dir_name);
    let mut files: Vec<PathBuf> = WalkDir::new(&module_dir)
        .contents_first(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();

    let model_file = project.config().model_file(project.root(), &naming.model_file);
    if model_file.is_file() {
        files.push(model_file);
    }
    files
}

/// Executes the destroy command against `project`.
pub fn execute(args: &DestroyArgs, project: &Project, patcher: &dyn InitPatcher) -> CliResult<()> {
    let naming = NamingConvention::build(project.inflector(), &args.name)?;
    let files = files_to_remove(project, &naming);

    println!("Destroying module {}...", naming.model);
    let report = project.destroy(&args.name, patcher)?;
    for path in &files {
        println!("  remove {}", display_relative(project.root(), path));
    }
    if report.unregistered {
        println!(
            "  patch  {}",
            display_relative(project.root(), &project.config().init_path(project.root()))
        );
    }
    Ok(())
}
