#![deny(missing_docs)]

//! # Generate Command
//!
//! `goscaffold generate <Model> [name:type ...]` renders a CRUD module and
//! registers it in the init file.

use crate::error::CliResult;
use crate::gofmt::{format_files, CommandExecutor};
use goscaffold_core::{BelongsToMode, InitPatcher, Project};
use std::path::Path;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Model name, singular or plural, any case (e.g. `BlogPost`).
    pub name: String,

    /// Field declarations: `name[:type[:extra]]`.
    /// Examples: `title`, `price:money`, `cover:image`, `author:belongsTo:User`.
    pub fields: Vec<String>,

    /// Overwrite an existing module directory.
    #[clap(long)]
    pub force: bool,

    /// Emit only the foreign key column for belongs-to fields, without the association object.
    #[clap(long)]
    pub fk_only: bool,

    /// Print the files that would be written without touching the disk.
    #[clap(long)]
    pub dry_run: bool,

    /// Skip running `gofmt` on the generated files.
    #[clap(long)]
    pub no_fmt: bool,
}

impl GenerateArgs {
    fn belongs_to_mode(&self) -> BelongsToMode {
        if self.fk_only {
            BelongsToMode::ForeignKeyOnly
        } else {
            BelongsToMode::WithAssociation
        }
    }
}

/// Executes the generate command against `project`.
pub fn execute(
    args: &GenerateArgs,
    project: &Project,
    patcher: &dyn InitPatcher,
    executor: &impl CommandExecutor,
) -> CliResult<()> {
    let plan = project.plan(&args.name, &args.fields, args.belongs_to_mode())?;
    let naming = &plan.data.naming;

    if args.dry_run {
        println!("Would generate module {} ({} fields):", naming.model, plan.data.fields.len());
        for path in plan.paths() {
            println!("  create {}", display_relative(project.root(), path));
        }
        println!("  patch  {}", display_relative(project.root(), &project.config().init_path(project.root())));
        return Ok(());
    }

    println!("Generating module {}...", naming.model);
    let written = plan.write(args.force, patcher)?;
    for path in &written {
        println!("  create {}", display_relative(project.root(), path));
    }

    if !args.no_fmt {
        let paths: Vec<&Path> = written.iter().map(|p| p.as_path()).collect();
        format_files(&paths, executor)?;
    }

    println!(
        "Module {} registered at {}.",
        naming.module, naming.route_path
    );
    Ok(())
}

pub(crate) fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
