#![deny(missing_docs)]

//! # goscaffold
//!
//! Command line interface for generating Go CRUD modules.
//!
//! Supported Commands:
//! - `generate` (`g`): Renders model, service, controller and module files and registers the module.
//! - `destroy` (`d`): Removes a generated module and unregisters it.
//! - `inspect`: Prints the data templates see, as JSON.

use crate::error::CliResult;
use crate::gofmt::ShellExecutor;
use clap::{Parser, Subcommand};
use goscaffold_core::{Inflector, Project};
use std::path::PathBuf;
use std::process::ExitCode;

mod destroy;
mod error;
mod generate;
mod gofmt;
mod inspect;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Go CRUD module generator")]
struct Cli {
    /// Root of the Go project (the directory holding go.mod).
    #[clap(long, global = true, env = "GOSCAFFOLD_ROOT", default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug).
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a CRUD module from a model name and field declarations.
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Remove a generated module.
    #[clap(visible_alias = "d")]
    Destroy(destroy::DestroyArgs),
    /// Print the assembled template data as JSON.
    Inspect(inspect::InspectArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Generate(args) => {
            let project = Project::open(&cli.root)?;
            let patcher = project.init_patcher();
            generate::execute(args, &project, &patcher, &ShellExecutor)?;
        }
        Commands::Destroy(args) => {
            let project = Project::open(&cli.root)?;
            let patcher = project.init_patcher();
            destroy::execute(args, &project, &patcher)?;
        }
        Commands::Inspect(args) => {
            let stdout = std::io::stdout();
            inspect::execute(args, &Inflector::english(), &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
