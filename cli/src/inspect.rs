//! # Inspect Command
//!
//! `goscaffold inspect <Model> [name:type ...]` prints the assembled template
//! data as JSON. Useful when writing template overrides.

use crate::error::CliResult;
use goscaffold_core::{BelongsToMode, Inflector, TemplateData};
use std::io::Write;

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Model name.
    pub name: String,

    /// Field declarations: `name[:type[:extra]]`.
    pub fields: Vec<String>,

    /// Emit only the foreign key column for belongs-to fields.
    #[clap(long)]
    pub fk_only: bool,
}

/// Writes the template data for `args` to `out` as pretty JSON.
pub fn execute(args: &InspectArgs, inflector: &Inflector, out: &mut impl Write) -> CliResult<()> {
    let mode = if args.fk_only {
        BelongsToMode::ForeignKeyOnly
    } else {
        BelongsToMode::WithAssociation
    };
    let data = TemplateData::assemble_with(inflector, &args.name, &args.fields, mode)?;
    serde_json::to_writer_pretty(&mut *out, &data)?;
    writeln!(out)?;
    Ok(())
}
