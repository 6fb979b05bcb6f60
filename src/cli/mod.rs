pub mod export;
pub mod inspect;
pub mod validate;

use clap::{Parser, Subcommand};

/// p2d - Paper2D sprite sheet exporter
#[derive(Parser, Debug)]
#[command(name = "p2d")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export an atlas manifest to Paper2D sprite sheets
    Export(export::ExportArgs),

    /// Validate atlas manifests without exporting
    Validate(validate::ValidateArgs),

    /// List the contents of an exported sprite sheet
    Inspect(inspect::InspectArgs),
}
