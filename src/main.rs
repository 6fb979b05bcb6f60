use clap::Parser;
use miette::Result;
use p2d::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => p2d::cli::export::run(args)?,
        Commands::Validate(args) => p2d::cli::validate::run(args)?,
        Commands::Inspect(args) => p2d::cli::inspect::run(args)?,
    }

    Ok(())
}
