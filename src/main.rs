use clap::Parser;
use geotile::cli::{Cli, Commands};
use geotile::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => geotile::cli::generate::run(args, &printer)?,
        Commands::List(args) => geotile::cli::list::run(args, &printer)?,
        Commands::Completions(args) => geotile::cli::completions::run(args)?,
    }

    Ok(())
}
