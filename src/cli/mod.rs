pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// geotile - Tileable SVG pattern generator
#[derive(Parser, Debug)]
#[command(name = "geotile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a pattern from a seed string
    Generate(generate::GenerateArgs),

    /// List the known pattern generators
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
