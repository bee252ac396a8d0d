mod completions;
mod kinds;
mod render;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use kinds::KindsCommand;
use render::RenderCommand;

/// Extension trait for exiting on printer errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cppforge_printer::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cppforge")]
#[command(version)]
#[command(about = "Render C++ source code from syntax trees")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Kinds(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON syntax tree to C++ source
    Render(RenderCommand),

    /// List the registered (kind, context) renderers
    Kinds(KindsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
