use std::path::PathBuf;

use clap::Args;
use cppforge_ast::Node;
use cppforge_printer::{Settings, create_default_printer};
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// JSON file holding the syntax tree
    pub tree: PathBuf,

    /// Path to a cppforge.toml settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Let supertype renderers handle kinds without a renderer of their own
    #[arg(long)]
    pub fallback: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let settings = match &self.config {
            Some(path) => Settings::from_file(path).unwrap_or_exit(),
            None => Settings::default(),
        };
        let configuration = settings.printer.configuration().unwrap_or_exit();
        let printer = create_default_printer(configuration)
            .unwrap_or_exit()
            .with_fallback(settings.printer.fallback || self.fallback);

        let content = std::fs::read_to_string(&self.tree)
            .wrap_err_with(|| format!("Failed to read {}", self.tree.display()))?;
        let tree: Node = serde_json::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse syntax tree in {}", self.tree.display()))?;
        log::debug!("loaded {} tree from {}", tree.kind(), self.tree.display());

        let text = printer.print(&tree).unwrap_or_exit();

        match &self.output {
            Some(path) => {
                std::fs::write(path, &text)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => print!("{text}"),
        }

        Ok(())
    }
}
