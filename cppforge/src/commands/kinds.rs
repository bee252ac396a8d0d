use clap::Args;
use cppforge_printer::{PrinterConfiguration, create_default_printer};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct KindsCommand {
    /// Only show renderers that handle subtypes when fallback is enabled
    #[arg(long)]
    pub fallback_only: bool,
}

impl KindsCommand {
    pub fn run(&self) -> Result<()> {
        let printer = create_default_printer(PrinterConfiguration::default()).unwrap_or_exit();

        println!("Renderers:");
        for (kind, context, renderer) in printer.registrations() {
            if self.fallback_only && !printer.is_fallback_handler(kind, context) {
                continue;
            }
            match context {
                Some(context) => println!("  {kind} in {context} -> {renderer}"),
                None => println!("  {kind} -> {renderer}"),
            }
        }

        Ok(())
    }
}
