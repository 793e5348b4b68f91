mod completions;
mod create_module;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use create_module::CreateModuleCommand;
use eyre::Result;

/// Extension trait for exiting on scaffolding errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for volt_core::Result<T> {
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
#[command(name = "volt")]
#[command(version)]
#[command(about = "Scaffold feature modules for Next.js applications")]
pub(crate) struct Cli {
    /// Show debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::CreateModule(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new feature module
    CreateModule(CreateModuleCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
