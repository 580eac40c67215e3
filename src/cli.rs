use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::report::ConsoleReporter;
use crate::setup;

/// Root CLI for tailvite
#[derive(Parser)]
#[command(name = "tailvite")]
#[command(about = "Wire Tailwind CSS into a Vite project")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install Tailwind CSS and rewrite the project config files
    Setup,
    /// Print the detected project layout without changing anything
    Detect,
}

/// Dispatch after parse
pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup => {
            let reporter = ConsoleReporter;
            if let Err(e) = setup::run(&project_root(), &reporter) {
                eprintln!("error (setup): {e}");
                std::process::exit(1);
            }
        }
        Commands::Detect => {
            if let Err(e) = detect() {
                eprintln!("error (detect): {e}");
                std::process::exit(1);
            }
        }
    }
}

fn detect() -> Result<()> {
    let layout = setup::classify_root(&project_root())?;
    println!("language: {}", layout.variant.name());
    println!(
        "vite config: {}{}",
        layout.vite_config,
        if layout.vite_config_exists {
            ""
        } else {
            " (missing, would be created)"
        }
    );
    println!("stylesheet: {}", layout.stylesheet);
    Ok(())
}

fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
