// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Parses arguments
// with clap and hands each subcommand to a Layer 2 use case.
// This is the only layer that prints.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;

use commands::{Commands, InitConfigArgs, PracticeArgs, RevealArgs, SheetArgs};

use crate::application::{
    list_use_case::ListUseCase,
    practice_use_case::PracticeUseCase,
    reveal_use_case::RevealUseCase,
    sheet_use_case::{SheetConfig, SheetUseCase},
};
use crate::infra::{config_store::ConfigStore, export::write_output};

#[derive(Parser, Debug)]
#[command(
    name = "gd-practice",
    version,
    about = "Gradient descent practice: take one update step on a two-variable function."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routes only, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Sheet(args)      => run_sheet(args),
            Commands::Reveal(args)     => run_reveal(args),
            Commands::Practice(args)   => run_practice(args),
            Commands::List             => run_list(),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

fn run_sheet(args: SheetArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => ConfigStore::new(path).load()?,
        None       => SheetConfig::default(),
    };
    let config = args.apply_to(base);

    let sheet = SheetUseCase::new(config).execute()?;

    match &args.output {
        Some(path) => write_output(Path::new(path), &sheet)?,
        None       => print!("{sheet}"),
    }
    Ok(())
}

fn run_reveal(args: RevealArgs) -> Result<()> {
    let out = RevealUseCase::new().execute(args.question, args.seed, args.format.into())?;
    print!("{out}");
    Ok(())
}

fn run_practice(args: PracticeArgs) -> Result<()> {
    let stdin   = io::stdin();
    let summary = PracticeUseCase::new(args.into()).run(stdin.lock(), io::stdout())?;
    println!("\nRevealed {} of {} questions shown.", summary.revealed, summary.shown);
    Ok(())
}

fn run_list() -> Result<()> {
    for line in ListUseCase::new().lines() {
        println!("{line}");
    }
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    ConfigStore::new(&args.path).save(&SheetConfig::default(), args.force)?;
    println!("Wrote default config to '{}'", args.path);
    Ok(())
}
