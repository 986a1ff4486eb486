//! podstatic - force selected CocoaPods to build as static libraries
//!
//! A command line tool run during native iOS project generation. It injects a
//! `pre_install` hook into the Podfile so that the listed pods build as static
//! libraries, optionally with modular headers, and leaves an already patched
//! Podfile alone.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod operations;
mod podfile;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply(args) => commands::apply::run(&cli.project_root, cli.verbose, args),
        Commands::Status => commands::status::run(&cli.project_root, cli.verbose),
        Commands::Preview(args) => commands::preview::run(cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
