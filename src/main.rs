//! Vidshelf - server-rendered video catalog with client-side favorites.

mod app;
mod catalog;
mod cli;
mod config;
mod core;
mod embed;
mod favorite;
mod hydrate;
mod logger;
mod render;
mod utils;
mod view;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    // `.env` is optional; VIDSHELF_ENV may also come from the real environment
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        log!("warning"; "failed to load .env: {}", e);
    }

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Serve { .. } => cli::serve::serve(),
        Commands::Render { output, .. } => cli::render::run_render(&config, output.as_deref()),
        Commands::Hydrate { args } => cli::hydrate::run_hydrate(args, &config),
    }
}
