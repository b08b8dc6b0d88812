//! Command-line interface definitions.

use crate::catalog::{ItemId, Section};
use crate::core::Environment;
use crate::hydrate::Strategy;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Vidshelf video catalog front end
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vidshelf.toml)
    #[arg(short = 'C', long, global = true, default_value = crate::config::DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the rendered catalog, `/initialState` and static assets
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Asset mode (overrides VIDSHELF_ENV and [site] env)
        #[arg(short, long, value_enum)]
        env: Option<Environment>,
    },

    /// Render the document once, to stdout or a file
    #[command(visible_alias = "r")]
    Render {
        /// Asset mode (overrides VIDSHELF_ENV and [site] env)
        #[arg(short, long, value_enum)]
        env: Option<Environment>,

        /// Write the document here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Bootstrap a client store, apply favorite clicks and print the result
    #[command(visible_alias = "h")]
    Hydrate {
        #[command(flatten)]
        args: HydrateArgs,
    },
}

/// Hydrate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct HydrateArgs {
    /// Bootstrap strategy (overrides [hydrate] strategy)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Base URL of the server (overrides [hydrate] endpoint)
    #[arg(short = 'u', long, value_hint = clap::ValueHint::Url)]
    pub endpoint: Option<String>,

    /// Rendered document to read the embedded state from.
    /// Without it, the embedded strategy downloads `<endpoint>/`.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub document: Option<PathBuf>,

    /// Click the favorite affordance of an item, as `<section>:<id>`.
    /// Quote the id (`trends:'"007"'`) to click a numeric-looking text id.
    /// Repeatable; clicks are applied in order.
    #[arg(short, long = "favorite", value_name = "SECTION:ID")]
    pub favorites: Vec<FavoriteClick>,

    /// Print the re-rendered view markup instead of the state JSON
    #[arg(short, long)]
    pub markup: bool,
}

/// A click on the affordance of item `id` as shown in `section`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteClick {
    pub section: Section,
    pub id: ItemId,
}

impl FromStr for FavoriteClick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, id) = s
            .split_once(':')
            .ok_or_else(|| format!("expected `<section>:<id>`, got `{s}`"))?;
        if id.is_empty() {
            return Err(format!("missing item id in `{s}`"));
        }
        Ok(Self {
            section: section.parse()?,
            id: id.parse().unwrap_or_else(|e: std::convert::Infallible| match e {}),
        })
    }
}

impl Cli {
    /// `--env` of the active subcommand, if any.
    pub const fn env(&self) -> Option<Environment> {
        match &self.command {
            Commands::Serve { env, .. } | Commands::Render { env, .. } => *env,
            Commands::Hydrate { .. } => None,
        }
    }
}
