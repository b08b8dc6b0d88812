//! `vidshelf hydrate`: bootstrap a client, replay favorite clicks, print.

use super::args::HydrateArgs;
use super::common::write_output;
use crate::app::App;
use crate::catalog::{CatalogState, CatalogStore};
use crate::config::SiteConfig;
use crate::hydrate::{EmbeddedState, FetchState, Strategy, bootstrap, fetch_document};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;
use url::Url;

pub fn run_hydrate(args: &HydrateArgs, config: &SiteConfig) -> Result<()> {
    let output = hydrate(args, config)?;
    write_output(None, &output, "hydrate")
}

/// Bootstrap, apply `--favorite` clicks in order, return state JSON or markup.
pub fn hydrate(args: &HydrateArgs, config: &SiteConfig) -> Result<String> {
    let mut app = App::mount(bootstrap_store(args, config)?);

    for click in &args.favorites {
        let changed = app.click(click.section, &click.id);
        debug!(
            "hydrate";
            "click {}:{} {}",
            click.section,
            click.id,
            if changed { "applied" } else { "no-op" }
        );
    }

    let output = if args.markup {
        app.markup()
    } else {
        serde_json::to_string_pretty(app.state()).context("Failed to serialize state")?
    };

    debug!("hydrate"; "view rendered {} time(s)", app.renders());
    app.unmount();
    Ok(output)
}

fn bootstrap_store(args: &HydrateArgs, config: &SiteConfig) -> Result<CatalogStore> {
    let timeout = config.hydrate.timeout();

    match config.hydrate.strategy {
        Strategy::Fetch => {
            let source = FetchState::new(&endpoint(config)?, timeout)?;
            debug!("hydrate"; "fetching {}", source.url());
            Ok(bootstrap(source))
        }
        Strategy::Embedded => {
            let document = match &args.document {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => match fetch_document(&endpoint(config)?, timeout) {
                    Ok(document) => document,
                    Err(e) => {
                        log!("hydrate"; "{}, starting from empty state", e);
                        return Ok(CatalogStore::new(CatalogState::empty()));
                    }
                },
            };
            Ok(bootstrap(EmbeddedState::new(document)))
        }
    }
}

fn endpoint(config: &SiteConfig) -> Result<Url> {
    config
        .hydrate
        .endpoint_url()
        .with_context(|| format!("Invalid hydrate endpoint `{}`", config.hydrate.endpoint))
}
