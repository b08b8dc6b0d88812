//! HTTP server: server-side render, initial-state endpoint, static files.
//!
//! | Route           | Response                                          |
//! |-----------------|---------------------------------------------------|
//! | `/`             | Document rendered from the shared snapshot        |
//! | `/initialState` | Catalog snapshot as JSON                          |
//! | anything else   | File under `[assets] public`, or 404              |

mod lifecycle;
mod path;
mod response;

use crate::catalog::CatalogState;
use crate::config::{SiteConfig, cfg};
use crate::render::{Assets, DocumentMeta, render_home};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

const REQUEST_THREADS: usize = 4;

/// Everything a request handler reads. Built once, shared read-only.
#[derive(Debug)]
pub struct ServeContext {
    state: Arc<CatalogState>,
    assets: Assets,
    public: PathBuf,
    title: String,
    lang: String,
}

impl ServeContext {
    /// Load the catalog snapshot and resolve assets for `config.env`.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let state = CatalogState::load(&config.catalog.path)?;
        let assets = Assets::load(config.env, &config.assets.manifest);
        Ok(Self::new(state, assets, config))
    }

    pub fn new(state: CatalogState, assets: Assets, config: &SiteConfig) -> Self {
        Self {
            state: Arc::new(state),
            assets,
            public: config.assets.public.clone(),
            title: config.site.title.clone(),
            lang: config.site.lang.clone(),
        }
    }

    fn meta(&self) -> DocumentMeta<'_> {
        DocumentMeta {
            title: &self.title,
            lang: &self.lang,
        }
    }

    /// Render `/`. The server never mutates the snapshot, so requests share it.
    fn render(&self) -> String {
        render_home(&self.state, &self.assets, self.meta())
    }
}

/// Run the server until Ctrl+C.
pub fn serve() -> Result<()> {
    let config = cfg();
    let context = Arc::new(ServeContext::load(&config)?);

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{} ({:?})", addr, context.assets.env());
    debug!(
        "serve";
        "catalog {}, public {}",
        config.catalog.path.display(),
        context.public.display()
    );

    run_request_loop(&server, &context)
}

fn run_request_loop(server: &Server, context: &Arc<ServeContext>) -> Result<()> {
    // Renders are independent, so a small pool keeps a slow client from
    // blocking the others.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(REQUEST_THREADS)
        .build()
        .context("failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let context = Arc::clone(context);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &context) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, context: &ServeContext) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    match path::request_path(request.url()).as_deref() {
        Some("/") => response::respond_document(request, context.render()),
        Some("/initialState") => {
            let json = serde_json::to_string(&*context.state)?;
            response::respond_json(request, json)
        }
        _ => match path::resolve_path(request.url(), &context.public) {
            Some(file) => response::respond_file(request, &file),
            None => response::respond_not_found(request),
        },
    }
}
