//! HTTP response handlers.

use crate::utils::mime::types::{HTML, JSON, PLAIN};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with the rendered document.
pub fn respond_document(request: Request, html: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }
    send_body(request, 200, HTML, html.into_bytes())
}

/// Respond with the catalog snapshot as JSON.
pub fn respond_json(request: Request, json: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, JSON);
    }
    send_body(request, 200, JSON, json.into_bytes())
}

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

pub fn respond_not_found(request: Request) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, PLAIN);
    }
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN)?)
        .with_header(make_header("Allow", "GET, HEAD")?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
