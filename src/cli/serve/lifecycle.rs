//! Server lifecycle management.

use crate::{core::register_server, log};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tiny_http::Server;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
pub fn bind_with_retry(
    interface: std::net::IpAddr,
    base_port: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let Some(port) = base_port.checked_add(offset) else {
            break;
        };
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind {}:{} after {} attempts: {}",
        interface,
        base_port,
        MAX_PORT_RETRIES,
        last_error.map_or_else(|| "no port available".to_string(), |e| e.to_string())
    ))
}

/// Register server for graceful shutdown.
///
/// After this, Ctrl+C unblocks the request loop instead of exiting.
pub fn register_server_for_shutdown(server: Arc<Server>) {
    register_server(server);
}
