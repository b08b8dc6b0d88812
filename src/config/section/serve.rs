//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 3000                 # HTTP port number
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,
}

impl ServeConfig {
    pub const PORT: FieldPath = FieldPath::new("serve.port");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.port == 0 {
            diag.error_with_hint(Self::PORT, "port must be non-zero", "the default is 3000");
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 3000,
        }
    }
}
