//! Local host address and name lookup.

use std::net::SocketAddr;

use serde::Serialize;
use sysinfo::System;
use tokio::net::lookup_host;

use crate::error::ProbeError;

/// Resolved identity of the local machine.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub ip: String,
    pub hostname: String,
}

/// Resolves the local hostname and one of its addresses.
///
/// Prefers an IPv4 address when the resolver returns a mix. Fails if the OS
/// reports no hostname, if resolution errors, or if it yields no addresses.
pub async fn lookup() -> Result<ServerInfo, ProbeError> {
    let hostname = System::host_name().ok_or(ProbeError::HostnameUnavailable)?;

    let addrs: Vec<SocketAddr> = lookup_host((hostname.as_str(), 0)).await?.collect();
    let addr = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .ok_or(ProbeError::NoAddress)?;

    Ok(ServerInfo {
        ip: addr.ip().to_string(),
        hostname,
    })
}
