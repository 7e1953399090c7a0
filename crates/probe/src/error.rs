//! Probe error types.

use thiserror::Error;

/// Errors from host introspection probes.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The OS did not report a hostname for this machine.
    #[error("hostname unavailable")]
    HostnameUnavailable,

    /// Address resolution for the local hostname failed.
    #[error("address lookup failed: {0}")]
    AddressLookup(#[from] std::io::Error),

    /// Resolution succeeded but returned no addresses.
    #[error("no address resolved for local host")]
    NoAddress,
}
