//! Process and OS introspection for the halloworld service.
//!
//! Two probes: a point-in-time health snapshot (CPUs, load, memory) and a
//! local host address/name lookup. Both read ambient OS state and hold no
//! state of their own.

pub mod error;
pub mod health;
pub mod net;

pub use error::ProbeError;
pub use health::HealthSnapshot;
pub use net::ServerInfo;
