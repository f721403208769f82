//! NextDNS REST API adapter.
//!
//! ```text
//! POST /profiles/{profile_id}/allowlist   {"id": "<domain>", "active": true}
//! GET  /profiles/{profile_id}
//! X-Api-Key: <api key>
//! ```

mod client;
mod response;

pub use client::NextDnsClient;
