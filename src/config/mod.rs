//! Configuration handling for Sitegrade
//!
//! Configuration is optional: without a file, the defaults reproduce the
//! stock client behavior (no timeout, no custom user agent, sequential
//! external-link probing).

mod parser;
mod types;

pub use parser::load_config;
pub use types::{AuditConfig, ClientConfig, Config};
