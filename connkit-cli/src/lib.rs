//! Headless inspection of a connkit connector configuration.
//!
//! - [`activation`] - Network connector activation for the report
//! - [`config`] - TOML configuration with environment expansion
//! - [`factory`] - Connector factory for hosts without a browser
//! - [`report`] - Serializable view of the enabled providers

pub mod activation;
pub mod config;
pub mod factory;
pub mod report;
