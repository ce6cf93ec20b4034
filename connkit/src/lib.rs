#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Wallet connector bindings for EVM front-ends.
//!
//! This crate configures a fixed set of wallet connectors (a read-only
//! network fallback, a browser-injected wallet, WalletConnect v2 and
//! Coinbase Wallet) and answers which of them a front-end should offer.
//! Wallet protocols themselves are implemented by the host through
//! [`connector::ConnectorFactory`].
//!
//! # Modules
//!
//! - [`config`] - Registry configuration
//! - [`provider`] - Connector variants and construction parameters
//! - [`connector`] - Connector trait, factory and per-connector state store
//! - [`binding`] - A connector with display metadata and activation rules
//! - [`registry`] - Builds and filters bindings
//! - [`detect`] - Injected wallet detection and external navigation
//! - [`sink`] - Append-only connector error log
//! - [`networks`] - Well-known chains and public RPC endpoints
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use connkit::config::ConnectionConfig;
//! use connkit::connector::{Connector, ConnectorContext, ConnectorFactory, UnavailableConnector};
//! use connkit::detect::{LogNavigator, StaticDetector};
//! use connkit::provider::{ConnectionType, ConnectorOptions};
//! use connkit::registry::ConnectionRegistry;
//!
//! struct Headless;
//!
//! impl ConnectorFactory for Headless {
//!     fn build(&self, options: &ConnectorOptions, ctx: ConnectorContext) -> Arc<dyn Connector> {
//!         Arc::new(UnavailableConnector::new(options.connection_type().to_string(), ctx))
//!     }
//! }
//!
//! let config = ConnectionConfig::new("demo", 1)
//!     .with_allowed([ConnectionType::Network, ConnectionType::Injected]);
//! let registry = ConnectionRegistry::new(
//!     config,
//!     Arc::new(Headless),
//!     Arc::new(StaticDetector::none()),
//!     Arc::new(LogNavigator),
//! );
//!
//! let names: Vec<_> = registry.all_providers().iter().map(|b| b.name()).collect();
//! assert_eq!(names, ["Network", "Metamask"]);
//! ```
//!
//! # Feature Flags
//!
//! - `network` - Built-in read-only [`connector::NetworkConnector`] (default)
//! - `telemetry` - Enables tracing instrumentation

pub mod binding;
pub mod config;
pub mod connector;
pub mod detect;
pub mod error;
pub mod networks;
pub mod provider;
pub mod registry;
pub mod sink;

pub use binding::{Activation, ConnectorBinding};
pub use config::ConnectionConfig;
pub use provider::ConnectionType;
pub use registry::ConnectionRegistry;
