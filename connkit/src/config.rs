//! Registry configuration.
//!
//! [`ConnectionConfig`] is immutable once handed to a
//! [`ConnectionRegistry`](crate::registry::ConnectionRegistry).
//! Field names serialize in camelCase.
//!
//! # Example
//!
//! ```rust
//! use connkit::config::ConnectionConfig;
//! use connkit::provider::ConnectionType;
//!
//! let config = ConnectionConfig::new("demo", 1)
//!     .with_rpc_url(1, "https://cloudflare-eth.com".parse().unwrap())
//!     .with_allowed([ConnectionType::Network, ConnectionType::Injected]);
//!
//! assert!(config.allows(ConnectionType::Injected));
//! assert!(!config.allows(ConnectionType::CoinbaseWallet));
//! ```

use std::collections::BTreeMap;

use alloy_primitives::ChainId;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::provider::ConnectionType;

/// Configuration for a [`ConnectionRegistry`](crate::registry::ConnectionRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Application name shown by wallets that support it.
    pub app_name: String,

    /// JSON-RPC endpoint per chain.
    #[serde(default)]
    pub rpc_urls: BTreeMap<ChainId, Url>,

    /// Chain used by the network connector when none is requested.
    pub default_chain_id: ChainId,

    /// Variants the registry may return.
    #[serde(default)]
    pub allowed_providers: Vec<ConnectionType>,

    /// WalletConnect Cloud project id. Without it there is no
    /// WalletConnect v2 binding at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_connect_project_id: Option<String>,
}

impl ConnectionConfig {
    /// Creates a configuration with no RPC URLs and nothing allowed.
    #[must_use]
    pub fn new(app_name: impl Into<String>, default_chain_id: ChainId) -> Self {
        Self {
            app_name: app_name.into(),
            rpc_urls: BTreeMap::new(),
            default_chain_id,
            allowed_providers: Vec::new(),
            wallet_connect_project_id: None,
        }
    }

    /// Adds an RPC endpoint for `chain_id`, replacing any previous one.
    #[must_use]
    pub fn with_rpc_url(mut self, chain_id: ChainId, url: Url) -> Self {
        self.rpc_urls.insert(chain_id, url);
        self
    }

    /// Replaces the allowed variant set.
    #[must_use]
    pub fn with_allowed(mut self, allowed: impl IntoIterator<Item = ConnectionType>) -> Self {
        self.allowed_providers = allowed.into_iter().collect();
        self
    }

    /// Sets the WalletConnect project id.
    #[must_use]
    pub fn with_wallet_connect_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.wallet_connect_project_id = Some(project_id.into());
        self
    }

    /// Returns `true` if `connection_type` is in the allowed set.
    ///
    /// This is the only place the allowed set is consulted.
    #[must_use]
    pub fn allows(&self, connection_type: ConnectionType) -> bool {
        self.allowed_providers.contains(&connection_type)
    }

    /// Returns the configured chains in ascending order.
    #[must_use]
    pub fn chains(&self) -> Vec<ChainId> {
        self.rpc_urls.keys().copied().collect()
    }

    /// Checks that the configuration can drive a working network connector.
    ///
    /// The registry itself never calls this; an incomplete configuration
    /// still produces bindings, they just fail on activation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no RPC URL is configured, the default
    /// chain has no RPC URL, or the WalletConnect project id is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_urls.is_empty() {
            return Err(ConfigError::EmptyRpcUrls);
        }
        if !self.rpc_urls.contains_key(&self.default_chain_id) {
            return Err(ConfigError::UnknownDefaultChain(self.default_chain_id));
        }
        if self
            .wallet_connect_project_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(ConfigError::EmptyProjectId);
        }
        Ok(())
    }
}
