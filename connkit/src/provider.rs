//! Connector variants and their construction parameters.
//!
//! [`ConnectionType`] tags the four supported connection mechanisms.
//! [`ConnectorOptions`] carries the parameters a [`ConnectorFactory`](crate::connector::ConnectorFactory)
//! needs to build the connector behind each variant.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::ChainId;
use serde::{Deserialize, Serialize};
use url::Url;

/// The supported wallet connection mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionType {
    /// Read-only JSON-RPC fallback, no wallet involved.
    Network,
    /// Browser-injected wallet (`window.ethereum`).
    Injected,
    /// Coinbase Wallet SDK.
    CoinbaseWallet,
    /// WalletConnect v2 relay.
    WalletConnectV2,
}

impl ConnectionType {
    /// All variants, in candidate order.
    pub const ALL: [Self; 4] = [
        Self::Network,
        Self::Injected,
        Self::CoinbaseWallet,
        Self::WalletConnectV2,
    ];

    /// Returns the wire name of this variant (e.g. `"WALLET_CONNECT_V2"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "NETWORK",
            Self::Injected => "INJECTED",
            Self::CoinbaseWallet => "COINBASE_WALLET",
            Self::WalletConnectV2 => "WALLET_CONNECT_V2",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown connection type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown connection type '{0}'")]
pub struct UnknownConnectionType(pub String);

impl FromStr for ConnectionType {
    type Err = UnknownConnectionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownConnectionType(s.to_owned()))
    }
}

/// Construction parameters for a single connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectorOptions {
    /// Read-only connector over a chain → RPC URL map.
    Network {
        /// RPC endpoint per chain.
        url_map: BTreeMap<ChainId, Url>,
        /// Chain used when activation does not request one.
        default_chain_id: ChainId,
    },
    /// Browser-injected wallet. Takes no options.
    Injected,
    /// WalletConnect v2.
    WalletConnectV2 {
        /// WalletConnect Cloud project id.
        project_id: String,
        /// Chains the wallet must support.
        chains: Vec<ChainId>,
        /// Chains the wallet may support.
        optional_chains: Vec<ChainId>,
        /// Whether the connector shows its own QR modal.
        show_qr_modal: bool,
    },
    /// Coinbase Wallet.
    CoinbaseWallet {
        /// Fallback JSON-RPC URL, if one is known.
        url: Option<Url>,
        /// Application name shown in the wallet.
        app_name: String,
        /// Whether the page reloads on disconnect.
        reload_on_disconnect: bool,
    },
}

impl ConnectorOptions {
    /// Returns the variant these options build.
    #[must_use]
    pub const fn connection_type(&self) -> ConnectionType {
        match self {
            Self::Network { .. } => ConnectionType::Network,
            Self::Injected => ConnectionType::Injected,
            Self::WalletConnectV2 { .. } => ConnectionType::WalletConnectV2,
            Self::CoinbaseWallet { .. } => ConnectionType::CoinbaseWallet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_serialize() {
        let json = serde_json::to_string(&ConnectionType::WalletConnectV2).unwrap();
        assert_eq!(json, "\"WALLET_CONNECT_V2\"");
        let json = serde_json::to_string(&ConnectionType::CoinbaseWallet).unwrap();
        assert_eq!(json, "\"COINBASE_WALLET\"");
    }

    #[test]
    fn test_connection_type_deserialize() {
        let t: ConnectionType = serde_json::from_str("\"INJECTED\"").unwrap();
        assert_eq!(t, ConnectionType::Injected);
        let bad: Result<ConnectionType, _> = serde_json::from_str("\"METAMASK\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_connection_type_from_str() {
        assert_eq!("network".parse(), Ok(ConnectionType::Network));
        assert_eq!("WALLET_CONNECT_V2".parse(), Ok(ConnectionType::WalletConnectV2));
        assert_eq!(
            "walletconnect".parse::<ConnectionType>(),
            Err(UnknownConnectionType("walletconnect".into()))
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        for t in ConnectionType::ALL {
            assert_eq!(t.to_string(), t.as_str());
            assert_eq!(t.to_string().parse::<ConnectionType>(), Ok(t));
        }
    }

    #[test]
    fn test_sorted_order_matches_candidate_order() {
        let mut sorted = vec![
            ConnectionType::WalletConnectV2,
            ConnectionType::CoinbaseWallet,
            ConnectionType::Injected,
            ConnectionType::Network,
        ];
        sorted.sort();
        assert_eq!(sorted, ConnectionType::ALL);
    }

    #[test]
    fn test_options_connection_type() {
        assert_eq!(
            ConnectorOptions::Injected.connection_type(),
            ConnectionType::Injected
        );
        let cb = ConnectorOptions::CoinbaseWallet {
            url: None,
            app_name: "demo".into(),
            reload_on_disconnect: false,
        };
        assert_eq!(cb.connection_type(), ConnectionType::CoinbaseWallet);
    }
}
