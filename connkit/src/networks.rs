//! Known EVM networks and their public JSON-RPC endpoints.

use alloy_primitives::ChainId;
use url::Url;

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET: ChainId = 1;

/// Optimism Mainnet chain ID.
pub const OPTIMISM_MAINNET: ChainId = 10;

/// BNB Smart Chain chain ID.
pub const BNB_MAINNET: ChainId = 56;

/// Polygon Mainnet chain ID.
pub const POLYGON_MAINNET: ChainId = 137;

/// Base Mainnet chain ID.
pub const BASE_MAINNET: ChainId = 8453;

/// Arbitrum One chain ID.
pub const ARBITRUM_MAINNET: ChainId = 42161;

/// Sepolia (testnet) chain ID.
pub const SEPOLIA: ChainId = 11_155_111;

/// A known network with a public RPC endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Human-readable network name (e.g. `"polygon"`).
    pub name: &'static str,
    /// EIP-155 chain ID.
    pub chain_id: ChainId,
    /// Public JSON-RPC endpoint.
    pub rpc_url: &'static str,
}

/// Networks with a well-known public RPC endpoint.
pub static KNOWN_NETWORKS: &[NetworkInfo] = &[
    NetworkInfo {
        name: "ethereum",
        chain_id: ETHEREUM_MAINNET,
        rpc_url: "https://cloudflare-eth.com",
    },
    NetworkInfo {
        name: "optimism",
        chain_id: OPTIMISM_MAINNET,
        rpc_url: "https://mainnet.optimism.io",
    },
    NetworkInfo {
        name: "bnb",
        chain_id: BNB_MAINNET,
        rpc_url: "https://bsc-dataseed.binance.org",
    },
    NetworkInfo {
        name: "polygon",
        chain_id: POLYGON_MAINNET,
        rpc_url: "https://polygon-rpc.com",
    },
    NetworkInfo {
        name: "base",
        chain_id: BASE_MAINNET,
        rpc_url: "https://mainnet.base.org",
    },
    NetworkInfo {
        name: "arbitrum",
        chain_id: ARBITRUM_MAINNET,
        rpc_url: "https://arb1.arbitrum.io/rpc",
    },
    NetworkInfo {
        name: "sepolia",
        chain_id: SEPOLIA,
        rpc_url: "https://rpc.sepolia.org",
    },
];

/// Looks up a known network by chain ID.
#[must_use]
pub fn network_by_chain_id(chain_id: ChainId) -> Option<&'static NetworkInfo> {
    KNOWN_NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

/// Returns the public RPC endpoint for a known chain.
#[must_use]
pub fn default_rpc_url(chain_id: ChainId) -> Option<Url> {
    network_by_chain_id(chain_id).and_then(|n| Url::parse(n.rpc_url).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rpc_url_polygon() {
        let url = default_rpc_url(POLYGON_MAINNET).unwrap();
        assert_eq!(url.as_str(), "https://polygon-rpc.com/");
    }

    #[test]
    fn test_default_rpc_url_unknown() {
        assert!(default_rpc_url(999_999).is_none());
    }

    #[test]
    fn test_known_networks_parse() {
        for network in KNOWN_NETWORKS {
            assert!(
                Url::parse(network.rpc_url).is_ok(),
                "bad rpc url for {}",
                network.name
            );
        }
    }

    #[test]
    fn test_known_networks_unique() {
        let mut ids: Vec<_> = KNOWN_NETWORKS.iter().map(|n| n.chain_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), KNOWN_NETWORKS.len());
    }
}
