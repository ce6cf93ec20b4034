//! Error types for connector activation and configuration.

use alloy_primitives::ChainId;

/// Error reported by a connector.
///
/// Connectors hand these to their [`ErrorSink`](crate::sink::ErrorSink);
/// [`ConnectorBinding::activate`](crate::binding::ConnectorBinding::activate)
/// also returns them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    /// The JSON-RPC endpoint failed or returned garbage.
    #[error("rpc request failed: {0}")]
    Rpc(String),

    /// The endpoint serves a different chain than the one requested.
    #[error("chain mismatch: expected {expected}, endpoint reports {actual}")]
    ChainMismatch {
        /// Chain the connector was asked for.
        expected: ChainId,
        /// Chain the endpoint reported.
        actual: ChainId,
    },

    /// No RPC endpoint is configured for the requested chain.
    #[error("no rpc url configured for chain {0}")]
    UnknownChain(ChainId),

    /// The user or the wallet rejected the request.
    #[error("request rejected ({code}): {message}")]
    Rejected {
        /// EIP-1193 error code (4001 for user rejection).
        code: i64,
        /// Message from the wallet.
        message: String,
    },

    /// The connector cannot run in this environment.
    #[error("connector unavailable: {0}")]
    Unavailable(String),

    /// The connector received a state update it cannot accept.
    #[error("invalid connector state: {0}")]
    InvalidState(String),
}

impl ConnectorError {
    /// EIP-1193 code for a user-rejected request.
    pub const USER_REJECTED: i64 = 4001;

    /// Creates a user-rejection error with the given message.
    #[must_use]
    pub fn user_rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            code: Self::USER_REJECTED,
            message: message.into(),
        }
    }
}

/// A configuration that cannot drive a usable registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `rpc_urls` is empty.
    #[error("no rpc urls configured")]
    EmptyRpcUrls,

    /// `default_chain_id` has no entry in `rpc_urls`.
    #[error("default chain {0} has no rpc url")]
    UnknownDefaultChain(ChainId),

    /// A WalletConnect project id was given but is blank.
    #[error("walletconnect project id is empty")]
    EmptyProjectId,
}
