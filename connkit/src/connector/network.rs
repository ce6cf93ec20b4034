//! Read-only connector over JSON-RPC.

use std::collections::BTreeMap;

use alloy_primitives::ChainId;
use alloy_provider::{Provider, ProviderBuilder};
use url::Url;

use super::{BoxFuture, Connector, ConnectorContext, StateUpdate};
use crate::error::ConnectorError;
use crate::provider::ConnectorOptions;

/// Connector that talks to a public RPC endpoint instead of a wallet.
///
/// Activation resolves the requested (or default) chain to its URL, asks the
/// endpoint for `eth_chainId` and publishes the chain with no accounts.
#[derive(Debug, Clone)]
pub struct NetworkConnector {
    url_map: BTreeMap<ChainId, Url>,
    default_chain_id: ChainId,
    ctx: ConnectorContext,
}

impl NetworkConnector {
    /// Creates a connector over `url_map`.
    #[must_use]
    pub const fn new(
        url_map: BTreeMap<ChainId, Url>,
        default_chain_id: ChainId,
        ctx: ConnectorContext,
    ) -> Self {
        Self {
            url_map,
            default_chain_id,
            ctx,
        }
    }

    /// Builds a connector from [`ConnectorOptions::Network`].
    ///
    /// Returns `None` for any other variant.
    #[must_use]
    pub fn from_options(options: &ConnectorOptions, ctx: ConnectorContext) -> Option<Self> {
        match options {
            ConnectorOptions::Network {
                url_map,
                default_chain_id,
            } => Some(Self::new(url_map.clone(), *default_chain_id, ctx)),
            _ => None,
        }
    }

    async fn query_chain_id(&self, chain_id: ChainId) -> Result<ChainId, ConnectorError> {
        let url = self
            .url_map
            .get(&chain_id)
            .ok_or(ConnectorError::UnknownChain(chain_id))?;
        let provider = ProviderBuilder::new().connect_http(url.clone());
        let actual = provider
            .get_chain_id()
            .await
            .map_err(|e| ConnectorError::Rpc(e.to_string()))?;
        if actual == chain_id {
            Ok(actual)
        } else {
            Err(ConnectorError::ChainMismatch {
                expected: chain_id,
                actual,
            })
        }
    }

    fn fail(&self, err: ConnectorError) -> ConnectorError {
        self.ctx.actions.reset_state();
        self.ctx.on_error.report(err.clone());
        err
    }
}

impl Connector for NetworkConnector {
    fn activate(
        &self,
        desired_chain_id: Option<ChainId>,
    ) -> BoxFuture<'_, Result<(), ConnectorError>> {
        Box::pin(async move {
            let chain_id = desired_chain_id.unwrap_or(self.default_chain_id);
            self.ctx.actions.start_activation();

            #[cfg(feature = "telemetry")]
            tracing::debug!(chain_id, "Activating network connector");

            let actual = self.query_chain_id(chain_id).await.map_err(|e| self.fail(e))?;
            self.ctx
                .actions
                .update(StateUpdate {
                    chain_id: Some(actual),
                    accounts: Some(Vec::new()),
                })
                .map_err(|e| self.fail(e))
        })
    }

    fn deactivate(&self) -> BoxFuture<'_, Result<(), ConnectorError>> {
        Box::pin(async move {
            self.ctx.actions.reset_state();
            Ok(())
        })
    }
}
