//! Connector factory for hosts without a browser.

use std::sync::Arc;

use connkit::connector::{
    Connector, ConnectorContext, ConnectorFactory, NetworkConnector, UnavailableConnector,
};
use connkit::provider::ConnectorOptions;

/// Builds real network connectors and placeholders for wallet variants.
///
/// Wallet connectors need a browser extension, a QR modal or the Coinbase
/// SDK; none exist in a terminal, so activating them reports
/// [`ConnectorError::Unavailable`](connkit::error::ConnectorError::Unavailable).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessFactory;

impl ConnectorFactory for HeadlessFactory {
    fn build(&self, options: &ConnectorOptions, ctx: ConnectorContext) -> Arc<dyn Connector> {
        match options {
            ConnectorOptions::Network {
                url_map,
                default_chain_id,
            } => Arc::new(NetworkConnector::new(url_map.clone(), *default_chain_id, ctx)),
            other => Arc::new(UnavailableConnector::new(
                format!("{} requires a browser wallet", other.connection_type()),
                ctx,
            )),
        }
    }
}
