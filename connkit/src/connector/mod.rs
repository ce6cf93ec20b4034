//! Connector handles and the factory that builds them.
//!
//! A [`Connector`] performs the actual handshake with a wallet or an RPC
//! endpoint. The registry never implements wallet protocols itself; it asks
//! a [`ConnectorFactory`] to turn [`ConnectorOptions`] into a connector,
//! wired to the state store from [`initialize_connector`] and to an
//! [`ErrorSink`].
//!
//! [`NetworkConnector`] is the one connector this crate ships: a read-only
//! connector over the configured RPC URLs.

mod state;

#[cfg(feature = "network")]
mod network;

pub use state::*;

#[cfg(feature = "network")]
pub use network::*;

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use alloy_primitives::ChainId;

use crate::error::ConnectorError;
use crate::provider::ConnectorOptions;
use crate::sink::ErrorSink;

/// A boxed, `Send` future.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A wallet or RPC connector.
///
/// Implementations publish their state through the [`Actions`] they were
/// built with and report asynchronous failures to their [`ErrorSink`].
pub trait Connector: Debug + Send + Sync {
    /// Connects, optionally to a specific chain.
    fn activate(&self, desired_chain_id: Option<ChainId>)
    -> BoxFuture<'_, Result<(), ConnectorError>>;

    /// Disconnects and clears published state.
    fn deactivate(&self) -> BoxFuture<'_, Result<(), ConnectorError>>;
}

/// Everything a factory needs besides the options.
#[derive(Debug, Clone)]
pub struct ConnectorContext {
    /// Write side of the connector's state store.
    pub actions: Actions,
    /// Where the connector reports asynchronous errors.
    pub on_error: ErrorSink,
}

/// Builds connectors from construction parameters.
pub trait ConnectorFactory: Send + Sync {
    /// Builds the connector described by `options`.
    fn build(&self, options: &ConnectorOptions, ctx: ConnectorContext) -> Arc<dyn Connector>;
}

impl<T: ConnectorFactory + ?Sized> ConnectorFactory for Arc<T> {
    fn build(&self, options: &ConnectorOptions, ctx: ConnectorContext) -> Arc<dyn Connector> {
        (**self).build(options, ctx)
    }
}

/// Stand-in for a connector that cannot run in the current environment.
///
/// Headless hosts use it for wallet variants that need a browser.
/// Activation always fails with [`ConnectorError::Unavailable`].
#[derive(Debug, Clone)]
pub struct UnavailableConnector {
    reason: String,
    ctx: ConnectorContext,
}

impl UnavailableConnector {
    /// Creates a connector that refuses to activate with `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>, ctx: ConnectorContext) -> Self {
        Self {
            reason: reason.into(),
            ctx,
        }
    }
}

impl Connector for UnavailableConnector {
    fn activate(
        &self,
        _desired_chain_id: Option<ChainId>,
    ) -> BoxFuture<'_, Result<(), ConnectorError>> {
        Box::pin(async move {
            let err = ConnectorError::Unavailable(self.reason.clone());
            self.ctx.on_error.report(err.clone());
            Err(err)
        })
    }

    fn deactivate(&self) -> BoxFuture<'_, Result<(), ConnectorError>> {
        Box::pin(async move {
            self.ctx.actions.reset_state();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ConnectionType;
    use crate::sink::ErrorLog;

    #[tokio::test]
    async fn test_unavailable_connector_reports() {
        let log = ErrorLog::new();
        let (connector, hooks) = initialize_connector(|actions| {
            UnavailableConnector::new(
                "needs a browser",
                ConnectorContext {
                    actions,
                    on_error: log.sink(ConnectionType::Injected),
                },
            )
        });

        let err = connector.activate(Some(1)).await.unwrap_err();
        assert_eq!(err, ConnectorError::Unavailable("needs a browser".into()));
        assert_eq!(log.for_source(ConnectionType::Injected), vec![err]);
        assert!(!hooks.is_active());

        connector.deactivate().await.unwrap();
    }
}
