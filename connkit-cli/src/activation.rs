//! Activation check for the read-only network connector.

use connkit::error::ConnectorError;
use connkit::{Activation, ConnectionRegistry, ConnectionType, ConnectorBinding};

/// Activates the NETWORK binding and returns the chain it settled on.
///
/// Bindings are rebuilt on every registry query, so the binding that gets
/// activated is taken from `providers` when NETWORK is listed there; a
/// report built from the same slice then shows the active chain. When
/// NETWORK is not allowed, a standalone binding is activated instead.
///
/// # Errors
///
/// Returns the connector's error. It is also in the registry's error log.
pub async fn activate_network(
    registry: &ConnectionRegistry,
    providers: &[ConnectorBinding],
    chain_id: Option<u64>,
) -> Result<Option<u64>, ConnectorError> {
    let standalone;
    let network = match providers
        .iter()
        .find(|b| b.connection_type() == ConnectionType::Network)
    {
        Some(listed) => listed,
        None => {
            standalone = registry.network_provider();
            &standalone
        }
    };

    match network.activate(chain_id).await? {
        Activation::Activated => Ok(network.hooks().chain_id()),
        Activation::HandledExternally => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use connkit::config::ConnectionConfig;
    use connkit::connector::{
        BoxFuture, Connector, ConnectorContext, ConnectorFactory, StateUpdate,
    };
    use connkit::detect::{LogNavigator, StaticDetector};
    use connkit::provider::ConnectorOptions;

    use super::*;
    use crate::report::Report;

    /// Connector that lands on the requested chain, or on 1.
    #[derive(Debug)]
    struct InstantConnector(ConnectorContext);

    impl Connector for InstantConnector {
        fn activate(
            &self,
            desired_chain_id: Option<u64>,
        ) -> BoxFuture<'_, Result<(), ConnectorError>> {
            Box::pin(async move {
                self.0.actions.update(StateUpdate {
                    chain_id: Some(desired_chain_id.unwrap_or(1)),
                    accounts: Some(Vec::new()),
                })
            })
        }

        fn deactivate(&self) -> BoxFuture<'_, Result<(), ConnectorError>> {
            Box::pin(async move {
                self.0.actions.reset_state();
                Ok(())
            })
        }
    }

    struct InstantFactory;

    impl ConnectorFactory for InstantFactory {
        fn build(&self, _options: &ConnectorOptions, ctx: ConnectorContext) -> Arc<dyn Connector> {
            Arc::new(InstantConnector(ctx))
        }
    }

    fn registry(allowed: &[ConnectionType]) -> ConnectionRegistry {
        ConnectionRegistry::new(
            ConnectionConfig::new("Alfred", 1).with_allowed(allowed.iter().copied()),
            Arc::new(InstantFactory),
            Arc::new(StaticDetector::meta_mask()),
            Arc::new(LogNavigator),
        )
    }

    #[tokio::test]
    async fn test_activated_network_appears_in_report() {
        let registry = registry(&[ConnectionType::Network, ConnectionType::Injected]);
        let providers = registry.all_providers();

        let chain_id = activate_network(&registry, &providers, Some(137))
            .await
            .unwrap();
        assert_eq!(chain_id, Some(137));

        let report = Report::new(&registry, &providers);
        assert_eq!(report.providers[0].chain_id, Some(137));
        assert_eq!(report.providers[1].chain_id, None);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["providers"][0]["chainId"], 137);
        assert!(report.to_string().contains("[active on 137]"));
    }

    #[tokio::test]
    async fn test_activation_without_listed_network() {
        let registry = registry(&[ConnectionType::Injected]);
        let providers = registry.all_providers();

        let chain_id = activate_network(&registry, &providers, None).await.unwrap();
        assert_eq!(chain_id, Some(1));

        let report = Report::new(&registry, &providers);
        assert_eq!(report.providers.len(), 1);
        assert_eq!(report.providers[0].chain_id, None);
    }
}
