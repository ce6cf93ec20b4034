//! Serializable view of a registry.

use std::fmt::{self, Display, Formatter};

use connkit::{ConnectionRegistry, ConnectionType, ConnectorBinding};
use serde::Serialize;

/// One provider row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderReport {
    /// Variant tag.
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    /// Display name.
    pub name: &'static str,
    /// Icon path.
    pub icon: &'static str,
    /// Whether the front-end shows it.
    pub should_display: bool,
    /// Chain the connector is on, if active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl From<&ConnectorBinding> for ProviderReport {
    fn from(binding: &ConnectorBinding) -> Self {
        let hooks = binding.hooks();
        Self {
            connection_type: binding.connection_type(),
            name: binding.name(),
            icon: binding.icon(),
            should_display: binding.should_display(),
            chain_id: hooks.is_active().then(|| hooks.chain_id()).flatten(),
        }
    }
}

/// One logged connector error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Variant that reported it.
    pub source: ConnectionType,
    /// Error message.
    pub message: String,
}

/// Everything the CLI prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Application name from the configuration.
    pub app_name: String,
    /// Default chain from the configuration.
    pub default_chain_id: u64,
    /// Enabled providers, in registry order.
    pub providers: Vec<ProviderReport>,
    /// Errors logged so far.
    pub errors: Vec<ErrorReport>,
}

impl Report {
    /// Builds a report from `providers` and the registry's error log.
    #[must_use]
    pub fn new(registry: &ConnectionRegistry, providers: &[ConnectorBinding]) -> Self {
        let config = registry.config();
        Self {
            app_name: config.app_name.clone(),
            default_chain_id: config.default_chain_id,
            providers: providers.iter().map(ProviderReport::from).collect(),
            errors: registry
                .errors()
                .into_iter()
                .map(|e| ErrorReport {
                    source: e.source,
                    message: e.error.to_string(),
                })
                .collect(),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (default chain {})", self.app_name, self.default_chain_id)?;
        if self.providers.is_empty() {
            writeln!(f, "  no providers enabled")?;
        }
        for p in &self.providers {
            write!(f, "  {:<18} {:<16} {}", p.connection_type, p.name, p.icon)?;
            if let Some(chain_id) = p.chain_id {
                write!(f, "  [active on {chain_id}]")?;
            }
            writeln!(f)?;
        }
        for e in &self.errors {
            writeln!(f, "  error from {}: {}", e.source, e.message)?;
        }
        Ok(())
    }
}
