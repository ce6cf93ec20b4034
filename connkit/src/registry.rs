//! The connection registry.
//!
//! [`ConnectionRegistry`] turns a [`ConnectionConfig`] into
//! [`ConnectorBinding`]s. Every variant is described once in a static table
//! (display metadata, options builder, override hook); the per-variant
//! accessors and [`ConnectionRegistry::all_providers`] iterate that table.
//!
//! Bindings are rebuilt on every query. The allowed-variant check lives in
//! [`ConnectionConfig::allows`] and is applied at this boundary only;
//! [`ConnectorBinding::should_display`] is derived from the same call.

use std::fmt;
use std::sync::{Arc, LazyLock};

use alloy_primitives::ChainId;
use url::Url;

use crate::binding::{ActivationEnv, ConnectorBinding, DisplayInfo, OverrideHook, no_override};
use crate::config::ConnectionConfig;
use crate::connector::{ConnectorContext, ConnectorFactory, initialize_connector};
use crate::detect::{Navigator, WalletDetector};
use crate::error::ConnectorError;
use crate::networks::{POLYGON_MAINNET, default_rpc_url};
use crate::provider::{ConnectionType, ConnectorOptions};
use crate::sink::{ErrorLog, ReportedError};

/// Where users without MetaMask are sent.
pub static METAMASK_INSTALL_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://metamask.io/").expect("valid install url"));

/// Browsing context name for the MetaMask install page.
pub const METAMASK_INSTALL_TARGET: &str = "inst_metamask";

/// Chain whose public RPC endpoint backs the Coinbase Wallet connector.
pub const COINBASE_FALLBACK_CHAIN: ChainId = POLYGON_MAINNET;

/// Table row describing one variant.
struct VariantSpec {
    connection_type: ConnectionType,
    display: DisplayInfo,
    /// `None` means the variant cannot exist under this configuration.
    options: fn(&ConnectionConfig) -> Option<ConnectorOptions>,
    override_activate: OverrideHook,
}

/// All variants, in candidate order.
static VARIANTS: [VariantSpec; 4] = [
    VariantSpec {
        connection_type: ConnectionType::Network,
        display: DisplayInfo {
            name: "Network",
            icon: "/assets/images/browser-wallet-light.svg",
        },
        options: network_options,
        override_activate: no_override,
    },
    VariantSpec {
        connection_type: ConnectionType::Injected,
        display: DisplayInfo {
            name: "Metamask",
            icon: "/assets/images/metamask.png",
        },
        options: injected_options,
        override_activate: redirect_without_meta_mask,
    },
    VariantSpec {
        connection_type: ConnectionType::CoinbaseWallet,
        display: DisplayInfo {
            name: "Coinbase Wallet",
            icon: "/assets/images/coinbase.png",
        },
        options: coinbase_options,
        override_activate: no_override,
    },
    VariantSpec {
        connection_type: ConnectionType::WalletConnectV2,
        display: DisplayInfo {
            name: "WalletConnectV2",
            icon: "/assets/images/walletConnect.png",
        },
        options: wallet_connect_v2_options,
        override_activate: no_override,
    },
];

fn network_options(config: &ConnectionConfig) -> Option<ConnectorOptions> {
    Some(ConnectorOptions::Network {
        url_map: config.rpc_urls.clone(),
        default_chain_id: config.default_chain_id,
    })
}

#[allow(clippy::unnecessary_wraps)]
const fn injected_options(_config: &ConnectionConfig) -> Option<ConnectorOptions> {
    Some(ConnectorOptions::Injected)
}

fn coinbase_options(config: &ConnectionConfig) -> Option<ConnectorOptions> {
    Some(ConnectorOptions::CoinbaseWallet {
        url: default_rpc_url(COINBASE_FALLBACK_CHAIN),
        app_name: config.app_name.clone(),
        reload_on_disconnect: false,
    })
}

fn wallet_connect_v2_options(config: &ConnectionConfig) -> Option<ConnectorOptions> {
    let project_id = config.wallet_connect_project_id.clone()?;
    Some(ConnectorOptions::WalletConnectV2 {
        project_id,
        chains: config.chains(),
        optional_chains: Vec::new(),
        show_qr_modal: true,
    })
}

fn redirect_without_meta_mask(env: &ActivationEnv) -> bool {
    if env.detector.is_meta_mask_wallet() {
        return false;
    }

    #[cfg(feature = "telemetry")]
    tracing::info!("No MetaMask detected, redirecting to install page");

    env.navigator
        .open(&METAMASK_INSTALL_URL, METAMASK_INSTALL_TARGET);
    true
}

/// Builds and filters connector bindings for one configuration.
pub struct ConnectionRegistry {
    config: ConnectionConfig,
    factory: Arc<dyn ConnectorFactory>,
    env: ActivationEnv,
    errors: ErrorLog,
}

impl fmt::Debug for ConnectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRegistry")
            .field("config", &self.config)
            .field("env", &self.env)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl ConnectionRegistry {
    /// Creates a registry. Never fails; see [`ConnectionConfig::validate`].
    #[must_use]
    pub fn new(
        config: ConnectionConfig,
        factory: Arc<dyn ConnectorFactory>,
        detector: Arc<dyn WalletDetector>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            factory,
            env: ActivationEnv {
                detector,
                navigator,
            },
            errors: ErrorLog::new(),
        }
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub const fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Bindings for every allowed variant, in candidate order.
    ///
    /// Candidates are NETWORK, INJECTED, COINBASE_WALLET and, when a
    /// project id is configured, WALLET_CONNECT_V2.
    #[must_use]
    pub fn all_providers(&self) -> Vec<ConnectorBinding> {
        let providers: Vec<_> = VARIANTS
            .iter()
            .filter(|spec| self.config.allows(spec.connection_type))
            .filter_map(|spec| self.build(spec))
            .collect();

        #[cfg(feature = "telemetry")]
        tracing::debug!(
            providers = ?providers.iter().map(ConnectorBinding::connection_type).collect::<Vec<_>>(),
            "Built connector bindings"
        );

        providers
    }

    /// Binding for `connection_type`, whether or not it is allowed.
    ///
    /// `None` only for WALLET_CONNECT_V2 without a project id.
    #[must_use]
    pub fn provider(&self, connection_type: ConnectionType) -> Option<ConnectorBinding> {
        VARIANTS
            .iter()
            .find(|spec| spec.connection_type == connection_type)
            .and_then(|spec| self.build(spec))
    }

    /// The read-only network binding.
    #[must_use]
    pub fn network_provider(&self) -> ConnectorBinding {
        self.always_built(ConnectionType::Network)
    }

    /// The injected wallet binding.
    #[must_use]
    pub fn injected_provider(&self) -> ConnectorBinding {
        self.always_built(ConnectionType::Injected)
    }

    /// The Coinbase Wallet binding.
    #[must_use]
    pub fn coinbase_provider(&self) -> ConnectorBinding {
        self.always_built(ConnectionType::CoinbaseWallet)
    }

    /// The WalletConnect v2 binding, if a project id is configured.
    #[must_use]
    pub fn wallet_connect_v2_provider(&self) -> Option<ConnectorBinding> {
        self.provider(ConnectionType::WalletConnectV2)
    }

    /// Every error reported by this registry's connectors, oldest first.
    #[must_use]
    pub fn errors(&self) -> Vec<ReportedError> {
        self.errors.snapshot()
    }

    /// Errors reported by connectors of one variant, oldest first.
    #[must_use]
    pub fn errors_for(&self, connection_type: ConnectionType) -> Vec<ConnectorError> {
        self.errors.for_source(connection_type)
    }

    fn always_built(&self, connection_type: ConnectionType) -> ConnectorBinding {
        self.provider(connection_type)
            .expect("only walletconnect depends on configuration")
    }

    fn build(&self, spec: &VariantSpec) -> Option<ConnectorBinding> {
        let options = (spec.options)(&self.config)?;
        let on_error = self.errors.sink(spec.connection_type);
        let (connector, hooks) = initialize_connector(|actions| {
            self.factory.build(
                &options,
                ConnectorContext {
                    actions,
                    on_error: on_error.clone(),
                },
            )
        });
        Some(ConnectorBinding {
            connection_type: spec.connection_type,
            display: spec.display,
            connector,
            hooks,
            should_display: self.config.allows(spec.connection_type),
            override_hook: spec.override_activate,
            env: self.env.clone(),
            on_error,
        })
    }
}
