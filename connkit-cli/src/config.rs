//! CLI configuration file.
//!
//! A TOML file describing one [`ConnectionConfig`], plus the injected wallet
//! the headless detector should pretend to see. `$VAR` and `${VAR}` in the
//! file are replaced from the environment before parsing.
//!
//! # Example Configuration
//!
//! ```toml
//! app_name = "Alfred"
//! default_chain_id = 137
//! allowed_providers = ["NETWORK", "INJECTED", "WALLET_CONNECT_V2"]
//! wallet_connect_project_id = "$WALLETCONNECT_PROJECT_ID"
//!
//! [rpc_urls]
//! 1 = "https://cloudflare-eth.com"
//! 137 = "${POLYGON_RPC_URL}"
//!
//! [injected]
//! is_meta_mask = true
//! ```
//!
//! # Environment Variables
//!
//! - `CONNKIT_CONFIG` — Path to the configuration file (default: `connkit.toml`)
//! - Anything referenced by `$VAR` in the file

use std::collections::BTreeMap;
use std::path::Path;

use connkit::ConnectionType;
use connkit::config::ConnectionConfig;
use connkit::detect::InjectedProviderFlags;
use connkit::error::ConfigError;
use serde::Deserialize;
use url::Url;

/// Errors raised while loading the CLI configuration.
#[derive(Debug, thiserror::Error)]
pub enum CliConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// An `rpc_urls` key is not a chain id.
    #[error("invalid chain id '{0}' in rpc_urls")]
    ChainId(String),

    /// An `rpc_urls` value is not a URL.
    #[error("invalid rpc url for chain {chain_id}: {source}")]
    Url {
        /// Chain whose URL failed to parse.
        chain_id: u64,
        /// Underlying error.
        source: url::ParseError,
    },

    /// The assembled configuration is unusable.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Raw file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Application name.
    pub app_name: String,
    /// Chain id (as a TOML key) to RPC URL.
    #[serde(default)]
    pub rpc_urls: BTreeMap<String, String>,
    /// Default chain for the network connector.
    pub default_chain_id: u64,
    /// Allowed variants.
    #[serde(default)]
    pub allowed_providers: Vec<ConnectionType>,
    /// WalletConnect Cloud project id.
    #[serde(default)]
    pub wallet_connect_project_id: Option<String>,
    /// Injected wallet the detector reports; absent means none.
    #[serde(default)]
    pub injected: Option<InjectedFlagsFile>,
}

/// `[injected]` table.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InjectedFlagsFile {
    /// `isMetaMask`
    #[serde(default)]
    pub is_meta_mask: bool,
    /// `isBraveWallet`
    #[serde(default)]
    pub is_brave_wallet: bool,
    /// `isCoinbaseWallet`
    #[serde(default)]
    pub is_coinbase_wallet: bool,
}

impl From<InjectedFlagsFile> for InjectedProviderFlags {
    fn from(flags: InjectedFlagsFile) -> Self {
        Self {
            is_meta_mask: flags.is_meta_mask,
            is_brave_wallet: flags.is_brave_wallet,
            is_coinbase_wallet: flags.is_coinbase_wallet,
        }
    }
}

/// Fully resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Registry configuration.
    pub connection: ConnectionConfig,
    /// What the headless detector reports.
    pub injected: Option<InjectedProviderFlags>,
}

impl CliConfig {
    /// Loads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CliConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CliConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// Parses configuration text after environment expansion.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or validated.
    pub fn parse(raw: &str) -> Result<Self, CliConfigError> {
        let file: FileConfig = toml::from_str(&expand_env_vars(raw))?;
        file.try_into()
    }
}

impl TryFrom<FileConfig> for CliConfig {
    type Error = CliConfigError;

    fn try_from(file: FileConfig) -> Result<Self, Self::Error> {
        let mut rpc_urls = BTreeMap::new();
        for (key, value) in &file.rpc_urls {
            let chain_id: u64 = key
                .trim()
                .parse()
                .map_err(|_| CliConfigError::ChainId(key.clone()))?;
            let url = Url::parse(value.trim())
                .map_err(|source| CliConfigError::Url { chain_id, source })?;
            rpc_urls.insert(chain_id, url);
        }

        let wallet_connect_project_id = file
            .wallet_connect_project_id
            .filter(|id| !is_unresolved(id));

        let connection = ConnectionConfig {
            app_name: file.app_name,
            rpc_urls,
            default_chain_id: file.default_chain_id,
            allowed_providers: file.allowed_providers,
            wallet_connect_project_id,
        };
        connection.validate()?;

        Ok(Self {
            connection,
            injected: file.injected.map(Into::into),
        })
    }
}

/// `true` for a value that is still a `$VAR` reference after expansion.
fn is_unresolved(value: &str) -> bool {
    let unresolved = value.trim_start().starts_with('$');
    if unresolved {
        tracing::warn!(
            value,
            "WalletConnect project id not resolved (missing env var?), disabling WalletConnect"
        );
    }
    unresolved
}

/// Replaces `$VAR` and `${VAR}` with values from the environment.
///
/// References to unset variables are kept verbatim.
fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        match (!name.is_empty()).then(|| std::env::var(name)) {
            Some(Ok(value)) => out.push_str(&value),
            _ => out.push_str(&rest[pos..=pos + consumed]),
        }
        rest = &after[consumed..];
    }

    out.push_str(rest);
    out
}
