//! Injected wallet detection and external navigation.
//!
//! The registry cannot see the browser. Hosts describe the injected
//! provider through a [`WalletDetector`] and open installation pages through
//! a [`Navigator`].

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

/// Vendor flags advertised by an injected EIP-1193 provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectedProviderFlags {
    /// `ethereum.isMetaMask`
    #[serde(default)]
    pub is_meta_mask: bool,
    /// `ethereum.isBraveWallet`
    #[serde(default)]
    pub is_brave_wallet: bool,
    /// `ethereum.isCoinbaseWallet`
    #[serde(default)]
    pub is_coinbase_wallet: bool,
}

impl InjectedProviderFlags {
    /// Returns `true` if the provider is MetaMask itself.
    ///
    /// Brave Wallet also sets `isMetaMask`.
    #[must_use]
    pub const fn is_meta_mask_wallet(&self) -> bool {
        self.is_meta_mask && !self.is_brave_wallet
    }
}

/// Reports what, if anything, is injected into the page.
pub trait WalletDetector: Debug + Send + Sync {
    /// Flags of the injected provider, or `None` when there is none.
    fn injected_provider(&self) -> Option<InjectedProviderFlags>;

    /// Returns `true` if the injected wallet is MetaMask.
    fn is_meta_mask_wallet(&self) -> bool {
        self.injected_provider()
            .is_some_and(|flags| flags.is_meta_mask_wallet())
    }
}

impl<T: WalletDetector + ?Sized> WalletDetector for Arc<T> {
    fn injected_provider(&self) -> Option<InjectedProviderFlags> {
        (**self).injected_provider()
    }
}

/// Detector with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticDetector(pub Option<InjectedProviderFlags>);

impl StaticDetector {
    /// No injected provider.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// An injected MetaMask provider.
    #[must_use]
    pub const fn meta_mask() -> Self {
        Self(Some(InjectedProviderFlags {
            is_meta_mask: true,
            is_brave_wallet: false,
            is_coinbase_wallet: false,
        }))
    }
}

impl WalletDetector for StaticDetector {
    fn injected_provider(&self) -> Option<InjectedProviderFlags> {
        self.0
    }
}

/// Opens a page outside the application.
pub trait Navigator: Debug + Send + Sync {
    /// Opens `url` in the browsing context named `target`.
    fn open(&self, url: &Url, target: &str);
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn open(&self, url: &Url, target: &str) {
        (**self).open(url, target);
    }
}

/// Navigator that only records the request in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn open(&self, url: &Url, target: &str) {
        #[cfg(feature = "telemetry")]
        tracing::info!(%url, target, "Open external page");

        #[cfg(not(feature = "telemetry"))]
        let _ = (url, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brave_is_not_meta_mask() {
        let flags = InjectedProviderFlags {
            is_meta_mask: true,
            is_brave_wallet: true,
            is_coinbase_wallet: false,
        };
        assert!(!flags.is_meta_mask_wallet());
        assert!(!StaticDetector(Some(flags)).is_meta_mask_wallet());
    }

    #[test]
    fn test_static_detector() {
        assert!(StaticDetector::meta_mask().is_meta_mask_wallet());
        assert!(!StaticDetector::none().is_meta_mask_wallet());
        let coinbase = StaticDetector(Some(InjectedProviderFlags {
            is_coinbase_wallet: true,
            ..InjectedProviderFlags::default()
        }));
        assert!(!coinbase.is_meta_mask_wallet());
    }

    #[test]
    fn test_flags_deserialize() {
        let flags: InjectedProviderFlags =
            serde_json::from_str(r#"{ "isMetaMask": true }"#).unwrap();
        assert!(flags.is_meta_mask_wallet());
    }
}
