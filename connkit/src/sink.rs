//! Append-only log of connector errors.
//!
//! One [`ErrorLog`] belongs to a registry. Every binding receives an
//! [`ErrorSink`] tagged with its variant; connectors report through it.
//! Entries are never removed.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ConnectorError;
use crate::provider::ConnectionType;

/// A connector error with the variant that reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    /// Variant of the reporting binding.
    pub source: ConnectionType,
    /// The error itself.
    pub error: ConnectorError,
}

/// Shared, ordered record of connector errors.
#[derive(Clone, Default)]
pub struct ErrorLog(Arc<Mutex<Vec<ReportedError>>>);

impl fmt::Debug for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorLog").field(&self.len()).finish()
    }
}

impl ErrorLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a sink that tags its reports with `source`.
    #[must_use]
    pub fn sink(&self, source: ConnectionType) -> ErrorSink {
        ErrorSink {
            source,
            log: self.clone(),
        }
    }

    /// Returns all entries in report order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ReportedError> {
        self.entries().clone()
    }

    /// Returns the errors reported by `source`, in report order.
    #[must_use]
    pub fn for_source(&self, source: ConnectionType) -> Vec<ConnectorError> {
        self.entries()
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.error.clone())
            .collect()
    }

    /// Returns the number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn push(&self, entry: ReportedError) {
        self.entries().push(entry);
    }

    // A panicking reporter cannot leave a half-written entry behind, so a
    // poisoned lock still guards a consistent list.
    fn entries(&self) -> MutexGuard<'_, Vec<ReportedError>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error callback handed to a connector.
#[derive(Debug, Clone)]
pub struct ErrorSink {
    source: ConnectionType,
    log: ErrorLog,
}

impl ErrorSink {
    /// Variant this sink reports for.
    #[must_use]
    pub const fn source(&self) -> ConnectionType {
        self.source
    }

    /// Appends `error` to the registry's log.
    pub fn report(&self, error: ConnectorError) {
        #[cfg(feature = "telemetry")]
        tracing::warn!(connector = %self.source, error = %error, "Connector error");

        self.log.push(ReportedError {
            source: self.source,
            error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_preserves_order() {
        let log = ErrorLog::new();
        let injected = log.sink(ConnectionType::Injected);
        let coinbase = log.sink(ConnectionType::CoinbaseWallet);

        injected.report(ConnectorError::user_rejected("first"));
        coinbase.report(ConnectorError::Unavailable("second".into()));
        injected.report(ConnectorError::Rpc("third".into()));

        let entries = log.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].source, ConnectionType::Injected);
        assert_eq!(entries[1].source, ConnectionType::CoinbaseWallet);
        assert_eq!(entries[2].error, ConnectorError::Rpc("third".into()));
    }

    #[test]
    fn test_for_source_filters() {
        let log = ErrorLog::new();
        log.sink(ConnectionType::Network)
            .report(ConnectorError::UnknownChain(5));
        log.sink(ConnectionType::Injected)
            .report(ConnectorError::user_rejected("no"));

        assert_eq!(
            log.for_source(ConnectionType::Network),
            vec![ConnectorError::UnknownChain(5)]
        );
        assert!(log.for_source(ConnectionType::WalletConnectV2).is_empty());
    }

    #[test]
    fn test_sinks_share_one_log() {
        let log = ErrorLog::new();
        let sink = log.sink(ConnectionType::Network);
        let cloned = sink.clone();
        sink.report(ConnectorError::Rpc("a".into()));
        cloned.report(ConnectorError::Rpc("b".into()));
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_report_from_other_thread() {
        let log = ErrorLog::new();
        let sink = log.sink(ConnectionType::CoinbaseWallet);
        std::thread::spawn(move || sink.report(ConnectorError::Unavailable("x".into())))
            .join()
            .unwrap();
        assert_eq!(log.len(), 1);
    }
}
