//! A connector paired with its display metadata and activation rules.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::ChainId;

use crate::connector::{Connector, ConnectorHooks};
use crate::detect::{Navigator, WalletDetector};
use crate::error::ConnectorError;
use crate::provider::ConnectionType;
use crate::sink::ErrorSink;

/// Host services an activation override may consult.
#[derive(Debug, Clone)]
pub struct ActivationEnv {
    /// Injected wallet detection.
    pub detector: Arc<dyn WalletDetector>,
    /// Opens pages outside the application.
    pub navigator: Arc<dyn Navigator>,
}

/// Pre-activation hook.
///
/// Returns `true` when activation was handled outside the connector and must
/// not proceed.
pub type OverrideHook = fn(&ActivationEnv) -> bool;

/// Override that never fires.
#[must_use]
pub const fn no_override(_env: &ActivationEnv) -> bool {
    false
}

/// Outcome of [`ConnectorBinding::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The connector activated.
    Activated,
    /// The override fired; the connector was not touched.
    HandledExternally,
}

/// Display name and icon of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Name shown in the wallet picker.
    pub name: &'static str,
    /// Icon path, relative to the front-end's asset root.
    pub icon: &'static str,
}

/// A connector with its metadata, visibility and override hook.
///
/// Bindings are immutable once built by the
/// [`ConnectionRegistry`](crate::registry::ConnectionRegistry).
#[derive(Clone)]
pub struct ConnectorBinding {
    pub(crate) connection_type: ConnectionType,
    pub(crate) display: DisplayInfo,
    pub(crate) connector: Arc<dyn Connector>,
    pub(crate) hooks: ConnectorHooks,
    pub(crate) should_display: bool,
    pub(crate) override_hook: OverrideHook,
    pub(crate) env: ActivationEnv,
    pub(crate) on_error: ErrorSink,
}

impl fmt::Debug for ConnectorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorBinding")
            .field("connection_type", &self.connection_type)
            .field("name", &self.display.name)
            .field("should_display", &self.should_display)
            .field("connector", &self.connector)
            .finish_non_exhaustive()
    }
}

impl ConnectorBinding {
    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.display.name
    }

    /// Icon path.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.display.icon
    }

    /// Variant tag.
    #[must_use]
    pub const fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    /// The underlying connector.
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn Connector> {
        &self.connector
    }

    /// Read side of the connector's state.
    #[must_use]
    pub const fn hooks(&self) -> &ConnectorHooks {
        &self.hooks
    }

    /// Error sink handed to the connector.
    #[must_use]
    pub const fn error_sink(&self) -> &ErrorSink {
        &self.on_error
    }

    /// Whether the configuration allows this variant.
    ///
    /// Fixed when the binding is built.
    #[must_use]
    pub const fn should_display(&self) -> bool {
        self.should_display
    }

    /// Runs the variant's pre-activation hook.
    ///
    /// `true` means activation was handled externally and must stop here.
    #[must_use]
    pub fn override_activate(&self) -> bool {
        (self.override_hook)(&self.env)
    }

    /// Runs [`override_activate`](Self::override_activate), then activates
    /// the connector unless the override fired.
    ///
    /// # Errors
    ///
    /// Returns the connector's error. The connector has already reported it
    /// to the registry's error log.
    pub async fn activate(
        &self,
        desired_chain_id: Option<ChainId>,
    ) -> Result<Activation, ConnectorError> {
        if self.override_activate() {
            return Ok(Activation::HandledExternally);
        }
        self.connector.activate(desired_chain_id).await?;
        Ok(Activation::Activated)
    }

    /// Deactivates the connector.
    ///
    /// # Errors
    ///
    /// Returns the connector's error.
    pub async fn deactivate(&self) -> Result<(), ConnectorError> {
        self.connector.deactivate().await
    }
}
