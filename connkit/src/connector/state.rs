//! Per-connector state store.
//!
//! [`initialize_connector`] pairs a connector with a state channel: the
//! connector writes through [`Actions`], the UI reads through
//! [`ConnectorHooks`].

use alloy_primitives::{Address, ChainId};
use tokio::sync::watch;

use crate::error::ConnectorError;

/// Snapshot of what a connector currently knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorState {
    /// Chain the connector is on, once known.
    pub chain_id: Option<ChainId>,
    /// Accounts exposed by the wallet. Empty for read-only connectors.
    pub accounts: Vec<Address>,
    /// `true` between [`Actions::start_activation`] and the next update.
    pub activating: bool,
}

/// A partial state update.
///
/// `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    /// New chain id.
    pub chain_id: Option<ChainId>,
    /// New account list.
    pub accounts: Option<Vec<Address>>,
}

/// Write side of a connector's state.
#[derive(Debug, Clone)]
pub struct Actions(watch::Sender<ConnectorState>);

impl Actions {
    /// Marks the connector as activating.
    pub fn start_activation(&self) {
        self.0.send_modify(|state| state.activating = true);
    }

    /// Applies `update` and ends any activation in progress.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::InvalidState`] for a zero chain id; the
    /// state is left unchanged in that case.
    pub fn update(&self, update: StateUpdate) -> Result<(), ConnectorError> {
        if update.chain_id == Some(0) {
            return Err(ConnectorError::InvalidState(
                "chain id must be non-zero".into(),
            ));
        }
        self.0.send_modify(|state| {
            if let Some(chain_id) = update.chain_id {
                state.chain_id = Some(chain_id);
            }
            if let Some(accounts) = update.accounts {
                state.accounts = accounts;
            }
            state.activating = false;
        });
        Ok(())
    }

    /// Clears everything, e.g. after deactivation or a failed activation.
    pub fn reset_state(&self) {
        self.0.send_replace(ConnectorState::default());
    }
}

/// Read side of a connector's state.
#[derive(Debug, Clone)]
pub struct ConnectorHooks(watch::Receiver<ConnectorState>);

impl ConnectorHooks {
    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ConnectorState {
        self.0.borrow().clone()
    }

    /// Current chain id.
    #[must_use]
    pub fn chain_id(&self) -> Option<ChainId> {
        self.0.borrow().chain_id
    }

    /// Current accounts.
    #[must_use]
    pub fn accounts(&self) -> Vec<Address> {
        self.0.borrow().accounts.clone()
    }

    /// First account, if any.
    #[must_use]
    pub fn account(&self) -> Option<Address> {
        self.0.borrow().accounts.first().copied()
    }

    /// Whether an activation is in progress.
    #[must_use]
    pub fn is_activating(&self) -> bool {
        self.0.borrow().activating
    }

    /// Whether the connector is on a known chain and not activating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let state = self.0.borrow();
        state.chain_id.is_some() && !state.activating
    }

    /// Waits for the next state change.
    ///
    /// Returns `false` once every [`Actions`] handle has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.0.changed().await.is_ok()
    }
}

/// Creates a state channel and hands its write side to `build`.
///
/// Returns the built connector with the matching read side.
pub fn initialize_connector<C, F>(build: F) -> (C, ConnectorHooks)
where
    F: FnOnce(Actions) -> C,
{
    let (tx, rx) = watch::channel(ConnectorState::default());
    let connector = build(Actions(tx));
    (connector, ConnectorHooks(rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_initial_state_inactive() {
        let (_actions, hooks) = initialize_connector(|actions| actions);
        assert_eq!(hooks.state(), ConnectorState::default());
        assert!(!hooks.is_active());
        assert!(hooks.account().is_none());
    }

    #[test]
    fn test_activation_lifecycle() {
        let (actions, hooks) = initialize_connector(|actions| actions);
        actions.start_activation();
        assert!(hooks.is_activating());
        assert!(!hooks.is_active());

        let account = address!("00000000000000000000000000000000000000aa");
        actions
            .update(StateUpdate {
                chain_id: Some(137),
                accounts: Some(vec![account]),
            })
            .unwrap();
        assert!(!hooks.is_activating());
        assert!(hooks.is_active());
        assert_eq!(hooks.chain_id(), Some(137));
        assert_eq!(hooks.account(), Some(account));

        actions.reset_state();
        assert!(!hooks.is_active());
        assert!(hooks.accounts().is_empty());
    }

    #[test]
    fn test_partial_update_keeps_accounts() {
        let (actions, hooks) = initialize_connector(|actions| actions);
        let account = address!("00000000000000000000000000000000000000bb");
        actions
            .update(StateUpdate {
                chain_id: Some(1),
                accounts: Some(vec![account]),
            })
            .unwrap();
        actions
            .update(StateUpdate {
                chain_id: Some(10),
                accounts: None,
            })
            .unwrap();
        assert_eq!(hooks.chain_id(), Some(10));
        assert_eq!(hooks.accounts(), vec![account]);
    }

    #[test]
    fn test_zero_chain_rejected() {
        let (actions, hooks) = initialize_connector(|actions| actions);
        actions.start_activation();
        let err = actions
            .update(StateUpdate {
                chain_id: Some(0),
                accounts: None,
            })
            .unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidState(_)));
        assert!(hooks.is_activating());
    }

    #[tokio::test]
    async fn test_changed_notifies() {
        let (actions, mut hooks) = initialize_connector(|actions| actions);
        let task = tokio::spawn(async move {
            actions.start_activation();
            actions
        });
        assert!(hooks.changed().await);
        assert!(hooks.is_activating());
        drop(task.await.unwrap());
        assert!(!hooks.changed().await);
    }
}
