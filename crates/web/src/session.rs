//! Session gate in front of the checkout panel.
//!
//! This is a local toggle with no credential check. It decides what the
//! checkout panel renders and nothing else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the visitor has pressed "Login".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionGate {
    #[default]
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Please log in to access the Checkout page.")]
    LoggedOut,
}

impl SessionGate {
    pub fn is_authenticated(&self) -> bool {
        *self == SessionGate::LoggedIn
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            SessionGate::LoggedOut => SessionGate::LoggedIn,
            SessionGate::LoggedIn => SessionGate::LoggedOut,
        }
    }

    /// Flip the gate and return the new state.
    pub fn toggle(&mut self) -> Self {
        *self = self.toggled();
        *self
    }

    /// Label of the button that flips the gate.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            SessionGate::LoggedOut => "Login",
            SessionGate::LoggedIn => "Logout",
        }
    }

    pub fn require_authenticated(&self) -> Result<(), GateError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(GateError::LoggedOut)
        }
    }
}

/// What the checkout panel shows for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAccess {
    Denied(GateError),
    Granted,
}

impl CheckoutAccess {
    pub const HEADING: &'static str = "Checkout Page";
    pub const BODY: &'static str = "Only visible to logged-in users.";

    pub fn for_session(gate: SessionGate) -> Self {
        match gate.require_authenticated() {
            Ok(()) => CheckoutAccess::Granted,
            Err(err) => CheckoutAccess::Denied(err),
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, CheckoutAccess::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out_and_denied() {
        let gate = SessionGate::default();
        assert!(!gate.is_authenticated());
        let access = CheckoutAccess::for_session(gate);
        assert!(!access.is_granted());
        match access {
            CheckoutAccess::Denied(err) => {
                assert_eq!(err.to_string(), "Please log in to access the Checkout page.");
            }
            CheckoutAccess::Granted => panic!("Expected denial while logged out"),
        }
    }

    #[test]
    fn one_toggle_grants_checkout() {
        let mut gate = SessionGate::default();
        assert_eq!(gate.toggle(), SessionGate::LoggedIn);
        assert!(gate.is_authenticated());
        assert_eq!(CheckoutAccess::for_session(gate), CheckoutAccess::Granted);
    }

    #[test]
    fn toggle_labels_follow_state() {
        assert_eq!(SessionGate::LoggedOut.toggle_label(), "Login");
        assert_eq!(SessionGate::LoggedIn.toggle_label(), "Logout");
    }

    #[test]
    fn require_authenticated_only_passes_when_logged_in() {
        assert_eq!(
            SessionGate::LoggedOut.require_authenticated(),
            Err(GateError::LoggedOut)
        );
        assert_eq!(SessionGate::LoggedIn.require_authenticated(), Ok(()));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn gate_strategy() -> impl Strategy<Value = SessionGate> {
            prop_oneof![Just(SessionGate::LoggedOut), Just(SessionGate::LoggedIn)]
        }

        proptest! {
            #[test]
            fn double_toggle_restores_state(start in gate_strategy()) {
                let mut gate = start;
                gate.toggle();
                gate.toggle();
                prop_assert_eq!(gate, start);
            }

            #[test]
            fn checkout_granted_iff_authenticated(
                start in gate_strategy(),
                toggles in 0usize..16,
            ) {
                let mut gate = start;
                for _ in 0..toggles {
                    gate.toggle();
                }
                prop_assert_eq!(
                    CheckoutAccess::for_session(gate).is_granted(),
                    gate.is_authenticated()
                );
            }
        }
    }
}
