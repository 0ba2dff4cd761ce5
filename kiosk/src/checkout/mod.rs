//! Checkout / payment simulation state machine
//!
//! ```text
//! Idle ──begin──► AwaitingMethod ──submit──► Processing ──confirm──► Confirmed ──close──► Idle
//!   ▲                   │
//!   └──────cancel───────┘
//! ```
//!
//! `confirm` and `close` are driven by the manager's timer chain, never by
//! the UI. Cancellation is only accepted while the payment form is open;
//! once a payment is processing it runs to completion (there is no decline
//! path - the simulator always approves).

use shared::order::{PaymentInput, PaymentMethod};
use thiserror::Error;

/// Checkout state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// No checkout in progress
    #[default]
    Idle,
    /// Payment form open, waiting for a method
    AwaitingMethod,
    /// Payment submitted, simulated processing underway
    Processing { method: PaymentMethod },
    /// Payment approved, confirmation on display
    Confirmed,
}

/// Checkout transition errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("checkout is already in progress")]
    AlreadyActive,

    #[error("no payment form is open")]
    NoActiveCheckout,

    #[error("card number is required for card payments")]
    CardNumberRequired,

    #[error("payment has already been submitted")]
    AlreadySubmitted,

    #[error("no payment is processing")]
    NotProcessing,

    #[error("no confirmation on display")]
    NotConfirmed,
}

/// Checkout flow state machine
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == CheckoutState::Idle
    }

    /// Idle -> AwaitingMethod: open the payment form
    pub fn begin(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::Idle => {
                self.state = CheckoutState::AwaitingMethod;
                Ok(())
            }
            _ => Err(CheckoutError::AlreadyActive),
        }
    }

    /// AwaitingMethod -> Processing: submit the selected payment method
    ///
    /// Card payments must carry a non-empty card number; no further format
    /// validation is applied.
    pub fn submit(&mut self, payment: &PaymentInput) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::AwaitingMethod => {}
            CheckoutState::Idle => return Err(CheckoutError::NoActiveCheckout),
            _ => return Err(CheckoutError::AlreadySubmitted),
        }

        if payment.method == PaymentMethod::Card {
            let has_number = payment
                .card_number
                .as_deref()
                .is_some_and(|n| !n.trim().is_empty());
            if !has_number {
                return Err(CheckoutError::CardNumberRequired);
            }
        }

        self.state = CheckoutState::Processing {
            method: payment.method,
        };
        Ok(())
    }

    /// Processing -> Confirmed: the simulated payment came back approved
    pub fn confirm(&mut self) -> Result<PaymentMethod, CheckoutError> {
        match self.state {
            CheckoutState::Processing { method } => {
                self.state = CheckoutState::Confirmed;
                Ok(method)
            }
            _ => Err(CheckoutError::NotProcessing),
        }
    }

    /// Confirmed -> Idle: confirmation display finished
    pub fn close(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::Confirmed => {
                self.state = CheckoutState::Idle;
                Ok(())
            }
            _ => Err(CheckoutError::NotConfirmed),
        }
    }

    /// AwaitingMethod -> Idle: abandon the payment form
    ///
    /// Rejected once the payment has been submitted.
    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        match self.state {
            CheckoutState::AwaitingMethod => {
                self.state = CheckoutState::Idle;
                Ok(())
            }
            CheckoutState::Idle => Err(CheckoutError::NoActiveCheckout),
            _ => Err(CheckoutError::AlreadySubmitted),
        }
    }
}
