use crate::cart::StorageError;
use crate::checkout::CheckoutError;
use shared::order::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("Menu item not found: {0}")]
    ItemNotFound(i64),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("No order is being tracked")]
    NoActiveOrder,
}

pub type ManagerResult<T> = Result<T, ManagerError>;

impl ManagerError {
    /// Map to the error code reported to the UI (which owns the wording
    /// shown to the customer)
    pub fn to_command_error(&self) -> CommandError {
        let code = match self {
            ManagerError::Storage(_) | ManagerError::Io(_) => CommandErrorCode::InternalError,
            ManagerError::Checkout(CheckoutError::CardNumberRequired) => {
                CommandErrorCode::CardNumberRequired
            }
            ManagerError::Checkout(_) => CommandErrorCode::InvalidState,
            ManagerError::ItemNotFound(_) => CommandErrorCode::ItemNotFound,
            ManagerError::EmptyCart => CommandErrorCode::EmptyCart,
            ManagerError::NoActiveOrder => CommandErrorCode::OrderNotFound,
        };
        CommandError::new(code, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ManagerError::ItemNotFound(7).to_command_error().code,
            CommandErrorCode::ItemNotFound
        );
        assert_eq!(
            ManagerError::EmptyCart.to_command_error().code,
            CommandErrorCode::EmptyCart
        );
        assert_eq!(
            ManagerError::Checkout(CheckoutError::CardNumberRequired)
                .to_command_error()
                .code,
            CommandErrorCode::CardNumberRequired
        );
        assert_eq!(
            ManagerError::Checkout(CheckoutError::AlreadySubmitted)
                .to_command_error()
                .code,
            CommandErrorCode::InvalidState
        );
        assert_eq!(
            ManagerError::NoActiveOrder.to_command_error().code,
            CommandErrorCode::OrderNotFound
        );
    }
}
