use thiserror::Error;

use crate::consent::category::CategoryId;

/// Errors raised by the consent state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsentError {
    /// Toggle named a category that was not offered in this dialog.
    #[error("Unknown cookie category '{id}'")]
    UnknownCategory { id: CategoryId },
}
