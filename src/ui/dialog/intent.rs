use crate::consent::CategoryId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConsentIntent {
    /// "Cookie Settings" in the collapsed view.
    OpenSettings,
    /// "Close" in the expanded view. Keeps the current selection.
    CloseSettings,
    /// Reported by a category row.
    Toggle { id: CategoryId, agree: bool },
    MoveUp,
    MoveDown,
}

impl Intent for ConsentIntent {}
