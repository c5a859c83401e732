use std::sync::Arc;

use crate::consent::{ConsentAggregator, CookieCategory, DialogView, VisibilityState};
use crate::ui::dialog::rows::DialogRow;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsentDialogState {
    pub visibility: VisibilityState,
    pub aggregator: ConsentAggregator,
    /// Index into the offered categories. Only used while expanded.
    pub focused: usize,
}

impl UiState for ConsentDialogState {}

impl ConsentDialogState {
    /// A freshly mounted dialog: active, collapsed, nothing agreed.
    pub fn new(categories: impl Into<Arc<[CookieCategory]>>) -> Self {
        Self::mounted(categories, true)
    }

    /// Mount with an explicit `active` flag chosen by the host.
    pub fn mounted(categories: impl Into<Arc<[CookieCategory]>>, active: bool) -> Self {
        Self {
            visibility: VisibilityState::new(active),
            aggregator: ConsentAggregator::new(categories),
            focused: 0,
        }
    }

    pub fn view(&self) -> Option<DialogView> {
        self.visibility.view()
    }

    pub fn focused_category(&self) -> Option<&CookieCategory> {
        self.aggregator.categories().get(self.focused)
    }

    /// Rows of the expanded view, top to bottom.
    pub fn rows(&self) -> Vec<DialogRow<'_>> {
        let mut rows: Vec<DialogRow<'_>> = self
            .aggregator
            .categories()
            .iter()
            .enumerate()
            .map(|(idx, category)| DialogRow::CategoryRow {
                category,
                agreed: self.aggregator.is_agreed(&category.id),
                focused: idx == self.focused,
            })
            .collect();
        rows.push(DialogRow::AddCustomCategoryPrompt);
        rows
    }
}
