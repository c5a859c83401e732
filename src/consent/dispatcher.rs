use std::sync::Arc;

use crate::consent::aggregator::ConsentAggregator;
use crate::consent::category::CategoryId;
use crate::storage::ConsentStore;

/// Callback fired once the store reports a commitment as persisted.
pub type CompletionCallback = Box<dyn FnMut() + Send + 'static>;

/// Single point that hands a consent decision to the store.
///
/// Both confirmation paths are synchronous and read-only with respect to the
/// dialog: they see the aggregator by shared reference and never touch
/// visibility.
pub struct CommitDispatcher {
    store: Arc<dyn ConsentStore>,
    app_id: String,
    on_done: CompletionCallback,
}

impl CommitDispatcher {
    pub fn new(
        store: Arc<dyn ConsentStore>,
        app_id: impl Into<String>,
        on_done: CompletionCallback,
    ) -> Self {
        Self {
            store,
            app_id: app_id.into(),
            on_done,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Commit every offered category, regardless of the current selection.
    pub fn confirm_all(&mut self, aggregator: &ConsentAggregator) -> Vec<CategoryId> {
        let ids = aggregator.all_ids();
        tracing::info!(
            app_id = %self.app_id,
            count = ids.len(),
            "Accepting all cookie categories"
        );
        self.commit(&ids);
        ids
    }

    /// Commit exactly the current selection, which may be empty.
    pub fn confirm_selection(&mut self, aggregator: &ConsentAggregator) -> Vec<CategoryId> {
        let ids = aggregator.selected_ids();
        tracing::info!(
            app_id = %self.app_id,
            count = ids.len(),
            "Confirming selected cookie categories"
        );
        self.commit(&ids);
        ids
    }

    fn commit(&mut self, ids: &[CategoryId]) {
        self.store.store_cookies(ids, &self.app_id, &mut *self.on_done);
    }
}
