use parking_lot::Mutex;

use crate::consent::CategoryId;
use crate::storage::{ConsentRecord, ConsentStore};

/// Keeps every commitment in memory, in call order.
#[derive(Default)]
pub struct MemoryConsentStore {
    records: Mutex<Vec<ConsentRecord>>,
}

impl MemoryConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ConsentRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ConsentStore for MemoryConsentStore {
    fn store_cookies(&self, categories: &[CategoryId], app_id: &str, on_done: &mut dyn FnMut()) {
        self.records.lock().push(ConsentRecord::new(app_id, categories));
        on_done();
    }
}
