//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use cookie_consent::config::Config;
use cookie_consent::consent::{CommitDispatcher, CookieCategory};
use cookie_consent::storage::MemoryConsentStore;
use cookie_consent::ui::app::App;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Categories A, B, C in that order.
pub fn abc() -> Vec<CookieCategory> {
    vec![
        CookieCategory::new("A", "Category A"),
        CookieCategory::new("B", "Category B"),
        CookieCategory::new("C", "Category C").with_description("Third category"),
    ]
}

/// Store plus a counter of completion callbacks.
pub struct Recorder {
    pub store: Arc<MemoryConsentStore>,
    pub done: Arc<AtomicUsize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryConsentStore::new()),
            done: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn dispatcher(&self, app_id: &str) -> CommitDispatcher {
        let done = Arc::clone(&self.done);
        CommitDispatcher::new(
            self.store.clone(),
            app_id,
            Box::new(move || {
                done.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    pub fn done_count(&self) -> usize {
        self.done.load(Ordering::SeqCst)
    }

    /// Category ids of every commitment, in call order.
    pub fn commits(&self) -> Vec<Vec<String>> {
        self.store
            .records()
            .into_iter()
            .map(|r| r.categories.iter().map(|id| id.to_string()).collect())
            .collect()
    }
}

/// Config offering A, B, C under app id "test-app".
pub fn abc_config(dismiss_on_commit: bool) -> Config {
    let mut config = Config::default();
    config.dialog.app_id = "test-app".to_string();
    config.categories = ["A", "B", "C"]
        .iter()
        .map(|id| cookie_consent::config::CategoryConfig {
            id: id.to_string(),
            label: format!("Category {}", id),
            description: None,
        })
        .collect();
    config.host.dismiss_on_commit = dismiss_on_commit;
    config.transition.duration_ms = 0;
    config
}

pub fn make_app(recorder: &Recorder, dismiss_on_commit: bool) -> App {
    App::new(
        &abc_config(dismiss_on_commit),
        recorder.dispatcher("test-app"),
        true,
    )
}
