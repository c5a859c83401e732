use std::time::Instant;

use crate::config::{Config, DialogConfig, HostConfig, TransitionConfig};
use crate::consent::{CategoryId, CommitDispatcher, DialogView};
use crate::ui::dialog::{ConsentDialogState, ConsentIntent, ConsentReducer, DialogText};
use crate::ui::mvi::Reducer;

/// Host application around one consent dialog.
///
/// The host owns mounting: the dialog never removes itself, the host drops it
/// (and quits) once a commitment is reported persisted, if so configured.
pub struct App {
    should_quit: bool,
    /// `None` once the host has unmounted the dialog.
    dialog: Option<ConsentDialogState>,
    dispatcher: CommitDispatcher,
    dialog_config: DialogConfig,
    transition: TransitionConfig,
    host: HostConfig,
    mounted_at: Instant,
    /// Ids handed to the store, waiting for its completion callback.
    pending: Option<Vec<CategoryId>>,
    /// Last commitment the store confirmed.
    recorded: Option<Vec<CategoryId>>,
}

impl App {
    pub fn new(config: &Config, dispatcher: CommitDispatcher, active: bool) -> Self {
        Self {
            should_quit: false,
            dialog: Some(ConsentDialogState::mounted(config.cookie_categories(), active)),
            dispatcher,
            dialog_config: config.dialog.clone(),
            transition: config.transition,
            host: config.host,
            mounted_at: Instant::now(),
            pending: None,
            recorded: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dialog(&self) -> Option<&ConsentDialogState> {
        self.dialog.as_ref()
    }

    pub fn view(&self) -> Option<DialogView> {
        self.dialog.as_ref().and_then(ConsentDialogState::view)
    }

    pub fn dialog_text(&self) -> DialogText<'_> {
        DialogText::from(&self.dialog_config)
    }

    pub fn app_id(&self) -> &str {
        self.dispatcher.app_id()
    }

    /// Entrance transition progress for the renderer.
    pub fn transition_progress(&self) -> f64 {
        self.transition.progress(self.mounted_at.elapsed())
    }

    pub fn recorded(&self) -> Option<&[CategoryId]> {
        self.recorded.as_deref()
    }

    /// Dispatch an intent to the dialog reducer.
    pub fn dispatch(&mut self, intent: ConsentIntent) {
        if let Some(state) = self.dialog.take() {
            self.dialog = Some(ConsentReducer::reduce(state, intent));
        }
    }

    /// Space on the focused row: report the opposite of its current state.
    pub fn toggle_focused(&mut self) {
        let Some(state) = &self.dialog else {
            return;
        };
        let Some(category) = state.focused_category() else {
            return;
        };
        let agree = !state.aggregator.is_agreed(&category.id);
        let id = category.id.clone();
        self.dispatch(ConsentIntent::Toggle { id, agree });
    }

    /// Explicit agree/reject on the focused row.
    pub fn set_focused(&mut self, agree: bool) {
        let Some(id) = self
            .dialog
            .as_ref()
            .and_then(|s| s.focused_category())
            .map(|c| c.id.clone())
        else {
            return;
        };
        self.dispatch(ConsentIntent::Toggle { id, agree });
    }

    /// "Accept All Cookies". Only available in the collapsed view.
    pub fn accept_all(&mut self) -> bool {
        if self.view() != Some(DialogView::Collapsed) {
            return false;
        }
        let Some(state) = &self.dialog else {
            return false;
        };
        self.pending = Some(self.dispatcher.confirm_all(&state.aggregator));
        true
    }

    /// "Confirm Choices". Only available in the expanded view.
    pub fn confirm_selection(&mut self) -> bool {
        if self.view() != Some(DialogView::Expanded) {
            return false;
        }
        let Some(state) = &self.dialog else {
            return false;
        };
        self.pending = Some(self.dispatcher.confirm_selection(&state.aggregator));
        true
    }

    /// Completion callback arrived: the store persisted the last commitment.
    pub fn on_consent_recorded(&mut self) {
        if let Some(ids) = self.pending.take() {
            self.recorded = Some(ids);
        }
        if self.host.dismiss_on_commit {
            tracing::debug!(app_id = %self.app_id(), "Unmounting consent dialog");
            self.unmount();
            self.request_quit();
        }
    }

    pub fn unmount(&mut self) {
        self.dialog = None;
    }
}
