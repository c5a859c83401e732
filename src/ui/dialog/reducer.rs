use crate::consent::DialogView;
use crate::ui::dialog::intent::ConsentIntent;
use crate::ui::dialog::state::ConsentDialogState;
use crate::ui::mvi::Reducer;

pub struct ConsentReducer;

impl Reducer for ConsentReducer {
    type State = ConsentDialogState;
    type Intent = ConsentIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let view = state.view();
        match intent {
            ConsentIntent::OpenSettings => {
                if view == Some(DialogView::Collapsed) {
                    state.visibility.expand();
                }
                state
            }
            ConsentIntent::CloseSettings => {
                if view == Some(DialogView::Expanded) {
                    state.visibility.collapse();
                }
                state
            }
            ConsentIntent::Toggle { id, agree } => {
                if view != Some(DialogView::Expanded) {
                    return state;
                }
                if let Err(e) = state.aggregator.toggle(&id, agree) {
                    tracing::warn!(error = %e, "Ignoring toggle");
                }
                state
            }
            ConsentIntent::MoveUp => {
                if view != Some(DialogView::Expanded) {
                    return state;
                }
                let len = state.aggregator.categories().len();
                state.focused = if state.focused == 0 {
                    len.saturating_sub(1)
                } else {
                    state.focused - 1
                };
                state
            }
            ConsentIntent::MoveDown => {
                if view != Some(DialogView::Expanded) {
                    return state;
                }
                let len = state.aggregator.categories().len();
                state.focused = if state.focused + 1 >= len {
                    0
                } else {
                    state.focused + 1
                };
                state
            }
        }
    }
}
