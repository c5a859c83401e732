use super::intent::Intent;
use super::state::UiState;

/// The only place dialog state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no effects outside the returned state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
