use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure function: no I/O, no logging of side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
