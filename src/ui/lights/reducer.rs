//! Reducer for the light collection.

use crate::ui::mvi::Reducer;

use super::intent::LightsIntent;
use super::state::LightsState;

/// One-way transitions out of `Awaiting`.
///
/// Once the collection is `Loaded` or `Failed`, later intents leave it
/// untouched: the collection is replaced at most once per lifetime.
pub struct LightsReducer;

impl Reducer for LightsReducer {
    type State = LightsState;
    type Intent = LightsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            LightsState::Awaiting => match intent {
                LightsIntent::Loaded { lights } => LightsState::Loaded { lights },
                LightsIntent::Failed { reason } => LightsState::Failed { reason },
            },
            other => other,
        }
    }
}
