//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//! ```
//!
//! - **State**: value describing everything a view needs to draw
//! - **Intent**: a system event such as a finished fetch
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
