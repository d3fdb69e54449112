//! Light collection feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Collection lifecycle (Awaiting → Loaded | Failed)
//! - `intent.rs` - Fetch outcomes (Loaded, Failed)
//! - `reducer.rs` - One-way transitions (pure, no side effects)
//! - `list.rs` - Keyed list renderer over a loaded collection

mod intent;
mod list;
mod reducer;
mod state;

pub use intent::LightsIntent;
pub use list::{LightItem, LightItems, LightList};
pub use reducer::LightsReducer;
pub use state::LightsState;
