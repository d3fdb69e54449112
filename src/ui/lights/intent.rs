//! Intents for the light collection.

use crate::light::Light;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LightsIntent {
    /// The fetch resolved with a collection, in server order.
    Loaded { lights: Vec<Light> },

    /// The fetch failed. Carries the rendered error for diagnostics.
    Failed { reason: String },
}

impl Intent for LightsIntent {}
