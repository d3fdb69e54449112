//! State for the light collection.

use crate::light::Light;
use crate::ui::mvi::UiState;

/// Lifecycle of the light collection owned by the root container.
///
/// `Failed` draws exactly like `Awaiting`: an empty collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LightsState {
    /// Fetch not resolved yet. Collection is empty.
    #[default]
    Awaiting,

    /// Collection as received from the server.
    Loaded { lights: Vec<Light> },

    /// Fetch failed. Collection stays empty.
    Failed { reason: String },
}

impl UiState for LightsState {}

impl LightsState {
    /// Current collection. Empty unless `Loaded`.
    pub fn lights(&self) -> &[Light] {
        match self {
            Self::Loaded { lights } => lights,
            Self::Awaiting | Self::Failed { .. } => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.lights().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights().is_empty()
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Awaiting)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Failure reason, if the fetch failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// `"Lights: " + length`
    pub fn count_label(&self) -> String {
        format!("Lights: {}", self.len())
    }
}
