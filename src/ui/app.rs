use crate::client::{FetchError, LightClient};
use crate::light::{Endpoint, Light};
use crate::ui::events::AppEventSender;
use crate::ui::fetch::FetchTask;
use crate::ui::lights::{LightList, LightsIntent, LightsReducer, LightsState};
use crate::ui::mvi::Reducer;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Where the one fetch of this lifetime stands.
enum FetchSlot {
    Idle,
    Pending(FetchTask),
    Done,
}

/// Root container: sources the light collection and owns it.
pub struct App {
    should_quit: bool,
    endpoint: Endpoint,
    /// Light collection state (MVI pattern).
    lights: LightsState,
    fetch: FetchSlot,
}

impl App {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            should_quit: false,
            endpoint,
            lights: LightsState::default(),
            fetch: FetchSlot::Idle,
        }
    }

    /// Issue the one fetch of this lifetime.
    ///
    /// Returns `false` without doing anything if a fetch was already issued.
    pub fn start(
        &mut self,
        client: Arc<LightClient>,
        runtime: &Handle,
        events: AppEventSender,
    ) -> bool {
        if !matches!(self.fetch, FetchSlot::Idle) {
            return false;
        }
        tracing::debug!(endpoint = %self.endpoint, "Starting light fetch");
        self.fetch = FetchSlot::Pending(FetchTask::spawn(client, runtime, events));
        true
    }

    /// True once a fetch has been issued, whether or not it has finished.
    pub fn fetch_issued(&self) -> bool {
        !matches!(self.fetch, FetchSlot::Idle)
    }

    /// Update function for the fetch outcome.
    pub fn on_lights_fetched(&mut self, result: Result<Vec<Light>, FetchError>) {
        self.fetch = FetchSlot::Done;
        let intent = match result {
            Ok(lights) => {
                tracing::debug!(count = lights.len(), "Light collection received");
                LightsIntent::Loaded { lights }
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    error_type = err.error_type(),
                    "Light fetch failed; list stays empty"
                );
                LightsIntent::Failed {
                    reason: err.to_string(),
                }
            }
        };
        self.dispatch_lights(intent);
    }

    /// True when the fetch task ended without delivering its outcome,
    /// e.g. because the runtime shut down underneath it.
    pub fn fetch_lost(&self) -> bool {
        matches!(&self.fetch, FetchSlot::Pending(task) if task.is_finished())
    }

    /// Close out a fetch whose task ended without a result.
    pub fn on_fetch_lost(&mut self) {
        self.fetch = FetchSlot::Done;
        tracing::warn!("Light fetch task ended without a result; list stays empty");
        self.dispatch_lights(LightsIntent::Failed {
            reason: "fetch task ended without a result".to_string(),
        });
    }

    fn dispatch_lights(&mut self, intent: LightsIntent) {
        dispatch_mvi!(self, lights, LightsReducer, intent);
    }

    /// Cancel a fetch that is still in flight.
    pub fn teardown(&mut self) {
        if let FetchSlot::Pending(task) = std::mem::replace(&mut self.fetch, FetchSlot::Done) {
            task.abort();
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn lights_state(&self) -> &LightsState {
        &self.lights
    }

    pub fn lights(&self) -> &[Light] {
        self.lights.lights()
    }

    pub fn count_label(&self) -> String {
        self.lights.count_label()
    }

    pub fn light_list(&self) -> LightList<'_> {
        LightList::new(&self.endpoint, self.lights.lights())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
