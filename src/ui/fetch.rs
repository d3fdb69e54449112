//! The one background fetch of the root container.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::client::LightClient;
use crate::ui::events::{AppEvent, AppEventSender};

/// Spawned fetch whose result arrives as [`AppEvent::LightsFetched`].
pub struct FetchTask {
    handle: JoinHandle<()>,
}

impl FetchTask {
    pub fn spawn(client: Arc<LightClient>, runtime: &Handle, events: AppEventSender) -> Self {
        let handle = runtime.spawn(async move {
            let result = client.fetch_lights().await;
            // Receiver gone means the UI already exited
            let _ = events.send(AppEvent::LightsFetched(result));
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the request if it is still in flight.
    pub fn abort(self) {
        if !self.is_finished() {
            tracing::debug!("Aborting pending light fetch");
            self.handle.abort();
        }
    }
}
