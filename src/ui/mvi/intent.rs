/// Marker trait for intents.
///
/// Intents are produced by the runtime (fetch results, timers) and handed
/// to a reducer.
pub trait Intent: Send + 'static {}
