/// Marker trait for UI state values.
///
/// States are replaced, never edited in place, and compare by value so a
/// view can tell whether anything changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
