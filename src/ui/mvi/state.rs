/// Marker trait for renderable dialog state.
///
/// `Default` lets the host `mem::take` the state while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
