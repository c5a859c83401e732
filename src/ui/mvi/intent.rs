/// Marker trait for user actions fed to a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
