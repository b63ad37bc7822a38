/// Marker trait for user actions and the outcomes of side effects.
pub trait Intent: Send + 'static {}
