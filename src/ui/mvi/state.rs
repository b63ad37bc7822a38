/// Marker trait for renderable UI state.
///
/// States are cloned into new states, never mutated behind the reducer's
/// back, and compared to skip redundant redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
