//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` is the freshly mounted state; `PartialEq` lets tests and
/// callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
