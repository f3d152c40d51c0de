//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, submit) or completions of
/// async work (probe answered, upload settled). They must be `Send` so
/// request tasks can hand them back to the UI thread.
pub trait Intent: Send + 'static {}
