//! Terminal front end for the analyzer.
//!
//! State lives in [`form`] and changes only through its reducer. [`app`]
//! owns that state plus the network client, [`render`] draws it, and
//! [`runtime`] ties both to a real terminal.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
