//! Terminal front-end for the Grey City client.
//!
//! Everything here is paint and plumbing: widgets are pure functions over
//! the view-models built by `client-core`, the event loop owns the
//! [`client_core::ViewState`] and the per-list cursors, and [`app::TuiApp`]
//! wires the dispatcher task to the terminal lifecycle.
pub mod app;
pub mod event;
pub mod input;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use app::{TuiApp, TuiAppBuilder};
