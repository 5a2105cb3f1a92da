//! View-state reconciliation engine.
//!
//! Everything visible is derived from the latest [`protocol::Snapshot`]:
//! [`ViewState`] holds that snapshot plus the few UI-only fields that outlive
//! it, [`UiFrame::build`] derives the complete set of panel view-models from
//! it, and [`Dispatcher`] is the single consumer that turns queued intents
//! into server round trips and broadcast [`SessionEvent`]s. No panel mutates
//! state and nothing is diffed; a new snapshot replaces the old one whole.
pub mod config;
pub mod dispatcher;
pub mod frame;
pub mod notices;
pub mod panels;
pub mod rules;
pub mod view_state;

pub use config::EngineConfig;
pub use dispatcher::{Dispatcher, SessionEvent};
pub use frame::{OverlayModel, UiFrame};
pub use notices::{Notice, NoticeLevel, NoticeLog};
pub use view_state::{Overlay, PendingAction, ViewState, MASKED_LABEL};
