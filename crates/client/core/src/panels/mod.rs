//! Pure view-model builders, one module per panel.
//!
//! Every builder is a function of `&ViewState` alone; painting is someone
//! else's job. Building the same state twice yields equal models.
pub mod actions;
pub mod archive;
pub mod hud;
pub mod inventory;
pub mod item_detail;
pub mod location_detail;
pub mod map;
pub mod upgrades;
