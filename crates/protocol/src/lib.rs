//! Wire contract between the Grey City server and its clients.
//!
//! One [`Snapshot`] carries the complete authoritative game state per round
//! trip; one [`Action`] carries a single player intent back. Types here are
//! data-only: the serde attributes map them onto the server's camelCase JSON,
//! and the only behavior is instance-key parsing and definition lookup.
pub mod action;
pub mod archive;
pub mod enemy;
pub mod item;
pub mod location;
pub mod player;
pub mod snapshot;

pub use action::{Action, ErrorReply, ReviveMode, UpgradeTrack};
pub use archive::ArchiveEntry;
pub use enemy::{EnemyDefinition, EnemyId};
pub use item::{InstanceKey, ItemDefinition, ItemId, ItemKind};
pub use location::{ConnectedLocation, Coordinates, DangerLevel, LocationDefinition, LocationId};
pub use player::{CombatContext, Equipment, PlayerState, PlayerStatus, UpgradeLevels};
pub use snapshot::{DerivedStats, Snapshot};
