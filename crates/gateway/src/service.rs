use async_trait::async_trait;
use protocol::{Action, Snapshot};

use crate::error::Result;

/// Round-trip interface to the game server.
///
/// Both calls return a complete replacement snapshot. Implementations do not
/// retry; the engine decides what a failure means for the session.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Fetch the opening snapshot for the signed-in session.
    async fn load_game(&self) -> Result<Snapshot>;

    /// Submit one player intent and return the state it produced.
    async fn perform(&self, action: &Action) -> Result<Snapshot>;
}
