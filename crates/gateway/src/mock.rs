//! Scripted [`GameService`] for engine and dispatcher tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use protocol::{Action, Snapshot};

use crate::error::{GatewayError, Result};
use crate::service::GameService;

/// In-memory service that replays queued results in order.
///
/// Both `load_game` and `perform` draw from the same queue; performed
/// actions are journaled so tests can assert what actually went out.
#[derive(Clone, Default)]
pub struct MockGameService {
    replies: Arc<Mutex<VecDeque<Result<Snapshot>>>>,
    journal: Arc<Mutex<Vec<Action>>>,
}

impl MockGameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_snapshot(&self, snapshot: Snapshot) {
        self.replies.lock().unwrap().push_back(Ok(snapshot));
    }

    pub fn push_error(&self, error: GatewayError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Actions performed so far, in dispatch order.
    pub fn journal(&self) -> Vec<Action> {
        self.journal.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Result<Snapshot> {
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(GatewayError::Rejected {
                message: "mock service has no scripted reply".to_owned(),
            })
        })
    }
}

#[async_trait]
impl GameService for MockGameService {
    async fn load_game(&self) -> Result<Snapshot> {
        self.next_reply()
    }

    async fn perform(&self, action: &Action) -> Result<Snapshot> {
        self.journal.lock().unwrap().push(action.clone());
        self.next_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_and_journals_actions() {
        let mock = MockGameService::new();
        mock.push_error(GatewayError::Unauthorized);

        let err = mock.perform(&Action::Search).await.unwrap_err();
        assert!(matches!(err, GatewayError::Unauthorized));
        assert_eq!(mock.journal(), vec![Action::Search]);
    }

    #[tokio::test]
    async fn exhausted_queue_reports_a_visible_rejection() {
        let mock = MockGameService::new();
        let err = mock.load_game().await.unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { .. }));
    }
}
