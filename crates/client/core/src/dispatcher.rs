//! The single intent consumer.
//!
//! Renderers never call the gateway. They queue typed [`protocol::Action`]s;
//! this task performs them strictly one at a time and broadcasts the outcome
//! as [`SessionEvent`]s. A failed round trip produces an event and nothing
//! else, so the previous snapshot stays on screen untouched.
use std::sync::Arc;

use gateway::{GameService, GatewayError};
use protocol::{Action, Snapshot};
use tokio::sync::{broadcast, mpsc};

/// Outcome of one server round trip, broadcast to every listener.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// Reply to the opening load.
    Loaded(Box<Snapshot>),

    /// Reply to a dispatched intent.
    Applied(Box<Snapshot>),

    /// The server refused the intent, in its own words.
    Rejected { message: String },

    /// The round trip never completed.
    TransportFailed { message: String },

    /// The session is gone. Only signing in again helps.
    AuthExpired,
}

pub struct Dispatcher {
    service: Arc<dyn GameService>,
    intents: mpsc::Receiver<Action>,
    events: broadcast::Sender<SessionEvent>,
}

impl Dispatcher {
    pub fn new(
        service: Arc<dyn GameService>,
        intents: mpsc::Receiver<Action>,
        events: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            service,
            intents,
            events,
        }
    }

    /// Load the opening snapshot, then drain intents until the queue closes,
    /// the last listener is gone, or the session expires.
    pub async fn run(mut self) {
        let opening = self.service.load_game().await;
        if !self.emit(reply_event(opening, true)) {
            return;
        }

        while let Some(action) = self.intents.recv().await {
            tracing::debug!(kind = action.kind(), "dispatching intent");
            let reply = self.service.perform(&action).await;
            let expired = matches!(reply, Err(GatewayError::Unauthorized));
            if !self.emit(reply_event(reply, false)) || expired {
                return;
            }
        }
    }

    fn emit(&self, event: SessionEvent) -> bool {
        self.events.send(event).is_ok()
    }
}

fn reply_event(reply: gateway::Result<Snapshot>, opening: bool) -> SessionEvent {
    match reply {
        Ok(snapshot) if opening => SessionEvent::Loaded(Box::new(snapshot)),
        Ok(snapshot) => SessionEvent::Applied(Box::new(snapshot)),
        Err(GatewayError::Unauthorized) => SessionEvent::AuthExpired,
        Err(GatewayError::Rejected { message }) => SessionEvent::Rejected { message },
        Err(err) => {
            tracing::error!(error = %err, "server round trip failed");
            SessionEvent::TransportFailed {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gateway::MockGameService;
    use serde_json::json;

    use super::*;

    fn fixture() -> Snapshot {
        serde_json::from_value(json!({
            "playerState": {
                "hp": 100, "maxHp": 100, "level": 1, "exp": 0, "maxExp": 100,
                "status": "normal", "currentLocationId": "shelter"
            },
            "stats": {"attack": 10},
            "locationInfo": {
                "id": "shelter", "name": "Shelter",
                "coordinates": {"x": 0, "y": 0}, "dangerLevel": "safe"
            }
        }))
        .unwrap()
    }

    fn harness(
        mock: &MockGameService,
    ) -> (
        mpsc::Sender<Action>,
        broadcast::Receiver<SessionEvent>,
        tokio::task::JoinHandle<()>,
    ) {
        let (tx_intent, rx_intent) = mpsc::channel(4);
        let (tx_event, rx_event) = broadcast::channel(8);
        let dispatcher = Dispatcher::new(Arc::new(mock.clone()), rx_intent, tx_event);
        let handle = tokio::spawn(dispatcher.run());
        (tx_intent, rx_event, handle)
    }

    #[tokio::test]
    async fn loads_then_applies_in_intent_order() {
        let mock = MockGameService::new();
        mock.push_snapshot(fixture());
        mock.push_snapshot(fixture());

        let (tx_intent, mut rx_event, handle) = harness(&mock);
        assert!(matches!(
            rx_event.recv().await.unwrap(),
            SessionEvent::Loaded(_)
        ));

        tx_intent.send(Action::Search).await.unwrap();
        assert!(matches!(
            rx_event.recv().await.unwrap(),
            SessionEvent::Applied(_)
        ));

        drop(tx_intent);
        handle.await.unwrap();
        assert_eq!(mock.journal(), vec![Action::Search]);
    }

    #[tokio::test]
    async fn rejection_becomes_an_event_not_a_snapshot() {
        let mock = MockGameService::new();
        mock.push_snapshot(fixture());
        mock.push_error(GatewayError::Rejected {
            message: "not enough fragments".to_owned(),
        });

        let (tx_intent, mut rx_event, handle) = harness(&mock);
        rx_event.recv().await.unwrap();

        tx_intent.send(Action::Attack).await.unwrap();
        match rx_event.recv().await.unwrap() {
            SessionEvent::Rejected { message } => assert_eq!(message, "not enough fragments"),
            other => panic!("unexpected event: {other:?}"),
        }

        drop(tx_intent);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn auth_expiry_ends_the_run() {
        let mock = MockGameService::new();
        mock.push_snapshot(fixture());
        mock.push_error(GatewayError::Unauthorized);

        let (tx_intent, mut rx_event, handle) = harness(&mock);
        rx_event.recv().await.unwrap();

        tx_intent.send(Action::Search).await.unwrap();
        assert!(matches!(
            rx_event.recv().await.unwrap(),
            SessionEvent::AuthExpired
        ));

        // the dispatcher stops on its own even with senders still alive
        handle.await.unwrap();
    }
}
