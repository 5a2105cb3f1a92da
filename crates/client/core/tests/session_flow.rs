//! The full round trip: mock server through dispatcher into view replacement.
mod common;

use std::sync::Arc;

use client_core::{Dispatcher, SessionEvent, UiFrame, ViewState};
use common::SnapshotBuilder;
use gateway::{GatewayError, MockGameService};
use protocol::Action;
use tokio::sync::{broadcast, mpsc};

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
async fn every_reply_replaces_the_whole_view() {
    let mock = MockGameService::new();
    mock.push_snapshot(
        SnapshotBuilder::new()
            .player(|player| player.logs = vec!["You wake up in the shelter.".to_owned()])
            .build(),
    );
    mock.push_snapshot(
        SnapshotBuilder::new()
            .player(|player| {
                player.hp = 80;
                player.logs = vec!["You rummage through the shelves.".to_owned()];
            })
            .build(),
    );
    mock.push_snapshot(
        SnapshotBuilder::new()
            .player(|player| {
                player.hp = 64;
                player.logs = vec!["Something scurries away.".to_owned()];
            })
            .build(),
    );

    let (tx_intent, mut rx_event, handle) = harness(&mock);

    let mut view = match rx_event.recv().await.unwrap() {
        SessionEvent::Loaded(snapshot) => ViewState::new(*snapshot),
        other => panic!("unexpected event: {other:?}"),
    };
    assert_eq!(UiFrame::build(&view).hud.hp, 100);

    for action in [Action::Search, Action::Search] {
        tx_intent.send(action).await.unwrap();
        match rx_event.recv().await.unwrap() {
            SessionEvent::Applied(snapshot) => view.replace(*snapshot),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    let frame = UiFrame::build(&view);
    assert_eq!(frame.hud.hp, 64);

    // the log is the server's verbatim, not an accumulation of old lines
    assert_eq!(frame.hud.log_lines, vec!["Something scurries away.".to_owned()]);

    drop(tx_intent);
    handle.await.unwrap();
    assert_eq!(mock.journal(), vec![Action::Search, Action::Search]);
}

#[tokio::test]
async fn a_refused_intent_leaves_the_last_snapshot_standing() {
    let mock = MockGameService::new();
    mock.push_snapshot(
        SnapshotBuilder::new()
            .player(|player| player.heart_fragments = 12)
            .build(),
    );
    mock.push_error(GatewayError::Rejected {
        message: "the path is blocked".to_owned(),
    });

    let (tx_intent, mut rx_event, handle) = harness(&mock);
    let view = match rx_event.recv().await.unwrap() {
        SessionEvent::Loaded(snapshot) => ViewState::new(*snapshot),
        other => panic!("unexpected event: {other:?}"),
    };
    let before = UiFrame::build(&view);

    tx_intent.send(Action::Move("vault".to_owned())).await.unwrap();
    match rx_event.recv().await.unwrap() {
        SessionEvent::Rejected { message } => assert_eq!(message, "the path is blocked"),
        other => panic!("unexpected event: {other:?}"),
    }

    // nothing arrived to replace the snapshot, so the frame cannot change
    assert_eq!(UiFrame::build(&view), before);
    assert_eq!(before.hud.heart_fragments, 12);

    drop(tx_intent);
    handle.await.unwrap();
    assert_eq!(mock.journal(), vec![Action::Move("vault".to_owned())]);
}

#[tokio::test]
async fn transport_failure_names_the_status_and_keeps_the_view() {
    let mock = MockGameService::new();
    mock.push_snapshot(SnapshotBuilder::new().build());
    mock.push_error(GatewayError::Http { status: 502 });

    let (tx_intent, mut rx_event, handle) = harness(&mock);
    let view = match rx_event.recv().await.unwrap() {
        SessionEvent::Loaded(snapshot) => ViewState::new(*snapshot),
        other => panic!("unexpected event: {other:?}"),
    };

    tx_intent.send(Action::Search).await.unwrap();
    match rx_event.recv().await.unwrap() {
        SessionEvent::TransportFailed { message } => assert!(message.contains("502")),
        other => panic!("unexpected event: {other:?}"),
    }

    assert_eq!(UiFrame::build(&view).hud.hp, 100);

    drop(tx_intent);
    handle.await.unwrap();
}
