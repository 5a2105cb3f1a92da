//! Event loop over session events and keyboard input.
//!
//! This task owns the [`ViewState`] and all ephemeral UI state. Session
//! events replace the snapshot; key presses either move cursors, toggle
//! UI-only state, or queue exactly one intent. While an intent is in
//! flight further dispatches are refused locally, so the dispatcher queue
//! never holds more than one order at a time.
use anyhow::{Result, bail};
use client_core::panels::actions::ButtonCommand;
use client_core::{NoticeLog, OverlayModel, SessionEvent, UiFrame, ViewState, view_state::Overlay};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use protocol::Action;
use tokio::{
    sync::{broadcast, broadcast::error::RecvError, mpsc},
    time::{self, Duration},
};

use crate::input::{InputContext, InputHandler, UiCommand};
use crate::state::{self, AppState, PanelFocus};
use crate::terminal::Tui;
use crate::widgets::{self, RenderContext};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    events: broadcast::Receiver<SessionEvent>,
    intents: mpsc::Sender<Action>,
    input: InputHandler,
    app: AppState,
    notices: NoticeLog,

    /// `None` until the opening snapshot lands; the connecting screen is
    /// shown meanwhile.
    view: Option<ViewState>,
}

impl EventLoop {
    pub fn new(
        events: broadcast::Receiver<SessionEvent>,
        intents: mpsc::Sender<Action>,
        notices: NoticeLog,
    ) -> Self {
        Self {
            events,
            intents,
            input: InputHandler::new(),
            app: AppState::new(),
            notices,
            view: None,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        // Initial render: the connecting screen until the load completes.
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.events.recv() => {
                    if self.handle_session_event(result)? {
                        break;
                    }
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply one session event. Returns true when the loop should exit.
    fn handle_session_event(
        &mut self,
        result: Result<SessionEvent, RecvError>,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                // Whatever came back, the round trip is over.
                self.app.pending = false;

                match event {
                    SessionEvent::Loaded(snapshot) => {
                        self.view = Some(ViewState::new(*snapshot));
                        self.notices.info("uplink established");
                    }
                    SessionEvent::Applied(snapshot) => match self.view.as_mut() {
                        Some(view) => view.replace(*snapshot),
                        None => self.view = Some(ViewState::new(*snapshot)),
                    },
                    SessionEvent::Rejected { message } => {
                        self.notices.warn(message);
                    }
                    SessionEvent::TransportFailed { message } => {
                        self.notices.error(message);
                    }
                    SessionEvent::AuthExpired => {
                        bail!("session expired: sign in from the browser and relaunch");
                    }
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("session event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                // The missed event may have been the in-flight reply.
                tracing::warn!(skipped, "dropped stale session events");
                self.app.pending = false;
                Ok(false)
            }
        }
    }

    /// Poll for keyboard input. Returns true when the loop should exit.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let command = self.input.handle_key(key, self.input_context());
        if command == UiCommand::None {
            return Ok(false);
        }

        let exit = self.apply_command(command).await?;
        if !exit {
            self.render(terminal)?;
        }
        Ok(exit)
    }

    async fn apply_command(&mut self, command: UiCommand) -> Result<bool> {
        if self.view.is_none() {
            // Before the opening snapshot only quitting means anything.
            return Ok(command == UiCommand::Quit);
        }

        match command {
            UiCommand::Quit => return Ok(true),
            UiCommand::NextPanel => self.app.focus = self.app.focus.next(),
            UiCommand::PrevPanel => self.app.focus = self.app.focus.prev(),
            UiCommand::Up => self.move_cursor(-1),
            UiCommand::Down => self.move_cursor(1),
            UiCommand::Activate => return self.activate().await,
            UiCommand::CycleFilter => {
                if let Some(view) = self.view.as_mut() {
                    view.filter = view.filter.next();
                }
            }
            UiCommand::OpenUpgrades => {
                if let Some(view) = self.view.as_mut() {
                    view.open_upgrade_store();
                    self.app.overlay_cursor = 0;
                }
            }
            UiCommand::OpenArchive => {
                if let Some(view) = self.view.as_mut() {
                    view.open_archive();
                }
            }
            UiCommand::CloseOverlay | UiCommand::Cancel => {
                if let Some(view) = self.view.as_mut() {
                    view.close_overlay();
                }
            }
            UiCommand::Confirm => {
                let action = self.view.as_mut().and_then(ViewState::take_confirmed);
                if let Some(action) = action {
                    return self.send_intent(action).await;
                }
            }
            UiCommand::None => {}
        }
        Ok(false)
    }

    /// Move the cursor of the open overlay, or of the focused panel.
    fn move_cursor(&mut self, delta: isize) {
        let Some(frame) = self.current_frame() else {
            return;
        };

        if frame.overlay.is_some() {
            let len = overlay_len(&frame);
            if len > 0 {
                self.app.overlay_cursor = state::step(self.app.overlay_cursor, delta, len);
            }
            return;
        }

        match self.app.focus {
            PanelFocus::Actions => {
                self.app.action_cursor =
                    state::step(self.app.action_cursor, delta, frame.actions.buttons.len());
            }
            PanelFocus::Map => {
                self.app.map_cursor =
                    state::step(self.app.map_cursor, delta, frame.map.nodes.len());
            }
            PanelFocus::Inventory => {
                self.app.inventory_cursor = state::step(
                    self.app.inventory_cursor,
                    delta,
                    frame.inventory.entries.len(),
                );
            }
        }
    }

    /// Activate the line under the cursor.
    async fn activate(&mut self) -> Result<bool> {
        let Some(frame) = self.current_frame() else {
            return Ok(false);
        };

        if let Some(overlay) = &frame.overlay {
            return self.activate_overlay(overlay).await;
        }

        match self.app.focus {
            PanelFocus::Actions => {
                let Some(button) = frame.actions.buttons.get(self.app.action_cursor) else {
                    return Ok(false);
                };
                if !button.enabled {
                    if let Some(hint) = &button.hint {
                        self.notices.warn(hint.clone());
                    }
                    return Ok(false);
                }
                self.run_button(button.command.clone()).await
            }
            PanelFocus::Inventory => {
                let Some(entry) = frame.inventory.entries.get(self.app.inventory_cursor) else {
                    return Ok(false);
                };
                let key = entry.key.clone();
                if let Some(view) = self.view.as_mut()
                    && view.open_item_detail(key)
                {
                    self.app.overlay_cursor = 0;
                }
                Ok(false)
            }
            PanelFocus::Map => {
                let Some(node) = frame.map.nodes.get(self.app.map_cursor) else {
                    return Ok(false);
                };
                let id = node.id.clone();
                if let Some(view) = self.view.as_mut() {
                    view.open_location_detail(id);
                }
                Ok(false)
            }
        }
    }

    async fn activate_overlay(&mut self, overlay: &OverlayModel) -> Result<bool> {
        match overlay {
            OverlayModel::ItemDetail(model) => {
                let Some(button) = model.buttons.get(self.app.overlay_cursor) else {
                    return Ok(false);
                };
                if !button.enabled {
                    return Ok(false);
                }
                match button.command.clone() {
                    Some(command) => self.run_button(command).await,
                    None => Ok(false),
                }
            }
            OverlayModel::UpgradeStore(model) => {
                let Some(track) = model.tracks.get(self.app.overlay_cursor) else {
                    return Ok(false);
                };
                if !track.affordable {
                    self.notices.info(format!(
                        "{} needs {} fragments; carrying {}",
                        track.title, track.cost, model.heart_fragments
                    ));
                    return Ok(false);
                }
                self.send_intent(Action::Upgrade(track.track)).await
            }
            _ => Ok(false),
        }
    }

    async fn run_button(&mut self, command: ButtonCommand) -> Result<bool> {
        match command {
            ButtonCommand::Dispatch(action) => self.send_intent(action).await,
            ButtonCommand::Confirm { action, prompt } => {
                if let Some(view) = self.view.as_mut() {
                    view.request_confirm(action, prompt);
                }
                Ok(false)
            }
        }
    }

    /// Queue one intent, unless a round trip is already in flight.
    async fn send_intent(&mut self, action: Action) -> Result<bool> {
        if self.app.pending {
            self.notices.warn("still processing the previous order");
            return Ok(false);
        }

        tracing::debug!(kind = action.kind(), "queueing intent");
        if self.intents.send(action).await.is_err() {
            tracing::error!("intent channel closed");
            return Ok(true);
        }
        self.app.pending = true;
        Ok(false)
    }

    fn input_context(&self) -> InputContext {
        match self.view.as_ref().and_then(ViewState::overlay) {
            Some(Overlay::Confirm(_)) => InputContext::Confirm,
            Some(_) => InputContext::Overlay,
            None => InputContext::Panels,
        }
    }

    fn current_frame(&self) -> Option<UiFrame> {
        self.view.as_ref().map(UiFrame::build)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let frame = self.current_frame();
        if let Some(frame) = &frame {
            self.clamp_cursors(frame);
        }

        let ctx = RenderContext {
            frame: frame.as_ref(),
            notices: &self.notices,
            app: &self.app,
        };
        widgets::render(terminal, &ctx)
    }

    fn clamp_cursors(&mut self, frame: &UiFrame) {
        self.app.action_cursor = state::clamp(self.app.action_cursor, frame.actions.buttons.len());
        self.app.map_cursor = state::clamp(self.app.map_cursor, frame.map.nodes.len());
        self.app.inventory_cursor =
            state::clamp(self.app.inventory_cursor, frame.inventory.entries.len());
        self.app.overlay_cursor = state::clamp(self.app.overlay_cursor, overlay_len(frame));
    }
}

/// Cursor range of the open overlay; zero for the read-only ones.
fn overlay_len(frame: &UiFrame) -> usize {
    match &frame.overlay {
        Some(OverlayModel::ItemDetail(model)) => model.buttons.len(),
        Some(OverlayModel::UpgradeStore(model)) => model.tracks.len(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use protocol::Snapshot;
    use serde_json::json;

    use super::*;

    fn snapshot(status: &str) -> Snapshot {
        serde_json::from_value(json!({
            "playerState": {
                "hp": 90, "maxHp": 100, "level": 2, "exp": 10, "maxExp": 120,
                "status": status, "currentLocationId": "shelter",
                "combatContext": if status == "combat" {
                    json!({"enemyName": "Feral Dog"})
                } else {
                    json!(null)
                }
            },
            "stats": {"attack": 11},
            "locationInfo": {
                "id": "shelter", "name": "Shelter",
                "coordinates": {"x": 0, "y": 0}, "dangerLevel": "safe",
                "searchable": true, "itemChance": 0.5
            }
        }))
        .unwrap()
    }

    fn harness() -> (EventLoop, mpsc::Receiver<Action>) {
        let (_tx_event, rx_event) = broadcast::channel(8);
        let (tx_intent, rx_intent) = mpsc::channel(4);
        let event_loop = EventLoop::new(rx_event, tx_intent, NoticeLog::new(8));
        (event_loop, rx_intent)
    }

    #[tokio::test]
    async fn refuses_a_second_dispatch_while_pending() {
        let (mut event_loop, mut rx_intent) = harness();
        event_loop.view = Some(ViewState::new(snapshot("normal")));

        assert!(!event_loop.send_intent(Action::Search).await.unwrap());
        assert!(event_loop.app.pending);

        assert!(!event_loop.send_intent(Action::Attack).await.unwrap());
        assert_eq!(rx_intent.recv().await.unwrap(), Action::Search);
        assert!(rx_intent.try_recv().is_err());

        let latest = event_loop.notices.recent(1).next().unwrap();
        assert!(latest.text.contains("still processing"));
    }

    #[tokio::test]
    async fn any_session_event_clears_the_pending_flag() {
        let (mut event_loop, _rx_intent) = harness();
        event_loop.view = Some(ViewState::new(snapshot("normal")));
        event_loop.send_intent(Action::Search).await.unwrap();

        let exit = event_loop
            .handle_session_event(Ok(SessionEvent::Rejected {
                message: "not now".to_owned(),
            }))
            .unwrap();

        assert!(!exit);
        assert!(!event_loop.app.pending);
        // the previous view survives a rejection untouched
        assert!(event_loop.view.is_some());
    }

    #[tokio::test]
    async fn activation_dispatches_the_focused_button() {
        let (mut event_loop, mut rx_intent) = harness();
        event_loop.view = Some(ViewState::new(snapshot("combat")));

        assert!(!event_loop.activate().await.unwrap());
        assert_eq!(rx_intent.recv().await.unwrap(), Action::Attack);
    }

    #[tokio::test]
    async fn confirmation_releases_the_held_intent() {
        let (mut event_loop, mut rx_intent) = harness();
        event_loop.view = Some(ViewState::new(snapshot("normal")));
        event_loop
            .view
            .as_mut()
            .unwrap()
            .request_confirm(Action::Search, "really?");

        assert_eq!(event_loop.input_context(), InputContext::Confirm);
        assert!(!event_loop.apply_command(UiCommand::Confirm).await.unwrap());
        assert_eq!(rx_intent.recv().await.unwrap(), Action::Search);
        assert_eq!(event_loop.view.as_ref().unwrap().overlay(), None);
    }

    #[test]
    fn auth_expiry_is_fatal() {
        let (mut event_loop, _rx_intent) = harness();
        assert!(
            event_loop
                .handle_session_event(Ok(SessionEvent::AuthExpired))
                .is_err()
        );
    }

    #[test]
    fn closed_event_stream_exits_cleanly() {
        let (mut event_loop, _rx_intent) = harness();
        assert!(
            event_loop
                .handle_session_event(Err(RecvError::Closed))
                .unwrap()
        );
    }

    #[test]
    fn loaded_snapshot_replaces_the_connecting_screen() {
        let (mut event_loop, _rx_intent) = harness();
        assert!(event_loop.view.is_none());

        let exit = event_loop
            .handle_session_event(Ok(SessionEvent::Loaded(Box::new(snapshot("normal")))))
            .unwrap();

        assert!(!exit);
        assert!(event_loop.view.is_some());
    }
}
