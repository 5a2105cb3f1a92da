//! Keyboard-to-command mapping.
//!
//! This module owns the key bindings so the event loop can stay agnostic
//! about concrete keys or `crossterm` event details. Bindings are
//! context-sensitive: a confirmation prompt narrows the map down to
//! yes/no/quit, and an open overlay swaps the panel keys for close.
use crossterm::event::{KeyCode, KeyEvent};

/// Which binding set applies, derived from the open overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputContext {
    /// No overlay: the three standard panels.
    Panels,
    /// Any overlay except a confirmation.
    Overlay,
    /// A confirmation prompt is up.
    Confirm,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
    NextPanel,
    PrevPanel,
    Up,
    Down,
    /// Activate the line under the cursor.
    Activate,
    CycleFilter,
    OpenUpgrades,
    OpenArchive,
    CloseOverlay,
    /// Approve the pending confirmation.
    Confirm,
    /// Decline the pending confirmation.
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into [`UiCommand`]s.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent, context: InputContext) -> UiCommand {
        match context {
            InputContext::Panels => self.handle_panels(key),
            InputContext::Overlay => self.handle_overlay(key),
            InputContext::Confirm => self.handle_confirm(key),
        }
    }

    fn handle_panels(&self, key: KeyEvent) -> UiCommand {
        match key.code {
            KeyCode::Tab => UiCommand::NextPanel,
            KeyCode::BackTab => UiCommand::PrevPanel,
            KeyCode::Up => UiCommand::Up,
            KeyCode::Down => UiCommand::Down,
            KeyCode::Enter => UiCommand::Activate,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => UiCommand::Quit,
                'k' => UiCommand::Up,
                'j' => UiCommand::Down,
                ' ' => UiCommand::Activate,
                'f' => UiCommand::CycleFilter,
                'u' => UiCommand::OpenUpgrades,
                'n' => UiCommand::OpenArchive,
                _ => UiCommand::None,
            },
            _ => UiCommand::None,
        }
    }

    fn handle_overlay(&self, key: KeyEvent) -> UiCommand {
        match key.code {
            KeyCode::Up => UiCommand::Up,
            KeyCode::Down => UiCommand::Down,
            KeyCode::Enter => UiCommand::Activate,
            KeyCode::Esc => UiCommand::CloseOverlay,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => UiCommand::Quit,
                'k' => UiCommand::Up,
                'j' => UiCommand::Down,
                ' ' => UiCommand::Activate,
                'x' => UiCommand::CloseOverlay,
                _ => UiCommand::None,
            },
            _ => UiCommand::None,
        }
    }

    fn handle_confirm(&self, key: KeyEvent) -> UiCommand {
        match key.code {
            KeyCode::Enter => UiCommand::Confirm,
            KeyCode::Esc => UiCommand::Cancel,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'y' => UiCommand::Confirm,
                'n' => UiCommand::Cancel,
                'q' => UiCommand::Quit,
                _ => UiCommand::None,
            },
            _ => UiCommand::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
