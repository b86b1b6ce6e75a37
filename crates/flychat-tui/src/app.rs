//! Application state and update logic for the flychat TUI.

use crate::chat::ChatState;
use crate::event::Action;
use crate::ui::layout::{chat_layout, root_layout, send_button_hit};
use flychat_engine::{ChatError, ClientConfig};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};

/// Lines moved per scroll key or wheel notch.
const SCROLL_STEP: usize = 1;

/// Application state: the root container and the one chat widget it holds.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Heading shown above the widget.
    pub title: String,

    /// Chat widget state.
    pub chat: ChatState,
}

impl App {
    /// Create a new app from client configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            should_quit: false,
            title: config.title.clone(),
            chat: ChatState::new(),
        }
    }

    /// Handle an action.
    ///
    /// Returns the message to post when the action triggers a send with a
    /// non-blank draft. The draft itself is only cleared once the reply
    /// arrives, so sending again before then posts the same text again.
    pub fn handle_action(&mut self, action: Action) -> Option<String> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Send => return self.chat.outgoing(),
            Action::Insert(ch) => self.chat.insert(ch),
            Action::Backspace => self.chat.backspace(),
            Action::Delete => self.chat.delete(),
            Action::Left => self.chat.move_left(),
            Action::Right => self.chat.move_right(),
            Action::Home => self.chat.move_home(),
            Action::End => self.chat.move_end(),
            Action::ScrollUp => self.chat.scroll_up(SCROLL_STEP),
            Action::ScrollDown => self.chat.scroll_down(SCROLL_STEP),
            Action::PageUp => self.chat.page_up(),
            Action::PageDown => self.chat.page_down(),
            Action::None => {}
        }
        None
    }

    /// Handle a left click; clicking the send button is the same as Enter.
    pub fn handle_click(&mut self, screen: Rect, column: u16, row: u16) -> Option<String> {
        if send_button_hit(screen, column, row) {
            self.handle_action(Action::Send)
        } else {
            None
        }
    }

    /// Apply a finished send to the widget.
    pub fn apply_reply(&mut self, message: String, result: Result<String, ChatError>) {
        self.chat.apply_reply(message, result);
    }

    /// Recompute layout-dependent state for a screen of size `screen`.
    pub fn resize(&mut self, screen: Rect) {
        let (_, widget) = root_layout(screen);
        let history = chat_layout(widget).history;
        let inner = Block::default().borders(Borders::ALL).inner(history);
        self.chat.set_viewport(inner.width, inner.height);
    }

    /// Create an app for tests.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(&ClientConfig::default())
    }
}
