//! Widget-local state: the conversation plus cursor and scroll position.

use flychat_engine::{ChatError, Conversation, MessagePair};
use tracing::{debug, warn};

use super::widget::history_lines;

/// State owned by the chat widget for its lifetime.
///
/// Every edit computes the new draft text and hands it to
/// [`Conversation::update_draft`]; the cursor is a character index into
/// that draft.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    conversation: Conversation,
    cursor: usize,
    scroll: usize,
    /// Inner size of the history region as last laid out.
    viewport: (u16, u16),
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[MessagePair] {
        self.conversation.history()
    }

    pub fn draft(&self) -> &str {
        self.conversation.draft()
    }

    /// Cursor position as a character index into the draft.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible history line.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Replace the whole draft and put the cursor at its end.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.conversation.update_draft(text);
        self.cursor = self.draft_len();
    }

    fn draft_len(&self) -> usize {
        self.draft().chars().count()
    }

    /// Apply an edit to a copy of the draft and store the result.
    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        let mut text = self.draft().to_string();
        f(&mut text);
        self.conversation.update_draft(text);
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let at = byte_offset(self.draft(), self.cursor);
        self.edit(|text| text.insert(at, ch));
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = byte_offset(self.draft(), self.cursor);
            self.edit(|text| {
                text.remove(at);
            });
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.draft_len() {
            let at = byte_offset(self.draft(), self.cursor);
            self.edit(|text| {
                text.remove(at);
            });
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.draft_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.draft_len();
    }

    /// Record the inner size of the history region.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Largest useful scroll offset for the current viewport.
    pub fn max_scroll(&self) -> usize {
        let (width, height) = self.viewport;
        history_lines(self.history(), width)
            .len()
            .saturating_sub(usize::from(height))
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    /// Scroll by one viewport height.
    pub fn page_up(&mut self) {
        self.scroll_up(usize::from(self.viewport.1.max(1)));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(usize::from(self.viewport.1.max(1)));
    }

    /// The text a send would carry, or `None` for a blank draft.
    pub fn outgoing(&self) -> Option<String> {
        self.conversation.outgoing()
    }

    /// Apply the outcome of a send.
    ///
    /// A reply appends the pair and clears the draft. A failure is logged
    /// and otherwise ignored: history and draft stay as they are.
    pub fn apply_reply(&mut self, message: String, result: Result<String, ChatError>) {
        match result {
            Ok(reply) => {
                debug!(history = self.history().len() + 1, "recording reply");
                self.conversation.record_reply(message, reply);
                self.cursor = 0;
            }
            Err(e) => {
                warn!("chat send failed: {e}");
            }
        }
    }
}

/// Byte offset of the `index`-th character, or the end of `text`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices().nth(index).map_or(text.len(), |(i, _)| i)
}
