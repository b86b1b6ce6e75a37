//! Layout helpers for the flychat TUI.
//!
//! Both rendering and mouse hit-testing go through these functions, so a
//! click lands on exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Heading line plus one blank line of padding.
pub const HEADING_HEIGHT: u16 = 2;

/// Fixed height of the message history region, borders included.
pub const HISTORY_HEIGHT: u16 = 14;

/// Height of the input row (bordered, one line of text).
pub const INPUT_HEIGHT: u16 = 3;

/// Width of the send button, borders included.
pub const BUTTON_WIDTH: u16 = 10;

/// Split the screen into the heading and the chat widget below it.
pub fn root_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADING_HEIGHT), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Regions of the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatAreas {
    pub history: Rect,
    pub input: Rect,
    pub send_button: Rect,
}

/// Lay out the chat widget: history on top, then input and send button.
pub fn chat_layout(area: Rect) -> ChatAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HISTORY_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(80),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    ChatAreas {
        history: rows[0],
        input: columns[0],
        send_button: columns[2],
    }
}

/// Whether a click at (`column`, `row`) hits the send button on a screen of
/// size `area`.
pub fn send_button_hit(area: Rect, column: u16, row: u16) -> bool {
    let (_, widget) = root_layout(area);
    chat_layout(widget)
        .send_button
        .contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_layout_puts_heading_first() {
        let (heading, widget) = root_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(heading, Rect::new(0, 0, 80, HEADING_HEIGHT));
        assert_eq!(widget.y, HEADING_HEIGHT);
        assert_eq!(widget.height, 24 - HEADING_HEIGHT);
    }

    #[test]
    fn test_chat_layout_fixed_history_height() {
        let areas = chat_layout(Rect::new(0, 2, 80, 22));
        assert_eq!(areas.history.height, HISTORY_HEIGHT);
        assert_eq!(areas.input.y, 2 + HISTORY_HEIGHT);
        assert_eq!(areas.input.height, INPUT_HEIGHT);
        assert_eq!(areas.input.width, 64);
        assert_eq!(areas.send_button.width, BUTTON_WIDTH);
        assert!(areas.send_button.x > areas.input.x + areas.input.width - 1);
    }

    #[test]
    fn test_send_button_hit() {
        let area = Rect::new(0, 0, 80, 24);
        let button = chat_layout(root_layout(area).1).send_button;

        assert!(send_button_hit(area, button.x + 1, button.y + 1));
        assert!(!send_button_hit(area, 0, 0));
        assert!(!send_button_hit(area, button.x, button.y + INPUT_HEIGHT));
    }
}
