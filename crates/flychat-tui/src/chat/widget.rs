//! Chat widget.
//!
//! Message history in a fixed-height scrolling box, with the draft input and
//! a send button underneath.

use flychat_engine::MessagePair;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use super::state::ChatState;
use crate::ui::layout::chat_layout;
use crate::ui::theme::Styles;

const PROMPT: &str = "> ";
const CURSOR: &str = "█";
const PLACEHOLDER: &str = "Type a message...";

/// Chat widget rendering a [`ChatState`].
///
/// ```text
/// ┌ Messages ───────────────────────────────┐
/// │You: hello                               │
/// │Bot: hi there                            │
/// │                                         │
/// └─────────────────────────────────────────┘
/// ┌────────────────────────────────┐ ┌────────┐
/// │> █                             │ │  Send  │
/// └────────────────────────────────┘ └────────┘
/// ```
pub struct ChatWidget<'a> {
    state: &'a ChatState,
}

impl<'a> ChatWidget<'a> {
    pub fn new(state: &'a ChatState) -> Self {
        Self { state }
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = block.inner(area);

        let lines = history_lines(self.state.history(), inner.width);
        let max_scroll = lines.len().saturating_sub(usize::from(inner.height));
        let scroll = u16::try_from(self.state.scroll().min(max_scroll)).unwrap_or(u16::MAX);

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::default());
        let inner = block.inner(area);

        Paragraph::new(vec![self.input_line(usize::from(inner.width))])
            .block(block)
            .render(area, buf);
    }

    /// Prompt, draft and cursor, scrolled horizontally so the cursor stays
    /// visible.
    fn input_line(&self, width: usize) -> Line<'static> {
        let draft = self.state.draft();
        let mut spans = vec![Span::styled(PROMPT, Styles::cursor())];

        if draft.is_empty() {
            spans.push(Span::styled(CURSOR, Styles::cursor()));
            spans.push(Span::styled(PLACEHOLDER, Styles::dim()));
            return Line::from(spans);
        }

        let chars: Vec<char> = draft.chars().collect();
        let cursor = self.state.cursor().min(chars.len());
        let room = width.saturating_sub(PROMPT.len() + 1);

        let mut start = 0;
        let mut before_width: usize = chars[..cursor].iter().map(|c| c.width().unwrap_or(0)).sum();
        while before_width > room && start < cursor {
            before_width -= chars[start].width().unwrap_or(0);
            start += 1;
        }

        let before: String = chars[start..cursor].iter().collect();
        let after: String = chars[cursor..].iter().collect();
        spans.push(Span::raw(before));
        spans.push(Span::styled(CURSOR, Styles::cursor()));
        spans.push(Span::raw(after));
        Line::from(spans)
    }

    fn render_send_button(area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::default());

        Paragraph::new(Line::from(Span::styled("Send", Styles::button())))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for ChatWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = chat_layout(area);
        self.render_history(areas.history, buf);
        self.render_input(areas.input, buf);
        Self::render_send_button(areas.send_button, buf);
    }
}

/// History as display lines wrapped to `width`: a `You:` line, a `Bot:` line
/// and a blank separator per pair.
pub fn history_lines(history: &[MessagePair], width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::with_capacity(history.len() * 3);
    for pair in history {
        push_labelled(&mut lines, "You:", Styles::user_label(), &pair.user, width);
        push_labelled(&mut lines, "Bot:", Styles::bot_label(), &pair.bot, width);
        lines.push(Line::default());
    }
    lines
}

fn push_labelled(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    style: Style,
    text: &str,
    width: usize,
) {
    let full = format!("{label} {text}");
    for (i, chunk) in textwrap::wrap(&full, width).into_iter().enumerate() {
        match chunk.strip_prefix(label) {
            Some(rest) if i == 0 => {
                lines.push(Line::from(vec![
                    Span::styled(label, style),
                    Span::raw(rest.to_string()),
                ]));
            }
            _ => lines.push(Line::from(chunk.to_string())),
        }
    }
}
