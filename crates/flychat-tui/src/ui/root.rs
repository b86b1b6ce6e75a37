//! Root container: a heading with the chat widget underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::App;
use crate::chat::ChatWidget;
use crate::ui::layout::root_layout;
use crate::ui::theme::Styles;

/// Draws the whole screen for an [`App`].
pub struct RootView;

impl RootView {
    /// Render the heading and the chat widget.
    pub fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (heading, widget) = root_layout(area);

        Paragraph::new(Line::from(Span::styled(app.title.as_str(), Styles::title())))
            .style(Styles::default())
            .render(heading, buf);

        ChatWidget::new(&app.chat).render(widget, buf);
    }
}
