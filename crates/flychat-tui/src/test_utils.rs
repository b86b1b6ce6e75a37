//! Test utilities for flychat-tui rendering tests.
//!
//! Helpers for creating test apps, rendering them to a buffer and turning
//! buffers into strings for assertions.

use crate::app::App;
use crate::ui::RootView;
use ratatui::{buffer::Buffer, layout::Rect};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app laid out for the default test screen size.
pub fn create_test_app() -> App {
    let mut app = App::new_for_test();
    app.resize(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
    app
}

/// Convert a buffer to a string, one line per row with trailing spaces
/// trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the whole app at the default size and return it as a string.
pub fn render_app_to_string(app: &App) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    RootView.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.starts_with("Hello\nWorld"));
        assert!(!result.contains("Hello "));
    }

    #[test]
    fn test_render_app_starts_with_heading() {
        let app = create_test_app();
        let screen = render_app_to_string(&app);
        assert!(screen.starts_with("Fly Your Tech Chatbot"));
    }
}
