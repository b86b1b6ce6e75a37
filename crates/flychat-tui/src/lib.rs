//! flychat-tui: Terminal chat widget
//!
//! This crate provides the TUI layer for flychat:
//! - A root container with a heading and the chat widget
//! - The chat widget (history, draft input, send button)
//! - The event loop that posts messages on background tasks

mod app;
mod chat;
mod event;
#[cfg(test)]
pub mod test_utils;
mod ui;

pub use app::App;
pub use chat::{ChatState, ChatWidget};
pub use event::{Action, Event, EventHandler};
pub use flychat_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flychat_engine::{ChatBackend, ClientConfig};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;
use ui::RootView;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(
    config: &ClientConfig,
    backend: Arc<dyn ChatBackend>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_term)?;

    let mut app = App::new(config);
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events, &backend).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    backend: &Arc<dyn ChatBackend>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sends: Vec<JoinHandle<()>> = Vec::new();

    loop {
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        app.resize(screen);

        terminal.draw(|frame| {
            let area = frame.area();
            RootView.render(app, area, frame.buffer_mut());
        })?;

        sends.retain(|handle| !handle.is_finished());

        let Some(event) = events.next().await else {
            break;
        };

        let outgoing = match event {
            Event::Key(key) => app.handle_action(event::key_to_action(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.handle_action(Action::ScrollUp),
                MouseEventKind::ScrollDown => app.handle_action(Action::ScrollDown),
                MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(screen, mouse.column, mouse.row)
                }
                _ => None,
            },
            Event::Resize(width, height) => {
                app.resize(Rect::new(0, 0, width, height));
                None
            }
            Event::Reply { message, result } => {
                app.apply_reply(message, result);
                None
            }
        };

        if let Some(message) = outgoing {
            sends.push(dispatch_send(Arc::clone(backend), events.sender(), message));
        }

        if app.should_quit {
            // Abort any sends still in flight
            for handle in sends {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Post `message` on a background task and report the outcome as an
/// [`Event::Reply`] when it completes.
pub fn dispatch_send(
    backend: Arc<dyn ChatBackend>,
    events: mpsc::UnboundedSender<Event>,
    message: String,
) -> JoinHandle<()> {
    debug!(len = message.len(), "dispatching send");
    tokio::spawn(async move {
        let result = backend.send(&message).await;
        // The loop may already be gone if the user quit.
        let _ = events.send(Event::Reply { message, result });
    })
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

#[cfg(test)]
mod render_tests {
    use crate::event::Action;
    use crate::test_utils::*;

    #[test]
    fn test_initial_screen() {
        let app = create_test_app();
        let screen = render_app_to_string(&app);

        assert!(screen.starts_with("Fly Your Tech Chatbot"));
        assert!(screen.contains("Messages"));
        assert!(screen.contains("Type a message..."));
        assert!(screen.contains("Send"));
        assert!(!screen.contains("You:"));
    }

    #[test]
    fn test_screen_after_exchange() {
        let mut app = create_test_app();
        for ch in "hello".chars() {
            app.handle_action(Action::Insert(ch));
        }
        let message = app.handle_action(Action::Send).unwrap();
        app.apply_reply(message, Ok("hi there".into()));

        let screen = render_app_to_string(&app);
        assert!(screen.contains("You: hello"));
        assert!(screen.contains("Bot: hi there"));
        assert!(screen.contains("Type a message..."));
    }

    #[test]
    fn test_history_region_has_fixed_height() {
        let mut app = create_test_app();
        let empty = render_app_to_string(&app);
        for i in 0..20 {
            app.apply_reply(format!("q{i}"), Ok(format!("a{i}")));
        }
        let full = render_app_to_string(&app);

        // The input row stays on the same line no matter how long the history is.
        let input_row = |screen: &str| screen.lines().position(|l| l.contains("> █"));
        assert_eq!(input_row(&empty), input_row(&full));
        assert!(full.contains("You: q0"));
        assert!(!full.contains("You: q19"));
    }
}
