//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::content::StudyContent;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key, handle_mouse};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    content: StudyContent,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over the embedded study content.
    pub fn new(content: StudyContent) -> Self {
        Self {
            content,
            state: AppState::new(),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);

        if let Ok(size) = terminal.size() {
            self.state.terminal_width = size.width;
        }

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.content, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    // Nothing to refresh beyond the header clock.
                }
                Ok(Event::Key(key)) => {
                    let action = handle_key(&mut self.state, &self.content, key);
                    if action == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    let action = handle_mouse(&mut self.state, &self.content, mouse);
                    if action == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Resize(width)) => {
                    if self.state.terminal_width != width {
                        debug!(width, "terminal resized");
                        self.state.terminal_width = width;
                    }
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }
}
