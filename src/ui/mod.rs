//! Terminal UI using ratatui
//!
//! Thin layer responsible only for terminal I/O. All console logic
//! is delegated to App via poll(), handle_key() and handle_scroll().

pub mod theme;
pub mod widgets;

use crate::app::App;
use crate::constants::FRAME_DURATION_MS;
use crate::error::{InspectorError, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use widgets::{actions::ActionsWidget, log::LogWidget, prompt::PromptPopup, status::StatusWidget};

/// Map io::Error to InspectorError::Runtime
fn map_io_err(e: io::Error) -> InspectorError {
    InspectorError::Runtime { source: e }
}

/// Run the TUI event loop
pub async fn run(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(map_io_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(map_io_err)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(map_io_err)?;

    let result = event_loop(&mut terminal, app).await;

    // Restore terminal even when the loop failed
    disable_raw_mode().map_err(map_io_err)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(map_io_err)?;
    terminal.show_cursor().map_err(map_io_err)?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up calls settled since the last frame
        app.poll();

        terminal.draw(|f| draw(f, app)).map_err(map_io_err)?;

        if event::poll(Duration::ZERO).map_err(map_io_err)? {
            match event::read().map_err(map_io_err)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.handle_scroll(true),
                    MouseEventKind::ScrollDown => app.handle_scroll(false),
                    _ => {}
                },
                _ => {}
            }
        } else {
            tokio::time::sleep(Duration::from_millis(FRAME_DURATION_MS)).await;
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(5), // Status widget
        Constraint::Min(5),    // Entry list
        Constraint::Length(3), // Actions widget
    ])
    .split(area);

    let state = app.state();

    frame.render_widget(StatusWidget::new(&state), chunks[0]);
    frame.render_widget(LogWidget::new(app.view()), chunks[1]);
    frame.render_widget(ActionsWidget, chunks[2]);

    // Prompt popup (rendered on top)
    if let Some(prompt) = app.prompt() {
        frame.render_widget(PromptPopup::new(prompt), area);
    }
}
