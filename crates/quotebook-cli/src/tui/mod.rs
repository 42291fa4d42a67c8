//! Quotebook TUI
//!
//! Terminal user interface for browsing quotes.
//!
//! ## Layout
//!
//! Three-pane layout:
//! - Left: Authors (Enter selects one as a filter)
//! - Middle: Categories (Enter selects one as a filter)
//! - Right: The current quote, or the favorites list
//!
//! ## Navigation
//!
//! - j/k or ↑/↓: Move selection up/down
//! - h/l or ←/→: Switch focus between panes
//! - Tab: Cycle through panes
//! - Enter: Toggle author/category filter, or pick a matching quote
//! - q: Quit
//!
//! ## Commands
//!
//! - r: Random quote
//! - f: Random quote matching the filters
//! - /: Edit keyword filter
//! - x: Clear filters
//! - s: Add the displayed quote to favorites
//! - v: Toggle favorites view

mod app;
mod ui;

use std::io::stdout;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{debug, info};

use quotebook_core::{Config, QuoteStore};

use app::{App, InputMode};

use crate::logging::init_tui_logging;

/// Run the TUI application
pub fn run(config: &Config, quotes_path: &Path) -> Result<()> {
    // Initialize TUI logging (file-based, only if QUOTEBOOK_LOG is set)
    init_tui_logging(config);

    // Load before touching the terminal so load errors print normally
    let mut store = crate::load_store(quotes_path)?;
    info!("TUI started with {} quotes", store.len());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(&store);

    let result = run_app(&mut terminal, &mut app, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &mut QuoteStore,
) -> Result<()> {
    loop {
        // Check for status message timeout
        app.check_status_timeout();

        terminal.draw(|frame| ui::draw(frame, app, store))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // If help is showing, any key dismisses it
            if app.show_help {
                app.show_help = false;
                continue;
            }

            match app.input_mode {
                InputMode::Normal => handle_normal_mode(app, store, key.code, key.modifiers),
                InputMode::Keyword => handle_keyword_mode(app, key.code, key.modifiers),
            }
        }

        if app.should_quit {
            debug!("Quitting with {} favorite(s)", store.favorites().len());
            break;
        }
    }

    Ok(())
}

/// Handle key events in normal mode
fn handle_normal_mode(
    app: &mut App,
    store: &mut QuoteStore,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    // Clear pending 'g' if timeout expired (500ms)
    if let Some(time) = app.pending_g {
        if time.elapsed() > Duration::from_millis(500) {
            app.pending_g = None;
        }
    }

    match code {
        // Quit
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.prev_pane(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.next_pane(),

        // Enter: select/activate
        KeyCode::Enter => app.handle_enter(store),

        // Quote actions
        KeyCode::Char('r') => app.show_random(store),
        KeyCode::Char('f') => app.show_filtered(store),
        KeyCode::Char('s') => app.add_current_to_favorites(store),
        KeyCode::Char('v') => app.toggle_favorites_view(),
        KeyCode::Char('x') => app.clear_criteria(),
        KeyCode::Char('/') => app.enter_keyword_mode(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Vim navigation: G (go to last)
        KeyCode::Char('G') => {
            app.pending_g = None;
            app.move_to_last();
        }

        // Vim navigation: g (start of gg sequence)
        KeyCode::Char('g') => {
            if app.pending_g.is_some() {
                app.pending_g = None;
                app.move_to_first();
            } else {
                app.pending_g = Some(std::time::Instant::now());
            }
        }

        _ => {
            // Any other key clears pending 'g'
            app.pending_g = None;
        }
    }
}

/// Handle key events in keyword mode
fn handle_keyword_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        // Cancel
        KeyCode::Esc => app.exit_input_mode(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.exit_input_mode(),

        // Confirm
        KeyCode::Enter => app.confirm_keyword(),

        // Text input
        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),

        _ => {}
    }
}
