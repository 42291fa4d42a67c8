//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use quotebook_core::QuoteStore;

use super::app::{ActivePane, App, InputMode, Shown, View};
use crate::output::NO_QUOTES;

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App, store: &QuoteStore) {
    // Create vertical layout for status bar at the bottom
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    // Split the main area into three panes
    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(55),
        ])
        .split(outer_chunks[0]);

    draw_picker_pane(
        frame,
        " Authors ",
        &app.authors,
        app.author_index,
        app.selected_author.as_deref(),
        app.active_pane == ActivePane::Authors,
        pane_chunks[0],
    );
    draw_picker_pane(
        frame,
        " Categories ",
        &app.categories,
        app.category_index,
        app.selected_category.as_deref(),
        app.active_pane == ActivePane::Categories,
        pane_chunks[1],
    );
    draw_quote_pane(frame, app, store, pane_chunks[2]);

    match app.input_mode {
        InputMode::Normal => draw_status_bar(frame, app, outer_chunks[1]),
        InputMode::Keyword => draw_keyword_input(frame, app, store, outer_chunks[1]),
    }

    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn pane_styles(is_active: bool) -> (Style, Style) {
    let border_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let highlight_style = if is_active {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    (border_style, highlight_style)
}

/// Draw an author or category list; the selected entry is marked
fn draw_picker_pane(
    frame: &mut Frame,
    title: &str,
    names: &[String],
    index: usize,
    selected: Option<&str>,
    is_active: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            if selected == Some(name.as_str()) {
                ListItem::new(format!("✓ {}", name))
                    .style(Style::default().fg(Color::Magenta))
            } else {
                ListItem::new(format!("  {}", name))
            }
        })
        .collect();

    let (border_style, highlight_style) = pane_styles(is_active);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style);

    let mut state = ListState::default();
    if !names.is_empty() {
        state.select(Some(index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the quote pane (right): current quote or favorites
fn draw_quote_pane(frame: &mut Frame, app: &App, store: &QuoteStore, area: Rect) {
    let (border_style, _) = pane_styles(app.active_pane == ActivePane::Quote);
    let dim = Style::default().add_modifier(Modifier::DIM);

    let title = match app.view {
        View::Quote => " Quote ".to_string(),
        View::Favorites => format!(" Favorites ({}) ", store.favorites().len()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = vec![criteria_line(app), Line::from("")];

    match app.view {
        View::Quote => match &app.shown {
            Shown::Quote(quote) => {
                for text_line in quote.display_block().lines() {
                    lines.push(Line::from(text_line.to_string()));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("[{}]", quote.category),
                    dim,
                )));
            }
            Shown::NoResults => {
                lines.push(Line::from(NO_QUOTES));
            }
            Shown::Nothing => {
                lines.push(Line::from(Span::styled(
                    "Press r for a random quote, f for one matching the filters",
                    dim,
                )));
            }
        },
        View::Favorites => {
            let favorites = store.favorites();
            if favorites.is_empty() {
                lines.push(Line::from("No favorites yet."));
            }
            for quote in favorites {
                for text_line in quote.display_compact().lines() {
                    lines.push(Line::from(text_line.to_string()));
                }
                lines.push(Line::from(""));
            }
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });

    // Scroll counts wrapped rows; stop once the last row reaches the bottom
    let inner = block.inner(area);
    let rows = paragraph.line_count(inner.width);
    let max_scroll =
        u16::try_from(rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX);

    let paragraph = paragraph
        .block(block)
        .scroll((app.quote_scroll.min(max_scroll), 0));

    frame.render_widget(paragraph, area);
}

/// Summary of the active criteria
fn criteria_line(app: &App) -> Line<'static> {
    let query = app.query();
    if query.is_empty() {
        return Line::from(Span::styled(
            "Filters: none",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let mut parts = Vec::new();
    if let Some(author) = &query.author {
        parts.push(format!("author={}", author));
    }
    if let Some(category) = &query.category {
        parts.push(format!("category={}", category));
    }
    if let Some(keyword) = &query.keyword {
        parts.push(format!("keyword={}", keyword));
    }

    Line::from(Span::styled(
        format!("Filters: {}", parts.join("  ")),
        Style::default().fg(Color::Cyan),
    ))
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        "r:random  f:filter  s:favorite  v:favorites  /:keyword  x:clear  ?:help  q:quit"
            .to_string()
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Draw keyword input at the bottom
fn draw_keyword_input(frame: &mut Frame, app: &App, store: &QuoteStore, area: Rect) {
    let prefix = "/";
    let matches = store.query(&app.pending_query()).len();

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Cyan)),
        Span::raw(app.keyword_input.as_str()),
        Span::styled(
            format!("  ({} matches)", matches),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);

    // Position cursor by display width, not char count
    let before_cursor: String = app.keyword_input.chars().take(app.keyword_cursor).collect();
    let offset = Span::raw(prefix).width() + Span::raw(before_cursor).width();
    let cursor_x = area.x.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
    frame.set_cursor_position((cursor_x, area.y));
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Calculate centered popup area
    let popup_width = 50.min(area.width.saturating_sub(4));
    let popup_height = 22.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the popup area
    frame.render_widget(ratatui::widgets::Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  j/k, ↑/↓    Move up/down"),
        Line::from("  gg          Jump to first item"),
        Line::from("  G           Jump to last item"),
        Line::from("  h/l, ←/→    Switch panes"),
        Line::from("  Tab         Cycle panes"),
        Line::from("  Enter       Select author/category, or pick"),
        Line::from(""),
        Line::from("Quotes:"),
        Line::from("  r           Random quote"),
        Line::from("  f           Random quote matching filters"),
        Line::from("  /           Set keyword filter"),
        Line::from("  x           Clear filters"),
        Line::from("  s           Add quote to favorites"),
        Line::from("  v           Show/hide favorites"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, popup_area);
}
