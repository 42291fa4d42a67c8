//! Application state and logic

use quotebook_core::{Quote, QuoteQuery, QuoteStore};

use crate::output::NO_QUOTES;

/// Status shown after favoriting the displayed quote
pub const ADDED_TO_FAVORITES: &str = "Added to favorites!";

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Editing the keyword filter (after pressing /)
    Keyword,
}

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Authors,
    Categories,
    Quote,
}

impl ActivePane {
    /// Move to the next pane (wrapping)
    pub fn next(self) -> Self {
        match self {
            ActivePane::Authors => ActivePane::Categories,
            ActivePane::Categories => ActivePane::Quote,
            ActivePane::Quote => ActivePane::Authors,
        }
    }

    /// Move to the previous pane (wrapping)
    pub fn prev(self) -> Self {
        match self {
            ActivePane::Authors => ActivePane::Quote,
            ActivePane::Categories => ActivePane::Authors,
            ActivePane::Quote => ActivePane::Categories,
        }
    }
}

/// What the quote pane is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The current quote (or a placeholder)
    Quote,
    /// The session favorites list
    Favorites,
}

/// Content of the quote view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    /// Nothing picked yet
    Nothing,
    /// A quote, kept by value so favoriting adds exactly this record
    Quote(Quote),
    /// The last filter matched nothing
    NoResults,
}

/// Application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Which pane has focus
    pub active_pane: ActivePane,
    /// What the quote pane shows
    pub view: View,
    /// Distinct authors from the store
    pub authors: Vec<String>,
    /// Distinct categories from the store
    pub categories: Vec<String>,
    /// Highlighted row in the authors pane
    pub author_index: usize,
    /// Highlighted row in the categories pane
    pub category_index: usize,
    /// Author criterion (chosen with Enter)
    pub selected_author: Option<String>,
    /// Category criterion (chosen with Enter)
    pub selected_category: Option<String>,
    /// Keyword criterion
    pub keyword: String,
    /// Keyword input buffer while editing
    pub keyword_input: String,
    /// Cursor position in keyword input (in chars)
    pub keyword_cursor: usize,
    /// Currently displayed quote
    pub shown: Shown,
    /// Scroll offset for the quote pane
    pub quote_scroll: u16,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<std::time::Instant>,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Pending 'g' keypress for gg sequence (with timestamp)
    pub pending_g: Option<std::time::Instant>,
}

impl App {
    /// Create a new app with data from store
    pub fn new(store: &QuoteStore) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            active_pane: ActivePane::Authors,
            view: View::Quote,
            authors: store.authors().to_vec(),
            categories: store.categories().to_vec(),
            author_index: 0,
            category_index: 0,
            selected_author: None,
            selected_category: None,
            keyword: String::new(),
            keyword_input: String::new(),
            keyword_cursor: 0,
            shown: Shown::Nothing,
            quote_scroll: 0,
            status_message: None,
            status_message_time: None,
            show_help: false,
            pending_g: None,
        }
    }

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(std::time::Instant::now());
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() > std::time::Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// The quote currently on screen, if any
    pub fn current_quote(&self) -> Option<&Quote> {
        match &self.shown {
            Shown::Quote(quote) => Some(quote),
            _ => None,
        }
    }

    /// Criteria from the current selections and keyword
    pub fn query(&self) -> QuoteQuery {
        QuoteQuery::from_parts(
            self.selected_author.clone(),
            self.selected_category.clone(),
            Some(self.keyword.clone()),
        )
    }

    /// Criteria using the keyword being typed (for the live match count)
    pub fn pending_query(&self) -> QuoteQuery {
        QuoteQuery::from_parts(
            self.selected_author.clone(),
            self.selected_category.clone(),
            Some(self.keyword_input.clone()),
        )
    }

    // ==================== Quote actions ====================

    fn show(&mut self, quote: Quote) {
        self.shown = Shown::Quote(quote);
        self.view = View::Quote;
        self.quote_scroll = 0;
    }

    /// Show a random quote from the whole collection
    pub fn show_random(&mut self, store: &QuoteStore) {
        match store.random_quote() {
            Ok(quote) => self.show(quote.clone()),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Show a random quote matching the current criteria
    pub fn show_filtered(&mut self, store: &QuoteStore) {
        match store.random_match(&self.query()) {
            Some(quote) => self.show(quote.clone()),
            None => {
                self.shown = Shown::NoResults;
                self.view = View::Quote;
                self.quote_scroll = 0;
                self.set_status(NO_QUOTES);
            }
        }
    }

    /// Add the displayed quote to the session favorites
    pub fn add_current_to_favorites(&mut self, store: &mut QuoteStore) {
        match self.current_quote().cloned() {
            Some(quote) => {
                store.add_favorite(quote);
                self.set_status(ADDED_TO_FAVORITES);
            }
            None => self.set_status("No quote on screen to favorite"),
        }
    }

    /// Switch between the quote and the favorites list
    pub fn toggle_favorites_view(&mut self) {
        self.view = match self.view {
            View::Quote => View::Favorites,
            View::Favorites => View::Quote,
        };
        self.quote_scroll = 0;
    }

    // ==================== Criteria ====================

    /// Select or deselect the highlighted author
    pub fn toggle_author(&mut self) {
        if let Some(author) = self.authors.get(self.author_index).cloned() {
            self.selected_author = toggle(self.selected_author.take(), author);
        }
    }

    /// Select or deselect the highlighted category
    pub fn toggle_category(&mut self) {
        if let Some(category) = self.categories.get(self.category_index).cloned() {
            self.selected_category = toggle(self.selected_category.take(), category);
        }
    }

    /// Drop all criteria
    pub fn clear_criteria(&mut self) {
        self.selected_author = None;
        self.selected_category = None;
        self.keyword.clear();
        self.set_status("Filters cleared");
    }

    /// Handle Enter key in current pane
    pub fn handle_enter(&mut self, store: &QuoteStore) {
        match self.active_pane {
            ActivePane::Authors => self.toggle_author(),
            ActivePane::Categories => self.toggle_category(),
            ActivePane::Quote => self.show_filtered(store),
        }
    }

    // ==================== Navigation ====================

    /// Move selection up in the current pane
    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Authors => self.author_index = self.author_index.saturating_sub(1),
            ActivePane::Categories => {
                self.category_index = self.category_index.saturating_sub(1)
            }
            ActivePane::Quote => self.quote_scroll = self.quote_scroll.saturating_sub(1),
        }
    }

    /// Move selection down in the current pane
    pub fn move_down(&mut self) {
        match self.active_pane {
            ActivePane::Authors => {
                if self.author_index < self.authors.len().saturating_sub(1) {
                    self.author_index += 1;
                }
            }
            ActivePane::Categories => {
                if self.category_index < self.categories.len().saturating_sub(1) {
                    self.category_index += 1;
                }
            }
            ActivePane::Quote => self.quote_scroll = self.quote_scroll.saturating_add(1),
        }
    }

    /// Move selection to first item in the current pane (vim 'gg')
    pub fn move_to_first(&mut self) {
        match self.active_pane {
            ActivePane::Authors => self.author_index = 0,
            ActivePane::Categories => self.category_index = 0,
            ActivePane::Quote => self.quote_scroll = 0,
        }
    }

    /// Move selection to last item in the current pane (vim 'G')
    pub fn move_to_last(&mut self) {
        match self.active_pane {
            ActivePane::Authors => self.author_index = self.authors.len().saturating_sub(1),
            ActivePane::Categories => {
                self.category_index = self.categories.len().saturating_sub(1)
            }
            // Clamped by the renderer
            ActivePane::Quote => self.quote_scroll = u16::MAX,
        }
    }

    /// Move focus to the next pane
    pub fn next_pane(&mut self) {
        self.active_pane = self.active_pane.next();
    }

    /// Move focus to the previous pane
    pub fn prev_pane(&mut self) {
        self.active_pane = self.active_pane.prev();
    }

    // ==================== Keyword input ====================

    /// Enter keyword mode, starting from the current keyword
    pub fn enter_keyword_mode(&mut self) {
        self.input_mode = InputMode::Keyword;
        self.keyword_input = self.keyword.clone();
        self.keyword_cursor = self.keyword_input.chars().count();
    }

    /// Accept the typed keyword as-is (blank input clears it)
    pub fn confirm_keyword(&mut self) {
        self.keyword = self.keyword_input.clone();
        self.exit_input_mode();
    }

    /// Leave keyword mode without changing the keyword
    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.keyword_input.clear();
        self.keyword_cursor = 0;
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = byte_index(&self.keyword_input, self.keyword_cursor);
        self.keyword_input.insert(at, c);
        self.keyword_cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.keyword_cursor > 0 {
            self.keyword_cursor -= 1;
            let at = byte_index(&self.keyword_input, self.keyword_cursor);
            self.keyword_input.remove(at);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.keyword_cursor = self.keyword_cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.keyword_cursor < self.keyword_input.chars().count() {
            self.keyword_cursor += 1;
        }
    }
}

/// Select `value`, or clear the selection if it is already selected
fn toggle(current: Option<String>, value: String) -> Option<String> {
    match current {
        Some(existing) if existing == value => None,
        _ => Some(value),
    }
}

/// Byte offset of the `char_pos`-th character
fn byte_index(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> QuoteStore {
        QuoteStore::from_quotes(vec![
            Quote::new("Truth is stranger than fiction.", "Mark Twain", "Wit"),
            Quote::new("Be yourself; everyone else is taken.", "Oscar Wilde", "Wisdom"),
            Quote::new("Well done is better than well said.", "Benjamin Franklin", "Motivation"),
        ])
    }

    #[test]
    fn test_active_pane_next() {
        assert_eq!(ActivePane::Authors.next(), ActivePane::Categories);
        assert_eq!(ActivePane::Categories.next(), ActivePane::Quote);
        assert_eq!(ActivePane::Quote.next(), ActivePane::Authors);
    }

    #[test]
    fn test_active_pane_prev() {
        assert_eq!(ActivePane::Authors.prev(), ActivePane::Quote);
        assert_eq!(ActivePane::Categories.prev(), ActivePane::Authors);
        assert_eq!(ActivePane::Quote.prev(), ActivePane::Categories);
    }

    #[test]
    fn test_new_copies_sorted_sets() {
        let app = App::new(&store());
        assert_eq!(app.authors, ["Benjamin Franklin", "Mark Twain", "Oscar Wilde"]);
        assert_eq!(app.categories, ["Motivation", "Wisdom", "Wit"]);
        assert_eq!(app.shown, Shown::Nothing);
        assert!(app.query().is_empty());
    }

    #[test]
    fn test_enter_toggles_author() {
        let store = store();
        let mut app = App::new(&store);
        app.move_down();

        app.handle_enter(&store);
        assert_eq!(app.selected_author.as_deref(), Some("Mark Twain"));

        app.handle_enter(&store);
        assert_eq!(app.selected_author, None);
    }

    #[test]
    fn test_selecting_another_category_replaces() {
        let store = store();
        let mut app = App::new(&store);
        app.next_pane();

        app.handle_enter(&store);
        app.move_down();
        app.handle_enter(&store);
        assert_eq!(app.selected_category.as_deref(), Some("Wisdom"));
    }

    #[test]
    fn test_show_filtered_uses_criteria() {
        let store = store();
        let mut app = App::new(&store);
        app.selected_author = Some("Oscar Wilde".to_string());

        app.show_filtered(&store);
        assert_eq!(
            app.current_quote().map(|q| q.author.as_str()),
            Some("Oscar Wilde")
        );
    }

    #[test]
    fn test_show_filtered_no_results() {
        let store = store();
        let mut app = App::new(&store);
        app.selected_author = Some("Oscar Wilde".to_string());
        app.selected_category = Some("Motivation".to_string());

        app.show_filtered(&store);
        assert_eq!(app.shown, Shown::NoResults);
        assert!(app.current_quote().is_none());
        assert_eq!(app.status_message.as_deref(), Some(NO_QUOTES));
    }

    #[test]
    fn test_show_random_on_empty_store_sets_status() {
        let store = QuoteStore::from_quotes(Vec::new());
        let mut app = App::new(&store);

        app.show_random(&store);
        assert_eq!(app.shown, Shown::Nothing);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_favorite_adds_displayed_quote() {
        let mut store = store();
        let mut app = App::new(&store);

        app.show_random(&store);
        let displayed = app.current_quote().cloned().unwrap();

        app.add_current_to_favorites(&mut store);
        app.add_current_to_favorites(&mut store);

        assert_eq!(store.favorites(), [displayed.clone(), displayed]);
        assert_eq!(app.status_message.as_deref(), Some(ADDED_TO_FAVORITES));
    }

    #[test]
    fn test_favorite_with_nothing_shown() {
        let mut store = store();
        let mut app = App::new(&store);

        app.add_current_to_favorites(&mut store);
        assert!(store.favorites().is_empty());

        app.selected_author = Some("nobody".to_string());
        app.show_filtered(&store);
        app.add_current_to_favorites(&mut store);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_toggle_favorites_view() {
        let store = store();
        let mut app = App::new(&store);

        app.toggle_favorites_view();
        assert_eq!(app.view, View::Favorites);

        // Picking a quote switches back to the quote view
        app.show_random(&store);
        assert_eq!(app.view, View::Quote);
    }

    #[test]
    fn test_keyword_editing() {
        let mut app = App::new(&store());
        app.enter_keyword_mode();
        assert_eq!(app.input_mode, InputMode::Keyword);

        for c in "trth".chars() {
            app.insert_char(c);
        }
        app.cursor_left();
        app.cursor_left();
        app.insert_char('u');
        assert_eq!(app.keyword_input, "truth");
        assert_eq!(app.pending_query().keyword.as_deref(), Some("truth"));
        assert!(app.query().keyword.is_none());

        app.confirm_keyword();
        assert_eq!(app.keyword, "truth");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_keyword_keeps_surrounding_spaces() {
        let store = store();
        let mut app = App::new(&store);
        app.enter_keyword_mode();
        for c in " truth ".chars() {
            app.insert_char(c);
        }
        app.confirm_keyword();

        assert_eq!(app.keyword, " truth ");
        assert_eq!(app.query().keyword.as_deref(), Some(" truth "));
        // "Truth" only opens a quote, so nothing has it between spaces
        assert!(store.query(&app.query()).is_empty());
        assert_eq!(store.filter_by_keyword("truth").len(), 1);
    }

    #[test]
    fn test_blank_keyword_is_no_criterion() {
        let mut app = App::new(&store());
        app.enter_keyword_mode();
        app.insert_char(' ');
        app.confirm_keyword();

        assert!(app.query().is_empty());
    }

    #[test]
    fn test_keyword_cancel_keeps_previous() {
        let mut app = App::new(&store());
        app.keyword = "wit".to_string();

        app.enter_keyword_mode();
        assert_eq!(app.keyword_input, "wit");
        app.delete_char();
        app.exit_input_mode();

        assert_eq!(app.keyword, "wit");
    }

    #[test]
    fn test_keyword_multibyte_cursor() {
        let mut app = App::new(&store());
        app.enter_keyword_mode();
        app.insert_char('é');
        app.insert_char('t');
        app.cursor_left();
        app.delete_char();
        assert_eq!(app.keyword_input, "t");
    }

    #[test]
    fn test_clear_criteria() {
        let mut app = App::new(&store());
        app.selected_author = Some("Mark Twain".to_string());
        app.selected_category = Some("Wit".to_string());
        app.keyword = "truth".to_string();

        app.clear_criteria();
        assert!(app.query().is_empty());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut app = App::new(&store());
        app.move_up();
        assert_eq!(app.author_index, 0);

        app.move_to_last();
        assert_eq!(app.author_index, 2);
        app.move_down();
        assert_eq!(app.author_index, 2);

        app.move_to_first();
        assert_eq!(app.author_index, 0);
    }
}
