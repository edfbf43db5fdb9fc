//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::catalog::{Catalog, Entry};

// ─── Tabs ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Figures,
  Events,
  Documents,
  Quotes,
}

impl Tab {
  pub const ALL: [Tab; 4] = [Tab::Figures, Tab::Events, Tab::Documents, Tab::Quotes];

  pub fn title(self) -> &'static str {
    match self {
      Tab::Figures => "Figures",
      Tab::Events => "Events",
      Tab::Documents => "Documents",
      Tab::Quotes => "Quotes",
    }
  }

  fn index(self) -> usize {
    self as usize
  }

  fn next(self) -> Tab {
    Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
  }

  fn prev(self) -> Tab {
    Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
  }
}

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the entry list.
  List,
  /// Focus on the detail pane.
  Detail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen: Screen,

  pub tab: Tab,

  /// Entries per tab, indexed by [`Tab`] order. Loaded once at startup.
  entries: [Vec<Entry>; 4],

  /// Current fuzzy-filter string. Kept across tab switches.
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within the *filtered* list of the active tab.
  pub list_cursor: usize,

  /// Scroll offset within the detail pane.
  pub detail_scroll: u16,

  /// Id of the entry open in the detail pane.
  pub selected_id: Option<String>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(catalog: Catalog) -> Self {
    Self {
      screen: Screen::List,
      tab: Tab::Figures,
      entries: [
        catalog.figure_entries(),
        catalog.event_entries(),
        catalog.document_entries(),
        catalog.quote_entries(),
      ],
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      detail_scroll: 0,
      selected_id: None,
      status_msg: String::new(),
    }
  }

  /// Unfiltered size of a tab's collection.
  pub fn count(&self, tab: Tab) -> usize {
    self.entries[tab.index()].len()
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// Entries of the active tab that match the current filter.
  pub fn filtered(&self) -> Vec<&Entry> {
    let entries = &self.entries[self.tab.index()];
    if self.filter.is_empty() {
      return entries.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    entries
      .iter()
      .filter(|e| {
        matcher.fuzzy_match(&e.title, &self.filter).is_some()
          || matcher.fuzzy_match(&e.id, &self.filter).is_some()
      })
      .collect()
  }

  /// The entry under the list cursor in the filtered view, if any.
  pub fn cursor_entry(&self) -> Option<&Entry> {
    self.filtered().get(self.list_cursor).copied()
  }

  /// The entry open in the detail pane, if any.
  pub fn selected_entry(&self) -> Option<&Entry> {
    let id = self.selected_id.as_deref()?;
    self.entries[self.tab.index()].iter().find(|e| e.id == id)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    match key.code {
      KeyCode::Tab => {
        self.switch_tab(self.tab.next());
        return true;
      }
      KeyCode::BackTab => {
        self.switch_tab(self.tab.prev());
        return true;
      }
      _ => {}
    }

    match self.screen {
      Screen::List => self.handle_list_key(key),
      Screen::Detail => self.handle_detail_key(key),
    }
  }

  fn switch_tab(&mut self, tab: Tab) {
    self.tab = tab;
    self.list_cursor = 0;
    self.detail_scroll = 0;
    self.selected_id = None;
    self.screen = Screen::List;
    self.status_msg = format!("{}: {} entries", tab.title(), self.filtered().len());
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
        // A single match opens straight away.
        if self.filtered().len() == 1 {
          self.open_detail();
        }
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
      KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),

      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.open_detail(),

      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }

      // Clear a committed filter.
      KeyCode::Esc => {
        self.filter.clear();
        self.list_cursor = 0;
      }

      _ => {}
    }
    true
  }

  fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::List;
        self.selected_id = None;
      }

      KeyCode::Down | KeyCode::Char('j') => {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      // Step through the list without leaving the detail pane.
      KeyCode::Char(']') | KeyCode::PageDown => {
        self.move_cursor(1);
        self.open_detail();
      }
      KeyCode::Char('[') | KeyCode::PageUp => {
        self.move_cursor(-1);
        self.open_detail();
      }

      _ => {}
    }
    true
  }

  fn move_cursor(&mut self, delta: isize) {
    let len = self.filtered().len();
    if len == 0 {
      return;
    }
    self.list_cursor = self
      .list_cursor
      .saturating_add_signed(delta)
      .min(len - 1);
  }

  fn open_detail(&mut self) {
    if let Some(id) = self.cursor_entry().map(|e| e.id.clone()) {
      self.selected_id = Some(id);
      self.detail_scroll = 0;
      self.screen = Screen::Detail;
    }
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

  use super::*;
  use crate::catalog::tests::sample;

  fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  fn type_filter(app: &mut App, text: &str) {
    press(app, KeyCode::Char('/'));
    for c in text.chars() {
      press(app, KeyCode::Char(c));
    }
  }

  fn ids(app: &App) -> Vec<&str> {
    app.filtered().iter().map(|e| e.id.as_str()).collect()
  }

  #[test]
  fn tabs_show_exactly_the_active_collection() {
    let mut app = App::new(sample());
    assert_eq!(ids(&app), ["augustine", "athanasius", "luther"]);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, Tab::Events);
    assert_eq!(ids(&app), ["nicaea", "worms"]);

    press(&mut app, KeyCode::Tab);
    assert_eq!(ids(&app), ["confessions"]);

    press(&mut app, KeyCode::Tab);
    assert_eq!(ids(&app), ["here-i-stand"]);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, Tab::Figures);
  }

  #[test]
  fn back_tab_wraps_to_the_last_collection() {
    let mut app = App::new(sample());
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.tab, Tab::Quotes);
    assert_eq!(ids(&app), ["here-i-stand"]);
  }

  #[test]
  fn switching_tabs_resets_the_cursor() {
    let mut app = App::new(sample());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.list_cursor, 2);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.list_cursor, 0);
    assert_eq!(app.cursor_entry().map(|e| e.id.as_str()), Some("nicaea"));
  }

  #[test]
  fn cursor_stays_inside_the_list() {
    let mut app = App::new(sample());
    press(&mut app, KeyCode::Up);
    assert_eq!(app.list_cursor, 0);
    for _ in 0..10 {
      press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.list_cursor, 2);
  }

  #[test]
  fn single_filter_match_opens_on_enter() {
    let mut app = App::new(sample());
    type_filter(&mut app, "aug");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(app.selected_entry().map(|e| e.id.as_str()), Some("augustine"));
  }

  #[test]
  fn esc_while_typing_clears_the_filter() {
    let mut app = App::new(sample());
    type_filter(&mut app, "worms");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, Tab::Figures);
    press(&mut app, KeyCode::Esc);
    assert!(!app.filter_active);
    assert!(app.filter.is_empty());
    assert_eq!(ids(&app).len(), 3);
  }

  #[test]
  fn filter_survives_tab_switch() {
    let mut app = App::new(sample());
    type_filter(&mut app, "diet");
    press(&mut app, KeyCode::Enter);
    assert!(ids(&app).is_empty());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab, Tab::Events);
    assert_eq!(ids(&app), ["worms"]);
  }

  #[test]
  fn enter_opens_detail_and_esc_returns() {
    let mut app = App::new(sample());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Detail);
    assert_eq!(app.selected_entry().map(|e| e.title.as_str()), Some("Diet of Worms"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::List);
    assert!(app.selected_entry().is_none());
  }

  #[test]
  fn tab_from_detail_returns_to_the_list() {
    let mut app = App::new(sample());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen, Screen::List);
    assert!(app.selected_id.is_none());
  }

  #[test]
  fn q_quits_but_not_while_filtering() {
    let mut app = App::new(sample());
    press(&mut app, KeyCode::Char('/'));
    assert!(press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.filter, "q");
    press(&mut app, KeyCode::Esc);
    assert!(!press(&mut app, KeyCode::Char('q')));
  }
}
