//! List pane: the active collection, filtered.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Screen};

/// Render the entry list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.filtered();
  let total = app.count(app.tab);
  let filtering = app.filter_active || !app.filter.is_empty();

  let title = if filtering {
    format!(" {} ({}/{}) ", app.tab.title(), filtered.len(), total)
  } else {
    format!(" {} ({}) ", app.tab.title(), total)
  };

  // Dim the border while the detail pane has focus.
  let border = if app.screen == Screen::Detail {
    Color::DarkGray
  } else {
    Color::Gray
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  let items: Vec<ListItem> = filtered
    .iter()
    .map(|entry| {
      ListItem::new(Line::from(vec![
        Span::raw(entry.title.clone()),
        Span::styled(format!("  {}", entry.meta), Style::default().fg(Color::DarkGray)),
      ]))
    })
    .collect();

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  if filtering && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let mut state = ListState::default();
  state.select(if filtered.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  f.render_stateful_widget(
    List::new(items).highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner_area,
    &mut state,
  );
}
