//! Detail pane: labelled fields, then the summary text.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the selected entry into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(entry) = app.selected_entry() else {
    return;
  };

  let block = Block::default()
    .title(format!(" {} ", entry.id))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Gray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    Line::from(Span::styled(
      entry.title.clone(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
  ];

  for (label, value) in &entry.fields {
    lines.push(Line::from(vec![
      Span::styled(
        format!("{label:<10}"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      Span::raw(value.clone()),
    ]));
  }

  if !entry.text.is_empty() {
    lines.push(Line::from(""));
    lines.push(Line::from(entry.text.clone()));
  }

  let para = Paragraph::new(lines)
    .wrap(Wrap { trim: false })
    .scroll((app.detail_scroll, 0));
  f.render_widget(para, inner);
}
