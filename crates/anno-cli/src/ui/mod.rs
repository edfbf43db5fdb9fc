//! TUI rendering: header with collection tabs, two panes, status bar.

pub mod entry_detail;
pub mod entry_list;

use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph, Tabs},
};

use crate::app::{App, Screen, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Draw one frame: tab strip, list and detail panes, status line.
pub fn draw(f: &mut Frame, app: &App) {
  let [tabs, body, status] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Min(0),
    Constraint::Length(1),
  ])
  .areas(f.area());

  draw_header(f, tabs, app);
  draw_body(f, body, app);
  draw_status(f, status, app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let titles: Vec<Line> = Tab::ALL
    .iter()
    .map(|t| Line::from(format!("{} ({})", t.title(), app.count(*t))))
    .collect();
  let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);

  let tabs = Tabs::new(titles)
    .select(selected)
    .style(Style::default().fg(Color::White).bg(Color::DarkGray))
    .highlight_style(
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
    .divider(" ");
  f.render_widget(tabs, area);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  let [list, detail] =
    Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
      .areas(area);

  entry_list::draw(f, list, app);
  match app.selected_entry() {
    Some(_) => entry_detail::draw(f, detail, app),
    None => {
      let hint = Paragraph::new("Select an entry and press Enter.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::bordered().title(" Detail "));
      f.render_widget(hint, detail);
    }
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match &app.screen {
    Screen::List if app.filter_active => ("FILTER", "Type to filter  Esc cancel  Enter select"),
    Screen::List => ("LIST", "Tab/S-Tab collection  ↑↓/jk move  / filter  Enter open  q quit"),
    Screen::Detail => ("DETAIL", "↑↓/jk scroll  [ ] prev/next  Esc back  q quit"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    format!("{}  ·  {hints}", app.status_msg)
  };

  let line = Line::from(vec![
    Span::styled(
      format!(" {mode_label} "),
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray)),
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
