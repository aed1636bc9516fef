use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::parse::DONE_MARKER;

use super::app::{App, PaneState};
use super::theme::Theme;

/// Anything that can draw itself into a pane. The render pass hands exactly
/// one pane `focused = true`; there is no shared style state to swap.
pub trait Renderable {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, hide_done: bool, theme: &Theme);
}

/// Main render function: either the static help text or the three panes
pub fn render(frame: &mut Frame, app: &App) {
    if app.show_help {
        render_help(frame, frame.area(), &app.theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(frame.area());

    for (i, pane) in app.panes.iter().enumerate() {
        pane.render(frame, chunks[i], i == app.focus, app.hide_done, &app.theme);
    }
}

impl Renderable for PaneState {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, hide_done: bool, theme: &Theme) {
        let border_style = if focused {
            Style::default().fg(theme.border_focused)
        } else {
            Style::default().fg(theme.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.list.kind.title());

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let visible = self.list.visible(hide_done);
        let rows = inner.height as usize;
        // Scroll just enough to keep the cursor on screen
        let start = (self.cursor + 1).saturating_sub(rows);

        let mut lines = Vec::new();
        for (row, &index) in visible.iter().enumerate().skip(start).take(rows) {
            let task = &self.list.all[index];
            let mut text = String::new();
            if task.done {
                text.push_str(DONE_MARKER);
            }
            text.push_str(&task.title);
            let text = truncate_to_width(&text, inner.width as usize);

            let style = if row == self.cursor {
                let fg = if focused {
                    theme.selection_focused
                } else {
                    theme.selection
                };
                Style::default().fg(fg).add_modifier(Modifier::BOLD)
            } else if task.done {
                Style::default().fg(theme.done)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Static key reference shown while help is toggled on
fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let key_style = Style::default()
        .fg(theme.border_focused)
        .add_modifier(Modifier::BOLD);
    let rows: [(&str, &str); 8] = [
        ("q", "quit (saves all lists)"),
        ("tab / l / h", "cycle pane focus"),
        ("j / k", "move selection"),
        ("space", "mark as done"),
        ("H", "hide completed"),
        ("o", "open task command"),
        ("g / G", "first / last task"),
        ("?", "show/hide this help"),
    ];

    let mut lines = vec![Line::default()];
    for (key, action) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::styled(action, Style::default().fg(theme.text)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title("Help");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`
fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
