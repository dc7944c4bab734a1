//! Maze text pane: the editable input with line numbers and a cursor

use crate::ui::editor::TextBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the `nnn │` line number gutter
const GUTTER_WIDTH: u16 = 5;

/// Colour cell values and flag anything that is not a digit or a space
fn highlight_maze_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None; // Some(true) = run of digits

    for (i, c) in line.char_indices() {
        let kind = if c == ' ' { None } else { Some(c.is_ascii_digit()) };
        if kind != current {
            if start < i {
                spans.push(style_run(&line[start..i], current));
            }
            start = i;
            current = kind;
        }
    }
    if start < line.len() {
        spans.push(style_run(&line[start..], current));
    }

    spans
}

fn style_run(text: &str, kind: Option<bool>) -> Span<'_> {
    match kind {
        Some(true) => Span::styled(text, Style::default().fg(DEFAULT_THEME.number)),
        Some(false) => Span::styled(
            text,
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::UNDERLINED),
        ),
        None => Span::raw(text),
    }
}

/// Render the maze text pane.
///
/// `error_line` is the 1-based line the current parse error points at, if any.
/// This is the only pane that takes input, so it is always drawn focused.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &TextBuffer,
    error_line: Option<usize>,
) {
    let border_style = Style::default()
        .fg(DEFAULT_THEME.border_focused)
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .title(" Maze Text ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let (cursor_row, cursor_col) = buffer.cursor();

    let lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_error = error_line == Some(idx + 1);
            let is_current = idx == cursor_row;

            let mut spans = vec![Span::styled(
                format!("{:>3} │", idx + 1),
                Style::default().fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.comment
                }),
            )];
            spans.extend(highlight_maze_line(text));

            let line = Line::from(spans);
            if is_error {
                line.style(Style::default().bg(DEFAULT_THEME.error_line_bg))
            } else if is_current {
                line.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                line
            }
        })
        .collect();

    // Keep the cursor row in view; long lines are clipped rather than scrolled
    let visible_rows = inner.height.max(1) as usize;
    let scroll_y = cursor_row.saturating_sub(visible_rows - 1);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .scroll((scroll_y as u16, 0));
    frame.render_widget(paragraph, area);

    if inner.width > GUTTER_WIDTH && inner.height > 0 {
        let y = inner.y + (cursor_row - scroll_y) as u16;
        frame.set_cursor_position((cursor_x(inner, cursor_col), y));
    }
}

/// Screen column of the cursor, pinned to the right edge for long lines
fn cursor_x(inner: Rect, cursor_col: usize) -> u16 {
    u16::try_from(cursor_col)
        .unwrap_or(u16::MAX)
        .saturating_add(inner.x + GUTTER_WIDTH)
        .min(inner.right().saturating_sub(1))
}
