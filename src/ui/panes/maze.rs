//! Maze canvas pane
//!
//! The frame pipeline draws into a [`DrawList`] sized to the pane's canvas
//! resolution, which is then replayed onto a ratatui [`Canvas`] using
//! half-block cells (one column wide, two rows tall per terminal cell).
//!
//! Surface coordinates grow downward while canvas coordinates grow upward, so
//! every y is flipped on replay. Stroke width and caps have no equivalent at
//! this resolution; walls are drawn one half-block thick.

use crate::maze::ParseOutcome;
use crate::render::{draw_frame, DrawCall, DrawList, Palette, Surface};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Context, Line},
        Block, Borders,
    },
    Frame,
};

/// Canvas surface size for a pane of the given inner size
pub fn surface_size(inner: Rect) -> (f64, f64) {
    (f64::from(inner.width), f64::from(inner.height) * 2.0)
}

fn pane_block() -> Block<'static> {
    Block::default().title(" Maze ").borders(Borders::ALL)
}

/// The part of a maze pane at `area` that the canvas covers
pub fn canvas_area(area: Rect) -> Rect {
    pane_block().inner(area)
}

/// Run one frame of the pipeline on `text` into a draw list matching `inner`
pub fn draw_maze_frame(
    inner: Rect,
    text: &str,
    show_values: bool,
    palette: &Palette,
) -> (DrawList, ParseOutcome) {
    let (width, height) = surface_size(inner);
    let mut list = DrawList::new(width, height);
    let outcome = draw_frame(&mut list, text, show_values, palette);
    (list, outcome)
}

/// Truncate `text` to at most `max_chars` characters
fn clip_text(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn replay(ctx: &mut Context, list: &DrawList) {
    let (width, height) = list.size();
    let flip = |y: f64| height - y;

    for call in list.calls() {
        match call {
            DrawCall::FillRect { area, color } => {
                let left = area.x.max(0.0);
                let right = area.right().min(width);
                if right <= left {
                    continue;
                }
                // One horizontal run per half-block row
                let mut y = area.y.max(0.0).floor();
                while y < area.bottom().min(height) {
                    ctx.draw(&Line::new(left, flip(y + 0.5), right, flip(y + 0.5), *color));
                    y += 1.0;
                }
            }
            DrawCall::Line { from, to, stroke } => {
                ctx.draw(&Line::new(
                    from.x,
                    flip(from.y),
                    to.x,
                    flip(to.y),
                    stroke.color,
                ));
            }
            DrawCall::Text {
                text,
                center,
                style,
            } => {
                let max_chars = style.max_width.unwrap_or(width).max(0.0) as usize;
                let clipped = clip_text(text, max_chars);
                let half = clipped.chars().count() as f64 / 2.0;
                let x = (center.x - half).max(0.0);
                ctx.print(
                    x,
                    flip(center.y),
                    TextLine::styled(clipped.to_string(), Style::default().fg(style.color)),
                );
            }
        }
    }
}

/// Render the maze pane from a draw list built by [`draw_maze_frame`]
pub fn render_maze_pane(frame: &mut Frame, area: Rect, list: &DrawList, is_error: bool) {
    let border_style = if is_error {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = pane_block().border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (width, height) = list.size();

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| replay(ctx, list));
    frame.render_widget(canvas, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::ParseErrorKind;
    use crate::render::DEFAULT_PALETTE;

    #[test]
    fn test_surface_is_twice_as_tall() {
        assert_eq!(surface_size(Rect::new(0, 0, 40, 10)), (40.0, 20.0));
    }

    #[test]
    fn test_canvas_area_is_inside_border() {
        assert_eq!(canvas_area(Rect::new(0, 0, 40, 10)), Rect::new(1, 1, 38, 8));
    }

    #[test]
    fn test_draw_maze_frame_uses_pane_size() {
        let (list, outcome) =
            draw_maze_frame(Rect::new(3, 4, 20, 10), "15", false, &DEFAULT_PALETTE);
        assert!(outcome.is_ok());
        assert_eq!(list.size(), (20.0, 20.0));
        assert_eq!(list.lines().count(), 4);
    }

    #[test]
    fn test_draw_maze_frame_reports_errors() {
        let (list, outcome) = draw_maze_frame(Rect::new(0, 0, 50, 10), "1 x", false, &DEFAULT_PALETTE);
        assert_eq!(outcome.unwrap_err().kind, ParseErrorKind::NonDigitCell);
        assert_eq!(list.texts().count(), 2);
    }

    #[test]
    fn test_clip_text() {
        assert_eq!(clip_text("hello", 3), "hel");
        assert_eq!(clip_text("hi", 3), "hi");
        assert_eq!(clip_text("héllo", 2), "hé");
    }
}
