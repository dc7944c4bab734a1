//! Single cell rendering

use super::surface::{FontFamily, LineCap, Point, Stroke, Surface, TextStyle};
use super::Palette;
use crate::maze::{CellCode, Walls};

/// Wall stroke width in surface units
pub const WALL_WIDTH: f64 = 10.0;

/// Cell value font size is the cell edge divided by this
const VALUE_FONT_DIVISOR: f64 = 5.0;

/// Endpoints of one side of the square at `origin` with edge `size`
pub fn wall_segment(side: Walls, origin: Point, size: f64) -> (Point, Point) {
    let (x, y) = (origin.x, origin.y);
    let (right, bottom) = (x + size, y + size);

    if side == Walls::NORTH {
        (Point::new(x, y), Point::new(right, y))
    } else if side == Walls::SOUTH {
        (Point::new(x, bottom), Point::new(right, bottom))
    } else if side == Walls::EAST {
        (Point::new(right, y), Point::new(right, bottom))
    } else {
        (Point::new(x, y), Point::new(x, bottom))
    }
}

/// Draw the walls of one cell, and optionally its raw value.
///
/// Position and size are taken as given; layout is the caller's job.
pub fn render_cell<S: Surface + ?Sized>(
    surface: &mut S,
    code: CellCode,
    origin: Point,
    size: f64,
    show_value: bool,
    palette: &Palette,
) {
    let stroke = Stroke {
        color: palette.wall,
        width: WALL_WIDTH,
        cap: LineCap::Round,
    };

    let walls = code.walls();
    for side in Walls::SIDES {
        if walls.contains(side) {
            let (from, to) = wall_segment(side, origin, size);
            surface.stroke_line(from, to, &stroke);
        }
    }

    if show_value {
        let style = TextStyle {
            color: palette.wall,
            size: (size / VALUE_FONT_DIVISOR).floor(),
            family: FontFamily::Monospace,
            max_width: None,
        };
        let center = Point::new(origin.x + size / 2.0, origin.y + size / 2.0);
        surface.fill_text(&code.to_string(), center, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCall, DrawList};
    use crate::render::DEFAULT_PALETTE;

    fn draw(value: u8, show_value: bool) -> DrawList {
        let mut list = DrawList::new(100.0, 100.0);
        let code = CellCode::new(value).unwrap();
        render_cell(&mut list, code, Point::new(10.0, 20.0), 50.0, show_value, &DEFAULT_PALETTE);
        list
    }

    #[test]
    fn test_segment_count_follows_bits() {
        assert_eq!(draw(0, false).calls().len(), 0);
        assert_eq!(draw(15, false).lines().count(), 4);
        assert_eq!(draw(8, false).lines().count(), 1);
        assert_eq!(draw(5, false).lines().count(), 2);
    }

    #[test]
    fn test_segments_run_along_full_edges() {
        let list = draw(15, false);
        let segments: Vec<(Point, Point)> = list.lines().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(
            segments,
            vec![
                (Point::new(10.0, 20.0), Point::new(60.0, 20.0)), // north
                (Point::new(10.0, 70.0), Point::new(60.0, 70.0)), // south
                (Point::new(60.0, 20.0), Point::new(60.0, 70.0)), // east
                (Point::new(10.0, 20.0), Point::new(10.0, 70.0)), // west
            ]
        );
    }

    #[test]
    fn test_stroke_style() {
        let list = draw(8, false);
        match &list.calls()[0] {
            DrawCall::Line { stroke, .. } => {
                assert_eq!(stroke.width, WALL_WIDTH);
                assert_eq!(stroke.cap, LineCap::Round);
                assert_eq!(stroke.color, DEFAULT_PALETTE.wall);
            }
            other => panic!("Expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_value_overlay_is_centered() {
        let list = draw(0, true);
        assert_eq!(list.calls().len(), 1);
        match &list.calls()[0] {
            DrawCall::Text {
                text,
                center,
                style,
            } => {
                assert_eq!(text, "0");
                assert_eq!(*center, Point::new(35.0, 45.0));
                assert_eq!(style.size, 10.0);
                assert_eq!(style.family, FontFamily::Monospace);
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }
}
