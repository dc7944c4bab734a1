//! Drawing surface abstraction
//!
//! Renderers never talk to a display directly. They issue draw calls against a
//! [`Surface`], whose coordinates have the origin at the top-left corner and y
//! growing downward. [`DrawList`] is a surface that simply records the calls;
//! the terminal canvas replays a `DrawList`, and tests compare them.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Area {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Monospace,
    SansSerif,
}

/// Text is always anchored at its centre, both horizontally and vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f64,
    pub family: FontFamily,
    /// Text wider than this is squeezed or clipped by the surface
    pub max_width: Option<f64>,
}

/// Something the frame renderer can draw on
pub trait Surface {
    /// Width and height in surface units
    fn size(&self) -> (f64, f64);

    fn fill_rect(&mut self, area: Area, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    fn fill_text(&mut self, text: &str, center: Point, style: &TextStyle);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        area: Area,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        center: Point,
        style: TextStyle,
    },
}

/// A surface of fixed size that records every draw call in order
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Self {
        DrawList {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Line { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &Point)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, center, .. } => Some((text.as_str(), center)),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, area: Area, color: Color) {
        self.calls.push(DrawCall::FillRect { area, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn fill_text(&mut self, text: &str, center: Point, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            center,
            style: *style,
        });
    }
}
