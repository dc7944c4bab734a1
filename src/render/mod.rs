//! Maze rendering onto an abstract drawing surface
//!
//! - [`surface`]: the [`Surface`] trait and the recording [`DrawList`]
//! - [`layout`]: [`Geometry`], fitting the grid into the surface
//! - [`cell`]: walls and value overlay of a single cell
//! - [`frame`]: a full frame, either the maze or the error screen
//!
//! Everything here is display independent. The terminal UI renders into a
//! [`DrawList`] and replays it onto a ratatui canvas.

pub mod cell;
pub mod frame;
pub mod layout;
pub mod surface;

pub use cell::render_cell;
pub use frame::{describe_outcome, draw_frame, render_error, render_frame, render_maze};
pub use layout::Geometry;
pub use surface::{Area, DrawCall, DrawList, Point, Surface};

use ratatui::style::Color;

/// Colours used when drawing a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub wall: Color,
    pub alert: Color,
    pub alert_text: Color,
}

pub const DEFAULT_PALETTE: Palette = Palette {
    background: Color::Rgb(0, 0, 0),
    grid: Color::Rgb(42, 60, 80),    // #2A3C50
    wall: Color::Rgb(116, 136, 158), // #74889E
    alert: Color::Rgb(208, 80, 80),  // #D05050
    alert_text: Color::Rgb(0, 0, 0),
};
