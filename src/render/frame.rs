//! Whole-frame rendering: the maze grid on success, the error screen on failure

use super::cell::render_cell;
use super::layout::Geometry;
use super::surface::{Area, FontFamily, Point, Surface, TextStyle};
use super::Palette;
use crate::maze::{parse_maze, Maze, ParseError, ParseErrorKind, ParseOutcome};

/// Error font size is the surface width divided by this
const ERROR_FONT_DIVISOR: f64 = 25.0;

/// Line spacing of the error message, relative to its font size
const ERROR_LINE_HEIGHT: f64 = 1.3;

/// Paint the background, the grid backdrop and every cell of `maze`
pub fn render_maze<S: Surface + ?Sized>(
    surface: &mut S,
    maze: &Maze,
    show_values: bool,
    palette: &Palette,
) {
    let (width, height) = surface.size();
    let geometry = Geometry::fit(maze.rows(), maze.cols(), width, height);

    surface.fill_rect(Area::new(0.0, 0.0, width, height), palette.background);
    surface.fill_rect(geometry.grid_area(), palette.grid);

    for (row, col, code) in maze.cells() {
        let origin = geometry.cell_origin(row, col);
        render_cell(surface, code, origin, geometry.cell_size, show_values, palette);
    }
}

/// Fill the surface with the alert colour and centre the error message on it
pub fn render_error<S: Surface + ?Sized>(surface: &mut S, error: &ParseError, palette: &Palette) {
    let (width, height) = surface.size();

    surface.fill_rect(Area::new(0.0, 0.0, width, height), palette.alert);

    let font_size = (width / ERROR_FONT_DIVISOR).floor();
    let line_height = font_size * ERROR_LINE_HEIGHT;
    let style = TextStyle {
        color: palette.alert_text,
        size: font_size,
        family: FontFamily::SansSerif,
        max_width: Some(width),
    };

    let lines = error.message_lines();
    let middle = (lines.len() as f64 - 1.0) / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let y = height / 2.0 + (i as f64 - middle) * line_height;
        surface.fill_text(line, Point::new(width / 2.0, y), &style);
    }
}

/// Render a parse outcome. This is a pure function of its arguments and the
/// surface size; nothing carries over between calls.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    outcome: &ParseOutcome,
    show_values: bool,
    palette: &Palette,
) {
    match outcome {
        Ok(maze) => render_maze(surface, maze, show_values, palette),
        Err(error) => render_error(surface, error, palette),
    }
}

/// One frame of the pipeline: parse `text` and render the outcome.
///
/// Returns the outcome so callers can report on it.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    show_values: bool,
    palette: &Palette,
) -> ParseOutcome {
    let outcome = parse_maze(text);
    render_frame(surface, &outcome, show_values, palette);
    outcome
}

/// Short description of an outcome for status lines and logs
pub fn describe_outcome(outcome: &ParseOutcome) -> String {
    match outcome {
        Ok(maze) => format!("{}×{} maze", maze.rows(), maze.cols()),
        Err(ParseError {
            kind: ParseErrorKind::EmptyMaze,
            ..
        }) => "empty maze".to_string(),
        Err(error) => match error.line {
            Some(line) => format!("{} on line {}", error.summary().to_lowercase(), line),
            None => error.summary().to_lowercase(),
        },
    }
}
