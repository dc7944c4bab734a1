// End-to-end frame tests through ratatui's test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use maze_viewer::config::DEFAULT_MAZE;
use maze_viewer::render::DEFAULT_PALETTE;
use maze_viewer::ui::App;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use std::time::Duration;

fn draw(app: &App) -> Buffer {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("Terminal creation failed");
    terminal.draw(|f| app.render(f)).expect("Draw failed");
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn uses_color(buffer: &Buffer, color: Color) -> bool {
    buffer
        .content()
        .iter()
        .any(|cell| cell.fg == color || cell.bg == color)
}

#[test]
fn test_default_maze_frame() {
    let app = App::new(DEFAULT_MAZE, false, Duration::from_millis(16));
    let buffer = draw(&app);
    let text = buffer_text(&buffer);

    assert!(text.contains("Maze Text"));
    assert!(text.contains("5×5 maze"));
    assert!(text.contains("3 13 8 8 14"));
    assert!(uses_color(&buffer, DEFAULT_PALETTE.wall));
    assert!(uses_color(&buffer, DEFAULT_PALETTE.grid));
    assert!(!uses_color(&buffer, DEFAULT_PALETTE.alert));
}

#[test]
fn test_error_frame_after_edit() {
    let mut app = App::new("1 2\n3 4", false, Duration::from_millis(16));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

    let buffer = draw(&app);
    let text = buffer_text(&buffer);

    assert!(text.contains("ERROR"));
    assert!(text.contains("invalid cell value on line 2"));
    assert!(uses_color(&buffer, DEFAULT_PALETTE.alert));
}

#[test]
fn test_values_indicator() {
    let mut app = App::new(DEFAULT_MAZE, false, Duration::from_millis(16));
    assert!(!buffer_text(&draw(&app)).contains("VALUES"));

    app.handle_key_event(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert!(buffer_text(&draw(&app)).contains("VALUES"));
}

#[test]
fn test_frame_is_repainted_from_text() {
    let mut app = App::new("1 2\n3", false, Duration::from_millis(16));
    assert!(uses_color(&draw(&app), DEFAULT_PALETTE.alert));

    // Fixing the ragged row clears the error on the next frame
    app.handle_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));
    let buffer = draw(&app);
    assert!(!uses_color(&buffer, DEFAULT_PALETTE.alert));
    assert!(buffer_text(&buffer).contains("2×2 maze"));
}
