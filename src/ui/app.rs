//! Main TUI application state and frame loop

use crate::maze::parse_maze;
use crate::render::{describe_outcome, Palette, DEFAULT_PALETTE};
use crate::ui::panes::maze::{canvas_area, draw_maze_frame};
use crate::ui::editor::TextBuffer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state.
///
/// Only the editor text and the value toggle survive between frames; the maze
/// itself is re-parsed from the text on every frame.
pub struct App {
    /// The maze text being edited
    pub editor: TextBuffer,

    /// Whether cell values are drawn on top of the maze
    pub show_values: bool,

    /// Colours used for the maze canvas
    pub palette: Palette,

    /// How long to wait for input before drawing the next frame
    pub frame_interval: Duration,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(maze_text: &str, show_values: bool, frame_interval: Duration) -> Self {
        App {
            editor: TextBuffer::new(maze_text),
            show_values,
            palette: DEFAULT_PALETTE,
            frame_interval,
            should_quit: false,
        }
    }

    /// Run the frame loop until quit is requested
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wait at most one frame for input, then redraw regardless
            if event::poll(self.frame_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Draw one frame: parse the current text and render every pane
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Editor | Maze, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(main_chunks[0]);

        let (list, outcome) = draw_maze_frame(
            canvas_area(columns[1]),
            &self.editor.text(),
            self.show_values,
            &self.palette,
        );
        let error_line = outcome.as_ref().err().and_then(|e| e.line);

        super::panes::render_input_pane(frame, columns[0], &self.editor, error_line);
        super::panes::render_maze_pane(frame, columns[1], &list, outcome.is_err());
        super::panes::render_status_bar(frame, main_chunks[1], &outcome, self.show_values);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => self.quit(),
            KeyCode::Tab => self.toggle_values(),
            KeyCode::Char('v') | KeyCode::Char('V') if ctrl => self.toggle_values(),
            KeyCode::Char(c) if !ctrl => {
                self.editor.insert_char(c);
                self.text_changed();
            }
            KeyCode::Enter => {
                self.editor.insert_newline();
                self.text_changed();
            }
            KeyCode::Backspace => {
                self.editor.backspace();
                self.text_changed();
            }
            KeyCode::Delete => {
                self.editor.delete();
                self.text_changed();
            }
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => {}
        }
    }

    fn quit(&mut self) {
        log::info!("quit requested");
        self.should_quit = true;
    }

    fn toggle_values(&mut self) {
        self.show_values = !self.show_values;
        log::info!(
            "cell values {}",
            if self.show_values { "shown" } else { "hidden" }
        );
    }

    fn text_changed(&self) {
        if log::log_enabled!(log::Level::Debug) {
            let outcome = parse_maze(&self.editor.text());
            log::debug!(
                "maze text edited at {:?}: {}",
                self.editor.cursor(),
                describe_outcome(&outcome)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_typing_edits_text() {
        let mut app = App::new("", false, Duration::from_millis(16));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.editor.text(), "1 2\n");
    }

    #[test]
    fn test_toggle_and_quit() {
        let mut app = App::new("1", false, Duration::from_millis(16));
        press(&mut app, KeyCode::Tab);
        assert!(app.show_values);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL));
        assert!(!app.show_values);
        assert_eq!(app.editor.text(), "1");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_without_typing() {
        let mut app = App::new("", false, Duration::from_millis(16));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.editor.text(), "");
    }
}
