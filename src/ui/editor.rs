//! Multi-line text buffer backing the maze input pane

/// Editable text with a cursor. Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        TextBuffer {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }
}

impl TextBuffer {
    /// Load `text`, placing the cursor at the very end
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let cursor_row = lines.len() - 1;
        let cursor_col = lines[cursor_row].chars().count();
        TextBuffer {
            lines,
            cursor_row,
            cursor_col,
        }
    }

    /// The full text, lines joined with `'\n'`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as `(row, column)`
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let at = self.byte_index(self.cursor_row, self.cursor_col);
        self.lines[self.cursor_row].insert(at, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let at = self.byte_index(self.cursor_row, self.cursor_col);
        let rest = self.lines[self.cursor_row].split_off(at);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let at = self.byte_index(self.cursor_row, self.cursor_col - 1);
            self.lines[self.cursor_row].remove(at);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            let line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
            self.lines[self.cursor_row].push_str(&line);
        }
    }

    /// Delete the character under the cursor, joining lines at the line end
    pub fn delete(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            let at = self.byte_index(self.cursor_row, self.cursor_col);
            self.lines[self.cursor_row].remove(at);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_col = self.line_len(self.cursor_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_text() {
        let text = "1 2\n3 4\n";
        let buffer = TextBuffer::new(text);
        assert_eq!(buffer.text(), text);
        assert_eq!(buffer.lines().len(), 3);
        assert_eq!(buffer.cursor(), (2, 0));
    }

    #[test]
    fn test_insert_and_newline() {
        let mut buffer = TextBuffer::new("12");
        buffer.move_left();
        buffer.insert_newline();
        buffer.insert_char(' ');
        assert_eq!(buffer.text(), "1\n 2");
        assert_eq!(buffer.cursor(), (1, 1));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buffer = TextBuffer::new("1 2\n3");
        buffer.move_home();
        buffer.backspace();
        assert_eq!(buffer.text(), "1 23");
        assert_eq!(buffer.cursor(), (0, 3));

        let mut buffer = TextBuffer::default();
        buffer.backspace();
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut buffer = TextBuffer::new("1\n2");
        buffer.move_up();
        buffer.move_end();
        buffer.delete();
        assert_eq!(buffer.text(), "12");
    }

    #[test]
    fn test_vertical_moves_clamp_column() {
        let mut buffer = TextBuffer::new("10 11 12\n1");
        buffer.move_up();
        buffer.move_end();
        assert_eq!(buffer.cursor(), (0, 8));
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 1));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buffer = TextBuffer::new("é1");
        buffer.move_home();
        buffer.move_right();
        buffer.insert_char('x');
        assert_eq!(buffer.text(), "éx1");
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.text(), "1");
    }
}
