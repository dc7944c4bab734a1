//! Maze text parser
//!
//! The maze grammar is line oriented: rows are separated by `'\n'` and cells
//! within a row by one or more `' '` characters. A single trailing newline is
//! allowed and never counts as a row.
//!
//! ```text
//! 3 13 8 8 14
//! 5 10 3 5 10
//! ```
//!
//! Checks run in a fixed order and the first failure wins:
//! row width (against the first row), then digits-only cells, then the
//! `0..=15` range, and finally the empty-maze check once every row has been
//! seen. Because the empty check comes last, text with no rows at all can only
//! ever report [`ParseErrorKind::EmptyMaze`].

use super::cell::CellCode;
use super::Maze;
use std::fmt;

/// Result of parsing a maze: either a valid grid or the reason it was rejected
pub type ParseOutcome = Result<Maze, ParseError>;

/// Why a maze was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Rows do not all have the same number of cells
    RaggedRows,
    /// A cell contains something other than decimal digits
    NonDigitCell,
    /// A cell is a number outside `0..=15`
    CellOutOfRange,
    /// No rows, or a first row with no cells
    EmptyMaze,
}

impl ParseErrorKind {
    pub fn summary(self) -> &'static str {
        match self {
            ParseErrorKind::RaggedRows | ParseErrorKind::EmptyMaze => "Invalid maze dimensions",
            ParseErrorKind::NonDigitCell | ParseErrorKind::CellOutOfRange => "Invalid cell value",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            ParseErrorKind::RaggedRows => "(Not all rows have the same number of cells)",
            ParseErrorKind::NonDigitCell => "(Some cells are something besides digits)",
            ParseErrorKind::CellOutOfRange => "(Some cells are less than 0 or greater than 15)",
            ParseErrorKind::EmptyMaze => "(Maze cannot be empty)",
        }
    }
}

/// Maze parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based line that triggered the error, if the error belongs to a line
    pub line: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: Option<usize>) -> Self {
        ParseError { kind, line }
    }

    pub fn summary(&self) -> &'static str {
        self.kind.summary()
    }

    pub fn detail(&self) -> &'static str {
        self.kind.detail()
    }

    /// The message as displayed to the user, one entry per line
    pub fn message_lines(&self) -> [&'static str; 2] {
        [self.summary(), self.detail()]
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.summary(), self.detail())
    }
}

impl std::error::Error for ParseError {}

/// Parse maze text into a rectangular grid of cell codes
pub fn parse_maze(text: &str) -> ParseOutcome {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut rows: Vec<Vec<CellCode>> = Vec::with_capacity(lines.len());
    let mut width: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let tokens: Vec<&str> = line.split(' ').filter(|token| !token.is_empty()).collect();

        let expected = *width.get_or_insert(tokens.len());
        if tokens.len() != expected {
            return Err(ParseError::new(ParseErrorKind::RaggedRows, Some(line_number)));
        }

        let row = tokens
            .iter()
            .map(|token| parse_cell(token, line_number))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    if rows.first().map_or(true, |row| row.is_empty()) {
        return Err(ParseError::new(ParseErrorKind::EmptyMaze, None));
    }

    Ok(Maze::new_unchecked(rows))
}

fn parse_cell(token: &str, line_number: usize) -> Result<CellCode, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::NonDigitCell, Some(line_number)));
    }

    // Digits only at this point, so a failed parse can only mean overflow
    token
        .parse::<u8>()
        .ok()
        .and_then(CellCode::new)
        .ok_or_else(|| ParseError::new(ParseErrorKind::CellOutOfRange, Some(line_number)))
}
