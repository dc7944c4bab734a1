//! # Introduction
//!
//! maze-viewer turns a plain-text description of a maze into a drawing of its
//! walls, redrawn live as the text is edited in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Maze text
//!
//! One row per line, cells separated by spaces. Each cell is a number from 0
//! to 15 whose bits select the walls around it:
//!
//! ```text
//! bit   8     4     2    1
//! wall  North South East West
//! ```
//!
//! ## Frame pipeline
//!
//! ```text
//! Text → Parser → Maze | ParseError → Layout → Cell renderer | Error screen → Surface
//! ```
//!
//! 1. [`maze`] — the grid model and the parser producing a [`maze::ParseOutcome`].
//! 2. [`render`] — layout and drawing against the [`render::Surface`] trait.
//! 3. [`ui`] — ratatui-based TUI that runs the pipeline every frame; not part
//!    of the stable library API.
//! 4. [`config`] — command-line options.

pub mod config;
pub mod maze;
pub mod render;
pub mod ui;
