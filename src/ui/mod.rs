//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state and the frame loop that re-parses and
//!   redraws the maze on every tick
//! - **[`editor`]** — the multi-line text buffer holding the maze text
//! - **[`panes`]** — stateless render functions for each visible pane (text,
//!   maze canvas, status bar)
//! - **[`theme`]** — centralized color palette for the UI chrome
//!
//! The entry point is [`App`]: construct it with the initial maze text and
//! call [`App::run`] to start the loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod editor;
pub mod panes;
pub mod theme;

pub use app::App;
