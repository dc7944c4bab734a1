//! TUI pane rendering modules
//!
//! - [`input`]: the editable maze text with line numbers
//! - [`maze`]: the rendered maze (or error screen) on a canvas
//! - [`status`]: status bar with parse state and keybindings
//!
//! Each pane exports a stateless `render_*` function that draws from the
//! values it is handed.

pub mod input;
pub mod maze;
pub mod status;

pub use input::render_input_pane;
pub use maze::render_maze_pane;
pub use status::render_status_bar;
