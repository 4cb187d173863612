//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function that draws one part of the
//! board screen from borrowed state.
//!
//! # Pane Modules
//!
//! - [`header`]: Large emoji and title of the selected category
//! - [`tabs`]: Segmented control for switching categories
//! - [`input`]: Pending reminder text field
//! - [`list`]: Reminders of the selected category
//! - [`editor`]: "Edit Lists" modal for category titles and emoji
//! - [`color_sheet`]: Background colour chooser
//! - [`status`]: Status bar with keybindings and mode
//! - `common`: Shared layout helpers

mod common;

pub mod color_sheet;
pub mod editor;
pub mod header;
pub mod input;
pub mod list;
pub mod status;
pub mod tabs;

pub use color_sheet::render_color_sheet;
pub use editor::render_category_editor;
pub use header::render_header;
pub use input::render_input_line;
pub use list::render_reminder_list;
pub use status::render_status_bar;
pub use tabs::render_category_tabs;
