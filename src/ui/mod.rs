//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — view state, keyboard event loop, category editor and colour sheet
//! - **[`panes`]** — stateless render functions for each part of the screen (header,
//!   category tabs, input, reminder list, modals, status bar)
//! - **[`theme`]** — accent palette and the mapping of background options to colours
//! - **[`summary`]** — plain-text dump of the board for non-interactive use
//!
//! The entry point for consumers is [`App`]: construct it with a [`Board`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Board`]: crate::board::Board
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod summary;
pub mod theme;

pub use app::App;
