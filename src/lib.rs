//! # Introduction
//!
//! Reminder Board keeps short text reminders in four emoji-tagged categories
//! (School, Work, Home, Miscellaneous) and shows one category at a time in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Layers
//!
//! ```text
//! Key events → App → Board mutations → BoardEvent observers → redraw
//! ```
//!
//! 1. [`board`] — the in-memory model: category registry, one ordered
//!    reminder list per category, selection, draft input, editor mode and
//!    background colour. Independent of any terminal code.
//! 2. [`ui`] — ratatui-based TUI; subscribes to board changes and renders
//!    them. Not part of the stable library API.
//! 3. [`config`] — command-line options for the binary.
//!
//! Nothing is persisted: the board lives for one run of the program.

pub mod board;
pub mod config;
pub mod ui;
