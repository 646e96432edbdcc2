//! # input_core
//!
//! UI-agnostic editable-text handle.
//!
//! This crate provides the element a masking engine reads from and writes to:
//! - [`TextHandle`]: the trait a masking engine uses to read and replace the
//!   displayed value and to place the caret
//! - [`InputHandle`]: an in-memory single-line handle with user-editing
//!   operations (insert, backspace, delete, caret movement)
//! - [`SelectionRange`]: a caret or selection as start/end byte offsets
//!
//! ## Design Principles
//!
//! This crate does not depend on:
//! - Any masking configuration or engine
//! - Any graphics framework or layout system
//!
//! Engines that count positions in characters rather than bytes can use
//! [`char_to_byte_offset`] and [`byte_to_char_offset`] at the boundary.

mod handle;
mod selection;
mod state;
mod text;

pub use handle::{InputHandle, TextHandle};
pub use selection::SelectionRange;

pub use text::{
    byte_to_char_offset, char_to_byte_offset, clamp_to_char_boundary, filter_single_line,
    next_cursor_boundary, prev_cursor_boundary,
};
