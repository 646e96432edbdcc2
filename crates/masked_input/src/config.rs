//! Masking configuration delivered by the owner.

use crate::mask::Mask;
use crate::pipe::Pipe;

/// Every field that parameterizes a masking engine.
///
/// This is the whole masking surface; anything the owner wants forwarded to
/// the rendered element goes in [`InputAttributes`](crate::InputAttributes).
#[derive(Clone, Debug)]
pub struct MaskConfig {
    pub mask: Mask,
    /// Show placeholder characters ahead of the caret.
    pub guide: bool,
    /// Character shown in unfilled mask positions.
    pub placeholder_char: char,
    /// Render the mask even when the value is empty.
    pub show_mask: bool,
    pub pipe: Option<Pipe>,
    /// Cursor placement only; never part of change detection.
    pub keep_char_positions: bool,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask: Mask::Disabled,
            guide: true,
            placeholder_char: '_',
            show_mask: false,
            pipe: None,
            keep_char_positions: false,
        }
    }
}

impl MaskConfig {
    pub fn new(mask: impl Into<Mask>) -> Self {
        Self {
            mask: mask.into(),
            ..Self::default()
        }
    }

    pub fn with_guide(mut self, guide: bool) -> Self {
        self.guide = guide;
        self
    }

    pub fn with_placeholder_char(mut self, placeholder_char: char) -> Self {
        self.placeholder_char = placeholder_char;
        self
    }

    pub fn with_show_mask(mut self, show_mask: bool) -> Self {
        self.show_mask = show_mask;
        self
    }

    pub fn with_pipe(mut self, pipe: Pipe) -> Self {
        self.pipe = Some(pipe);
        self
    }

    pub fn with_keep_char_positions(mut self, keep: bool) -> Self {
        self.keep_char_positions = keep;
        self
    }
}
