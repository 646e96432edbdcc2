//! Editable-text handles.
//!
//! [`TextHandle`] is the surface a masking engine sees: it reads the raw
//! displayed value, replaces it with the masked value and places the caret.
//! [`InputHandle`] is the in-memory implementation, which also carries the
//! user-editing operations a host routes keyboard input to.

use crate::selection::SelectionRange;
use crate::state::HandleState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};

/// The editable-text element a masking engine is bound to.
///
/// All offsets are byte offsets on UTF-8 character boundaries.
pub trait TextHandle {
    /// The raw value currently displayed.
    fn value(&self) -> &str;

    /// Replace the displayed value. The caret moves to the end.
    fn replace_value(&mut self, value: String);

    /// Current caret/selection.
    fn selection(&self) -> SelectionRange;

    /// Place the caret or selection. Implementations clamp to valid boundaries.
    fn set_selection(&mut self, range: SelectionRange);

    /// Whether the handle has input focus. Engines only move the caret of a focused handle.
    fn is_focused(&self) -> bool;

    /// Caret position (the moving end of the selection).
    fn caret(&self) -> usize {
        self.selection().end
    }
}

/// In-memory single-line text handle.
///
/// # Example
///
/// ```
/// use input_core::{InputHandle, TextHandle};
///
/// let mut handle = InputHandle::with_value("(555");
/// handle.focus();
/// handle.insert_text(") 1");
///
/// assert_eq!(handle.value(), "(555) 1");
/// assert_eq!(handle.caret(), "(555) 1".len());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputHandle {
    state: HandleState,
}

impl InputHandle {
    /// Create an empty, unfocused handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle initialized with a default value; the caret sits at the end.
    pub fn with_value(initial: impl Into<String>) -> Self {
        let value = filter_single_line(&initial.into()).into_owned();
        let caret = value.len();
        Self {
            state: HandleState {
                value,
                caret,
                ..HandleState::default()
            },
        }
    }

    /// Monotonic revision counter for the value. Increments on any text change.
    pub fn value_revision(&self) -> u64 {
        self.state.value_rev
    }

    /// Returns the current selection if it is non-empty.
    pub fn selected_range(&self) -> Option<SelectionRange> {
        selection_range(&self.state.value, self.state.selection_anchor, self.state.caret)
    }

    /// Called when the handle gains focus. Clamps the caret and clears selection.
    pub fn focus(&mut self) {
        let st = &mut self.state;
        clamp_state(st);
        st.selection_anchor = None;
        st.focused = true;
    }

    /// Called when the handle loses focus. Clamps the caret and clears selection.
    pub fn blur(&mut self) {
        let st = &mut self.state;
        clamp_state(st);
        st.selection_anchor = None;
        st.focused = false;
    }

    /// Insert text at the caret. Newlines are stripped; a selection is replaced.
    pub fn insert_text(&mut self, s: &str) {
        let st = &mut self.state;
        clamp_state(st);
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        delete_selection_if_any(st);

        let caret = st.caret;
        st.value.insert_str(caret, &s);
        st.caret = clamp_to_char_boundary(&st.value, caret + s.len());
        mark_text_dirty(st);
    }

    /// Delete the character before the caret, or the selection if there is one.
    pub fn backspace(&mut self) {
        let st = &mut self.state;
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.value, st.caret);
        st.value.drain(prev..st.caret);
        st.caret = prev;
        mark_text_dirty(st);
    }

    /// Delete the character after the caret, or the selection if there is one.
    pub fn delete(&mut self) {
        let st = &mut self.state;
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret >= st.value.len() {
            return;
        }

        let next = next_cursor_boundary(&st.value, st.caret);
        st.value.drain(st.caret..next);
        mark_text_dirty(st);
    }

    /// Move the caret left by one character, extending the selection if `selecting`.
    pub fn move_caret_left(&mut self, selecting: bool) {
        let st = &mut self.state;
        clamp_state(st);
        if !selecting {
            if let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) {
                st.caret = sel.start;
                st.selection_anchor = None;
                return;
            }
        }
        let target = prev_cursor_boundary(&st.value, st.caret);
        set_caret_in_state(st, target, selecting);
    }

    /// Move the caret right by one character, extending the selection if `selecting`.
    pub fn move_caret_right(&mut self, selecting: bool) {
        let st = &mut self.state;
        clamp_state(st);
        if !selecting {
            if let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) {
                st.caret = sel.end;
                st.selection_anchor = None;
                return;
            }
        }
        let target = next_cursor_boundary(&st.value, st.caret);
        set_caret_in_state(st, target, selecting);
    }

    /// Move the caret to the start of the text.
    pub fn move_caret_to_start(&mut self, selecting: bool) {
        clamp_state(&mut self.state);
        set_caret_in_state(&mut self.state, 0, selecting);
    }

    /// Move the caret to the end of the text.
    pub fn move_caret_to_end(&mut self, selecting: bool) {
        clamp_state(&mut self.state);
        let end = self.state.value.len();
        set_caret_in_state(&mut self.state, end, selecting);
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        let st = &mut self.state;
        st.caret = st.value.len();
        st.selection_anchor = Some(0);
        normalize_selection_anchor(st);
    }

    /// Set the caret to a byte position, extending the selection if `selecting`.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        clamp_state(&mut self.state);
        set_caret_in_state(&mut self.state, caret, selecting);
    }
}

impl TextHandle for InputHandle {
    fn value(&self) -> &str {
        &self.state.value
    }

    fn replace_value(&mut self, value: String) {
        let st = &mut self.state;
        let value = filter_single_line(&value).into_owned();
        if st.value != value {
            st.value = value;
            mark_text_dirty(st);
        }
        st.caret = st.value.len();
        st.selection_anchor = None;
    }

    fn selection(&self) -> SelectionRange {
        let st = &self.state;
        match st.selection_anchor {
            Some(anchor) => SelectionRange::new(anchor, st.caret).clamped_to(&st.value),
            None => SelectionRange::caret(clamp_to_char_boundary(&st.value, st.caret)),
        }
    }

    fn set_selection(&mut self, range: SelectionRange) {
        let st = &mut self.state;
        let range = range.clamped_to(&st.value);
        st.caret = range.end;
        st.selection_anchor = (!range.is_collapsed()).then_some(range.start);
    }

    fn is_focused(&self) -> bool {
        self.state.focused
    }

    fn caret(&self) -> usize {
        clamp_to_char_boundary(&self.state.value, self.state.caret)
    }
}

// --- Internal helper functions ---

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;
    let a = clamp_to_char_boundary(value, anchor);
    let c = clamp_to_char_boundary(value, caret);
    (a != c).then(|| SelectionRange::new(a, c))
}

fn set_caret_in_state(st: &mut HandleState, caret: usize, selecting: bool) {
    let caret = clamp_to_char_boundary(&st.value, caret);
    if selecting {
        if st.selection_anchor.is_none() {
            st.selection_anchor = Some(st.caret);
        }
        st.caret = caret;
        normalize_selection_anchor(st);
    } else {
        st.caret = caret;
        st.selection_anchor = None;
    }
}

fn normalize_selection_anchor(st: &mut HandleState) {
    let Some(anchor) = st.selection_anchor else {
        return;
    };
    let anchor = clamp_to_char_boundary(&st.value, anchor);
    // Collapsed selections drop the anchor so it does not stick.
    st.selection_anchor = (anchor != st.caret).then_some(anchor);
}

fn delete_selection_if_any(st: &mut HandleState) -> bool {
    let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) else {
        st.selection_anchor = None;
        return false;
    };

    st.value.drain(sel.start..sel.end);
    st.caret = sel.start;
    st.selection_anchor = None;
    mark_text_dirty(st);
    true
}

fn clamp_state(st: &mut HandleState) {
    st.caret = clamp_to_char_boundary(&st.value, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, a));
    }
}

fn mark_text_dirty(st: &mut HandleState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
