//! Internal handle state representation.

/// Raw state behind an [`InputHandle`](crate::InputHandle).
#[derive(Clone, Debug, Default)]
pub(crate) struct HandleState {
    /// The displayed text.
    pub value: String,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,

    /// Caret position as a byte index into `value` (always on a UTF-8 char boundary).
    pub caret: usize,

    /// Selection anchor; the selection is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,

    /// Whether the handle currently has input focus.
    pub focused: bool,
}
