//! Change detection between deliveries.
//!
//! Two independent questions are answered here: did the masking-relevant
//! configuration change (so the engine must be rebuilt), and does the
//! delivered value differ from what the handle displayed just before the
//! delivery (so the engine must be told about it).

use crate::config::MaskConfig;
use crate::pipe::Pipe;
use crate::value::InputValue;

/// Per-field result of comparing two configurations.
///
/// `keep_char_positions` is deliberately absent: it only affects caret placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigDiff {
    pub guide: bool,
    pub placeholder_char: bool,
    pub show_mask: bool,
    pub mask: bool,
    pub pipe: bool,
}

impl ConfigDiff {
    pub fn between(prev: &MaskConfig, next: &MaskConfig) -> Self {
        Self {
            guide: prev.guide != next.guide,
            placeholder_char: prev.placeholder_char != next.placeholder_char,
            show_mask: prev.show_mask != next.show_mask,
            mask: prev.mask.canonical() != next.mask.canonical(),
            pipe: pipe_changed(prev.pipe.as_ref(), next.pipe.as_ref()),
        }
    }

    /// `true` if the engine must be rebuilt.
    pub fn is_changed(&self) -> bool {
        self.guide || self.placeholder_char || self.show_mask || self.mask || self.pipe
    }
}

/// Shortcut for `ConfigDiff::between(prev, next).is_changed()`.
pub fn settings_changed(prev: &MaskConfig, next: &MaskConfig) -> bool {
    ConfigDiff::between(prev, next).is_changed()
}

/// Presence changes count; two present pipes compare by source text.
pub fn pipe_changed(prev: Option<&Pipe>, next: Option<&Pipe>) -> bool {
    match (prev, next) {
        (Some(a), Some(b)) => a.source() != b.source(),
        (None, None) => false,
        _ => true,
    }
}

/// The handle's raw value captured before a delivery is applied.
///
/// An unattached synchronizer has no handle, so its snapshot is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    value: Option<String>,
}

impl Snapshot {
    pub fn of(raw: Option<&str>) -> Self {
        Self {
            value: raw.map(str::to_owned),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Strict inequality between the delivered value and the snapshot.
///
/// An absent value, a numeric value, or an empty snapshot always counts as changed.
pub fn value_changed(delivered: Option<&InputValue>, snapshot: &Snapshot) -> bool {
    match (delivered, snapshot.value()) {
        (Some(v), Some(raw)) => !v.strictly_equals(raw),
        _ => true,
    }
}
