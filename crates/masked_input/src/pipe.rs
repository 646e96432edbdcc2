//! Post-processing applied to masking output before it is committed.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// What a pipe sees besides the conformed value.
#[derive(Clone, Copy, Debug)]
pub struct PipeContext<'a> {
    pub raw_value: &'a str,
    pub previous_conformed_value: &'a str,
    pub placeholder_char: char,
    pub guide: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipeOutcome {
    /// Refuse the edit; the engine keeps its previous value.
    Reject,
    Accept(String),
    /// Accept with the char indexes the pipe inserted, so the engine can place the caret past them.
    AcceptWithIndexes {
        value: String,
        piped_indexes: Vec<usize>,
    },
}

/// An owner-supplied transform, identified by its source text.
#[derive(Clone)]
pub struct Pipe {
    source: Cow<'static, str>,
    transform: Rc<dyn Fn(&str, &PipeContext<'_>) -> PipeOutcome>,
}

impl Pipe {
    pub fn new(
        source: impl Into<Cow<'static, str>>,
        transform: impl Fn(&str, &PipeContext<'_>) -> PipeOutcome + 'static,
    ) -> Self {
        Self {
            source: source.into(),
            transform: Rc::new(transform),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn apply(&self, conformed: &str, ctx: &PipeContext<'_>) -> PipeOutcome {
        (self.transform)(conformed, ctx)
    }
}

impl fmt::Debug for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Build a [`Pipe`] whose identity is the closure's own source text.
///
/// ```
/// use masked_input::{pipe_fn, PipeOutcome};
///
/// let upper = pipe_fn!(|value: &str, _ctx: &masked_input::PipeContext<'_>| {
///     PipeOutcome::Accept(value.to_uppercase())
/// });
/// assert!(upper.source().contains("to_uppercase"));
/// ```
#[macro_export]
macro_rules! pipe_fn {
    ($($closure:tt)+) => {
        $crate::Pipe::new(stringify!($($closure)+), $($closure)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_applies_transform() {
        let pipe = pipe_fn!(|value: &str, ctx: &PipeContext<'_>| {
            if value.contains(ctx.placeholder_char) {
                PipeOutcome::Reject
            } else {
                PipeOutcome::Accept(value.to_string())
            }
        });
        let ctx = PipeContext {
            raw_value: "12",
            previous_conformed_value: "",
            placeholder_char: '_',
            guide: true,
        };
        assert_eq!(pipe.apply("12_", &ctx), PipeOutcome::Reject);
        assert_eq!(pipe.apply("123", &ctx), PipeOutcome::Accept("123".into()));
    }
}
