//! Mask specifications.
//!
//! A mask is a fixed token sequence, a function deriving one from the raw
//! text, or disabled. Masks compare through their canonical text (see
//! [`Mask::canonical`]), never by reference identity.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled pattern matching a single character in a placeholder slot.
#[derive(Clone, Debug)]
pub struct CharPattern {
    regex: Regex,
}

impl CharPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|e| Error::InvalidMask(format!("placeholder /{pattern}/: {e}")))
    }

    /// The pattern source, without delimiters.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn matches(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(c.encode_utf8(&mut buf))
    }
}

impl PartialEq for CharPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CharPattern {}

/// One position of a fixed mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskToken {
    /// A character the mask inserts itself, e.g. `(` or `-`.
    Literal(char),
    /// A slot the user fills with a character matching the pattern.
    Placeholder(CharPattern),
}

impl MaskToken {
    pub fn placeholder(pattern: &str) -> Result<Self> {
        CharPattern::new(pattern).map(MaskToken::Placeholder)
    }
}

impl fmt::Display for MaskToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskToken::Literal(c) => write!(f, "{c}"),
            MaskToken::Placeholder(p) => write!(f, "/{}/", p.as_str()),
        }
    }
}

/// A mask derived from the current raw text.
///
/// Identity is the `source` text supplied at construction. Two `MaskFn`s with
/// the same source compare equal even if they capture different state; use
/// [`mask_fn!`](crate::mask_fn) to take the source from the closure itself.
#[derive(Clone)]
pub struct MaskFn {
    source: Cow<'static, str>,
    derive: Rc<dyn Fn(&str) -> Vec<MaskToken>>,
}

impl MaskFn {
    pub fn new(
        source: impl Into<Cow<'static, str>>,
        derive: impl Fn(&str) -> Vec<MaskToken> + 'static,
    ) -> Self {
        Self {
            source: source.into(),
            derive: Rc::new(derive),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn derive(&self, raw: &str) -> Vec<MaskToken> {
        (self.derive)(raw)
    }
}

impl fmt::Debug for MaskFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskFn")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Build a [`MaskFn`] whose identity is the closure's own source text.
///
/// ```
/// use masked_input::{mask_fn, MaskToken};
///
/// let a = mask_fn!(|raw: &str| raw.chars().map(MaskToken::Literal).collect());
/// let b = mask_fn!(|raw: &str| raw.chars().map(MaskToken::Literal).collect());
/// assert_eq!(a.source(), b.source());
/// ```
#[macro_export]
macro_rules! mask_fn {
    ($($closure:tt)+) => {
        $crate::MaskFn::new(stringify!($($closure)+), $($closure)+)
    };
}

#[derive(Clone, Debug, Default)]
pub enum Mask {
    /// Masking is off; the engine passes the raw text through.
    #[default]
    Disabled,
    Fixed(Vec<MaskToken>),
    Dynamic(MaskFn),
}

impl Mask {
    pub fn fixed(tokens: impl IntoIterator<Item = MaskToken>) -> Self {
        Mask::Fixed(tokens.into_iter().collect())
    }

    /// Tokens in effect for `raw`, or `None` when masking is disabled.
    pub fn tokens_for(&self, raw: &str) -> Option<Cow<'_, [MaskToken]>> {
        match self {
            Mask::Disabled => None,
            Mask::Fixed(tokens) => Some(Cow::Borrowed(tokens)),
            Mask::Dynamic(f) => Some(Cow::Owned(f.derive(raw))),
        }
    }

    /// Text form used for change detection.
    ///
    /// `Disabled` is `false`, a fixed mask joins its tokens with `,`
    /// (placeholders as `/pattern/`), a dynamic mask is its source text.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Mask::Disabled => Cow::Borrowed("false"),
            Mask::Fixed(tokens) => Cow::Owned(
                tokens
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Mask::Dynamic(f) => Cow::Borrowed(f.source()),
        }
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<Vec<MaskToken>> for Mask {
    fn from(tokens: Vec<MaskToken>) -> Self {
        Mask::Fixed(tokens)
    }
}

impl From<MaskFn> for Mask {
    fn from(f: MaskFn) -> Self {
        Mask::Dynamic(f)
    }
}
