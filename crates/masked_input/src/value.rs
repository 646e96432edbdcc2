//! The logical value an owner delivers.

use std::borrow::Cow;

/// A delivered field value: text or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
}

impl InputValue {
    /// Text form handed to the masking engine.
    ///
    /// Numbers print the way a browser stringifies them: shortest round-trip
    /// digits, `0` for both zeros, and exponent form with an explicit sign
    /// outside `1e-6 <= |n| < 1e21`.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            InputValue::Text(s) => Cow::Borrowed(s),
            InputValue::Number(n) => Cow::Owned(number_to_text(*n)),
        }
    }

    /// Strict equality against raw handle text: a number never equals text.
    pub fn strictly_equals(&self, text: &str) -> bool {
        matches!(self, InputValue::Text(s) if s == text)
    }
}

fn number_to_text(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((digits, exp)) if !exp.starts_with('-') => format!("{digits}e+{exp}"),
        _ => text,
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        InputValue::Number(n as f64)
    }
}
