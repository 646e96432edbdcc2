//! Engine doubles for exercising `masked_input` end to end.
//!
//! [`SimpleMaskFactory`] builds [`SimpleMaskEngine`]s and records every
//! build and update in a shared [`EngineLog`]. The engine is a small
//! stand-in: it fills placeholders left to right, honours `guide`,
//! `show_mask`, `placeholder_char` and `pipe`, and puts the caret after the
//! last filled slot (or after the last character a pipe reports inserting).
//! It is not a full masking algorithm.

use std::cell::RefCell;
use std::rc::Rc;

use input_core::{SelectionRange, TextHandle, char_to_byte_offset};
use masked_input::{
    EngineFactory, Error, InputValue, Mask, MaskConfig, MaskEngine, MaskToken, PipeContext,
    PipeOutcome, Result,
};

#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    Build { engine: usize, mask: String },
    Update { engine: usize, value: Option<InputValue> },
}

/// Shared, cloneable record of engine calls.
#[derive(Clone, Debug, Default)]
pub struct EngineLog(Rc<RefCell<Vec<EngineCall>>>);

impl EngineLog {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.0.borrow().clone()
    }

    pub fn builds(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|c| matches!(c, EngineCall::Build { .. }))
            .count()
    }

    /// Values passed to `update`, in order.
    pub fn updates(&self) -> Vec<Option<InputValue>> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                EngineCall::Update { value, .. } => Some(value.clone()),
                EngineCall::Build { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, call: EngineCall) {
        self.0.borrow_mut().push(call);
    }
}

#[derive(Debug, Default)]
pub struct SimpleMaskFactory {
    log: EngineLog,
    next_id: usize,
}

impl SimpleMaskFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> EngineLog {
        self.log.clone()
    }
}

impl<H: TextHandle> EngineFactory<H> for SimpleMaskFactory {
    type Engine = SimpleMaskEngine;

    fn build(&mut self, _handle: &H, config: &MaskConfig) -> Result<SimpleMaskEngine> {
        if let Mask::Fixed(tokens) = &config.mask {
            if tokens.contains(&MaskToken::Literal(config.placeholder_char)) {
                return Err(Error::PlaceholderInMask(config.placeholder_char));
            }
        }

        self.next_id += 1;
        self.log.push(EngineCall::Build {
            engine: self.next_id,
            mask: config.mask.canonical().into_owned(),
        });
        Ok(SimpleMaskEngine {
            id: self.next_id,
            config: config.clone(),
            previous_conformed: String::new(),
            log: self.log.clone(),
        })
    }
}

#[derive(Debug)]
pub struct SimpleMaskEngine {
    id: usize,
    config: MaskConfig,
    previous_conformed: String,
    log: EngineLog,
}

impl SimpleMaskEngine {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }
}

impl<H: TextHandle> MaskEngine<H> for SimpleMaskEngine {
    fn update(&mut self, handle: &mut H, value: Option<&InputValue>) {
        self.log.push(EngineCall::Update {
            engine: self.id,
            value: value.cloned(),
        });

        let raw = match value {
            Some(v) => v.to_text().into_owned(),
            None => handle.value().to_owned(),
        };

        let (conformed, filled) = match self.config.mask.tokens_for(&raw) {
            None => (raw.clone(), raw.chars().count()),
            Some(_) if raw.is_empty() && !self.config.show_mask => (String::new(), 0),
            Some(tokens) => conform(&tokens, &raw, &self.config),
        };

        let (conformed, filled) = match &self.config.pipe {
            None => (conformed, filled),
            Some(pipe) => {
                let ctx = PipeContext {
                    raw_value: &raw,
                    previous_conformed_value: &self.previous_conformed,
                    placeholder_char: self.config.placeholder_char,
                    guide: self.config.guide,
                };
                match pipe.apply(&conformed, &ctx) {
                    PipeOutcome::Reject => (self.previous_conformed.clone(), filled),
                    PipeOutcome::Accept(v) => (v, filled),
                    // Inserted characters push the caret past them.
                    PipeOutcome::AcceptWithIndexes {
                        value,
                        piped_indexes,
                    } => {
                        let past_last = piped_indexes.iter().max().map_or(0, |i| i + 1);
                        (value, filled.max(past_last))
                    }
                }
            }
        };

        handle.replace_value(conformed.clone());
        if handle.is_focused() {
            let caret = char_to_byte_offset(handle.value(), filled);
            handle.set_selection(SelectionRange::caret(caret));
        }
        self.previous_conformed = conformed;
    }
}

/// Fill placeholders left to right; returns the text and the char count up to the last filled slot.
fn conform(tokens: &[MaskToken], raw: &str, config: &MaskConfig) -> (String, usize) {
    let mut pending = raw
        .chars()
        .filter(|c| *c != config.placeholder_char)
        .peekable();
    let mut out = String::new();
    let mut len = 0;
    let mut filled = 0;

    for token in tokens {
        match token {
            MaskToken::Literal(l) => {
                if !config.guide && pending.peek().is_none() {
                    break;
                }
                if pending.peek() == Some(l) {
                    pending.next();
                }
                out.push(*l);
                len += 1;
            }
            MaskToken::Placeholder(p) => match pending.by_ref().find(|c| p.matches(*c)) {
                Some(c) => {
                    out.push(c);
                    len += 1;
                    filled = len;
                }
                None if config.guide => {
                    out.push(config.placeholder_char);
                    len += 1;
                }
                None => break,
            },
        }
    }
    (out, filled)
}

/// `(`, three digits, `)`.
pub fn area_code_mask() -> Mask {
    Mask::fixed([
        MaskToken::Literal('('),
        digit(),
        digit(),
        digit(),
        MaskToken::Literal(')'),
    ])
}

/// `n` digit placeholders.
pub fn digits_mask(n: usize) -> Mask {
    Mask::fixed((0..n).map(|_| digit()))
}

fn digit() -> MaskToken {
    MaskToken::placeholder(r"\d").expect(r"\d is a valid pattern")
}
