//! # masked_input
//!
//! Keeps an editable-text handle in sync with an external, stateful masking
//! engine (phone numbers, dates, currency...).
//!
//! On every delivery of `(config, value)` from the owner, [`MaskedInput`]
//! decides whether the engine must be rebuilt (masking-relevant configuration
//! changed), merely told about a new value (the owner pushed a value the
//! handle does not already show), or left alone. Raw change notifications
//! from the handle re-mask in place and are forwarded to the owner.
//!
//! ## Crate layout
//!
//! - [`MaskConfig`], [`Mask`], [`Pipe`]: the masking configuration
//! - [`ConfigDiff`], [`value_changed`]: the two change detectors
//! - [`MaskEngine`], [`EngineFactory`]: the engine collaborator contract
//! - [`MaskedInput`]: lifecycle controller and notification forwarder
//!
//! ```
//! use input_core::{InputHandle, TextHandle};
//! use masked_input::{
//!     factory_fn, InputValue, MaskConfig, MaskEngine, MaskedInput, MaskedInputProps, SyncAction,
//! };
//!
//! struct PassThrough;
//!
//! impl MaskEngine<InputHandle> for PassThrough {
//!     fn update(&mut self, handle: &mut InputHandle, value: Option<&InputValue>) {
//!         if let Some(v) = value {
//!             handle.replace_value(v.to_text().into_owned());
//!         }
//!     }
//! }
//!
//! let factory = factory_fn(|_: &InputHandle, _: &MaskConfig| Ok(PassThrough));
//! let mut input = MaskedInput::new(MaskedInputProps::default().with_value("123"), factory);
//! input.attach(InputHandle::new())?;
//!
//! let action = input.deliver(MaskedInputProps::default().with_value("456"))?;
//! assert_eq!(action, SyncAction::ValueUpdated);
//! assert_eq!(input.handle().unwrap().value(), "456");
//! # Ok::<(), masked_input::Error>(())
//! ```

mod config;
mod diff;
mod engine;
mod error;
mod mask;
mod pipe;
mod props;
mod sync;
mod value;

pub use config::MaskConfig;
pub use diff::{ConfigDiff, Snapshot, pipe_changed, settings_changed, value_changed};
pub use engine::{EngineFactory, FnFactory, MaskEngine, factory_fn};
pub use error::{Error, Result};
pub use mask::{CharPattern, Mask, MaskFn, MaskToken};
pub use pipe::{Pipe, PipeContext, PipeOutcome};
pub use props::{
    BlurEvent, ChangeEvent, EventHandler, InputAttributes, MaskedInputProps, RenderProps,
};
pub use sync::{MaskedInput, SyncAction};
pub use value::InputValue;
