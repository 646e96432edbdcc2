//! Masking-engine collaborator traits.
//!
//! The engine itself lives outside this crate. The synchronizer only builds
//! engines through an [`EngineFactory`] and drives them through
//! [`MaskEngine::update`].

use input_core::TextHandle;

use crate::config::MaskConfig;
use crate::error::Result;
use crate::value::InputValue;

/// A masking engine bound to one handle.
pub trait MaskEngine<H: TextHandle> {
    /// Re-mask the handle in place.
    ///
    /// With `Some(value)` the handle content is first coerced to `value`;
    /// with `None` the engine masks whatever raw content the handle holds.
    /// Either way the engine may rewrite the handle's value and caret.
    fn update(&mut self, handle: &mut H, value: Option<&InputValue>);
}

/// Builds engines for a handle from a configuration.
pub trait EngineFactory<H: TextHandle> {
    type Engine: MaskEngine<H>;

    /// Fails if the configuration is malformed (e.g. an invalid mask).
    fn build(&mut self, handle: &H, config: &MaskConfig) -> Result<Self::Engine>;
}

/// An [`EngineFactory`] backed by a closure. See [`factory_fn`].
#[derive(Clone, Debug)]
pub struct FnFactory<F> {
    f: F,
}

/// Wrap a closure as an [`EngineFactory`].
pub fn factory_fn<H, E, F>(f: F) -> FnFactory<F>
where
    H: TextHandle,
    E: MaskEngine<H>,
    F: FnMut(&H, &MaskConfig) -> Result<E>,
{
    FnFactory { f }
}

impl<H, E, F> EngineFactory<H> for FnFactory<F>
where
    H: TextHandle,
    E: MaskEngine<H>,
    F: FnMut(&H, &MaskConfig) -> Result<E>,
{
    type Engine = E;

    fn build(&mut self, handle: &H, config: &MaskConfig) -> Result<E> {
        (self.f)(handle, config)
    }
}
