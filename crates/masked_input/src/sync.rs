//! The synchronizer: engine lifecycle and notification forwarding.
//!
//! Each delivery is two-phase. [`MaskedInput::capture_snapshot`] reads the
//! handle before anything is applied; [`MaskedInput::apply_delivery`] then
//! compares configurations and values and picks exactly one of rebuild,
//! value-only update, or nothing. [`MaskedInput::deliver`] runs both phases
//! in the required order.

use input_core::TextHandle;

use crate::diff::{ConfigDiff, Snapshot, value_changed};
use crate::engine::{EngineFactory, MaskEngine};
use crate::error::Result;
use crate::props::{BlurEvent, ChangeEvent, MaskedInputProps, RenderProps};

const LIFECYCLE: &str = "masked_input.lifecycle";
const EVENTS: &str = "masked_input.events";

/// What a delivery did to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    /// Masking-relevant configuration changed; a fresh engine was built and fed the value.
    Rebuilt,
    /// Only the value changed; the existing engine was updated with it.
    ValueUpdated,
    Unchanged,
    /// No handle attached yet; the props were stored for attachment.
    Deferred,
}

enum Lifecycle<H, E> {
    Unattached,
    Attached { handle: H, engine: E },
}

/// Keeps one text handle in sync with a masking engine.
pub struct MaskedInput<H, F>
where
    H: TextHandle,
    F: EngineFactory<H>,
{
    props: MaskedInputProps,
    factory: F,
    lifecycle: Lifecycle<H, F::Engine>,
}

impl<H, F> MaskedInput<H, F>
where
    H: TextHandle,
    F: EngineFactory<H>,
{
    pub fn new(props: MaskedInputProps, factory: F) -> Self {
        Self {
            props,
            factory,
            lifecycle: Lifecycle::Unattached,
        }
    }

    pub fn props(&self) -> &MaskedInputProps {
        &self.props
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Attached { .. })
    }

    pub fn handle(&self) -> Option<&H> {
        match &self.lifecycle {
            Lifecycle::Attached { handle, .. } => Some(handle),
            Lifecycle::Unattached => None,
        }
    }

    /// Mutable access for the host to apply user edits before calling
    /// [`handle_change`](Self::handle_change).
    pub fn handle_mut(&mut self) -> Option<&mut H> {
        match &mut self.lifecycle {
            Lifecycle::Attached { handle, .. } => Some(handle),
            Lifecycle::Unattached => None,
        }
    }

    /// Read-only view of the bound engine.
    pub fn engine(&self) -> Option<&F::Engine> {
        match &self.lifecycle {
            Lifecycle::Attached { engine, .. } => Some(engine),
            Lifecycle::Unattached => None,
        }
    }

    pub fn render_props(&self) -> RenderProps {
        RenderProps {
            default_value: self.props.value.clone(),
            attributes: self.props.attributes.clone(),
        }
    }

    /// Hand the render props to the owner's strategy.
    pub fn render<R>(&self, strategy: impl FnOnce(RenderProps) -> R) -> R {
        strategy(self.render_props())
    }

    /// Bind a handle: build an engine from the current config and apply the current value.
    ///
    /// Attaching while already attached replaces the handle and its engine
    /// once the new engine is built. If the build fails the error is
    /// returned, any previous binding stays in place and `handle` is dropped.
    pub fn attach(&mut self, mut handle: H) -> Result<()> {
        let mut engine = self.factory.build(&handle, &self.props.config)?;
        engine.update(&mut handle, self.props.value.as_ref());
        if self.is_attached() {
            log::debug!(target: LIFECYCLE, "re-attach: releasing previous handle and engine");
        }
        log::debug!(
            target: LIFECYCLE,
            "attached: mask={} value={:?}",
            self.props.config.mask,
            self.props.value
        );
        self.lifecycle = Lifecycle::Attached { handle, engine };
        Ok(())
    }

    /// Release the engine and give the handle back to the owner.
    pub fn detach(&mut self) -> Option<H> {
        match std::mem::replace(&mut self.lifecycle, Lifecycle::Unattached) {
            Lifecycle::Attached { handle, .. } => {
                log::debug!(target: LIFECYCLE, "detached");
                Some(handle)
            }
            Lifecycle::Unattached => None,
        }
    }

    /// Phase one of a delivery: the handle's raw value before anything is applied.
    pub fn capture_snapshot(&self) -> Snapshot {
        Snapshot::of(self.handle().map(|h| h.value()))
    }

    /// Phase two of a delivery.
    ///
    /// `snapshot` must come from [`capture_snapshot`](Self::capture_snapshot)
    /// taken before this delivery touched the handle. On a failed rebuild the
    /// previous engine stays bound together with the config it was built
    /// from, so redelivering the rejected config fails again; the rest of
    /// the new props (value, handlers, attributes) is kept.
    pub fn apply_delivery(
        &mut self,
        props: MaskedInputProps,
        snapshot: Snapshot,
    ) -> Result<SyncAction> {
        let prev = std::mem::replace(&mut self.props, props);

        let Lifecycle::Attached { handle, engine } = &mut self.lifecycle else {
            log::debug!(target: LIFECYCLE, "delivery before attach: stored");
            return Ok(SyncAction::Deferred);
        };

        let diff = ConfigDiff::between(&prev.config, &self.props.config);
        if diff.is_changed() {
            log::trace!(target: LIFECYCLE, "settings diff: {diff:?}");
            let mut rebuilt = match self.factory.build(handle, &self.props.config) {
                Ok(rebuilt) => rebuilt,
                Err(err) => {
                    log::debug!(target: LIFECYCLE, "rebuild failed, keeping previous engine: {err}");
                    self.props.config = prev.config;
                    return Err(err);
                }
            };
            rebuilt.update(handle, self.props.value.as_ref());
            *engine = rebuilt;
            log::debug!(target: LIFECYCLE, "rebuilt engine: mask={}", self.props.config.mask);
            return Ok(SyncAction::Rebuilt);
        }

        if value_changed(self.props.value.as_ref(), &snapshot) {
            log::debug!(
                target: LIFECYCLE,
                "value update: {:?} -> {:?}",
                snapshot.value(),
                self.props.value
            );
            engine.update(handle, self.props.value.as_ref());
            return Ok(SyncAction::ValueUpdated);
        }

        Ok(SyncAction::Unchanged)
    }

    /// Snapshot, then apply.
    pub fn deliver(&mut self, props: MaskedInputProps) -> Result<SyncAction> {
        let snapshot = self.capture_snapshot();
        self.apply_delivery(props, snapshot)
    }

    /// Raw change from the handle: re-mask in place, then forward the event unmodified.
    pub fn handle_change(&mut self, event: &ChangeEvent) {
        if let Lifecycle::Attached { handle, engine } = &mut self.lifecycle {
            engine.update(handle, None);
        }
        log::trace!(target: EVENTS, "change: {:?}", event.value);
        if let Some(on_change) = self.props.on_change.as_mut() {
            on_change(event);
        }
    }

    pub fn handle_blur(&mut self, event: &BlurEvent) {
        log::trace!(target: EVENTS, "blur");
        if let Some(on_blur) = self.props.on_blur.as_mut() {
            on_blur(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MaskConfig;
    use crate::engine::factory_fn;
    use crate::error::Error;
    use crate::mask::{Mask, MaskToken};
    use crate::value::InputValue;
    use input_core::InputHandle;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Call {
        Build(usize),
        Update(usize, Option<InputValue>),
    }

    type Calls = Rc<RefCell<Vec<Call>>>;

    /// Writes the coerced value straight through and records every call.
    struct EchoEngine {
        id: usize,
        calls: Calls,
    }

    impl MaskEngine<InputHandle> for EchoEngine {
        fn update(&mut self, handle: &mut InputHandle, value: Option<&InputValue>) {
            self.calls
                .borrow_mut()
                .push(Call::Update(self.id, value.cloned()));
            if let Some(v) = value {
                handle.replace_value(v.to_text().into_owned());
            }
        }
    }

    fn recording_factory(
        calls: &Calls,
    ) -> impl EngineFactory<InputHandle, Engine = EchoEngine> + use<> {
        let calls = calls.clone();
        let mut next = 0;
        factory_fn(move |handle: &InputHandle, config: &MaskConfig| {
            if config.placeholder_char == '!' || handle.value() == "!" {
                return Err(Error::InvalidMask("bang".into()));
            }
            next += 1;
            calls.borrow_mut().push(Call::Build(next));
            Ok(EchoEngine {
                id: next,
                calls: calls.clone(),
            })
        })
    }

    fn digits(n: usize) -> MaskConfig {
        MaskConfig::new(Mask::fixed(
            (0..n).map(|_| MaskToken::placeholder(r"\d").unwrap()),
        ))
    }

    #[test]
    fn attach_builds_then_applies_initial_value() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3)).with_value("123"),
            recording_factory(&calls),
        );
        assert!(!input.is_attached());

        input.attach(InputHandle::new()).unwrap();
        assert!(input.is_attached());
        assert_eq!(
            *calls.borrow(),
            vec![Call::Build(1), Call::Update(1, Some("123".into()))]
        );
        assert_eq!(input.handle().unwrap().value(), "123");
    }

    #[test]
    fn delivery_before_attach_is_deferred() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(MaskedInputProps::new(digits(3)), recording_factory(&calls));

        let action = input
            .deliver(MaskedInputProps::new(digits(4)).with_value("9"))
            .unwrap();
        assert_eq!(action, SyncAction::Deferred);
        assert!(calls.borrow().is_empty());

        input.attach(InputHandle::new()).unwrap();
        assert_eq!(calls.borrow()[1], Call::Update(1, Some("9".into())));
    }

    #[test]
    fn stale_snapshot_is_what_decides() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3)).with_value("1"),
            recording_factory(&calls),
        );
        input.attach(InputHandle::new()).unwrap();

        // Snapshot taken while the handle shows "1"; delivering "1" is a no-op.
        let snapshot = input.capture_snapshot();
        let action = input
            .apply_delivery(MaskedInputProps::new(digits(3)).with_value("1"), snapshot)
            .unwrap();
        assert_eq!(action, SyncAction::Unchanged);
    }

    #[test]
    fn failed_rebuild_keeps_previous_engine() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3)).with_value("1"),
            recording_factory(&calls),
        );
        input.attach(InputHandle::new()).unwrap();

        let err = input
            .deliver(MaskedInputProps::new(digits(3).with_placeholder_char('!')).with_value("1"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidMask(_)));
        assert!(input.is_attached());
        assert_eq!(input.engine().unwrap().id, 1);
        assert_eq!(input.props().config.placeholder_char, '_');
    }

    #[test]
    fn rejected_config_keeps_failing_until_fixed() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3)).with_value("1"),
            recording_factory(&calls),
        );
        input.attach(InputHandle::new()).unwrap();

        let bad = || MaskedInputProps::new(digits(3).with_placeholder_char('!')).with_value("1");
        assert!(input.deliver(bad()).is_err());
        assert!(input.deliver(bad()).is_err());

        let action = input
            .deliver(MaskedInputProps::new(digits(3)).with_value("1"))
            .unwrap();
        assert_eq!(action, SyncAction::Unchanged);
        assert_eq!(input.engine().unwrap().id, 1);
    }

    #[test]
    fn failed_reattach_keeps_working_binding() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3)).with_value("12"),
            recording_factory(&calls),
        );
        input.attach(InputHandle::new()).unwrap();

        assert!(input.attach(InputHandle::with_value("!")).is_err());
        assert!(input.is_attached());
        assert_eq!(input.engine().unwrap().id, 1);
        assert_eq!(input.handle().unwrap().value(), "12");
    }

    #[test]
    fn failed_attach_stays_unattached() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3).with_placeholder_char('!')),
            recording_factory(&calls),
        );
        assert!(input.attach(InputHandle::new()).is_err());
        assert!(!input.is_attached());
        assert!(input.detach().is_none());
    }

    #[test]
    fn reattach_builds_a_fresh_engine() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(MaskedInputProps::new(digits(3)), recording_factory(&calls));
        input.attach(InputHandle::new()).unwrap();
        input.attach(InputHandle::with_value("x")).unwrap();
        assert_eq!(input.engine().unwrap().id, 2);
    }

    #[test]
    fn detach_returns_the_handle() {
        let calls = Calls::default();
        let mut input = MaskedInput::new(
            MaskedInputProps::new(digits(3)).with_value("42"),
            recording_factory(&calls),
        );
        input.attach(InputHandle::new()).unwrap();

        let handle = input.detach().unwrap();
        assert_eq!(handle.value(), "42");
        assert!(input.engine().is_none());
        assert_eq!(input.capture_snapshot(), Snapshot::default());
    }

    #[test]
    fn render_passes_default_value_and_attributes_only() {
        let calls = Calls::default();
        let mut props = MaskedInputProps::new(digits(3)).with_value(7i64);
        props.attributes.name = Some("phone".into());
        let input: MaskedInput<InputHandle, _> = MaskedInput::new(props, recording_factory(&calls));

        let rendered = input.render(|p| p);
        assert_eq!(rendered.default_value, Some(InputValue::Number(7.0)));
        assert_eq!(rendered.attributes.name.as_deref(), Some("phone"));
    }

    #[test]
    fn change_before_attach_still_forwards() {
        let calls = Calls::default();
        let seen = Rc::new(RefCell::new(0));
        let counter = seen.clone();
        let mut input: MaskedInput<InputHandle, _> = MaskedInput::new(
            MaskedInputProps::new(digits(3)).on_change(move |_| *counter.borrow_mut() += 1),
            recording_factory(&calls),
        );
        input.handle_change(&ChangeEvent { value: "1".into() });
        assert_eq!(*seen.borrow(), 1);
        assert!(calls.borrow().is_empty());
    }
}
