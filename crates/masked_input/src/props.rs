//! Owner-facing props and what the render strategy receives.

use std::fmt;

use crate::config::MaskConfig;
use crate::value::InputValue;

/// Raw change notification from the handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Raw handle value when the notification fired, before re-masking.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlurEvent {
    pub value: String,
}

pub type EventHandler<E> = Box<dyn FnMut(&E)>;

/// Attributes passed through untouched to the rendered element.
///
/// Masking configuration cannot be expressed here; it lives in [`MaskConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputAttributes {
    pub id: Option<String>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub input_type: Option<String>,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub disabled: bool,
    pub read_only: bool,
    /// Anything else, as `(name, value)` pairs in delivery order.
    pub extra: Vec<(String, String)>,
}

/// Everything the owner delivers on one render cycle.
#[derive(Default)]
pub struct MaskedInputProps {
    pub config: MaskConfig,
    pub value: Option<InputValue>,
    pub on_change: Option<EventHandler<ChangeEvent>>,
    pub on_blur: Option<EventHandler<BlurEvent>>,
    pub attributes: InputAttributes,
}

impl MaskedInputProps {
    pub fn new(config: MaskConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<InputValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut(&BlurEvent) + 'static) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for MaskedInputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedInputProps")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// What the owner's render strategy receives.
///
/// The strategy builds the element from these, routes its change and blur
/// notifications to [`MaskedInput::handle_change`](crate::MaskedInput::handle_change)
/// and [`MaskedInput::handle_blur`](crate::MaskedInput::handle_blur), and
/// hands the resulting handle to [`MaskedInput::attach`](crate::MaskedInput::attach).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderProps {
    /// Initial content for a freshly created handle.
    pub default_value: Option<InputValue>,
    pub attributes: InputAttributes,
}
