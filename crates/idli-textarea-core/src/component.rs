use tracing::debug;
use tracing::trace;

use crate::classes;
use crate::dom::Element;
use crate::error::AttributeError;
use crate::event::EventEmitter;
use crate::event::InputChangeEvent;
use crate::event::ListenerId;
use crate::event::NativeInputEvent;
use crate::props::Attribute;
use crate::props::InputType;
use crate::props::Size;
use crate::props::TAG;
use crate::props::TextAreaProps;
use crate::props::Variant;

/// Host-side settings that are not markup attributes. Hosts set these in code; they are not
/// reachable through [`IdliTextArea::set_attribute`].
#[derive(Clone, Debug)]
pub struct TextAreaOptions {
    /// Visible rows of the rendered textarea. The default of 4 is the component's own row count;
    /// hosts that need a taller field raise it.
    pub rows: u16,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self { rows: 4 }
    }
}

/// The `idli-textarea` component: a label above a multi-line text input.
///
/// The component holds only its attributes. [`IdliTextArea::render`] derives the element tree
/// from them on every call, and [`IdliTextArea::handle_input`] is the single code path that
/// mutates `value` and notifies listeners.
#[derive(Debug, Default)]
pub struct IdliTextArea {
    props: TextAreaProps,
    options: TextAreaOptions,
    input_change: EventEmitter<InputChangeEvent>,
}

impl IdliTextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_props(props: TextAreaProps) -> Self {
        Self {
            props,
            ..Self::new()
        }
    }

    pub fn with_options(mut self, options: TextAreaOptions) -> Self {
        self.options = options;
        self
    }

    pub fn tag(&self) -> &'static str {
        TAG
    }

    pub fn props(&self) -> &TextAreaProps {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut TextAreaProps {
        &mut self.props
    }

    pub fn options(&self) -> &TextAreaOptions {
        &self.options
    }

    pub fn value(&self) -> Option<&str> {
        self.props.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = Some(value.into());
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.props.label = Some(label.into());
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.props.placeholder = Some(placeholder.into());
    }

    pub fn set_size(&mut self, size: Option<Size>) {
        self.props.size = size;
    }

    pub fn set_variant(&mut self, variant: Option<Variant>) {
        self.props.variant = variant;
    }

    pub fn set_input_type(&mut self, input_type: Option<InputType>) {
        self.props.input_type = input_type;
    }

    pub fn set_inline(&mut self, inline: bool) {
        self.props.inline = inline;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    /// Writes an attribute by markup name.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        let attr: Attribute = name.parse()?;
        debug!(tag = TAG, attribute = %attr, value, "set attribute");
        self.props.set(attr, value);
        Ok(())
    }

    pub fn get_attribute(&self, name: &str) -> Result<Option<String>, AttributeError> {
        let attr: Attribute = name.parse()?;
        Ok(self.props.get(attr))
    }

    pub fn remove_attribute(&mut self, name: &str) -> Result<(), AttributeError> {
        let attr: Attribute = name.parse()?;
        debug!(tag = TAG, attribute = %attr, "remove attribute");
        self.props.reset(attr);
        Ok(())
    }

    pub fn class_name(&self) -> String {
        classes::root_class(&self.props)
    }

    pub fn render(&self) -> Element {
        let label = Element::new("label").with_text(self.props.label.clone().unwrap_or_default());

        let mut textarea = Element::new("textarea")
            .with_attr("rows", self.options.rows.to_string())
            .with_attr("class", classes::ELEMENT_CLASS)
            .with_optional_attr("placeholder", self.props.placeholder.as_deref())
            .with_flag("disabled", self.props.disabled);
        if let Some(value) = self.props.value.as_deref() {
            textarea = textarea.with_prop("value", value);
        }

        Element::new("div")
            .with_attr("class", self.class_name())
            .with_child(label)
            .with_child(textarea)
    }

    pub fn on_input_change(&mut self, listener: impl FnMut(&InputChangeEvent) + 'static) -> ListenerId {
        self.input_change.subscribe(listener)
    }

    pub fn off_input_change(&mut self, id: ListenerId) -> bool {
        self.input_change.unsubscribe(id)
    }

    /// Applies a native input event. Returns the emitted notification, or `None` when the
    /// component is disabled and the event was ignored.
    pub fn handle_input(&mut self, event: NativeInputEvent) -> Option<InputChangeEvent> {
        if self.props.disabled {
            trace!(tag = TAG, "input ignored while disabled");
            return None;
        }

        let old_value = self.props.value.replace(event.target_value.clone());
        let change = InputChangeEvent {
            new_value: event.target_value.clone(),
            old_value,
            original_event: event,
        };
        let delivered = self.input_change.emit(&change);
        debug!(
            tag = TAG,
            event = InputChangeEvent::NAME,
            listeners = delivered,
            "emitted change"
        );
        Some(change)
    }
}
