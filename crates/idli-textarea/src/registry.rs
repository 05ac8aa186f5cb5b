//! Tag-based element registration.
//!
//! Hosts look components up by tag and drive them through [`CustomElement`], never through the
//! concrete type. [`ElementRegistry::with_defaults`] knows `idli-textarea`.

use std::collections::BTreeMap;
use std::fmt;

use idli_textarea_core::component::IdliTextArea;
use idli_textarea_core::dom::Element;
use idli_textarea_core::error::AttributeError;
use idli_textarea_core::event::InputChangeEvent;
use idli_textarea_core::event::NativeInputEvent;
use idli_textarea_core::props::TAG;
use tracing::debug;

/// The host-facing surface of a registered component.
pub trait CustomElement: fmt::Debug {
    fn tag(&self) -> &'static str;

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError>;

    fn get_attribute(&self, name: &str) -> Result<Option<String>, AttributeError>;

    fn remove_attribute(&mut self, name: &str) -> Result<(), AttributeError>;

    fn render(&self) -> Element;

    /// Delivers a native input event from the rendered tree. Returns the notification the host
    /// should propagate to ancestor listeners, if any.
    fn dispatch_input(&mut self, event: NativeInputEvent) -> Option<InputChangeEvent>;
}

impl CustomElement for IdliTextArea {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        IdliTextArea::set_attribute(self, name, value)
    }

    fn get_attribute(&self, name: &str) -> Result<Option<String>, AttributeError> {
        IdliTextArea::get_attribute(self, name)
    }

    fn remove_attribute(&mut self, name: &str) -> Result<(), AttributeError> {
        IdliTextArea::remove_attribute(self, name)
    }

    fn render(&self) -> Element {
        IdliTextArea::render(self)
    }

    fn dispatch_input(&mut self, event: NativeInputEvent) -> Option<InputChangeEvent> {
        self.handle_input(event)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("<{0}> is already defined")]
    AlreadyDefined(String),
    #[error("<{0}> is not defined")]
    Undefined(String),
}

pub type Constructor = fn() -> Box<dyn CustomElement>;

#[derive(Clone, Debug, Default)]
pub struct ElementRegistry {
    definitions: BTreeMap<String, Constructor>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every component of this crate defined.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.definitions.insert(TAG.to_string(), || {
            Box::new(IdliTextArea::new()) as Box<dyn CustomElement>
        });
        registry
    }

    /// Tags are case-insensitive. A tag can only be defined once.
    pub fn define(&mut self, tag: &str, constructor: Constructor) -> Result<(), RegistryError> {
        let tag = tag.to_ascii_lowercase();
        if self.definitions.contains_key(&tag) {
            return Err(RegistryError::AlreadyDefined(tag));
        }
        debug!(tag = %tag, "defined element");
        self.definitions.insert(tag, constructor);
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(&tag.to_ascii_lowercase())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn create(&self, tag: &str) -> Result<Box<dyn CustomElement>, RegistryError> {
        let tag = tag.to_ascii_lowercase();
        let constructor = self
            .definitions
            .get(&tag)
            .ok_or_else(|| RegistryError::Undefined(tag.clone()))?;
        debug!(tag = %tag, "created element");
        Ok(constructor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_define_textarea() {
        let registry = ElementRegistry::with_defaults();
        assert!(registry.is_defined("idli-textarea"));
        assert!(registry.is_defined("IDLI-TEXTAREA"));
        assert_eq!(registry.tags().collect::<Vec<_>>(), vec!["idli-textarea"]);
    }

    #[test]
    fn created_element_is_driven_by_name() {
        let registry = ElementRegistry::with_defaults();
        let mut el = registry.create("idli-textarea").unwrap();
        assert_eq!(el.tag(), "idli-textarea");
        el.set_attribute("label", "Bio").unwrap();
        el.set_attribute("value", "old").unwrap();
        let change = el.dispatch_input(NativeInputEvent::new("new")).unwrap();
        assert_eq!(change.old_value.as_deref(), Some("old"));
        assert_eq!(el.get_attribute("value").unwrap().as_deref(), Some("new"));
        assert_eq!(
            el.render().find("label").map(Element::text_content).as_deref(),
            Some("Bio")
        );
    }

    #[test]
    fn redefining_a_tag_fails() {
        let mut registry = ElementRegistry::with_defaults();
        let err = registry
            .define("idli-textarea", || {
                Box::new(IdliTextArea::new()) as Box<dyn CustomElement>
            })
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyDefined("idli-textarea".into()));
    }

    #[test]
    fn creating_unknown_tag_fails() {
        let registry = ElementRegistry::new();
        assert_eq!(
            registry.create("idli-button").unwrap_err(),
            RegistryError::Undefined("idli-button".into())
        );
    }
}
