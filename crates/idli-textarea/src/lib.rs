//! `idli-textarea` is the batteries-included facade for the `idli-textarea` component.
//!
//! It re-exports the core modules and adds [`registry`], which lets a host create components
//! by tag and drive them through the [`registry::CustomElement`] trait.
//!
//! ```
//! use idli_textarea::event::NativeInputEvent;
//! use idli_textarea::registry::ElementRegistry;
//!
//! let registry = ElementRegistry::with_defaults();
//! let mut el = registry.create("idli-textarea").unwrap();
//! el.set_attribute("label", "Notes").unwrap();
//! el.set_attribute("size", "lg").unwrap();
//! assert!(el.render().has_class("size-lg"));
//!
//! let change = el.dispatch_input(NativeInputEvent::new("hello")).unwrap();
//! assert_eq!(change.new_value, "hello");
//! ```
pub use idli_textarea_core::classes;
pub use idli_textarea_core::component;
pub use idli_textarea_core::dom;
pub use idli_textarea_core::editor;
pub use idli_textarea_core::error;
pub use idli_textarea_core::event;
pub use idli_textarea_core::input;
pub use idli_textarea_core::props;
pub use idli_textarea_core::style;
pub use idli_textarea_core::tui;

#[cfg(feature = "crossterm")]
pub use idli_textarea_core::crossterm_input;

pub mod registry;

pub use idli_textarea_core::component::IdliTextArea;
pub use idli_textarea_core::tui::TuiTextArea;
