//! `idli-textarea-core` implements the `idli-textarea` component: a label followed by a
//! multi-line text input, styled purely through class tokens.
//!
//! ## Layers
//!
//! - [`props::TextAreaProps`]: the eight attributes, settable typed or by markup name.
//! - [`classes`]: pure functions from attributes to the root class string.
//! - [`component::IdliTextArea`]: renders a [`dom::Element`] tree and turns native input
//!   events into [`event::InputChangeEvent`] notifications.
//! - [`tui::TuiTextArea`]: a terminal host that paints the element tree with ratatui and feeds
//!   key input back into the component, styled by a [`style::Stylesheet`].
//!
//! ## Design goals
//!
//! - Event-loop agnostic: the host drives input and rendering.
//! - No async runtime: listeners run synchronously on the caller's thread.
//! - Never rejects attribute values: unknown enum values flow verbatim into class tokens.
pub mod classes;
pub mod component;
pub mod dom;
pub mod error;
pub mod event;
pub mod props;

pub mod input;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod editor;
pub mod render;
pub mod style;
pub mod tui;
pub mod viewport;
