//! Token-keyed stylesheet for terminal hosts.
//!
//! The component only emits class tokens; a [`Stylesheet`] decides what they look like. Rules
//! cascade in class-list order, so a later token overrides an earlier one on any property both
//! set. Tokens without a rule are ignored.

use std::collections::BTreeMap;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::symbols::border;

use crate::classes;

pub const DASHED: border::Set = border::Set {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    vertical_left: "╎",
    vertical_right: "╎",
    horizontal_top: "╌",
    horizontal_bottom: "╌",
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rule {
    pub style: Option<Style>,
    pub border: Option<border::Set>,
    /// Blank columns between the border and the text, on each side.
    pub padding_x: Option<u16>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_border(mut self, border: border::Set) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_padding_x(mut self, padding_x: u16) -> Self {
        self.padding_x = Some(padding_x);
        self
    }
}

/// Result of cascading every matching rule for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputedStyle {
    pub style: Style,
    pub border: border::Set,
    pub padding_x: u16,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            style: Style::default(),
            border: border::PLAIN,
            padding_x: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Stylesheet {
    rules: BTreeMap<String, Rule>,
    pub label: Style,
    pub placeholder: Style,
    /// Patched over the cascade when the textarea is disabled.
    pub disabled: Style,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::empty()
            .with_rule(classes::BASE_CLASS, Rule::new().with_border(border::PLAIN))
            .with_rule("variant-default", Rule::new().with_border(border::PLAIN))
            .with_rule("variant-dashed", Rule::new().with_border(DASHED))
            .with_rule("size-sm", Rule::new().with_padding_x(0))
            .with_rule("size-md", Rule::new().with_padding_x(1))
            .with_rule(
                "size-lg",
                Rule::new()
                    .with_padding_x(2)
                    .with_style(Style::new().add_modifier(Modifier::BOLD)),
            )
            .with_rule("type-number", Rule::new().with_style(Style::new().fg(Color::Cyan)))
            .with_label(Style::new().add_modifier(Modifier::BOLD))
            .with_placeholder(
                Style::new()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .with_disabled(Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM))
    }
}

impl Stylesheet {
    /// A sheet with no rules; every element renders with the terminal defaults.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
            label: Style::default(),
            placeholder: Style::default(),
            disabled: Style::default(),
        }
    }

    pub fn with_rule(mut self, token: impl Into<String>, rule: Rule) -> Self {
        self.set_rule(token, rule);
        self
    }

    pub fn with_label(mut self, style: Style) -> Self {
        self.label = style;
        self
    }

    pub fn with_placeholder(mut self, style: Style) -> Self {
        self.placeholder = style;
        self
    }

    pub fn with_disabled(mut self, style: Style) -> Self {
        self.disabled = style;
        self
    }

    pub fn set_rule(&mut self, token: impl Into<String>, rule: Rule) {
        self.rules.insert(token.into(), rule);
    }

    pub fn rule(&self, token: &str) -> Option<&Rule> {
        self.rules.get(token)
    }

    pub fn compute<'a>(
        &self,
        tokens: impl IntoIterator<Item = &'a str>,
        disabled: bool,
    ) -> ComputedStyle {
        let mut out = ComputedStyle::default();
        for rule in tokens.into_iter().filter_map(|t| self.rules.get(t)) {
            if let Some(style) = rule.style {
                out.style = out.style.patch(style);
            }
            if let Some(border) = rule.border {
                out.border = border;
            }
            if let Some(padding_x) = rule.padding_x {
                out.padding_x = padding_x;
            }
        }
        if disabled {
            out.style = out.style.patch(self.disabled);
        }
        out
    }
}
