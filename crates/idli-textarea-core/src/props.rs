//! Attribute model of the textarea component.
//!
//! Every attribute can be set either through the typed fields of [`TextAreaProps`] or by its
//! markup name through [`TextAreaProps::set`]. String conversion never rejects a value: an
//! unrecognized enum spelling is kept verbatim in an `Other` variant, and the empty string means
//! "unset" so that class derivation falls back to the default token.

use std::fmt;
use std::str::FromStr;

use crate::error::AttributeError;

/// Tag under which the component registers with a host.
pub const TAG: &str = "idli-textarea";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Other(String),
}

impl Size {
    /// Maps an attribute string to a size. Empty text is treated as unset.
    pub fn from_attribute(s: &str) -> Option<Self> {
        match s {
            "" => None,
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            other => Some(Self::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Other(s) => s,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Default,
    Dashed,
    Other(String),
}

impl Variant {
    /// Maps an attribute string to a variant. Empty text is treated as unset.
    pub fn from_attribute(s: &str) -> Option<Self> {
        match s {
            "" => None,
            "default" => Some(Self::Default),
            "dashed" => Some(Self::Dashed),
            other => Some(Self::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Dashed => "dashed",
            Self::Other(s) => s,
        }
    }
}

/// Declared content type. Only affects the `type-*` class token; input is never parsed or
/// constrained by it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Number,
    Other(String),
}

impl InputType {
    /// Maps an attribute string to an input type. Empty text is treated as unset.
    pub fn from_attribute(s: &str) -> Option<Self> {
        match s {
            "" => None,
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            other => Some(Self::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight attributes a host can set, by markup name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Label,
    Placeholder,
    Value,
    Size,
    Variant,
    Inline,
    Type,
    Disabled,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::Label,
        Attribute::Placeholder,
        Attribute::Value,
        Attribute::Size,
        Attribute::Variant,
        Attribute::Inline,
        Attribute::Type,
        Attribute::Disabled,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Placeholder => "placeholder",
            Self::Value => "value",
            Self::Size => "size",
            Self::Variant => "variant",
            Self::Inline => "inline",
            Self::Type => "type",
            Self::Disabled => "disabled",
        }
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Self::Inline | Self::Disabled)
    }
}

impl FromStr for Attribute {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AttributeError::unknown(TAG, s))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean attribute conversion: only the literal `"false"` is false. A bare attribute
/// arrives as the empty string and reads as true.
pub fn parse_bool_attribute(s: &str) -> bool {
    s != "false"
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAreaProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub size: Option<Size>,
    pub variant: Option<Variant>,
    pub inline: bool,
    pub input_type: Option<InputType>,
    pub disabled: bool,
}

impl Default for TextAreaProps {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: None,
            value: None,
            size: Some(Size::default()),
            variant: Some(Variant::default()),
            inline: false,
            input_type: Some(InputType::default()),
            disabled: false,
        }
    }
}

impl TextAreaProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `attr` from its string form.
    pub fn set(&mut self, attr: Attribute, value: &str) {
        match attr {
            Attribute::Label => self.label = Some(value.to_string()),
            Attribute::Placeholder => self.placeholder = Some(value.to_string()),
            Attribute::Value => self.value = Some(value.to_string()),
            Attribute::Size => self.size = Size::from_attribute(value),
            Attribute::Variant => self.variant = Variant::from_attribute(value),
            Attribute::Inline => self.inline = parse_bool_attribute(value),
            Attribute::Type => self.input_type = InputType::from_attribute(value),
            Attribute::Disabled => self.disabled = parse_bool_attribute(value),
        }
    }

    /// Reflects `attr` back to its string form. Unset attributes and false booleans read as
    /// `None`; a true boolean reads as the empty string, like a bare markup attribute.
    pub fn get(&self, attr: Attribute) -> Option<String> {
        match attr {
            Attribute::Label => self.label.clone(),
            Attribute::Placeholder => self.placeholder.clone(),
            Attribute::Value => self.value.clone(),
            Attribute::Size => self.size.as_ref().map(|s| s.as_str().to_string()),
            Attribute::Variant => self.variant.as_ref().map(|v| v.as_str().to_string()),
            Attribute::Inline => self.inline.then(String::new),
            Attribute::Type => self.input_type.as_ref().map(|t| t.as_str().to_string()),
            Attribute::Disabled => self.disabled.then(String::new),
        }
    }

    /// Restores the declared default of `attr`.
    pub fn reset(&mut self, attr: Attribute) {
        let defaults = Self::default();
        match attr {
            Attribute::Label => self.label = defaults.label,
            Attribute::Placeholder => self.placeholder = defaults.placeholder,
            Attribute::Value => self.value = defaults.value,
            Attribute::Size => self.size = defaults.size,
            Attribute::Variant => self.variant = defaults.variant,
            Attribute::Inline => self.inline = defaults.inline,
            Attribute::Type => self.input_type = defaults.input_type,
            Attribute::Disabled => self.disabled = defaults.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_declared_values() {
        let p = TextAreaProps::default();
        assert_eq!(p.size, Some(Size::Md));
        assert_eq!(p.variant, Some(Variant::Default));
        assert_eq!(p.input_type, Some(InputType::Text));
        assert!(!p.inline);
        assert!(!p.disabled);
        assert_eq!(p.label, None);
        assert_eq!(p.value, None);
    }

    #[test]
    fn unknown_enum_values_are_kept_verbatim() {
        assert_eq!(Size::from_attribute("xl"), Some(Size::Other("xl".to_string())));
        assert_eq!(Variant::from_attribute("Dashed").unwrap().as_str(), "Dashed");
        assert_eq!(InputType::from_attribute("email").unwrap().to_string(), "email");
    }

    #[test]
    fn empty_enum_value_reads_as_unset() {
        let mut p = TextAreaProps::default();
        p.set(Attribute::Size, "");
        p.set(Attribute::Variant, "");
        p.set(Attribute::Type, "");
        assert_eq!(p.size, None);
        assert_eq!(p.variant, None);
        assert_eq!(p.input_type, None);
    }

    #[test]
    fn boolean_attributes_follow_markup_rules() {
        let mut p = TextAreaProps::default();
        p.set(Attribute::Disabled, "");
        assert!(p.disabled);
        p.set(Attribute::Disabled, "false");
        assert!(!p.disabled);
        p.set(Attribute::Inline, "inline");
        assert!(p.inline);
        assert_eq!(p.get(Attribute::Inline), Some(String::new()));
        assert_eq!(p.get(Attribute::Disabled), None);
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        assert_eq!("Placeholder".parse::<Attribute>(), Ok(Attribute::Placeholder));
        assert_eq!("TYPE".parse::<Attribute>(), Ok(Attribute::Type));
        assert!("rows".parse::<Attribute>().is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut p = TextAreaProps::default();
        p.set(Attribute::Size, "lg");
        p.set(Attribute::Label, "Notes");
        p.reset(Attribute::Size);
        p.reset(Attribute::Label);
        assert_eq!(p, TextAreaProps::default());
    }

    #[test]
    fn string_attributes_round_trip() {
        let mut p = TextAreaProps::default();
        p.set(Attribute::Value, "  keep\nme  ");
        assert_eq!(p.get(Attribute::Value).as_deref(), Some("  keep\nme  "));
    }
}
