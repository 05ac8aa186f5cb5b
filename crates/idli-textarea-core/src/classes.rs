//! Class token vocabulary.
//!
//! Styling is keyed entirely off these tokens. Each axis falls back to its default token when
//! the attribute is unset or empty; any other value is passed through verbatim, so an
//! out-of-vocabulary value yields a token no stylesheet rule matches.

use crate::props::InputType;
use crate::props::Size;
use crate::props::TextAreaProps;
use crate::props::Variant;

pub const BASE_CLASS: &str = "idli-textarea-component";
pub const ELEMENT_CLASS: &str = "idli-textarea-element";
pub const INLINE_CLASS: &str = "inline";

pub fn variant_class(variant: Option<&Variant>) -> String {
    axis_class("variant", variant.map(Variant::as_str), "default")
}

pub fn size_class(size: Option<&Size>) -> String {
    axis_class("size", size.map(Size::as_str), "md")
}

pub fn type_class(input_type: Option<&InputType>) -> String {
    axis_class("type", input_type.map(InputType::as_str), "text")
}

/// `"inline"` when set, otherwise the empty string.
pub fn inline_class(inline: bool) -> &'static str {
    if inline { INLINE_CLASS } else { "" }
}

/// Tokens of the root element, base class first. An empty inline token is omitted.
pub fn root_tokens(props: &TextAreaProps) -> Vec<String> {
    let mut tokens = vec![BASE_CLASS.to_string()];
    let inline = inline_class(props.inline);
    if !inline.is_empty() {
        tokens.push(inline.to_string());
    }
    tokens.push(variant_class(props.variant.as_ref()));
    tokens.push(size_class(props.size.as_ref()));
    tokens.push(type_class(props.input_type.as_ref()));
    tokens
}

pub fn root_class(props: &TextAreaProps) -> String {
    root_tokens(props).join(" ")
}

fn axis_class(prefix: &str, value: Option<&str>, fallback: &str) -> String {
    let value = value.filter(|v| !v.is_empty()).unwrap_or(fallback);
    format!("{prefix}-{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props_produce_default_tokens() {
        assert_eq!(
            root_class(&TextAreaProps::default()),
            "idli-textarea-component variant-default size-md type-text"
        );
    }

    #[test]
    fn unset_axes_fall_back() {
        assert_eq!(variant_class(None), "variant-default");
        assert_eq!(size_class(None), "size-md");
        assert_eq!(type_class(None), "type-text");
    }

    #[test]
    fn empty_other_value_also_falls_back() {
        assert_eq!(size_class(Some(&Size::Other(String::new()))), "size-md");
        assert_eq!(
            variant_class(Some(&Variant::Other(String::new()))),
            "variant-default"
        );
    }

    #[test]
    fn out_of_vocabulary_value_passes_through() {
        assert_eq!(size_class(Some(&Size::Other("xl".into()))), "size-xl");
        assert_eq!(
            type_class(Some(&InputType::Other("email".into()))),
            "type-email"
        );
    }

    #[test]
    fn inline_token_follows_flag() {
        let mut props = TextAreaProps::default();
        props.inline = true;
        props.size = Some(Size::Lg);
        props.variant = Some(Variant::Dashed);
        props.input_type = Some(InputType::Number);
        assert_eq!(
            root_class(&props),
            "idli-textarea-component inline variant-dashed size-lg type-number"
        );
        assert_eq!(inline_class(false), "");
    }
}
