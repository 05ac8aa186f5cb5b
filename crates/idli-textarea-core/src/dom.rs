//! A minimal rendered element tree.
//!
//! This is what the component hands to its host: tags, ordered attributes, live properties
//! (such as a textarea's `value`) and children. Hosts either serialize it with
//! [`Element::to_html`] or walk it directly, as the terminal host does.

use std::fmt::Write as _;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    // `None` marks a bare boolean attribute.
    attrs: Vec<(String, Option<String>)>,
    props: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, Some(value.into()));
        self
    }

    /// Sets `name` only when `value` is present.
    pub fn with_optional_attr(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.set_attr(name, Some(value.to_string()));
        }
        self
    }

    /// Adds `name` as a bare boolean attribute when `on`.
    pub fn with_flag(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.set_attr(name, None);
        }
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.props.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.props.push((name, value)),
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of `name`. A bare boolean attribute reads as `Some("")`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn prop(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.class_list().any(|t| t == token)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant (or self) with the given tag, depth first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(tag))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn set_attr(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            match value {
                Some(v) => {
                    let _ = write!(out, " {name}=\"{}\"", escape(v));
                }
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        out.push('>');

        // A textarea's live value is serialized as its content.
        if self.tag == "textarea" {
            if let Some(value) = self.prop("value") {
                out.push_str(&escape(value));
            }
        }

        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&escape(t)),
                Node::Element(el) => el.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
