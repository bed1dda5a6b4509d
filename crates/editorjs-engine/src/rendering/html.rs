//! Minimal element builder used by the block handlers.
//!
//! Attribute values are always escaped. Element content is either escaped
//! text or markup produced by another [`Element`].

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

const VOID_ELEMENTS: [&str; 4] = ["img", "br", "hr", "input"];

#[derive(Debug, Clone, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(&'static str, String)>,
    inner: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Adds the attribute only when `value` is not empty.
    pub fn attr_if_present(self, name: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.attr(name, value)
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.inner.push_str(&encode_text(text));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        child.write_to(&mut self.inner);
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Element::child)
    }

    pub fn write_to(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, encode_double_quoted_attribute(value));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            return;
        }
        out.push_str(&self.inner);
        let _ = write!(out, "</{}>", self.name);
    }

    pub fn into_html(self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}
