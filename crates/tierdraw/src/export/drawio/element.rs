//! Owned XML element tree.

use std::fmt::Display;

/// An XML element with ordered attributes and child elements.
///
/// Attribute order is insertion order, which keeps serialized output stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn with_attribute(mut self, name: &'static str, value: impl Display) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    /// Append a child element (builder style).
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements (builder style).
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// Returns the value of the first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_is_kept() {
        let element = Element::new("mxCell")
            .with_attribute("id", 7)
            .with_attribute("value", "Web")
            .with_attribute("parent", "1");

        let names: Vec<&str> = element.attributes().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["id", "value", "parent"]);
        assert_eq!(element.attribute("id"), Some("7"));
        assert_eq!(element.attribute("missing"), None);
    }

    #[test]
    fn test_children() {
        let element = Element::new("root")
            .with_child(Element::new("a"))
            .with_children([Element::new("b"), Element::new("c")]);

        let names: Vec<&str> = element.children().iter().map(Element::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
