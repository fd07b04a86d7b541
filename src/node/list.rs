//! List element wrapping each item in `<li>`

use super::{Element, Node};

/// `<ul>` or `<ol>` element.
#[derive(Debug, Clone)]
pub struct List {
    element: Element,
}

impl List {
    /// Create an unordered list.
    pub fn new() -> Self {
        Self {
            element: Element::new("ul"),
        }
    }

    /// Create an ordered list.
    pub fn ordered() -> Self {
        Self {
            element: Element::new("ol"),
        }
    }

    /// Create an unordered list holding the given text items.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut list = Self::new();
        list.add_items(items);
        list
    }

    /// Add a text item.
    pub fn add_item(&mut self, text: impl Into<String>) -> &mut Self {
        self.element.add_child(Element::with_content("li", text));
        self
    }

    /// Add several text items, in order.
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for item in items {
            self.add_item(item);
        }
        self
    }

    /// Add an item holding a single node.
    pub fn add_item_node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.element.add_child(Element::new("li").child(node));
        self
    }

    /// Add an item holding several nodes, in order.
    pub fn add_item_nodes<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut item = Element::new("li");
        for node in nodes {
            item.add_child(node);
        }
        self.element.add_child(item);
        self
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.element.child_count()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.element.is_empty()
    }

    /// Underlying element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Underlying element, for attributes.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;

    #[test]
    fn test_four_items_in_order() {
        let mut list = List::new();
        for i in 1..=4 {
            list.add_item(format!("item {i}"));
        }
        assert_eq!(list.len(), 4);

        let items: Vec<_> = list
            .element()
            .children
            .iter()
            .filter_map(Node::as_element)
            .map(|li| (li.name.as_str(), li.content.as_deref()))
            .collect();
        assert_eq!(
            items,
            [
                ("li", Some("item 1")),
                ("li", Some("item 2")),
                ("li", Some("item 3")),
                ("li", Some("item 4")),
            ]
        );

        let node: Node = list.into();
        let expected = concat!(
            "\n<ul>",
            "\n  <li>item 1</li>",
            "\n  <li>item 2</li>",
            "\n  <li>item 3</li>",
            "\n  <li>item 4</li>",
            "\n</ul>",
        );
        assert_eq!(node.render(0, false), expected);
    }

    #[test]
    fn test_item_with_nodes() {
        let mut list = List::ordered();
        list.add_item_node(factory::link("a.html", "A"));
        list.add_item_nodes([
            Node::from(factory::link("b.html", "B")),
            Node::from(factory::gray_font("(old)")),
        ]);

        let node: Node = list.into();
        let expected = concat!(
            "\n<ol>",
            "\n  <li><a href=\"a.html\">A</a></li>",
            "\n  <li>",
            "\n    <a href=\"b.html\">B</a>",
            "\n    <font color=\"gray\">(old)</font>",
            "\n  </li>",
            "\n</ol>",
        );
        assert_eq!(node.render(0, false), expected);
    }

    #[test]
    fn test_from_items() {
        let mut list = List::from_items(["a", "b"]);
        list.add_items(vec![String::from("c")]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.element().name, "ul");

        let node: Node = list.into();
        assert!(node.render(0, false).ends_with("\n  <li>c</li>\n</ul>"));
    }
}
