//! Node types for tag trees.
//!
//! A [`Node`] is a tagged union over node kinds. Every kind renders through
//! [`Node::render_into`], which hands it the shared [`Renderer`] plumbing
//! together with the depth and inline flag chosen by its parent.
//!
//! # Kinds
//!
//! - [`Element`] - generic tag with attributes, content and children; void
//!   elements (`<img>`, `<meta>`) are elements without an end tag
//! - [`Text`] - raw text pseudo-node
//! - [`Comment`] - `<!-- ... -->`
//! - [`Script`] - lines of code, optionally wrapped in a ready handler
//! - [`Paragraph`] - `<p>` with appendable content
//! - [`List`] - `<ul>`/`<ol>` wrapping every item in `<li>`
//! - [`Table`] - rows packed to a fixed number of cells, optionally padded

mod comment;
mod document;
mod element;
mod list;
mod paragraph;
mod script;
mod table;
mod text;

pub use comment::Comment;
pub use document::{Document, NoLayout, PageConfig, PageLayout};
pub use element::Element;
pub use list::List;
pub use paragraph::Paragraph;
pub use script::{READY_EPILOGUE, READY_PROLOGUE, Script};
pub use table::{Cell, Table};
pub use text::Text;

use smallvec::SmallVec;

use crate::error::MarkupResult;
use crate::render::{RenderConfig, Renderer, render_node_with};

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 4]>;

/// Node in a tag tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Comment(Comment),
    Script(Script),
    Paragraph(Box<Paragraph>),
    List(Box<List>),
    Table(Box<Table>),
}

impl Node {
    /// Tag name, empty for text and comment pseudo-nodes.
    pub fn name(&self) -> &str {
        match self {
            Node::Element(e) => &e.name,
            Node::Text(_) | Node::Comment(_) => "",
            Node::Script(_) => "script",
            Node::Paragraph(p) => &p.element().name,
            Node::List(l) => &l.element().name,
            Node::Table(t) => &t.element().name,
        }
    }

    /// Number of nodes rendered below this one, indirect descendants included.
    ///
    /// Children of void elements are never rendered and are not counted.
    /// Auto-fill tables count the padding cells they will render.
    pub fn descendant_count(&self) -> usize {
        match self {
            Node::Element(e) => e.descendant_count(),
            Node::Text(_) | Node::Comment(_) | Node::Script(_) => 0,
            Node::Paragraph(p) => p.element().descendant_count(),
            Node::List(l) => l.element().descendant_count(),
            Node::Table(t) => t.descendant_count(),
        }
    }

    /// Write this node into the renderer.
    ///
    /// When `inline` is false the node starts on a fresh line indented to
    /// `depth`; when true it continues the current line.
    pub fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        match self {
            Node::Element(e) => e.render_into(renderer, depth, inline),
            Node::Text(t) => t.render_into(renderer, depth, inline),
            Node::Comment(c) => c.render_into(renderer, depth, inline),
            Node::Script(s) => s.render_into(renderer, depth, inline),
            Node::Paragraph(p) => p.render_into(renderer, depth, inline),
            Node::List(l) => l.element().render_into(renderer, depth, inline),
            Node::Table(t) => t.render_into(renderer, depth, inline),
        }
    }

    /// Render this node with the default configuration.
    pub fn render(&self, depth: usize, inline: bool) -> String {
        render_node_with(self, depth, inline, &RenderConfig::DEFAULT)
    }

    /// Check the subtree for structural misuse the builder accepted silently.
    pub fn validate(&self) -> MarkupResult<()> {
        match self {
            Node::Element(e) => e.validate(),
            Node::Text(_) | Node::Comment(_) | Node::Script(_) => Ok(()),
            Node::Paragraph(p) => p.element().validate(),
            Node::List(l) => l.element().validate(),
            Node::Table(t) => t.validate(),
        }
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as table reference.
    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(t) => Some(t),
            _ => None,
        }
    }
}

// =============================================================================
// NodeKind - typed handles to appended children
// =============================================================================

/// A concrete node kind that can be appended and handed back as `&mut Self`.
pub trait NodeKind: Into<Node> {
    /// Borrow the node as this kind, if it is one.
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
}

macro_rules! node_kind {
    (boxed $ty:ident) => {
        impl From<$ty> for Node {
            fn from(value: $ty) -> Self {
                Node::$ty(Box::new(value))
            }
        }

        impl NodeKind for $ty {
            fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                match node {
                    Node::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
    ($ty:ident) => {
        impl From<$ty> for Node {
            fn from(value: $ty) -> Self {
                Node::$ty(value)
            }
        }

        impl NodeKind for $ty {
            fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                match node {
                    Node::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

node_kind!(boxed Element);
node_kind!(boxed Paragraph);
node_kind!(boxed List);
node_kind!(boxed Table);
node_kind!(Text);
node_kind!(Comment);
node_kind!(Script);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_count_includes_indirect() {
        let node: Node = Element::new("div")
            .child(Element::new("ul").child(Element::new("li")).child(Element::new("li")))
            .child(Element::new("p"))
            .into();
        // ul, li, li, p
        assert_eq!(node.descendant_count(), 4);
    }

    #[test]
    fn test_name_per_kind() {
        assert_eq!(Node::from(Element::new("div")).name(), "div");
        assert_eq!(Node::from(Comment::new("x")).name(), "");
        assert_eq!(Node::from(Text::new("x")).name(), "");
        assert_eq!(Node::from(Script::new()).name(), "script");
        assert_eq!(Node::from(Table::new(2)).name(), "table");
        assert_eq!(Node::from(List::new()).name(), "ul");
        assert_eq!(Node::from(Paragraph::new("x")).name(), "p");
    }

    #[test]
    fn test_small_subtree_has_no_newlines() {
        let node: Node = Element::new("a")
            .attr("href", "index.html")
            .child(Element::void("img").attr("src", "logo.png"))
            .into();
        assert_eq!(node.descendant_count(), 1);
        let html = node.render(0, true);
        assert!(!html.contains('\n'));
        assert_eq!(html, r#"<a href="index.html"><img src="logo.png"></a>"#);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut table = Table::with_fill(3);
        for i in 1..=4 {
            table.add_cell(format!("c{i}"));
        }
        let mut script = Script::ready();
        script.add_line("init();");
        let node: Node = Element::new("div")
            .child(table)
            .child(script)
            .child(Comment::new("end"))
            .into();

        let first = node.render(0, false);
        let second = node.render(0, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_append_returns_typed_handle() {
        let mut div = Element::new("div");
        let table = div.append(Table::new(2));
        table.add_cell("a");
        table.add_cell("b");
        table.add_cell("c");
        assert_eq!(div.child_count(), 1);
        let table = div.children[0].as_table();
        assert_eq!(table.map(Table::row_count), Some(2));
    }
}
