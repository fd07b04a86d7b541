//! Element type - the base composite of the tag tree

use crate::attr::{Attrs, AttrsExt, write_attrs};
use crate::error::{MarkupError, MarkupResult};
use crate::render::Renderer;

use super::{Children, Node, NodeKind};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes, optional text content and children
#[derive(Debug, Clone)]
pub struct Element {
    /// HTML tag name
    pub name: String,
    /// Text written right after the opening tag, before any child
    pub content: Option<String>,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
    /// False for void elements, which never get a closing tag
    pub needs_end_tag: bool,
}

impl Element {
    /// Create an element that is closed with an end tag.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            attrs: Vec::new(),
            children: Children::new(),
            needs_end_tag: true,
        }
    }

    /// Create a void element (`<img>`, `<link>`, `<meta>`): no end tag, no
    /// rendered children.
    pub fn void(name: impl Into<String>) -> Self {
        Self {
            needs_end_tag: false,
            ..Self::new(name)
        }
    }

    /// Create an element with text content.
    pub fn with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name).text(content)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute (builder form).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Set the text content (builder form).
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append a child (builder form).
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Set the `id` attribute (builder form).
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `class` attribute (builder form).
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation (append-only)
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute, overwriting any previous value.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Set the `class` attribute.
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.add_attribute("class", class)
    }

    /// Set the `id` attribute.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.add_attribute("id", id)
    }

    /// Append a child.
    ///
    /// Void elements accept children but never render them; see
    /// [`Element::validate`].
    pub fn add_child(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    /// Append a child and return a handle to it.
    pub fn append<T: NodeKind>(&mut self, node: T) -> &mut T {
        self.children.push(node.into());
        match self.children.last_mut().and_then(T::from_node_mut) {
            Some(child) => child,
            None => unreachable!("appended node changed kind"),
        }
    }

    /// Append text to the content, creating it if absent.
    pub fn push_content(&mut self, text: &str) {
        self.content.get_or_insert_with(String::new).push_str(text);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if this is a void element
    pub fn is_void(&self) -> bool {
        !self.needs_end_tag
    }

    /// Number of rendered nodes below this element.
    pub fn descendant_count(&self) -> usize {
        if self.is_void() {
            return 0;
        }
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the opening tag, content, children and end tag.
    ///
    /// Children go inline when this element is inline or has fewer than two
    /// descendants in total; the decision is made once for all children.
    pub fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        self.render_with(renderer, depth, inline, self.descendant_count(), |renderer, depth, inline| {
            for child in &self.children {
                child.render_into(renderer, depth, inline);
            }
        });
    }

    /// Write the tag around `body`, which renders whatever sits between the
    /// opening and end tag at the depth and inline flag it is handed.
    ///
    /// `total` is the number of descendants `body` writes.
    pub(crate) fn render_with<F>(
        &self,
        renderer: &mut Renderer<'_>,
        depth: usize,
        inline: bool,
        total: usize,
        body: F,
    ) where
        F: FnOnce(&mut Renderer<'_>, usize, bool),
    {
        if !inline {
            renderer.line_break(depth);
        }
        self.render_open_tag(renderer);

        if let Some(content) = &self.content {
            renderer.push_str(content);
        }

        if self.is_void() {
            return;
        }

        body(renderer, depth + 1, inline || total < 2);

        if !inline && total > 1 {
            renderer.line_break(depth);
        }
        renderer.push_str("</");
        renderer.push_str(&self.name);
        renderer.push_str(">");
    }

    fn render_open_tag(&self, renderer: &mut Renderer<'_>) {
        let out = renderer.buffer();
        out.push('<');
        out.push_str(&self.name);
        write_attrs(&self.attrs, out);
        out.push('>');
    }

    /// Check the subtree for void elements carrying children.
    pub fn validate(&self) -> MarkupResult<()> {
        if self.is_void() && !self.children.is_empty() {
            return Err(MarkupError::VoidElementChild {
                tag: self.name.clone(),
                count: self.children.len(),
            });
        }
        self.children.iter().try_for_each(Node::validate)
    }
}
