//! Raw text pseudo-node

use crate::render::Renderer;

/// Text written verbatim, without any tag around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Text content
    pub content: String,
}

impl Text {
    /// Create a new text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub(crate) fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        if !inline {
            renderer.line_break(depth);
        }
        renderer.push_str(&self.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, Node};

    #[test]
    fn test_text_inside_element() {
        let node: Node = Element::new("li")
            .child(Element::with_content("b", "Note:"))
            .child(Text::new(" read this"))
            .into();
        let expected = "\n<li>\n  <b>Note:</b>\n   read this\n</li>";
        assert_eq!(node.render(0, false), expected);
        assert_eq!(node.render(0, true), "<li><b>Note:</b> read this</li>");
    }
}
