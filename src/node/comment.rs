//! Comment pseudo-node

use crate::render::Renderer;

/// HTML comment, rendered as `<!-- text -->`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text
    pub text: String,
}

impl Comment {
    /// Create a new comment
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        if !inline {
            renderer.line_break(depth);
        }
        renderer.push_str("<!-- ");
        renderer.push_str(&self.text);
        renderer.push_str(" -->");
    }
}
