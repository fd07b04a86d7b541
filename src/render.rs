//! HTML rendering for tag trees
//!
//! Shared plumbing for every node kind: the output buffer, line breaks and
//! indentation. Each node kind decides what to write; [`Renderer`] decides
//! how deep it sits.

use crate::node::Node;

// =============================================================================
// RenderConfig
// =============================================================================

/// Default indent unit, written once per depth level.
pub const DEFAULT_INDENT: &str = "  ";

/// Default preamble written before the root element of a page.
pub const DEFAULT_DOCTYPE: &str = "<!DOCTYPE html>";

/// Configuration for HTML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Indent unit repeated once per depth level.
    pub indent: &'static str,
    /// Preamble written before the root element by page rendering.
    pub doctype: &'static str,
}

impl RenderConfig {
    /// Two-space indent, HTML5 doctype.
    pub const DEFAULT: Self = Self {
        indent: DEFAULT_INDENT,
        doctype: DEFAULT_DOCTYPE,
    };

    /// Set the indent unit.
    pub fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Set the page preamble.
    pub fn with_doctype(mut self, doctype: &'static str) -> Self {
        self.doctype = doctype;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Output buffer threaded through a render pass.
#[derive(Debug)]
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    output: String,
}

impl<'a> Renderer<'a> {
    /// Create an empty renderer.
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Render configuration in use.
    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Write a newline followed by the indent for `depth`.
    pub fn line_break(&mut self, depth: usize) {
        self.output.push('\n');
        for _ in 0..depth {
            self.output.push_str(self.config.indent);
        }
    }

    /// Write text verbatim.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Mutable access to the raw buffer (attribute writers append here).
    #[inline]
    pub fn buffer(&mut self) -> &mut String {
        &mut self.output
    }

    /// Consume the renderer, returning the text written so far.
    pub fn finish(self) -> String {
        self.output
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Render a node tree with the default configuration.
///
/// Equivalent to `render_node_with(node, 0, false, &RenderConfig::DEFAULT)`.
pub fn render_node(node: &Node) -> String {
    render_node_with(node, 0, false, &RenderConfig::DEFAULT)
}

/// Render a node at the given depth, inline or not.
pub fn render_node_with(node: &Node, depth: usize, inline: bool, config: &RenderConfig) -> String {
    let mut renderer = Renderer::new(config);
    node.render_into(&mut renderer, depth, inline);
    renderer.finish()
}

// =============================================================================
// Tests
// =============================================================================
