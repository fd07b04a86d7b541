//! Script block: lines of code rendered one per line

use crate::attr::{Attrs, AttrsExt, write_attrs};
use crate::render::Renderer;

/// First line of the document-ready wrapper.
pub const READY_PROLOGUE: &str = "$(document).ready(function() {";

/// Last line of the document-ready wrapper.
pub const READY_EPILOGUE: &str = "});";

/// `<script>` element holding code lines instead of child nodes.
///
/// The ready wrapper is added while rendering only, so the stored lines stay
/// exactly as appended and repeated renders produce the same text.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: Vec<String>,
    ready: bool,
    attrs: Attrs,
}

impl Script {
    /// Create an empty script block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script block whose lines run once the document is ready.
    pub fn ready() -> Self {
        Self {
            ready: true,
            ..Self::default()
        }
    }

    /// Append a line of code.
    pub fn add_line(&mut self, code: impl Into<String>) -> &mut Self {
        self.lines.push(code.into());
        self
    }

    /// Append a line of code (builder form).
    pub fn line(mut self, code: impl Into<String>) -> Self {
        self.lines.push(code.into());
        self
    }

    /// Set an attribute on the `<script>` tag.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Stored lines, without the ready wrapper.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if the ready wrapper is applied at render time.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Lines as rendered, wrapper included.
    fn rendered_lines(&self) -> impl Iterator<Item = &str> {
        let (prologue, epilogue): (Option<&str>, Option<&str>) = if self.ready {
            (Some(READY_PROLOGUE), Some(READY_EPILOGUE))
        } else {
            (None, None)
        };
        prologue
            .into_iter()
            .chain(self.lines.iter().map(String::as_str))
            .chain(epilogue)
    }

    pub(crate) fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        let count = self.lines.len() + if self.ready { 2 } else { 0 };
        let multiline = !inline && count > 1;

        if !inline {
            renderer.line_break(depth);
        }
        let out = renderer.buffer();
        out.push_str("<script");
        write_attrs(&self.attrs, out);
        out.push('>');

        for line in self.rendered_lines() {
            if multiline {
                renderer.line_break(depth + 1);
            }
            renderer.push_str(line);
        }

        if multiline {
            renderer.line_break(depth);
        }
        renderer.push_str("</script>");
    }
}
