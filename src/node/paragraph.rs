//! Paragraph whose text grows as content is appended

use crate::factory;
use crate::render::{RenderConfig, Renderer};

use super::{Element, Node};

/// Piece of paragraph text.
#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    /// Line break indented to the given depth with the render's indent unit
    NewLine(usize),
}

/// `<p>` element with append-only text content.
#[derive(Debug, Clone)]
pub struct Paragraph {
    element: Element,
    segments: Vec<Segment>,
}

impl Paragraph {
    /// Create a paragraph with initial text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            element: Element::new("p"),
            segments: vec![Segment::Text(text.into())],
        }
    }

    /// Append text to the paragraph.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        match self.segments.last_mut() {
            Some(Segment::Text(last)) => last.push_str(text),
            _ => self.segments.push(Segment::Text(text.to_string())),
        }
        self
    }

    /// Append a line break followed by the indent for `depth`.
    ///
    /// The indent unit is the one the paragraph is rendered with.
    pub fn add_new_line(&mut self, depth: usize) -> &mut Self {
        self.segments.push(Segment::NewLine(depth));
        self
    }

    /// Append a link opening in a new tab, rendered inline into the text.
    pub fn add_link_external(&mut self, url: &str, title: &str, text: &str) -> &mut Self {
        let link: Node = factory::link_with(url, Some(text), Some(title), true).into();
        self.add_text(&link.render(0, true))
    }

    /// Set the `class` attribute.
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.element.set_class(class);
        self
    }

    /// Paragraph text, line breaks indented with the default indent unit.
    pub fn text(&self) -> String {
        let config = RenderConfig::DEFAULT;
        let mut renderer = Renderer::new(&config);
        self.write_segments(&mut renderer);
        renderer.finish()
    }

    /// Underlying element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Underlying element, for attributes or child nodes.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn write_segments(&self, renderer: &mut Renderer<'_>) {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => renderer.push_str(text),
                Segment::NewLine(depth) => renderer.line_break(*depth),
            }
        }
    }

    pub(crate) fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        let total = self.element.descendant_count();
        self.element.render_with(renderer, depth, inline, total, |renderer, depth, inline| {
            self.write_segments(renderer);
            for child in &self.element.children {
                child.render_into(renderer, depth, inline);
            }
        });
    }
}
