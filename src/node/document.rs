//! Document type: a complete HTML page
//!
//! The page keeps its `<head>`, the body sections from its [`PageLayout`]
//! and a `<div id="main">` receiving appended content as separate parts.
//! The head is filled in when the document is created; `<html>` and
//! `<body>` are assembled around the parts when the page is rendered.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{MarkupError, MarkupResult};
use crate::factory;
use crate::render::{RenderConfig, Renderer};

use super::{Children, Element, List, Node, NodeKind, Paragraph, Script, Table};

/// Format of the generation timestamp written in the head comment.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Id of the div receiving appended content.
pub const MAIN_ID: &str = "main";

// =============================================================================
// PageConfig
// =============================================================================

/// Construction parameters of a [`Document`].
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Page title, written in `<title>`
    pub title: String,
    /// Where [`Document::save`] writes the page
    pub output: PathBuf,
    /// Relative path prefix prepended to the stylesheet reference
    pub path: String,
    /// Stylesheet reference, relative to `path`
    pub stylesheet: Option<String>,
    /// Name of the program generating the page
    pub generator: String,
    /// Author written in a `<meta name="author">` tag
    pub author: Option<String>,
    /// Charset written in a `<meta charset>` tag
    pub charset: Option<String>,
    /// Whether to reference `favicon.ico`
    pub favicon: bool,
    /// Fixed generation time; the current local time when absent
    pub timestamp: Option<NaiveDateTime>,
    /// Rendering options
    pub render: RenderConfig,
}

impl PageConfig {
    /// Create a config with the given title and output path.
    pub fn new(title: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            output: output.into(),
            path: String::new(),
            stylesheet: None,
            generator: env!("CARGO_PKG_NAME").to_string(),
            author: None,
            charset: Some("utf-8".to_string()),
            favicon: true,
            timestamp: None,
            render: RenderConfig::DEFAULT,
        }
    }

    /// Set the relative path prefix.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the stylesheet reference.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    /// Set the generator name.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the charset, or drop the charset tag with `None`.
    pub fn with_charset(mut self, charset: Option<&str>) -> Self {
        self.charset = charset.map(str::to_string);
        self
    }

    /// Do not reference `favicon.ico`.
    pub fn without_favicon(mut self) -> Self {
        self.favicon = false;
        self
    }

    /// Use a fixed generation time.
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the rendering options.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    fn generated_at(&self) -> String {
        let timestamp = self.timestamp.unwrap_or_else(|| Local::now().naive_local());
        timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

// =============================================================================
// PageLayout
// =============================================================================

/// Body sections placed around the main div.
///
/// Header and menu come before the main div, the footer after it. All
/// sections are empty by default.
pub trait PageLayout {
    /// Add header nodes to the body.
    fn header(&self, _body: &mut Element) {}

    /// Add menu nodes to the body.
    fn menu(&self, _body: &mut Element) {}

    /// Add footer nodes to the body.
    fn footer(&self, _body: &mut Element) {}
}

/// Layout with no header, menu or footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayout;

impl PageLayout for NoLayout {}

// =============================================================================
// Document
// =============================================================================

/// Complete HTML page.
#[derive(Debug, Clone)]
pub struct Document {
    config: PageConfig,
    head: Element,
    /// `<body>` holding the header and menu nodes
    body: Element,
    main: Element,
    footer: Children,
}

impl Document {
    /// Create a page with no header, menu or footer.
    pub fn new(config: PageConfig) -> Self {
        Self::with_layout(config, &NoLayout)
    }

    /// Create a page whose body is laid out by `layout`.
    pub fn with_layout(config: PageConfig, layout: &dyn PageLayout) -> Self {
        let head = build_head(&config);

        let mut body = Element::new("body");
        layout.header(&mut body);
        layout.menu(&mut body);

        let mut trailer = Element::new("body");
        layout.footer(&mut trailer);

        tracing::debug!(title = %config.title, output = %config.output.display(), "created page");

        Self {
            config,
            head,
            body,
            main: factory::div(MAIN_ID),
            footer: trailer.children,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure access
    // ─────────────────────────────────────────────────────────────────────────

    /// Construction parameters.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The `<head>` element.
    pub fn head(&self) -> &Element {
        &self.head
    }

    /// The `<head>` element, for extra scripts or metadata.
    pub fn head_mut(&mut self) -> &mut Element {
        &mut self.head
    }

    /// Header and menu nodes, in body order before the main div.
    pub fn header(&self) -> &[Node] {
        &self.body.children
    }

    /// Footer nodes, in body order after the main div.
    pub fn footer(&self) -> &[Node] {
        &self.footer
    }

    /// The main div receiving appended content.
    pub fn main(&self) -> &Element {
        &self.main
    }

    /// The main div, mutable.
    pub fn main_mut(&mut self) -> &mut Element {
        &mut self.main
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Appending content
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a node to the main div.
    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.main.add_child(node);
        self
    }

    /// Append a node to the main div and return a handle to it.
    pub fn append<T: NodeKind>(&mut self, node: T) -> &mut T {
        self.main.append(node)
    }

    /// Append an `<h1>`..`<h6>` heading.
    pub fn add_title(&mut self, level: u8, title: &str) -> &mut Self {
        self.add(factory::heading(level, title))
    }

    /// Append a named anchor.
    pub fn add_anchor(&mut self, name: &str) -> &mut Element {
        self.append(factory::anchor(name))
    }

    /// Append an empty table.
    pub fn add_table(&mut self, cells_per_row: usize, width: Option<&str>) -> &mut Table {
        self.append_table(Table::new(cells_per_row), width)
    }

    /// Append an empty table whose last row is padded when rendered.
    pub fn add_fill_table(&mut self, cells_per_row: usize, width: Option<&str>) -> &mut Table {
        self.append_table(Table::with_fill(cells_per_row), width)
    }

    fn append_table(&mut self, mut table: Table, width: Option<&str>) -> &mut Table {
        if let Some(width) = width {
            table.add_attribute("width", width);
        }
        self.append(table)
    }

    /// Append an empty unordered list.
    pub fn add_list(&mut self) -> &mut List {
        self.append(List::new())
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, text: &str) -> &mut Paragraph {
        self.append(Paragraph::new(text))
    }

    /// Append a div with the given id.
    pub fn add_div(&mut self, id: &str) -> &mut Element {
        self.append(factory::div(id))
    }

    /// Append a titled box div.
    pub fn add_box(&mut self, title: &str) -> &mut Element {
        self.append(factory::blue_box(title))
    }

    /// Append a span with the given class and text.
    pub fn add_span(&mut self, class: &str, text: &str) -> &mut Element {
        self.append(factory::span(class, text))
    }

    /// Append a line break.
    pub fn add_br(&mut self) -> &mut Self {
        self.add(factory::br())
    }

    /// Append a `<center>` block.
    pub fn add_center(&mut self) -> &mut Element {
        self.append(factory::center())
    }

    /// Append a form; fill it with [`factory::input`] and [`factory::button`].
    pub fn add_form(&mut self, method: &str, action: &str) -> &mut Element {
        self.append(factory::form(method, action))
    }

    /// Append an unordered list holding the given text items.
    pub fn add_item_list<I>(&mut self, items: I) -> &mut List
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.append(List::from_items(items))
    }

    /// Append a script block holding one line of code.
    pub fn add_javascript(&mut self, code: &str) -> &mut Script {
        self.append(Script::new().line(code))
    }

    /// Append an empty script block, wrapped in a ready handler if `ready`.
    pub fn add_script(&mut self, ready: bool) -> &mut Script {
        self.append(if ready { Script::ready() } else { Script::new() })
    }

    /// Render a link inline, using the text as tooltip.
    pub fn link_html(&self, url: &str, text: &str, external: bool) -> String {
        let link: Node = factory::link_with(url, Some(text), Some(text), external).into();
        let mut renderer = Renderer::new(&self.config.render);
        link.render_into(&mut renderer, 0, true);
        renderer.finish()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Check the tree for structural misuse.
    pub fn validate(&self) -> MarkupResult<()> {
        self.head.validate()?;
        self.body.validate()?;
        self.main.validate()?;
        self.footer.iter().try_for_each(Node::validate)
    }

    /// Render the page: preamble, then `<html>` holding head and body.
    pub fn render(&self) -> String {
        let html = Element::new("html");
        let body_total = self.body_descendant_count();
        let total = 1 + self.head.descendant_count() + 1 + body_total;

        let mut renderer = Renderer::new(&self.config.render);
        renderer.push_str(self.config.render.doctype);
        html.render_with(&mut renderer, 0, false, total, |renderer, depth, inline| {
            self.head.render_into(renderer, depth, inline);
            self.body.render_with(renderer, depth, inline, body_total, |renderer, depth, inline| {
                for node in &self.body.children {
                    node.render_into(renderer, depth, inline);
                }
                self.main.render_into(renderer, depth, inline);
                for node in &self.footer {
                    node.render_into(renderer, depth, inline);
                }
            });
        });
        renderer.finish()
    }

    /// Nodes rendered below `<body>`: header, menu, main div and footer.
    fn body_descendant_count(&self) -> usize {
        let footer: usize = self.footer.iter().map(|node| 1 + node.descendant_count()).sum();
        self.body.descendant_count() + 1 + self.main.descendant_count() + footer
    }

    /// Write the rendered page to a writer.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }

    /// Write the rendered page to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> MarkupResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| MarkupError::io(path, e))?;
        self.write(BufWriter::new(file))
            .map_err(|e| MarkupError::io(path, e))
    }

    /// Save the page to its configured output path.
    ///
    /// Failures are logged, not returned; the result tells whether the page
    /// was written.
    pub fn save(&self) -> bool {
        tracing::info!(output = %self.config.output.display(), "saving page");
        match self.write_to(&self.config.output) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "saving page failed");
                false
            }
        }
    }
}

fn build_head(config: &PageConfig) -> Element {
    let generated = format!("Generated by {} on {}", config.generator, config.generated_at());

    let mut head = Element::new("head");
    head.add_child(factory::comment(&generated));
    head.add_child(Element::with_content("title", config.title.as_str()));
    if let Some(stylesheet) = &config.stylesheet {
        head.add_child(factory::css_link(&format!("{}{}", config.path, stylesheet)));
    }
    if config.favicon {
        head.add_child(factory::icon_link());
    }
    if let Some(author) = &config.author {
        head.add_child(factory::meta_named("author", author));
    }
    if let Some(charset) = &config.charset {
        head.add_child(factory::meta().attr("charset", charset.as_str()));
    }
    head
}

// =============================================================================
// Tests
// =============================================================================
