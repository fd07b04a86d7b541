//! Prelude module for common imports.
//!
//! ```
//! use tagtree::prelude::*;
//! ```

// Node types
pub use crate::node::{
    Cell, Comment, Document, Element, List, NoLayout, Node, NodeKind, PageConfig, PageLayout,
    Paragraph, Script, Table, Text,
};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Factory
pub use crate::factory;

// Render
pub use crate::render::{RenderConfig, render_node, render_node_with};

// Transcoding
pub use crate::transcode::{Transcoder, html_to_text, text_to_html, text_to_latex};

// Error
pub use crate::error::{MarkupError, MarkupResult};
