//! tagtree - Write-once HTML document builder
//!
//! ## Core Concepts
//!
//! **Tag trees**: a page is a tree of typed nodes ([`Element`], [`Table`],
//! [`List`], [`Script`], ...) built append-only and rendered once.
//!
//! **Layout-aware rendering**: one recursive pass decides at every node
//! whether to break lines, how deep to indent and whether an end tag is
//! needed. Subtrees with fewer than two descendants stay on one line.
//!
//! ## Modules
//! - `node`: Node kinds and the [`Document`] page aggregate
//! - `factory`: Constructors for links, images, meta tags, headings...
//! - `render`: Render configuration and indentation plumbing
//! - `transcode`: Accented letters to and from HTML entities and LaTeX
//! - `attr`: Attribute system
//! - `error`: Error types
//!
//! ## Usage
//!
//! ```no_run
//! use tagtree::{Document, PageConfig};
//!
//! let config = PageConfig::new("Report", "report.html")
//!     .with_stylesheet("style.css")
//!     .with_generator("nightly-report");
//! let mut page = Document::new(config);
//!
//! page.add_title(1, "Results");
//! let table = page.add_fill_table(4, Some("100%"));
//! for i in 1..=11 {
//!     table.add_cell(format!("cell {i}"));
//! }
//! page.save();
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Attribute types
pub mod attr;

/// Error types
pub mod error;

/// Node pre-configuration helpers
pub mod factory;

/// Node types: Element, Table, List, Script, Document...
pub mod node;

/// Prelude for common imports
pub mod prelude;

/// HTML rendering
pub mod render;

/// Special-character transcoding
pub mod transcode;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{
    Cell, Children, Comment, Document, Element, List, NoLayout, Node, NodeKind, PageConfig,
    PageLayout, Paragraph, Script, Table, Text,
};

// Attribute types
pub use attr::{Attrs, AttrsExt};

// Rendering
pub use render::{RenderConfig, Renderer, render_node, render_node_with};

// Transcoding
pub use transcode::Transcoder;

// Error types
pub use error::{MarkupError, MarkupResult};
