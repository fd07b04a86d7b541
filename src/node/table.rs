//! Table packing cells into rows of a fixed width
//!
//! Cells are appended one at a time; a new `<tr>` opens whenever the previous
//! row is full. Auto-fill tables pad the last row with empty cells, but only
//! in what they render: the stored tree is left as built, so rendering twice
//! never pads twice.

use crate::attr::AttrsExt;
use crate::error::MarkupResult;
use crate::render::Renderer;

use super::{Element, Node};

// =============================================================================
// Cell
// =============================================================================

/// Payload of a table cell.
#[derive(Debug, Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Nodes(Vec<Node>),
}

impl Cell {
    fn into_td(self) -> Element {
        match self {
            Cell::Empty => Element::new("td"),
            Cell::Text(text) => Element::with_content("td", text),
            Cell::Nodes(nodes) => nodes
                .into_iter()
                .fold(Element::new("td"), |td, node| td.child(node)),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<Node> for Cell {
    fn from(node: Node) -> Self {
        Cell::Nodes(vec![node])
    }
}

impl From<Element> for Cell {
    fn from(element: Element) -> Self {
        Cell::Nodes(vec![element.into()])
    }
}

impl From<Vec<Node>> for Cell {
    fn from(nodes: Vec<Node>) -> Self {
        Cell::Nodes(nodes)
    }
}

// =============================================================================
// Table
// =============================================================================

/// `<table>` whose rows hold a fixed number of cells.
#[derive(Debug, Clone)]
pub struct Table {
    /// `<table>` holding the closed rows
    element: Element,
    /// `<colgroup>` written before the rows
    columns: Option<Element>,
    /// Last `<tr>`, kept apart until it is full
    open_row: Option<Element>,
    cells_per_row: usize,
    auto_fill: bool,
}

impl Table {
    /// Create a table with `cells_per_row` cells per row (at least one).
    pub fn new(cells_per_row: usize) -> Self {
        Self {
            element: Element::new("table"),
            columns: None,
            open_row: None,
            cells_per_row: cells_per_row.max(1),
            auto_fill: false,
        }
    }

    /// Create a table whose last row is padded with empty cells when rendered.
    pub fn with_fill(cells_per_row: usize) -> Self {
        Self {
            auto_fill: true,
            ..Self::new(cells_per_row)
        }
    }

    /// Set an attribute on the `<table>` tag.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.element.add_attribute(name, value);
        self
    }

    /// Declare column widths, written as a `<colgroup>` ahead of the rows.
    ///
    /// Calling it again replaces the previous definitions.
    pub fn set_columns<I>(&mut self, widths: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let colgroup = widths.into_iter().fold(Element::new("colgroup"), |group, width| {
            group.child(Element::void("col").attr("width", width))
        });
        self.columns = Some(colgroup);
        self
    }

    /// Add a cell holding text, a node or several nodes.
    pub fn add_cell(&mut self, cell: impl Into<Cell>) -> &mut Self {
        let row = self.open_row.get_or_insert_with(|| Element::new("tr"));
        row.add_child(cell.into().into_td());
        if row.child_count() >= self.cells_per_row {
            self.close_row();
        }
        self
    }

    /// Add several cells in order, wrapping onto new rows as they fill up.
    pub fn add_cells<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        for cell in cells {
            self.add_cell(cell);
        }
        self
    }

    /// Add an empty cell.
    pub fn add_empty_cell(&mut self) -> &mut Self {
        self.add_cell(Cell::Empty)
    }

    /// Pad the open row with empty cells now. Does nothing if no row is open.
    pub fn fill(&mut self) -> &mut Self {
        let padding = self.open_row_room();
        if padding > 0 {
            tracing::debug!(padding, "padding last table row");
        }
        for _ in 0..padding {
            self.add_empty_cell();
        }
        self
    }

    fn close_row(&mut self) {
        if let Some(row) = self.open_row.take() {
            self.element.add_child(row);
        }
    }

    /// Cells still missing from the open row.
    fn open_row_room(&self) -> usize {
        self.open_row
            .as_ref()
            .map_or(0, |row| self.cells_per_row.saturating_sub(row.child_count()))
    }

    /// Empty cells that rendering will add to the last row.
    fn render_padding(&self) -> usize {
        if self.auto_fill { self.open_row_room() } else { 0 }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Declared cells per row.
    pub fn cells_per_row(&self) -> usize {
        self.cells_per_row
    }

    /// Check if the last row is padded at render time.
    pub fn is_auto_fill(&self) -> bool {
        self.auto_fill
    }

    /// Number of rows, the open one included.
    pub fn row_count(&self) -> usize {
        self.element.child_count() + usize::from(self.open_row.is_some())
    }

    /// Number of cells added so far.
    pub fn cell_count(&self) -> usize {
        self.rows().map(Element::child_count).sum()
    }

    /// Iterate over the `<tr>` elements, the open one last.
    pub fn rows(&self) -> impl Iterator<Item = &Element> {
        self.element
            .children
            .iter()
            .filter_map(Node::as_element)
            .chain(self.open_row.as_ref())
    }

    /// Get an attribute of the `<table>` tag.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.element.attrs.get_attr(name)
    }

    /// The `<table>` element holding the closed rows.
    pub fn element(&self) -> &Element {
        &self.element
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn descendant_count(&self) -> usize {
        let columns = self.columns.as_ref().map_or(0, |group| 1 + group.descendant_count());
        let open = self
            .open_row
            .as_ref()
            .map_or(0, |row| 1 + row.descendant_count() + self.render_padding());
        columns + self.element.descendant_count() + open
    }

    pub(crate) fn render_into(&self, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        let total = self.descendant_count();
        self.element.render_with(renderer, depth, inline, total, |renderer, depth, inline| {
            if let Some(columns) = &self.columns {
                columns.render_into(renderer, depth, inline);
            }
            for row in &self.element.children {
                row.render_into(renderer, depth, inline);
            }
            if let Some(row) = &self.open_row {
                self.render_open_row(row, renderer, depth, inline);
            }
        });
    }

    /// Render the open row, followed by the padding cells auto-fill adds.
    fn render_open_row(&self, row: &Element, renderer: &mut Renderer<'_>, depth: usize, inline: bool) {
        let padding = self.render_padding();
        let total = row.descendant_count() + padding;
        row.render_with(renderer, depth, inline, total, |renderer, depth, inline| {
            for cell in &row.children {
                cell.render_into(renderer, depth, inline);
            }
            let empty = Element::new("td");
            for _ in 0..padding {
                empty.render_into(renderer, depth, inline);
            }
        });
    }

    /// Check the cell contents for structural misuse.
    ///
    /// Rows cannot overflow: cells only enter through [`Table::add_cell`].
    pub fn validate(&self) -> MarkupResult<()> {
        self.element.validate()?;
        match &self.open_row {
            Some(row) => row.validate(),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupError;
    use crate::factory;

    /// Count `<td>` tags per rendered `<tr>`.
    fn cells_per_rendered_row(html: &str) -> Vec<usize> {
        html.split("<tr>")
            .skip(1)
            .map(|row| row.matches("<td").count())
            .collect()
    }

    #[test]
    fn test_eleven_cells_four_per_row_filled() {
        let mut table = Table::with_fill(4);
        for i in 1..=11 {
            table.add_cell(format!("cell {i}"));
        }
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell_count(), 11);

        let html = Node::from(table).render(0, false);
        assert_eq!(cells_per_rendered_row(&html), [4, 4, 4]);

        let expected_last_row = concat!(
            "\n  <tr>",
            "\n    <td>cell 9</td>",
            "\n    <td>cell 10</td>",
            "\n    <td>cell 11</td>",
            "\n    <td></td>",
            "\n  </tr>",
            "\n</table>",
        );
        assert!(html.ends_with(expected_last_row), "{html}");
    }

    #[test]
    fn test_full_render_layout() {
        let mut table = Table::new(2);
        table.add_cell("a").add_cell("b").add_cell("c");
        let expected = concat!(
            "\n<table>",
            "\n  <tr>",
            "\n    <td>a</td>",
            "\n    <td>b</td>",
            "\n  </tr>",
            "\n  <tr><td>c</td></tr>",
            "\n</table>",
        );
        assert_eq!(Node::from(table).render(0, false), expected);
    }

    #[test]
    fn test_without_fill_last_row_stays_short() {
        let mut table = Table::new(4);
        for i in 1..=11 {
            table.add_cell(format!("cell {i}"));
        }
        let html = Node::from(table).render(0, false);
        assert_eq!(cells_per_rendered_row(&html), [4, 4, 3]);
        assert!(!html.contains("<td></td>"));
    }

    #[test]
    fn test_fill_rows_match_ceiling() {
        for k in 1..=5 {
            for n in 0..=12usize {
                let mut table = Table::with_fill(k);
                for i in 0..n {
                    table.add_cell(i.to_string());
                }
                let html = Node::from(table).render(0, false);
                let rows = cells_per_rendered_row(&html);
                assert_eq!(rows.len(), n.div_ceil(k), "k={k} n={n}");
                assert!(rows.iter().all(|&cells| cells == k), "k={k} n={n}: {rows:?}");
            }
        }
    }

    #[test]
    fn test_fill_at_render_is_idempotent() {
        let mut table = Table::with_fill(3);
        table.add_cell("x");
        let node = Node::from(table);

        let first = node.render(0, false);
        let second = node.render(0, false);
        assert_eq!(first, second);
        assert_eq!(first.matches("<td></td>").count(), 2);

        // The stored tree is untouched
        assert_eq!(node.as_table().map(Table::cell_count), Some(1));
    }

    #[test]
    fn test_explicit_fill_closes_row() {
        let mut table = Table::new(3);
        table.add_cell("x").fill();
        assert_eq!(table.cell_count(), 3);
        table.fill();
        assert_eq!(table.cell_count(), 3);

        table.add_cell("y");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_padding_counts_as_descendants() {
        let mut table = Table::with_fill(2);
        table.add_cell("only");
        // tr + td + padded td
        assert_eq!(Node::from(table).descendant_count(), 3);
    }

    #[test]
    fn test_node_cells() {
        let mut table = Table::new(2);
        table.add_cell(factory::image("a.png", Some("A"), None));
        table.add_cell(vec![
            Node::from(factory::link("b.html", "B")),
            Node::from(factory::gray_font("new")),
        ]);
        table.add_empty_cell();
        table.add_attribute("width", "100%");

        let expected = concat!(
            "\n<table width=\"100%\">",
            "\n  <tr>",
            "\n    <td><img src=\"a.png\" title=\"A\"></td>",
            "\n    <td>",
            "\n      <a href=\"b.html\">B</a>",
            "\n      <font color=\"gray\">new</font>",
            "\n    </td>",
            "\n  </tr>",
            "\n  <tr><td></td></tr>",
            "\n</table>",
        );
        assert_eq!(Node::from(table).render(0, false), expected);
    }

    #[test]
    fn test_zero_cells_per_row_is_clamped() {
        let mut table = Table::new(0);
        table.add_cell("a").add_cell("b");
        assert_eq!(table.cells_per_row(), 1);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_validate_detects_void_cell_children() {
        let mut img = factory::image("a.png", None, None);
        img.add_child(factory::comment("hidden"));
        let mut table = Table::new(1);
        table.add_cell(img);
        assert!(matches!(
            table.validate(),
            Err(MarkupError::VoidElementChild { .. })
        ));
    }

    #[test]
    fn test_padding_leaves_open_row_short() {
        let mut table = Table::with_fill(4);
        table.add_cells(["a", "b", "c", "d", "e"]);

        let html = Node::from(table.clone()).render(0, false);
        assert_eq!(cells_per_rendered_row(&html), [4, 4]);
        assert_eq!(table.rows().map(Element::child_count).collect::<Vec<_>>(), [4, 1]);
        assert_eq!(table.element().child_count(), 1);
    }

    #[test]
    fn test_add_cells_wraps_rows() {
        let mut table = Table::new(2);
        table.add_cells(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell_count(), 3);
    }

    #[test]
    fn test_column_definitions_precede_rows() {
        let mut table = Table::new(2);
        table.set_columns(["30%", "70%"]).add_cells(["a", "b"]);
        let expected = concat!(
            "\n<table>",
            "\n  <colgroup>",
            "\n    <col width=\"30%\">",
            "\n    <col width=\"70%\">",
            "\n  </colgroup>",
            "\n  <tr>",
            "\n    <td>a</td>",
            "\n    <td>b</td>",
            "\n  </tr>",
            "\n</table>",
        );
        assert_eq!(Node::from(table).render(0, false), expected);
    }
}
