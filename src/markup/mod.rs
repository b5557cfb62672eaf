// src/markup/mod.rs
//
// Read-only queries over a parsed page. The extractor only talks to these
// traits; `html` implements them with `scraper`.

pub mod html;

pub use html::{HtmlDocument, HtmlTable};

/// One `th`/`td`: its trimmed text plus its class list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub classes: Vec<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>, classes: &[&str]) -> Self {
        Self {
            text: text.into(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A parsed page that may contain the market value table.
pub trait MarkupDocument {
    type Table<'a>: TableMarkup
    where
        Self: 'a;

    fn find_table(&self) -> Option<Self::Table<'_>>;
}

/// The market value table inside a document.
pub trait TableMarkup {
    type Row;

    /// Cells of the first header row, or `None` if there is no header row.
    fn header_cells(&self) -> Option<Vec<Cell>>;

    /// Body rows in document order.
    fn body_rows(&self) -> Vec<Self::Row>;

    fn row_classes(&self, row: &Self::Row) -> Vec<String>;

    /// Data cells of `row` in document order.
    fn data_cells(&self, row: &Self::Row) -> Vec<Cell>;
}
