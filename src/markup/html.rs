// src/markup/html.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{Cell, MarkupDocument, TableMarkup};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("CSS selector should be valid")
}

static TABLE: Lazy<Selector> = Lazy::new(|| selector("div.responsive-table table.items"));
static HEADER_ROW: Lazy<Selector> = Lazy::new(|| selector("thead tr"));
static HEADER_CELL: Lazy<Selector> = Lazy::new(|| selector("th"));
static BODY_ROW: Lazy<Selector> = Lazy::new(|| selector("tbody tr"));
static DATA_CELL: Lazy<Selector> = Lazy::new(|| selector("td"));

/// A page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl MarkupDocument for HtmlDocument {
    type Table<'a> = HtmlTable<'a>;

    fn find_table(&self) -> Option<HtmlTable<'_>> {
        self.html
            .select(&TABLE)
            .next()
            .map(|table| HtmlTable { table })
    }
}

/// The `table.items` element inside `div.responsive-table`.
pub struct HtmlTable<'a> {
    table: ElementRef<'a>,
}

impl<'a> TableMarkup for HtmlTable<'a> {
    type Row = ElementRef<'a>;

    fn header_cells(&self) -> Option<Vec<Cell>> {
        let row = self.table.select(&HEADER_ROW).next()?;
        Some(row.select(&HEADER_CELL).map(to_cell).collect())
    }

    fn body_rows(&self) -> Vec<ElementRef<'a>> {
        self.table.select(&BODY_ROW).collect()
    }

    fn row_classes(&self, row: &ElementRef<'a>) -> Vec<String> {
        classes(row)
    }

    fn data_cells(&self, row: &ElementRef<'a>) -> Vec<Cell> {
        row.select(&DATA_CELL).map(to_cell).collect()
    }
}

fn classes(el: &ElementRef<'_>) -> Vec<String> {
    el.value().classes().map(str::to_string).collect()
}

/// Text fragments are trimmed individually and concatenated.
fn to_cell(el: ElementRef<'_>) -> Cell {
    let text = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<String>();
    Cell {
        text,
        classes: classes(&el),
    }
}
