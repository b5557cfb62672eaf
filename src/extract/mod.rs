// src/extract/mod.rs

pub mod header;

use serde::Serialize;
use tracing::debug;

use crate::dates::SnapshotDate;
use crate::error::StructureError;
use crate::markup::{Cell, HtmlDocument, MarkupDocument, TableMarkup};
use crate::normalize::{normalize_currency, normalize_percentage};
use crate::report::Reporter;

pub use header::{column_kind, ColumnHeader, ColumnKind, CLUB_LABEL, VALUE_LABEL};

/// Row classes marking repeated header/footer rows inside `tbody`.
const ARTIFACT_ROW_CLASSES: &[&str] = &["thead", "tfoot"];
/// A data cell carrying both classes is a layout spacer (the club crest).
const SPACER_CELL_CLASSES: [&str; 2] = ["no-border-rechts", "zentriert"];
const MIN_CELLS: usize = 2;

/// A normalized cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Percentage(f64),
}

impl CellValue {
    /// CSV field text. Percentages always keep a decimal point.
    pub fn to_field(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Percentage(p) => format!("{:?}", p),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

/// One club in one snapshot. `values` lines up with the table's header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub date: SnapshotDate,
    pub values: Vec<CellValue>,
}

/// Header plus rows for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub headers: ColumnHeader,
    pub rows: Vec<Row>,
}

impl ExtractionResult {
    pub fn value(&self, row: usize, label: &str) -> Option<&CellValue> {
        let col = self.headers.position(label)?;
        self.rows.get(row)?.values.get(col)
    }
}

/// Parse `markup` with `scraper` and extract its market value table.
pub fn extract_html(
    markup: &str,
    date: SnapshotDate,
    reporter: &dyn Reporter,
) -> Result<ExtractionResult, StructureError> {
    extract_table(&HtmlDocument::parse(markup), date, reporter)
}

/// Extract the market value table from an already parsed document.
///
/// `date` only tags the rows.
pub fn extract_table<D: MarkupDocument>(
    doc: &D,
    date: SnapshotDate,
    reporter: &dyn Reporter,
) -> Result<ExtractionResult, StructureError> {
    let table = doc.find_table().ok_or(StructureError::TableNotFound)?;
    let header_cells = table
        .header_cells()
        .ok_or(StructureError::HeaderRowNotFound)?;
    let headers = ColumnHeader::from_cells(&header_cells);
    let kinds: Vec<ColumnKind> = headers.iter().map(column_kind).collect();
    let club_col = headers.position(CLUB_LABEL);
    debug!(headers = ?headers.labels(), "derived header");

    let mut rows = Vec::new();
    for row in table.body_rows() {
        let row_classes = table.row_classes(&row);
        if row_classes
            .iter()
            .any(|c| ARTIFACT_ROW_CLASSES.contains(&c.as_str()))
        {
            continue;
        }

        let cells: Vec<String> = table
            .data_cells(&row)
            .into_iter()
            .filter(|c| !is_spacer(c))
            .map(|c| c.text)
            .collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        let values: Vec<CellValue> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| match cells.get(i) {
                Some(text) => normalize_cell(text, *kind, reporter),
                None => CellValue::default(),
            })
            .collect();

        let has_club = club_col
            .and_then(|i| values.get(i))
            .and_then(CellValue::as_text)
            .is_some_and(|club| !club.is_empty());
        if has_club {
            rows.push(Row { date, values });
        }
    }

    debug!(date = %date, rows = rows.len(), "extracted rows");
    Ok(ExtractionResult { headers, rows })
}

fn is_spacer(cell: &Cell) -> bool {
    SPACER_CELL_CLASSES.iter().all(|c| cell.has_class(c))
}

fn normalize_cell(text: &str, kind: ColumnKind, reporter: &dyn Reporter) -> CellValue {
    match kind {
        ColumnKind::Currency => CellValue::Integer(normalize_currency(text, reporter)),
        ColumnKind::Percentage => CellValue::Percentage(normalize_percentage(text, reporter)),
        ColumnKind::Text => CellValue::Text(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizeError;
    use crate::report::{CollectingReporter, Issue};

    const FIXTURE: &str = include_str!("../../assets/fixtures/market_values.html");

    fn date() -> SnapshotDate {
        "2024-10-01".parse().unwrap()
    }

    /// In-memory table so the extraction rules can be tested without HTML.
    struct StaticDoc {
        header: Option<Vec<Cell>>,
        rows: Vec<(Vec<String>, Vec<Cell>)>,
    }

    impl MarkupDocument for StaticDoc {
        type Table<'a> = &'a StaticDoc;

        fn find_table(&self) -> Option<&StaticDoc> {
            Some(self)
        }
    }

    impl TableMarkup for &StaticDoc {
        type Row = usize;

        fn header_cells(&self) -> Option<Vec<Cell>> {
            self.header.clone()
        }

        fn body_rows(&self) -> Vec<usize> {
            (0..self.rows.len()).collect()
        }

        fn row_classes(&self, row: &usize) -> Vec<String> {
            self.rows[*row].0.clone()
        }

        fn data_cells(&self, row: &usize) -> Vec<Cell> {
            self.rows[*row].1.clone()
        }
    }

    fn plain(texts: &[&str]) -> Vec<Cell> {
        texts.iter().map(|t| Cell::new(*t, &[])).collect()
    }

    #[test]
    fn test_fixture_headers() {
        let reporter = CollectingReporter::new();
        let result = extract_html(FIXTURE, date(), &reporter).unwrap();
        assert_eq!(
            result.headers.labels(),
            ["Rank", "Club", "League", "Value", "Value_2", "+/- %"]
        );
    }

    #[test]
    fn test_fixture_rows() {
        let reporter = CollectingReporter::new();
        let result = extract_html(FIXTURE, date(), &reporter).unwrap();

        // footer row, short row and the row without a club are dropped
        assert_eq!(result.rows.len(), 3);
        assert!(result.rows.iter().all(|r| r.date == date()));
        assert!(result.rows.iter().all(|r| r.values.len() == 6));

        assert_eq!(
            result.value(0, "Club"),
            Some(&CellValue::Text("Bayern Munich".into()))
        );
        assert_eq!(result.value(0, "Value"), Some(&CellValue::Integer(944_700_000)));
        assert_eq!(result.value(0, "Value_2"), Some(&CellValue::Integer(898_450_000)));
        assert_eq!(result.value(0, "+/- %"), Some(&CellValue::Percentage(5.1)));

        assert_eq!(result.value(1, "Value"), Some(&CellValue::Integer(606_300_000)));
        assert_eq!(result.value(1, "+/- %"), Some(&CellValue::Percentage(-3.2)));

        // a placeholder value and a missing trailing cell
        assert_eq!(result.value(2, "Club"), Some(&CellValue::Text("1.FC Heidenheim 1846".into())));
        assert_eq!(result.value(2, "Value_2"), Some(&CellValue::Integer(0)));
        assert_eq!(result.value(2, "+/- %"), Some(&CellValue::Text(String::new())));

        assert!(reporter.is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let reporter = CollectingReporter::new();
        let first = extract_html(FIXTURE, date(), &reporter).unwrap();
        let second = extract_html(FIXTURE, date(), &reporter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let reporter = CollectingReporter::new();
        let err = extract_html("<html><body></body></html>", date(), &reporter).unwrap_err();
        assert_eq!(err, StructureError::TableNotFound);
    }

    #[test]
    fn test_missing_header_row_is_an_error() {
        let doc = StaticDoc {
            header: None,
            rows: vec![],
        };
        let err = extract_table(&doc, date(), &CollectingReporter::new()).unwrap_err();
        assert_eq!(err, StructureError::HeaderRowNotFound);
    }

    #[test]
    fn test_short_rows_and_clubless_rows_are_dropped() {
        let doc = StaticDoc {
            header: Some(plain(&["", "Club", "Value Oct 1, 2024"])),
            rows: vec![
                (vec![], plain(&["1"])),
                (vec![], plain(&["2", "", "€1.00m"])),
                (vec!["tfoot".into()], plain(&["", "Total", "€9.00m"])),
                (vec![], plain(&["3", "Kiel", "€2.00m"])),
            ],
        };
        let result = extract_table(&doc, date(), &CollectingReporter::new()).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(
            result.rows[0].values,
            vec![
                CellValue::Text("3".into()),
                CellValue::Text("Kiel".into()),
                CellValue::Integer(2_000_000),
            ]
        );
    }

    #[test]
    fn test_spacer_cells_need_both_classes() {
        let doc = StaticDoc {
            header: Some(plain(&["", "Club", "League"])),
            rows: vec![(
                vec![],
                vec![
                    Cell::new("1", &["zentriert"]),
                    Cell::new("", &["zentriert", "no-border-rechts"]),
                    Cell::new("Mainz", &["hauptlink", "no-border-links"]),
                    Cell::new("Bundesliga", &["no-border-rechts"]),
                ],
            )],
        };
        let result = extract_table(&doc, date(), &CollectingReporter::new()).unwrap();
        assert_eq!(result.value(0, "Club"), Some(&CellValue::Text("Mainz".into())));
        assert_eq!(result.value(0, "League"), Some(&CellValue::Text("Bundesliga".into())));
    }

    #[test]
    fn test_bad_cells_are_reported() {
        let doc = StaticDoc {
            header: Some(plain(&["", "Club", "Value", "%"])),
            rows: vec![(vec![], plain(&["1", "Bochum", "n/a", "unknown"]))],
        };
        let reporter = CollectingReporter::new();
        let result = extract_table(&doc, date(), &reporter).unwrap();
        assert_eq!(result.value(0, "Value"), Some(&CellValue::Integer(0)));
        assert_eq!(result.value(0, "%"), Some(&CellValue::Percentage(0.0)));
        assert_eq!(
            reporter.issues(),
            vec![
                Issue::Normalize(NormalizeError::Currency("n/a".into())),
                Issue::Normalize(NormalizeError::Percentage("unknown".into())),
            ]
        );
    }

    #[test]
    fn test_no_club_column_keeps_nothing() {
        let doc = StaticDoc {
            header: Some(plain(&["", "Team"])),
            rows: vec![(vec![], plain(&["1", "Union Berlin"]))],
        };
        let result = extract_table(&doc, date(), &CollectingReporter::new()).unwrap();
        assert_eq!(result.headers.labels(), ["Rank", "Team"]);
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_percentage_field_format() {
        assert_eq!(CellValue::Percentage(0.0).to_field(), "0.0");
        assert_eq!(CellValue::Percentage(-3.2).to_field(), "-3.2");
        assert_eq!(CellValue::Integer(500_000).to_field(), "500000");
    }
}
