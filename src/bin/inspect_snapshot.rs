use mvscraper::{extract_html, CollectingReporter, SnapshotDate};
use serde_json::{json, Map, Value};
use std::{env, fs, path::Path, process::exit};

fn main() {
    // Expect a saved page and optionally the snapshot date it belongs to.
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <HTML_FILE> [YYYY-MM-DD]", args[0]);
        exit(1);
    }
    let date = args.get(2).map(String::as_str).unwrap_or("2024-10-01");
    if let Err(e) = inspect_snapshot(Path::new(&args[1]), date) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Extract the table from a saved page and print header, rows and any
/// normalization fallbacks as JSON.
fn inspect_snapshot(path: &Path, date: &str) -> anyhow::Result<()> {
    let date: SnapshotDate = date.parse()?;
    let markup = fs::read_to_string(path)?;
    let reporter = CollectingReporter::new();
    let result = extract_html(&markup, date, &reporter)?;

    let rows: Vec<Value> = result
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            obj.insert("Date".to_string(), json!(row.date));
            for (label, value) in result.headers.iter().zip(&row.values) {
                obj.insert(label.to_string(), json!(value));
            }
            Value::Object(obj)
        })
        .collect();
    let issues: Vec<String> = reporter.issues().iter().map(ToString::to_string).collect();

    let report = json!({
        "file": path.display().to_string(),
        "headers": result.headers,
        "row_count": rows.len(),
        "rows": rows,
        "issues": issues,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
