use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects render as a key/value block followed by a row table for each
/// field holding a list of records.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(match value {
        Value::Array(items) => render_rows(&items),
        Value::Object(map) => render_object(map),
        scalar => table::render_table(&["value"], &[vec![value_to_cell(&scalar)]], options()),
    })
}

fn render_object(map: Map<String, Value>) -> String {
    let mut scalars = Vec::new();
    let mut sections = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) if items.iter().any(Value::is_object) => {
                sections.push(format!("{key}:\n{}", render_rows(&items)));
            }
            Value::Array(items) if items.is_empty() => {
                sections.push(format!("{key}:\n(no rows)"));
            }
            other => scalars.push((key, other)),
        }
    }
    scalars.sort_by(|a, b| a.0.cmp(&b.0));

    let mut blocks = Vec::with_capacity(sections.len() + 1);
    if !scalars.is_empty() {
        let rows = scalars
            .iter()
            .flat_map(|(key, value)| flatten(key, value))
            .map(|(key, cell)| vec![key, cell])
            .collect::<Vec<_>>();
        blocks.push(table::render_table(&["key", "value"], &rows, options()));
    }
    blocks.extend(sections);
    blocks.join("\n\n")
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            map.iter()
                .flat_map(|(key, value)| flatten(key, value))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // Column order follows the first record; later records may add columns.
    let mut headers = Vec::<String>::new();
    for record in &flattened {
        for (key, _) in record {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = flattened
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| {
                    record
                        .iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, cell)| cell.clone())
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options())
}

/// Expand one level of nested objects into dotted keys (`coords.lat`).
fn flatten(key: &str, value: &Value) -> Vec<(String, String)> {
    match value {
        Value::Object(inner) if !inner.is_empty() => inner
            .iter()
            .map(|(sub, value)| (format!("{key}.{sub}"), value_to_cell(value)))
            .collect(),
        other => vec![(key.to_string(), value_to_cell(other))],
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::TableOptions, table::render_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Point {
        lat: f64,
        lng: f64,
    }

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        coords: Point,
        tags: Vec<&'static str>,
    }

    #[derive(Serialize)]
    struct Listing {
        total: u32,
        rows: Vec<Row>,
    }

    fn listing() -> Listing {
        Listing {
            total: 1,
            rows: vec![Row {
                id: "obs-1",
                coords: Point {
                    lat: 27.5,
                    lng: 117.5,
                },
                tags: vec!["noise", "crowded"],
            }],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&listing(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total"], 1);
        assert_eq!(parsed["rows"][0]["id"], "obs-1");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&listing(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["rows"][0]["coords"]["lat"], 27.5);
    }

    #[test]
    fn table_render_splits_scalars_and_record_lists() {
        let out = render(&listing(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("total"));
        assert!(out.contains("rows:"));
        assert!(out.contains("coords.lat"));
        assert!(out.contains("noise,crowded"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let empty = Listing {
            total: 0,
            rows: vec![],
        };
        let out = render(&empty, OutputFormat::Table).expect("table render should work");
        assert!(out.contains("(no rows)"));
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "point_type", "text"];
        let rows = vec![
            vec!["obs-1".to_string(), "user_added".to_string(), "short".to_string()],
            vec![
                "obs-200".to_string(),
                "issue_report".to_string(),
                "a much longer description".to_string(),
            ],
        ];

        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("point_type"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn narrow_terminal_truncates_wide_columns() {
        let rows = vec![vec!["x".repeat(80)]];
        let table = render_table(
            &["text"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let body = table.lines().nth(2).unwrap();
        assert_eq!(body.chars().count(), 40);
        assert!(body.ends_with('…'));
    }
}
