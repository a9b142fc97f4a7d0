// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::fmt;

#[derive(Serialize)]
struct Row {
    name: &'static str,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.name)
    }
}

fn table(rows: &[Row]) -> Table<'_, Row> {
    Table {
        header: "NAME",
        empty: "Nothing",
        rows,
    }
}

#[test]
fn text_has_header_and_rows() {
    let rows = [Row { name: "a" }, Row { name: "b" }];
    assert_eq!(table(&rows).render(OutputFormat::Text), "NAME\nrow a\nrow b\n");
}

#[test]
fn empty_text_prints_placeholder() {
    assert_eq!(table(&[]).render(OutputFormat::Text), "Nothing\n");
}

#[test]
fn json_is_an_array_even_when_empty() {
    assert_eq!(table(&[]).render(OutputFormat::Json), "[]\n");

    let rows = [Row { name: "a" }];
    let json: serde_json::Value =
        serde_json::from_str(&table(&rows).render(OutputFormat::Json)).unwrap();
    assert_eq!(json[0]["name"], "a");
}
