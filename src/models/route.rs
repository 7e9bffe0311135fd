// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tabular view of demo route scores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Non-geometry properties of a feature collection, laid out as a table.
///
/// Columns are the union of all property keys in first-seen order. A row
/// holds `null` for any column its feature does not carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl RouteTable {
    /// Build a table from per-feature property maps.
    pub fn from_properties<I>(features: I) -> Self
    where
        I: IntoIterator<Item = serde_json::Map<String, Value>>,
    {
        let features: Vec<_> = features.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        for props in &features {
            for key in props.keys() {
                // Property named like the geometry column never becomes a column
                if key == "geometry" {
                    continue;
                }
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = features
            .iter()
            .map(|props| {
                columns
                    .iter()
                    .map(|c| props.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_columns_union_in_first_seen_order() {
        let table = RouteTable::from_properties(vec![
            props(json!({"route_id": "r1", "score": 71})),
            props(json!({"route_id": "r2", "boat": "B-7", "score": 40})),
        ]);

        assert_eq!(table.columns, vec!["route_id", "score", "boat"]);
        assert_eq!(table.rows[0], vec![json!("r1"), json!(71), Value::Null]);
        assert_eq!(table.rows[1], vec![json!("r2"), json!(40), json!("B-7")]);
    }

    #[test]
    fn test_geometry_key_dropped() {
        let table = RouteTable::from_properties(vec![props(
            json!({"route_id": "r1", "geometry": "LINESTRING(0 0, 1 1)"}),
        )]);
        assert_eq!(table.columns, vec!["route_id"]);
    }

    #[test]
    fn test_empty() {
        let table = RouteTable::from_properties(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
