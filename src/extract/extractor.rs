use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::extract::descriptor::PathDescriptor;
use crate::path::segment::join_path;

// ============================================================================
// Path extraction — enumerate every addressable field in a JSON document
// ============================================================================

/// How many leading elements of a root array are scanned for a usable
/// canonical object before falling back to the union of all elements.
const CANONICAL_SCAN_LIMIT: usize = 10;

/// Enumerate every distinct field path reachable from `value`.
///
/// The result contains no duplicate path strings and is deterministic for a
/// given input: object keys iterate in sorted order and discovery order is
/// preserved.
pub fn extract_paths(value: &Value) -> Vec<PathDescriptor> {
    extract_paths_from(value, "")
}

/// Like [`extract_paths`], with every emitted path prefixed by `base`.
pub fn extract_paths_from(value: &Value, base: &str) -> Vec<PathDescriptor> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    match value {
        Value::Object(map) => walk_object(map, base, &mut out, &mut seen),
        Value::Array(items) => match canonical_element(items) {
            // Strategy 1/2: one representative object defines the shape.
            Some(shape) => walk_object(shape, base, &mut out, &mut seen),
            // Strategy 3: heterogeneous or flat array — union across every
            // element. Trades a single canonical shape for coverage.
            None => {
                for item in items {
                    if let Value::Object(map) = item {
                        walk_object(map, base, &mut out, &mut seen);
                    }
                }
            }
        },
        // Null/primitive root: nothing addressable.
        _ => {}
    }

    out
}

/// Pick the canonical element of a root array: the first element when it is
/// a non-empty object, otherwise the first non-empty object among the first
/// `CANONICAL_SCAN_LIMIT` elements.
fn canonical_element(items: &[Value]) -> Option<&Map<String, Value>> {
    match items.first() {
        Some(Value::Object(map)) if !map.is_empty() => return Some(map),
        _ => {}
    }

    items.iter().skip(1).take(CANONICAL_SCAN_LIMIT - 1).find_map(|item| match item {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    })
}

fn walk_object(
    map: &Map<String, Value>,
    base: &str,
    out: &mut Vec<PathDescriptor>,
    seen: &mut HashSet<String>,
) {
    for (key, value) in map {
        let path = join_path(base, key);

        match value {
            Value::Object(nested) => {
                emit(&path, value, out, seen);
                walk_object(nested, &path, out, seen);
            }
            Value::Array(items) => {
                // The array itself is addressable as `key[]`...
                let array_path = format!("{}[]", path);
                emit(&array_path, value, out, seen);

                // ...and object elements contribute the union of their keys.
                for item in items {
                    if let Value::Object(nested) = item {
                        walk_object(nested, &array_path, out, seen);
                    }
                }
            }
            _ => emit(&path, value, out, seen),
        }
    }
}

fn emit(path: &str, value: &Value, out: &mut Vec<PathDescriptor>, seen: &mut HashSet<String>) {
    if seen.insert(path.to_string()) {
        out.push(PathDescriptor::new(path.to_string(), value));
    }
}
