use serde_json::Value;

use crate::path::segment::{parse_path, PathSegment};

// ============================================================================
// Path resolution — look up values at a field path inside a JSON document
// ============================================================================

/// Which terminal values a collecting resolution keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFilter {
    /// Keep every non-null terminal value.
    Any,
    /// Keep only strings (image URL extraction).
    Strings,
    /// Keep only objects (card item extraction).
    Objects,
}

impl ValueFilter {
    fn keeps(&self, value: &Value) -> bool {
        match self {
            ValueFilter::Any => !value.is_null(),
            ValueFilter::Strings => value.is_string(),
            ValueFilter::Objects => value.is_object(),
        }
    }
}

/// Resolve a path against a document for a single representative value.
///
/// An interior `[]` segment takes element 0; a trailing `[]` yields the
/// array itself. A plain key applied to an array implicitly descends into
/// element 0 first — root-level arrays produce element-relative paths
/// during extraction, and this is the matching lookup rule.
///
/// Any miss (absent key, empty array, type mismatch) returns `None`.
pub fn resolve_single(data: &Value, path: &str) -> Option<Value> {
    let segments = parse_path(path);
    if segments.is_empty() {
        return None;
    }

    let mut current = data;
    for (i, segment) in segments.iter().enumerate() {
        let last = i == segments.len() - 1;
        current = step_single(current, segment, last)?;
    }
    Some(current.clone())
}

fn step_single<'a>(current: &'a Value, segment: &PathSegment, last: bool) -> Option<&'a Value> {
    // Implicit descent: a keyed segment against an array means element 0.
    let current = match current {
        Value::Array(items) => items.first()?,
        other => other,
    };

    let field = current.get(segment.key())?;
    match segment {
        PathSegment::Key(_) => Some(field),
        PathSegment::AllElements(_) if last => field.as_array().map(|_| field),
        PathSegment::AllElements(_) => field.as_array()?.first(),
        PathSegment::Index(_, i) => field.as_array()?.get(*i),
    }
}

/// Resolve a path against a document, collecting every matching value.
///
/// `[]` segments (and implicit array hits) fan out over all elements; the
/// terminal values are flattened, filtered, and truncated at `max_items`.
pub fn resolve_all(data: &Value, path: &str, filter: ValueFilter, max_items: usize) -> Vec<Value> {
    let segments = parse_path(path);
    let mut out = Vec::new();
    if segments.is_empty() || max_items == 0 {
        return out;
    }
    collect(data, &segments, filter, max_items, &mut out);
    out
}

fn collect(current: &Value, segments: &[PathSegment], filter: ValueFilter, cap: usize, out: &mut Vec<Value>) {
    if out.len() >= cap {
        return;
    }

    let Some(segment) = segments.first() else {
        if filter.keeps(current) {
            out.push(current.clone());
        }
        return;
    };

    // Implicit fan-out: a keyed segment against an array applies to every element.
    if let Value::Array(items) = current {
        for item in items {
            if out.len() >= cap {
                return;
            }
            collect(item, segments, filter, cap, out);
        }
        return;
    }

    let Some(field) = current.get(segment.key()) else {
        return;
    };

    match segment {
        PathSegment::Key(_) => collect(field, &segments[1..], filter, cap, out),
        PathSegment::AllElements(_) => {
            let Some(items) = field.as_array() else {
                return;
            };
            for item in items {
                if out.len() >= cap {
                    return;
                }
                collect(item, &segments[1..], filter, cap, out);
            }
        }
        PathSegment::Index(_, i) => {
            if let Some(item) = field.as_array().and_then(|a| a.get(*i)) {
                collect(item, &segments[1..], filter, cap, out);
            }
        }
    }
}

/// Split a path at its last `[]` segment: the container path (inclusive)
/// and the remainder relative to one element of that container.
///
/// `data[].media.photo` → `Some(("data[]", "media.photo"))`.
/// Returns `None` when the path has no `[]` segment.
pub fn split_at_last_array(path: &str) -> Option<(String, String)> {
    let pos = path.rfind("[]")?;
    let container = &path[..pos + 2];
    let remainder = path[pos + 2..].trim_start_matches('.');
    Some((container.to_string(), remainder.to_string()))
}
