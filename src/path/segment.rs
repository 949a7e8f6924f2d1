// ============================================================================
// Field path segments — parsed form of a dotted/bracketed address
// ============================================================================

/// One segment of a field path.
///
/// A path like `data[].property_media.photos[2].url` parses into:
/// `AllElements("data")`, `Key("property_media")`, `Index("photos", 2)`,
/// `Key("url")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Plain object key: `name`
    Key(String),

    /// Array traversal over every element (or the first, in single mode): `name[]`
    AllElements(String),

    /// Literal array index: `name[3]`
    Index(String, usize),
}

impl PathSegment {
    /// The key portion of the segment, without any bracket suffix.
    pub fn key(&self) -> &str {
        match self {
            PathSegment::Key(k) => k,
            PathSegment::AllElements(k) => k,
            PathSegment::Index(k, _) => k,
        }
    }
}

/// Parse a field path into segments.
///
/// Malformed bracket suffixes are kept as literal keys rather than rejected;
/// resolution against real data will simply miss and return nothing.
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    path.split('.')
        .filter(|s| !s.is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(raw: &str) -> PathSegment {
    if let Some(name) = raw.strip_suffix("[]") {
        return PathSegment::AllElements(name.to_string());
    }

    if raw.ends_with(']') {
        if let Some(open) = raw.rfind('[') {
            let inner = &raw[open + 1..raw.len() - 1];
            if let Ok(index) = inner.parse::<usize>() {
                return PathSegment::Index(raw[..open].to_string(), index);
            }
        }
    }

    PathSegment::Key(raw.to_string())
}

/// Join a base path and a key into a new path string.
pub fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", base, key)
    }
}
