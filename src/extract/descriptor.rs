use serde::Serialize;
use serde_json::Value;
use std::fmt;

// ============================================================================
// Path descriptors — metadata attached to each discovered field path
// ============================================================================

/// The shape of the value found at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
    /// Homogeneous array: `array of string`, `array of object`, ...
    ArrayOf(Box<ValueKind>),
}

impl ValueKind {
    /// Classify a scalar or container value. Arrays are classified by
    /// element kind when all elements agree, plain `array` otherwise.
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(items) => {
                let mut kinds = items.iter().map(shallow_kind);
                match kinds.next() {
                    Some(first) if kinds.all(|k| k == first) => {
                        ValueKind::ArrayOf(Box::new(first))
                    }
                    _ => ValueKind::Array,
                }
            }
        }
    }
}

/// Non-recursive classification, used for array element agreement.
fn shallow_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Object(_) => ValueKind::Object,
        Value::Array(_) => ValueKind::Array,
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Object => write!(f, "object"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::ArrayOf(inner) => write!(f, "array of {}", inner),
        }
    }
}

impl Serialize for ValueKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A discovered field path with display metadata.
///
/// Built during extraction, consumed by the field picker UI (or the CLI
/// `paths` table); never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PathDescriptor {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub description: String,
    #[serde(rename = "sampleValue")]
    pub sample: Value,
}

impl PathDescriptor {
    pub fn new(path: String, value: &Value) -> Self {
        let kind = ValueKind::of(value);
        let description = format!("{} — {}", kind, sample_preview(value));
        PathDescriptor {
            path,
            kind,
            description,
            sample: value.clone(),
        }
    }
}

const PREVIEW_MAX: usize = 40;

/// Short single-line preview of a sample value for display next to a path.
pub fn sample_preview(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("{} item(s)", items.len()),
        Value::Object(map) => format!("{{{} key(s)}}", map.len()),
        other => other.to_string(),
    };

    if rendered.chars().count() > PREVIEW_MAX {
        let truncated: String = rendered.chars().take(PREVIEW_MAX).collect();
        format!("{}…", truncated)
    } else {
        rendered
    }
}
