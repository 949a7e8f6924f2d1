use std::fmt;

#[derive(Debug)]
pub enum SourceError {
    /// Reading a local response file failed
    FileRead { path: String, source: std::io::Error },

    /// HTTP fetch of a sample response failed
    Http { url: String, source: reqwest::Error },

    /// Response body was not valid JSON
    JsonParse { context: String, source: serde_json::Error },

    /// Mapping/config YAML was not valid
    YamlParse { context: String, source: serde_yaml::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::FileRead { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            SourceError::Http { url, source } => {
                write!(f, "Failed to fetch {}: {}", url, source)
            }
            SourceError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            SourceError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::FileRead { source, .. } => Some(source),
            SourceError::Http { source, .. } => Some(source),
            SourceError::JsonParse { source, .. } => Some(source),
            SourceError::YamlParse { source, .. } => Some(source),
        }
    }
}
