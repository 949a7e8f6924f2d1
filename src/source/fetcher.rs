use serde_json::Value;

use crate::source::error::SourceError;

// ============================================================================
// Sample response loading — file path or live URL
// ============================================================================

/// Load a sample API response from a local file or, for `http(s)://`
/// inputs, by fetching it.
pub fn load_response(input: &str) -> Result<Value, SourceError> {
    if input.starts_with("http://") || input.starts_with("https://") {
        fetch_url(input)
    } else {
        let content = std::fs::read_to_string(input).map_err(|e| SourceError::FileRead {
            path: input.to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| SourceError::JsonParse {
            context: input.to_string(),
            source: e,
        })
    }
}

fn fetch_url(url: &str) -> Result<Value, SourceError> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .map_err(|e| SourceError::Http {
            url: url.to_string(),
            source: e,
        })?;

    response.json().map_err(|e| SourceError::Http {
        url: url.to_string(),
        source: e,
    })
}

/// Load a mapping (or any YAML-encoded value) from disk.
pub fn load_yaml<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::FileRead {
        path: path.to_string(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| SourceError::YamlParse {
        context: path.to_string(),
        source: e,
    })
}
