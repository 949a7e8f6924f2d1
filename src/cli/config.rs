use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "card-mapper",
    version,
    about = "Map arbitrary API responses onto chat card templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: card-mapper.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract every addressable field path from a sample API response
    Paths {
        /// Response source: JSON file path or http(s) URL
        #[arg(long)]
        input: String,

        /// Prefix prepended to every extracted path
        #[arg(long)]
        base: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Render a card preview from a response and a mapping file
    Preview {
        /// Response source: JSON file path or http(s) URL
        #[arg(long)]
        input: String,

        /// Mapping YAML file (as written by `suggest`)
        #[arg(long)]
        mapping: String,

        /// Card type override: product, blog, property
        #[arg(long)]
        card_type: Option<String>,

        /// Output format: console, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Max image URLs extracted per card
        #[arg(long)]
        max_images: Option<usize>,
    },

    /// Generate a starter mapping for a response by keyword matching
    Suggest {
        /// Response source: JSON file path or http(s) URL
        #[arg(long)]
        input: String,

        /// Card type: product, blog, property
        #[arg(long)]
        card_type: String,

        /// Mapping YAML output path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `card-mapper.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,

    #[serde(default = "default_five")]
    pub max_images: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
            max_images: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_trace_path")]
    pub path: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "card_mapper_trace.jsonl".to_string(),
        }
    }
}

// Serde default helpers
fn default_console() -> String { "console".to_string() }
fn default_five() -> usize { 5 }
fn default_trace_path() -> String { "card_mapper_trace.jsonl".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("card-mapper.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
