use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Mapping model — user-assigned field paths per card type
// ============================================================================

/// Which presentational card template a mapping targets.
///
/// Closed set. The original console reserved further types (promotion, link,
/// article, event, profile, custom) behind disabled menu entries; those are
/// not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Product,
    Blog,
    Property,
}

impl CardType {
    pub fn all() -> [CardType; 3] {
        [CardType::Product, CardType::Blog, CardType::Property]
    }

    pub fn parse(name: &str) -> Option<CardType> {
        match name.to_ascii_lowercase().as_str() {
            "product" => Some(CardType::Product),
            "blog" => Some(CardType::Blog),
            "property" => Some(CardType::Property),
            _ => None,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Product => write!(f, "product"),
            CardType::Blog => write!(f, "blog"),
            CardType::Property => write!(f, "property"),
        }
    }
}

/// Billing period attached to a price, e.g. rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePeriod {
    Week,
    Month,
    Day,
    Year,
}

impl PricePeriod {
    /// Display suffix appended to a formatted price.
    pub fn suffix(&self) -> &'static str {
        match self {
            PricePeriod::Week => "/week",
            PricePeriod::Month => "/month",
            PricePeriod::Day => "/day",
            PricePeriod::Year => "/year",
        }
    }
}

/// Flat record of content field assignments for one card type.
///
/// Every `*_path` holds a field path into the API response, or `None` when
/// the user has not mapped that field yet. Serialized with the persisted
/// camelCase key names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentMapping {
    pub title_path: Option<String>,
    pub description_path: Option<String>,
    pub price_path: Option<String>,
    pub discounted_price_path: Option<String>,
    pub address_path: Option<String>,
    pub beds_path: Option<String>,
    pub baths_path: Option<String>,
    pub area_path: Option<String>,
    pub date_path: Option<String>,
    pub tags_path: Option<String>,
    pub author_path: Option<String>,
    pub image_path: Option<String>,

    /// The response yields a list of items rather than a single record.
    pub is_array: bool,

    /// ISO currency code for price display. Empty means USD.
    pub currency_type: String,

    pub price_period: Option<PricePeriod>,
}

impl ContentMapping {
    /// All assigned paths, for item-source detection and validation.
    pub fn assigned_paths(&self) -> Vec<&str> {
        [
            &self.title_path,
            &self.description_path,
            &self.price_path,
            &self.discounted_price_path,
            &self.address_path,
            &self.beds_path,
            &self.baths_path,
            &self.area_path,
            &self.date_path,
            &self.tags_path,
            &self.author_path,
            &self.image_path,
        ]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .filter(|p| !p.trim().is_empty())
        .collect()
    }
}

/// One action button on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionConfig {
    pub enabled: bool,
    pub text: String,
    pub url_path: Option<String>,
    pub static_url: Option<String>,
    pub use_static_url: bool,
}

impl Default for ActionConfig {
    fn default() -> Self {
        ActionConfig {
            enabled: false,
            text: String::new(),
            url_path: None,
            static_url: None,
            use_static_url: false,
        }
    }
}

/// The up-to-two action buttons of a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionMapping {
    pub primary: ActionConfig,
    pub secondary: ActionConfig,
}

/// Complete mapping for one card type: content fields plus actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardMapping {
    pub content: ContentMapping,
    pub actions: ActionMapping,
}
