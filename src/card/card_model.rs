use serde::Serialize;

use crate::card::defaults::CardField;
use crate::mapping::mapping_model::CardType;

// ============================================================================
// Resolved cards — the materialized display records
// ============================================================================

/// A visible action button with its resolved destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAction {
    pub text: String,
    pub url: String,
}

/// One card ready for display. Recomputed on every render, never persisted.
///
/// Fields that do not belong to the card's template stay `None`; fields that
/// do belong are always populated, falling back to placeholders.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCard {
    pub card_type: CardType,

    pub title: String,
    pub description: Option<String>,

    pub price: Option<String>,
    pub discounted_price: Option<String>,

    pub address: Option<String>,
    pub beds: Option<String>,
    pub baths: Option<String>,
    pub area: Option<String>,

    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,

    /// Primary image plus any further extracted image URLs.
    pub image_url: String,
    pub image_urls: Vec<String>,

    /// At most two visible buttons; hidden buttons are simply absent.
    pub actions: Vec<ResolvedAction>,

    /// Which template fields fell back to their placeholder.
    #[serde(skip)]
    pub defaulted_fields: Vec<CardField>,
}

impl ResolvedCard {
    pub fn empty(card_type: CardType) -> Self {
        ResolvedCard {
            card_type,
            title: String::new(),
            description: None,
            price: None,
            discounted_price: None,
            address: None,
            beds: None,
            baths: None,
            area: None,
            date: None,
            tags: None,
            author: None,
            image_url: String::new(),
            image_urls: vec![],
            actions: vec![],
            defaulted_fields: vec![],
        }
    }

    pub fn was_defaulted(&self, field: CardField) -> bool {
        self.defaulted_fields.contains(&field)
    }
}

/// The rendered preview: a bounded grid of cards plus the overflow count.
#[derive(Debug, Clone, Serialize)]
pub struct CardGrid {
    pub card_type: CardType,
    pub cards: Vec<ResolvedCard>,

    /// Items beyond the visible cap, shown as a "+N more" indicator.
    pub more_count: usize,

    /// Total items the data source yielded.
    pub total: usize,
}

impl CardGrid {
    pub fn overflow_label(&self) -> Option<String> {
        if self.more_count > 0 {
            Some(format!("+{} more", self.more_count))
        } else {
            None
        }
    }
}

/// Outcome of the guarded preview pipeline. Errors become a visible panel,
/// never a crash of the host surface.
#[derive(Debug, Clone, Serialize)]
pub enum PreviewOutcome {
    Cards(CardGrid),
    Failed {
        message: String,
        detail: Option<String>,
    },
}
