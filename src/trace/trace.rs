use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::card::card_model::CardGrid;
use crate::mapping::mapping_model::CardType;

/// One diagnostic record in the JSONL trace stream.
///
/// Best-effort observability for the mapping pipeline: what was extracted,
/// what was rendered, and how many fields fell back to placeholders.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub stage: String,

    pub input: Option<String>,
    pub card_type: Option<String>,

    pub path_count: Option<usize>,
    pub cards_rendered: Option<usize>,
    pub items_total: Option<usize>,
    pub defaulted_fields: Option<usize>,

    pub message: Option<String>,
}

impl TraceEvent {
    pub fn stage(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            stage: stage.to_string(),
            input: None,
            card_type: None,
            path_count: None,
            cards_rendered: None,
            items_total: None,
            defaulted_fields: None,
            message: None,
        }
    }

    pub fn with_input(mut self, input: impl ToString) -> Self {
        self.input = Some(input.to_string());
        self
    }

    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type.to_string());
        self
    }

    pub fn with_path_count(mut self, count: usize) -> Self {
        self.path_count = Some(count);
        self
    }

    pub fn with_grid(mut self, grid: &CardGrid) -> Self {
        self.cards_rendered = Some(grid.cards.len());
        self.items_total = Some(grid.total);
        self.defaulted_fields = Some(grid.cards.iter().map(|c| c.defaulted_fields.len()).sum());
        self
    }

    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = Some(message.to_string());
        self
    }
}
