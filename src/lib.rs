use serde_json::Value;

use crate::{
    card::{
        card_model::PreviewOutcome,
        renderer::{guard_preview, render_preview, RenderOptions},
    },
    extract::{descriptor::PathDescriptor, extractor::extract_paths},
    mapping::store::MappingStore,
};

pub mod card;
pub mod cli;
pub mod extract;
pub mod mapping;
pub mod path;
pub mod preview;
pub mod source;
pub mod trace;

/// Discover every addressable field path in a sample API response.
///
/// Thin entry point over [`extract::extractor::extract_paths`] for hosts
/// that only need the field picker data.
pub fn discover_paths(response: &Value) -> Vec<PathDescriptor> {
    extract_paths(response)
}

/// Render a card preview for an already-loaded response and mapping.
///
/// This is the guarded render boundary: the result is always displayable,
/// either a bounded card grid or an error panel.
pub fn preview_response(
    store: &MappingStore,
    response: &Value,
    opts: &RenderOptions,
) -> PreviewOutcome {
    guard_preview(Ok(render_preview(store, response, opts)))
}
