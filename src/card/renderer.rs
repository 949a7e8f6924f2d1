use serde_json::Value;

use crate::card::card_model::{CardGrid, PreviewOutcome, ResolvedAction, ResolvedCard};
use crate::card::defaults::{placeholder, placeholder_image, CardField};
use crate::card::price::format_price;
use crate::mapping::mapping_model::{ActionConfig, CardMapping, CardType, ContentMapping};
use crate::mapping::store::MappingStore;
use crate::path::resolver::{resolve_all, resolve_single, ValueFilter};

// ============================================================================
// Card rendering — apply a mapping to a concrete API response
// ============================================================================

/// Cards shown before the grid collapses into a "+N more" indicator.
pub const MAX_VISIBLE_CARDS: usize = 2;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Cap on image URLs extracted per card.
    pub max_images: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { max_images: 5 }
    }
}

/// Render the active mapping of `store` against `data`.
///
/// Total: resolution misses become placeholders, an unrecognized response
/// shape becomes a single placeholder card. Errors from the surrounding
/// pipeline (loading, parsing) are handled by [`guard_preview`].
pub fn render_preview(store: &MappingStore, data: &Value, opts: &RenderOptions) -> CardGrid {
    let card_type = store.card_type;
    let mapping = store.active();

    let (scopes, total) = source_items(data, &mapping.content);

    let cards = scopes
        .iter()
        .map(|scope| render_card(card_type, mapping, scope, data, opts))
        .collect();

    CardGrid {
        card_type,
        cards,
        more_count: total.saturating_sub(MAX_VISIBLE_CARDS),
        total,
    }
}

/// Top-level render boundary: convert a failed pipeline into a visible
/// error panel instead of crashing the host surface.
pub fn guard_preview(
    result: Result<CardGrid, Box<dyn std::error::Error>>,
) -> PreviewOutcome {
    match result {
        Ok(grid) => PreviewOutcome::Cards(grid),
        Err(e) => PreviewOutcome::Failed {
            message: e.to_string(),
            detail: e.source().map(|s| s.to_string()),
        },
    }
}

// ============================================================================
// Item source detection
// ============================================================================

/// One item to render a card from, plus the container prefix its mapped
/// paths are relative to (e.g. `data[]`).
struct ItemScope {
    item: Value,
    prefix: Option<String>,
}

/// Select the item list the cards are rendered from.
///
/// The first mapped path containing an `[]` segment names the container:
/// its object elements become the items and paths sharing the prefix
/// resolve relative to each item. Without such a path, a root array's
/// object elements are the items; otherwise the document itself is the
/// single item.
///
/// Returns at most [`MAX_VISIBLE_CARDS`] scopes plus the full match count,
/// so the overflow footer reflects every item the source actually has.
fn source_items(data: &Value, content: &ContentMapping) -> (Vec<ItemScope>, usize) {
    if let Some(container) = item_container(content) {
        let mut items = resolve_all(data, &container, ValueFilter::Objects, usize::MAX);
        if !items.is_empty() {
            let total = items.len();
            items.truncate(MAX_VISIBLE_CARDS);
            let scopes = items
                .into_iter()
                .map(|item| ItemScope {
                    item,
                    prefix: Some(container.clone()),
                })
                .collect();
            return (scopes, total);
        }
    }

    if let Value::Array(elements) = data {
        let total = elements.iter().filter(|v| v.is_object()).count();
        if total > 0 {
            let scopes = elements
                .iter()
                .filter(|v| v.is_object())
                .take(MAX_VISIBLE_CARDS)
                .map(|v| ItemScope {
                    item: v.clone(),
                    prefix: None,
                })
                .collect();
            return (scopes, total);
        }
    }

    let scope = ItemScope {
        item: data.clone(),
        prefix: None,
    };
    (vec![scope], 1)
}

/// The container prefix up to the first `[]` segment. The title path wins
/// when it traverses an array; otherwise the most common prefix among the
/// mapped paths does, so a stray array field (tags, images) cannot hijack
/// the item source.
fn item_container(content: &ContentMapping) -> Option<String> {
    let prefix_of = |p: &str| p.find("[]").map(|i| p[..i + 2].to_string());

    if let Some(prefix) = content.title_path.as_deref().and_then(prefix_of) {
        return Some(prefix);
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    for path in content.assigned_paths() {
        if let Some(prefix) = prefix_of(path) {
            match counts.iter_mut().find(|(p, _)| *p == prefix) {
                Some((_, n)) => *n += 1,
                None => counts.push((prefix, 1)),
            }
        }
    }

    counts
        .into_iter()
        .max_by_key(|(_, n)| *n)
        .map(|(prefix, _)| prefix)
}

/// Resolve a mapped path within an item scope. Paths under the scope's
/// container prefix resolve relative to the item; anything else resolves
/// against the whole document.
fn resolve_in_scope(scope: &ItemScope, data: &Value, path: &str) -> Option<Value> {
    if let Some(prefix) = &scope.prefix {
        if let Some(rest) = path.strip_prefix(prefix.as_str()) {
            let rest = rest.trim_start_matches('.');
            if rest.is_empty() {
                return Some(scope.item.clone());
            }
            return resolve_single(&scope.item, rest);
        }
    }

    if scope.prefix.is_none() {
        // Root-array items carry element-relative paths.
        if let Some(v) = resolve_single(&scope.item, path) {
            return Some(v);
        }
    }

    resolve_single(data, path)
}

fn collect_in_scope(
    scope: &ItemScope,
    data: &Value,
    path: &str,
    filter: ValueFilter,
    cap: usize,
) -> Vec<Value> {
    if let Some(prefix) = &scope.prefix {
        if let Some(rest) = path.strip_prefix(prefix.as_str()) {
            let rest = rest.trim_start_matches('.');
            if !rest.is_empty() {
                return resolve_all(&scope.item, rest, filter, cap);
            }
        }
    } else {
        let relative = resolve_all(&scope.item, path, filter, cap);
        if !relative.is_empty() {
            return relative;
        }
    }

    resolve_all(data, path, filter, cap)
}

// ============================================================================
// Per-card rendering
// ============================================================================

fn render_card(
    card_type: CardType,
    mapping: &CardMapping,
    scope: &ItemScope,
    data: &Value,
    opts: &RenderOptions,
) -> ResolvedCard {
    let content = &mapping.content;
    let mut card = ResolvedCard::empty(card_type);
    let mut defaulted = Vec::new();

    card.title = text_or_default(scope, data, &content.title_path, CardField::Title, card_type, &mut defaulted);

    match card_type {
        CardType::Product => {
            card.description = Some(text_or_default(
                scope, data, &content.description_path, CardField::Description, card_type, &mut defaulted,
            ));
            card.price = Some(price_field(
                scope, data, content, &content.price_path, CardField::Price, &mut defaulted, card_type,
            ));
            card.discounted_price = Some(price_field(
                scope,
                data,
                content,
                &content.discounted_price_path,
                CardField::DiscountedPrice,
                &mut defaulted,
                card_type,
            ));
        }
        CardType::Blog => {
            card.description = Some(text_or_default(
                scope, data, &content.description_path, CardField::Description, card_type, &mut defaulted,
            ));
            card.date = Some(text_or_default(
                scope, data, &content.date_path, CardField::Date, card_type, &mut defaulted,
            ));
            card.author = Some(text_or_default(
                scope, data, &content.author_path, CardField::Author, card_type, &mut defaulted,
            ));
            card.tags = Some(tags_field(scope, data, content, &mut defaulted, card_type));
        }
        CardType::Property => {
            card.address = Some(text_or_default(
                scope, data, &content.address_path, CardField::Address, card_type, &mut defaulted,
            ));
            card.price = Some(price_field(
                scope, data, content, &content.price_path, CardField::Price, &mut defaulted, card_type,
            ));
            card.beds = Some(text_or_default(
                scope, data, &content.beds_path, CardField::Beds, card_type, &mut defaulted,
            ));
            card.baths = Some(text_or_default(
                scope, data, &content.baths_path, CardField::Baths, card_type, &mut defaulted,
            ));
            card.area = Some(text_or_default(
                scope, data, &content.area_path, CardField::Area, card_type, &mut defaulted,
            ));
        }
    }
    card.defaulted_fields = defaulted;

    let (image_url, image_urls, image_defaulted) =
        images_field(scope, data, content, card_type, opts.max_images);
    card.image_url = image_url;
    card.image_urls = image_urls;
    if image_defaulted {
        card.defaulted_fields.push(CardField::Image);
    }

    card.actions = [&mapping.actions.primary, &mapping.actions.secondary]
        .into_iter()
        .filter_map(|cfg| resolve_action(cfg, scope, data, card_type))
        .collect();

    card
}

fn text_or_default(
    scope: &ItemScope,
    data: &Value,
    path: &Option<String>,
    field: CardField,
    card_type: CardType,
    defaulted: &mut Vec<CardField>,
) -> String {
    resolve_text(scope, data, path).unwrap_or_else(|| {
        defaulted.push(field);
        placeholder(card_type, field).to_string()
    })
}

/// Resolve a text-ish field to a display string. Arrays and objects are not
/// displayable here and fall through to the placeholder.
fn resolve_text(scope: &ItemScope, data: &Value, path: &Option<String>) -> Option<String> {
    let path = path.as_deref()?.trim();
    if path.is_empty() {
        return None;
    }
    match resolve_in_scope(scope, data, path)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn price_field(
    scope: &ItemScope,
    data: &Value,
    content: &ContentMapping,
    path: &Option<String>,
    field: CardField,
    defaulted: &mut Vec<CardField>,
    card_type: CardType,
) -> String {
    let currency = if content.currency_type.is_empty() {
        "USD"
    } else {
        content.currency_type.as_str()
    };

    let resolved = path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .and_then(|p| resolve_in_scope(scope, data, p))
        .and_then(|raw| format_price(&raw, currency, content.price_period));

    resolved.unwrap_or_else(|| {
        defaulted.push(field);
        placeholder(card_type, field).to_string()
    })
}

const MAX_TAGS: usize = 8;

fn tags_field(
    scope: &ItemScope,
    data: &Value,
    content: &ContentMapping,
    defaulted: &mut Vec<CardField>,
    card_type: CardType,
) -> Vec<String> {
    let tags: Vec<String> = content
        .tags_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| collect_in_scope(scope, data, p, ValueFilter::Strings, MAX_TAGS))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect();

    if tags.is_empty() {
        defaulted.push(CardField::Tags);
        vec![placeholder(card_type, CardField::Tags).to_string()]
    } else {
        tags
    }
}

fn images_field(
    scope: &ItemScope,
    data: &Value,
    content: &ContentMapping,
    card_type: CardType,
    max_images: usize,
) -> (String, Vec<String>, bool) {
    let urls: Vec<String> = content
        .image_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| collect_in_scope(scope, data, p, ValueFilter::Strings, max_images))
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| v.as_str().map(String::from))
        .filter(|s| !s.trim().is_empty())
        .collect();

    match urls.first() {
        Some(first) => (first.clone(), urls.clone(), false),
        None => (placeholder_image(card_type).to_string(), vec![], true),
    }
}

/// Apply the action visibility rules.
///
/// Static mode shows the button only with a non-empty static URL — an empty
/// one hides the button rather than rendering a dead link. Dynamic mode
/// resolves the URL path eagerly and hides the button when nothing resolves.
fn resolve_action(
    cfg: &ActionConfig,
    scope: &ItemScope,
    data: &Value,
    card_type: CardType,
) -> Option<ResolvedAction> {
    if !cfg.enabled {
        return None;
    }

    let url = if cfg.use_static_url {
        cfg.static_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(String::from)?
    } else {
        let path = cfg.url_path.as_deref().map(str::trim).filter(|p| !p.is_empty())?;
        match resolve_in_scope(scope, data, path)? {
            Value::String(s) if !s.trim().is_empty() => s,
            _ => return None,
        }
    };

    let text = if cfg.text.trim().is_empty() {
        default_action_text(card_type).to_string()
    } else {
        cfg.text.clone()
    };

    Some(ResolvedAction { text, url })
}

fn default_action_text(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Product => "View Product",
        CardType::Blog => "Read More",
        CardType::Property => "View Property",
    }
}
