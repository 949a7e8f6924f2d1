use crate::card::card_model::{CardGrid, PreviewOutcome, ResolvedCard};
use crate::mapping::mapping_model::CardType;

// ============================================================================
// Console reporter — formatted terminal preview
// ============================================================================

/// Format a preview outcome for terminal output.
///
/// Produces output like:
/// ```text
/// === Card Preview: product ===
///
/// [1] Organic Coffee Beans
///     Price: $18.50
///     ...
///
/// +3 more
///
/// === 2 card(s) shown, 5 item(s) total ===
/// ```
///
/// A failed pipeline renders as an error panel instead of crashing the
/// caller's surface.
pub fn format_console_preview(outcome: &PreviewOutcome) -> String {
    match outcome {
        PreviewOutcome::Cards(grid) => format_grid(grid),
        PreviewOutcome::Failed { message, detail } => format_error_panel(message, detail.as_deref()),
    }
}

fn format_grid(grid: &CardGrid) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Card Preview: {} ===\n\n", grid.card_type));

    for (i, card) in grid.cards.iter().enumerate() {
        format_card(&mut out, i + 1, card);
        out.push('\n');
    }

    if let Some(overflow) = grid.overflow_label() {
        out.push_str(&format!("{}\n\n", overflow));
    }

    out.push_str(&format!(
        "=== {} card(s) shown, {} item(s) total ===\n",
        grid.cards.len(),
        grid.total
    ));

    out
}

fn format_card(out: &mut String, index: usize, card: &ResolvedCard) {
    out.push_str(&format!("[{}] {}\n", index, card.title));

    if let Some(description) = &card.description {
        out.push_str(&format!("    {}\n", description));
    }

    match card.card_type {
        CardType::Product => {
            if let Some(price) = &card.price {
                match &card.discounted_price {
                    Some(discounted) => {
                        out.push_str(&format!("    Price: {} (now {})\n", price, discounted))
                    }
                    None => out.push_str(&format!("    Price: {}\n", price)),
                }
            }
        }
        CardType::Blog => {
            let author = card.author.as_deref().unwrap_or("");
            let date = card.date.as_deref().unwrap_or("");
            out.push_str(&format!("    {} — {}\n", author, date));
            if let Some(tags) = &card.tags {
                out.push_str(&format!("    Tags: {}\n", tags.join(", ")));
            }
        }
        CardType::Property => {
            if let Some(address) = &card.address {
                out.push_str(&format!("    {}\n", address));
            }
            if let Some(price) = &card.price {
                out.push_str(&format!("    Price: {}\n", price));
            }
            let specs: Vec<String> = [
                card.beds.as_ref().map(|b| format!("{} bed", b)),
                card.baths.as_ref().map(|b| format!("{} bath", b)),
                card.area.clone(),
            ]
            .into_iter()
            .flatten()
            .collect();
            if !specs.is_empty() {
                out.push_str(&format!("    {}\n", specs.join(" | ")));
            }
        }
    }

    out.push_str(&format!("    Image: {}\n", card.image_url));

    for action in &card.actions {
        out.push_str(&format!("    [{}] -> {}\n", action.text, action.url));
    }

    if !card.defaulted_fields.is_empty() {
        let names: Vec<&str> = card.defaulted_fields.iter().map(|f| f.name()).collect();
        out.push_str(&format!("    (placeholder: {})\n", names.join(", ")));
    }
}

fn format_error_panel(message: &str, detail: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("=== Preview Error ===\n\n");
    out.push_str(&format!("{}\n", message));
    if let Some(detail) = detail {
        out.push_str(&format!("\nDetail: {}\n", detail));
    }
    out.push_str("\n=====================\n");
    out
}
