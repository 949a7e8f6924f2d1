use crate::card::card_model::{PreviewOutcome, ResolvedCard};
use crate::mapping::mapping_model::CardType;

// ============================================================================
// HTML reporter — self-contained card preview page
// ============================================================================

/// Generate a self-contained HTML preview.
///
/// Features:
/// - Card grid with image, fields, and action buttons per card type
/// - "+N more" badge when items overflow the visible cap
/// - Red error panel when the pipeline failed
/// - Inline CSS (no external dependencies)
pub fn generate_html_preview(outcome: &PreviewOutcome) -> String {
    let (title, body) = match outcome {
        PreviewOutcome::Cards(grid) => {
            let mut cards_html = String::new();
            for card in &grid.cards {
                cards_html.push_str(&card_html(card));
            }

            if let Some(overflow) = grid.overflow_label() {
                cards_html.push_str(&format!(
                    "<div class=\"more-badge\">{}</div>\n",
                    escape_html(&overflow)
                ));
            }

            (
                format!("Card Preview — {}", grid.card_type),
                format!("<div class=\"grid\">\n{}</div>\n", cards_html),
            )
        }
        PreviewOutcome::Failed { message, detail } => {
            let detail_html = detail
                .as_deref()
                .map(|d| format!("<pre class=\"detail\">{}</pre>", escape_html(d)))
                .unwrap_or_default();
            (
                "Card Preview — error".to_string(),
                format!(
                    "<div class=\"error-panel\"><h2>Preview failed</h2><p>{}</p>{}</div>\n",
                    escape_html(message),
                    detail_html
                ),
            )
        }
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 24px; background: #f5f5f5; }}
.grid {{ display: flex; gap: 16px; flex-wrap: wrap; align-items: flex-start; }}
.card {{ background: white; border-radius: 8px; width: 300px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }}
.card img {{ width: 100%; height: 180px; object-fit: cover; display: block; background: #eee; }}
.card .body {{ padding: 12px 16px 16px; }}
.card h3 {{ margin: 0 0 6px 0; font-size: 16px; }}
.card p {{ margin: 4px 0; color: #666; font-size: 13px; }}
.card .price {{ color: #2e7d32; font-weight: bold; font-size: 15px; }}
.card .strike {{ color: #999; text-decoration: line-through; font-weight: normal; }}
.card .tags span {{ background: #e3f2fd; color: #1565c0; border-radius: 10px; padding: 2px 8px; font-size: 11px; margin-right: 4px; }}
.card a.action {{ display: inline-block; margin: 8px 8px 0 0; padding: 6px 14px; background: #1976d2; color: white; border-radius: 4px; text-decoration: none; font-size: 13px; }}
.more-badge {{ align-self: center; background: #eeeeee; color: #555; border-radius: 16px; padding: 8px 16px; font-size: 14px; }}
.error-panel {{ background: #fdecea; border-left: 4px solid #f44336; border-radius: 6px; padding: 16px 20px; max-width: 640px; }}
.error-panel h2 {{ margin: 0 0 8px 0; color: #c62828; font-size: 18px; }}
.error-panel .detail {{ background: #fff; padding: 8px; overflow-x: auto; font-size: 12px; }}
</style>
</head>
<body>
{body}</body>
</html>"##,
        title = escape_html(&title),
        body = body,
    )
}

fn card_html(card: &ResolvedCard) -> String {
    let mut fields = String::new();

    if let Some(description) = &card.description {
        fields.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }

    match card.card_type {
        CardType::Product => {
            if let Some(price) = &card.price {
                match &card.discounted_price {
                    Some(discounted) => fields.push_str(&format!(
                        "<p class=\"price\"><span class=\"strike\">{}</span> {}</p>\n",
                        escape_html(price),
                        escape_html(discounted)
                    )),
                    None => fields
                        .push_str(&format!("<p class=\"price\">{}</p>\n", escape_html(price))),
                }
            }
        }
        CardType::Blog => {
            let byline = [card.author.as_deref(), card.date.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" — ");
            if !byline.is_empty() {
                fields.push_str(&format!("<p>{}</p>\n", escape_html(&byline)));
            }
            if let Some(tags) = &card.tags {
                let spans: String = tags
                    .iter()
                    .map(|t| format!("<span>{}</span>", escape_html(t)))
                    .collect();
                fields.push_str(&format!("<p class=\"tags\">{}</p>\n", spans));
            }
        }
        CardType::Property => {
            if let Some(address) = &card.address {
                fields.push_str(&format!("<p>{}</p>\n", escape_html(address)));
            }
            if let Some(price) = &card.price {
                fields.push_str(&format!("<p class=\"price\">{}</p>\n", escape_html(price)));
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
                fields.push_str(&format!("<p>{}</p>\n", escape_html(&specs.join(" | "))));
            }
        }
    }

    let actions: String = card
        .actions
        .iter()
        .map(|a| {
            format!(
                "<a class=\"action\" href=\"{}\">{}</a>",
                escape_html(&a.url),
                escape_html(&a.text)
            )
        })
        .collect();

    format!(
        r#"<div class="card">
<img src="{image}" alt="{title}">
<div class="body">
<h3>{title}</h3>
{fields}{actions}
</div>
</div>
"#,
        image = escape_html(&card.image_url),
        title = escape_html(&card.title),
        fields = fields,
        actions = actions,
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
