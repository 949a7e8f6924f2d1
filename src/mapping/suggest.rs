use crate::extract::descriptor::{PathDescriptor, ValueKind};
use crate::mapping::mapping_model::{ActionConfig, CardMapping, CardType, ContentMapping};

// ============================================================================
// Mapping suggestion — keyword-match discovered paths onto card fields
// ============================================================================

/// Build a starter mapping by matching the last segment of each discovered
/// path against per-field keyword lists. First match wins per field; fields
/// with no match stay unmapped and will render placeholders.
pub fn suggest_mapping(descriptors: &[PathDescriptor], card_type: CardType) -> CardMapping {
    let mut content = ContentMapping {
        title_path: find_string(descriptors, &["title", "name", "headline"]),
        description_path: find_string(
            descriptors,
            &["description", "summary", "excerpt", "body", "about"],
        ),
        price_path: find_scalar(descriptors, &["price", "amount", "cost", "rent"]),
        image_path: find_image(descriptors),
        ..ContentMapping::default()
    };

    match card_type {
        CardType::Product => {
            content.discounted_price_path =
                find_scalar(descriptors, &["discount", "sale_price", "offer"]);
        }
        CardType::Blog => {
            content.date_path = find_scalar(descriptors, &["date", "published", "created"]);
            content.tags_path = find_any(descriptors, &["tags", "categories", "topics"]);
            content.author_path = find_string(descriptors, &["author", "writer", "byline"]);
        }
        CardType::Property => {
            content.address_path = find_string(descriptors, &["address", "location", "street"]);
            content.beds_path = find_scalar(descriptors, &["bed", "bedroom"]);
            content.baths_path = find_scalar(descriptors, &["bath", "bathroom"]);
            content.area_path = find_scalar(descriptors, &["area", "sqft", "size", "surface"]);
        }
    }

    // A mapped path that traverses an array means the response is a list.
    content.is_array = content.assigned_paths().iter().any(|p| p.contains("[]"));

    let url_path = find_string(descriptors, &["url", "link", "href", "permalink"]);
    let actions = match url_path {
        Some(path) => crate::mapping::mapping_model::ActionMapping {
            primary: ActionConfig {
                enabled: true,
                text: default_action_text(card_type).to_string(),
                url_path: Some(path),
                static_url: None,
                use_static_url: false,
            },
            secondary: ActionConfig::default(),
        },
        None => Default::default(),
    };

    CardMapping { content, actions }
}

fn default_action_text(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Product => "View Product",
        CardType::Blog => "Read More",
        CardType::Property => "View Property",
    }
}

fn find_by(
    descriptors: &[PathDescriptor],
    keywords: &[&str],
    accept: impl Fn(&PathDescriptor) -> bool,
) -> Option<String> {
    // Keyword priority over discovery order: "title" should beat "name"
    // even when "name" appears earlier in the document. Matching covers the
    // whole path so nested keys like `address.display` still hit "address".
    for keyword in keywords {
        let hit = descriptors
            .iter()
            .filter(|d| accept(d))
            .find(|d| d.path.to_ascii_lowercase().contains(keyword));
        if let Some(d) = hit {
            return Some(d.path.clone());
        }
    }
    None
}

fn find_string(descriptors: &[PathDescriptor], keywords: &[&str]) -> Option<String> {
    find_by(descriptors, keywords, |d| d.kind == ValueKind::String)
}

fn find_scalar(descriptors: &[PathDescriptor], keywords: &[&str]) -> Option<String> {
    find_by(descriptors, keywords, |d| {
        matches!(d.kind, ValueKind::String | ValueKind::Number)
    })
}

fn find_any(descriptors: &[PathDescriptor], keywords: &[&str]) -> Option<String> {
    find_by(descriptors, keywords, |_| true)
}

/// Images prefer string fields named like an image, then any array of
/// strings named like an image.
fn find_image(descriptors: &[PathDescriptor]) -> Option<String> {
    let keywords = &["image", "photo", "img", "picture", "thumbnail", "cover"];
    find_string(descriptors, keywords).or_else(|| {
        find_by(descriptors, keywords, |d| {
            matches!(&d.kind, ValueKind::ArrayOf(inner) if **inner == ValueKind::String)
        })
    })
}
