use card_mapper::card::card_model::PreviewOutcome;
use card_mapper::card::defaults::CardField;
use card_mapper::card::price::{clean_amount, currency_symbol, format_price};
use card_mapper::card::renderer::{guard_preview, render_preview, RenderOptions, MAX_VISIBLE_CARDS};
use card_mapper::mapping::mapping_model::{ActionConfig, CardType, PricePeriod};
use card_mapper::mapping::store::MappingStore;
use serde_json::json;

use crate::common::fixtures::{
    blog_response, blog_store, product_response, product_store, property_response, property_store,
};

mod common;

fn opts() -> RenderOptions {
    RenderOptions::default()
}

// ============================================================================
// Default policy
// ============================================================================

#[test]
fn all_null_mapping_renders_fully_populated_placeholder_card() {
    let store = MappingStore::new(CardType::Product);
    let grid = render_preview(&store, &json!({}), &opts());

    assert_eq!(grid.cards.len(), 1);
    let card = &grid.cards[0];

    assert_eq!(card.title, "Product Name");
    assert_eq!(card.price.as_deref(), Some("$99.99"));
    assert!(card.description.as_deref().is_some_and(|d| !d.is_empty()));
    assert!(!card.image_url.is_empty());

    for field in [
        CardField::Title,
        CardField::Description,
        CardField::Price,
        CardField::DiscountedPrice,
        CardField::Image,
    ] {
        assert!(card.was_defaulted(field), "{:?} should be a placeholder", field);
    }
}

#[test]
fn all_null_property_mapping_has_no_blank_fields() {
    let store = MappingStore::new(CardType::Property);
    let grid = render_preview(&store, &json!({}), &opts());
    let card = &grid.cards[0];

    assert_eq!(card.address.as_deref(), Some("123 Oak Street, Downtown"));
    assert!(card.beds.as_deref().is_some_and(|v| !v.is_empty()));
    assert!(card.baths.as_deref().is_some_and(|v| !v.is_empty()));
    assert!(card.area.as_deref().is_some_and(|v| !v.is_empty()));
    assert!(card.price.as_deref().is_some_and(|v| !v.is_empty()));
}

#[test]
fn unresolvable_paths_fall_back_like_unmapped_ones() {
    let mut store = product_store();
    store.product.content.title_path = Some("data[].no_such_field".into());

    let grid = render_preview(&store, &product_response(), &opts());
    assert_eq!(grid.cards[0].title, "Product Name");
    assert!(grid.cards[0].was_defaulted(CardField::Title));
}

// ============================================================================
// Mapped rendering
// ============================================================================

#[test]
fn mapped_product_card_uses_response_values() {
    let grid = render_preview(&product_store(), &product_response(), &opts());
    let card = &grid.cards[0];

    assert_eq!(card.title, "Organic Coffee Beans");
    assert_eq!(card.description.as_deref(), Some("Single-origin arabica, medium roast"));
    assert_eq!(card.price.as_deref(), Some("$18.50"));
    assert_eq!(card.discounted_price.as_deref(), Some("$14.99"));
    assert_eq!(card.image_url, "https://cdn.example.com/coffee-1.jpg");
    assert_eq!(card.image_urls.len(), 2);
    assert!(card.defaulted_fields.is_empty());

    assert_eq!(card.actions.len(), 1);
    assert_eq!(card.actions[0].text, "Buy Now");
    assert_eq!(card.actions[0].url, "https://shop.example.com/coffee");
}

#[test]
fn second_card_resolves_against_second_item() {
    let grid = render_preview(&product_store(), &product_response(), &opts());

    assert_eq!(grid.cards[1].title, "Ceramic Pour-Over Set");
    assert_eq!(grid.cards[1].actions[0].url, "https://shop.example.com/pourover");
}

#[test]
fn property_card_formats_rent_with_period() {
    let grid = render_preview(&property_store(), &property_response(), &opts());
    let card = &grid.cards[0];

    assert_eq!(card.title, "Sunny Two-Bedroom Flat");
    assert_eq!(card.price.as_deref(), Some("£1200/month"));
    assert_eq!(card.beds.as_deref(), Some("2"));
    assert_eq!(card.image_url, "https://img.example.com/flat-front.jpg");
    assert_eq!(card.image_urls.len(), 3);

    // Empty action text falls back to the card type default.
    assert_eq!(card.actions[0].text, "View Property");
}

#[test]
fn property_without_photos_gets_placeholder_image() {
    let grid = render_preview(&property_store(), &property_response(), &opts());
    let cottage = &grid.cards[1];

    assert_eq!(cottage.title, "Garden Cottage");
    assert!(cottage.image_url.contains("placeholder"));
    assert!(cottage.was_defaulted(CardField::Image));
}

#[test]
fn blog_cards_render_from_root_array() {
    let grid = render_preview(&blog_store(), &blog_response(), &opts());

    assert_eq!(grid.total, 2);
    assert_eq!(grid.cards[0].title, "Shipping Our New Widget");
    assert_eq!(grid.cards[0].tags.as_deref(), Some(&["release".to_string(), "engineering".to_string()][..]));
    assert_eq!(grid.cards[1].author.as_deref(), Some("Sam Ortiz"));
}

#[test]
fn max_images_cap_truncates_extraction() {
    let grid = render_preview(
        &property_store(),
        &property_response(),
        &RenderOptions { max_images: 1 },
    );

    assert_eq!(grid.cards[0].image_urls.len(), 1);
}

// ============================================================================
// Multiplicity
// ============================================================================

#[test]
fn five_items_show_two_cards_plus_three_more() {
    let grid = render_preview(&product_store(), &product_response(), &opts());

    assert_eq!(grid.cards.len(), MAX_VISIBLE_CARDS);
    assert_eq!(grid.total, 5);
    assert_eq!(grid.more_count, 3);
    assert_eq!(grid.overflow_label().as_deref(), Some("+3 more"));
}

#[test]
fn overflow_count_covers_every_source_item() {
    let items: Vec<_> = (0..30)
        .map(|i| json!({ "name": format!("Item {}", i) }))
        .collect();
    let data = json!({ "data": items });

    let mut store = MappingStore::new(CardType::Product);
    store.mapping_mut(CardType::Product).content.title_path = Some("data[].name".into());

    let grid = render_preview(&store, &data, &opts());

    assert_eq!(grid.cards.len(), MAX_VISIBLE_CARDS);
    assert_eq!(grid.total, 30);
    assert_eq!(grid.more_count, 28);
    assert_eq!(grid.overflow_label().as_deref(), Some("+28 more"));
}

#[test]
fn overflow_count_covers_every_root_array_element() {
    let data: serde_json::Value = (0..40)
        .map(|i| json!({ "headline": format!("Post {}", i) }))
        .collect();

    let grid = render_preview(&MappingStore::new(CardType::Blog), &data, &opts());

    assert_eq!(grid.cards.len(), MAX_VISIBLE_CARDS);
    assert_eq!(grid.total, 40);
    assert_eq!(grid.more_count, 38);
}

#[test]
fn single_item_has_no_overflow() {
    let store = MappingStore::new(CardType::Product);
    let grid = render_preview(&store, &json!({ "name": "solo" }), &opts());

    assert_eq!(grid.total, 1);
    assert_eq!(grid.more_count, 0);
    assert!(grid.overflow_label().is_none());
}

// ============================================================================
// Price formatting
// ============================================================================

#[test]
fn gbp_monthly_price_formats_as_expected() {
    let formatted = format_price(&json!("1200"), "GBP", Some(PricePeriod::Month));
    assert_eq!(formatted.as_deref(), Some("£1200/month"));
}

#[test]
fn currency_table_is_closed_with_dollar_fallback() {
    assert_eq!(currency_symbol("USD"), "$");
    assert_eq!(currency_symbol("EUR"), "€");
    assert_eq!(currency_symbol("INR"), "₹");
    assert_eq!(currency_symbol("XYZ"), "$");
    assert_eq!(currency_symbol("gbp"), "£");
}

#[test]
fn amounts_are_cleaned_of_symbols_and_separators() {
    assert_eq!(clean_amount("$1,299.00").as_deref(), Some("1299.00"));
    assert_eq!(clean_amount("about 40 dollars").as_deref(), Some("40"));
    assert_eq!(clean_amount("free").as_deref(), None);
}

#[test]
fn numeric_price_values_format_directly() {
    assert_eq!(
        format_price(&json!(250), "EUR", Some(PricePeriod::Week)).as_deref(),
        Some("€250/week")
    );
    assert_eq!(format_price(&json!(true), "USD", None), None);
}

// ============================================================================
// Action rules
// ============================================================================

#[test]
fn static_action_with_empty_url_is_hidden() {
    let mut store = product_store();
    store.product.actions.primary = ActionConfig {
        enabled: true,
        text: "Visit".into(),
        url_path: None,
        static_url: Some("   ".into()),
        use_static_url: true,
    };

    let grid = render_preview(&store, &product_response(), &opts());
    assert!(grid.cards[0].actions.is_empty(), "Dead static link must not render");
}

#[test]
fn static_action_with_url_renders_it() {
    let mut store = product_store();
    store.product.actions.primary = ActionConfig {
        enabled: true,
        text: "Visit Store".into(),
        url_path: None,
        static_url: Some("https://shop.example.com".into()),
        use_static_url: true,
    };

    let grid = render_preview(&store, &product_response(), &opts());
    assert_eq!(grid.cards[0].actions[0].url, "https://shop.example.com");
}

#[test]
fn dynamic_action_hidden_when_resolution_fails() {
    let mut store = product_store();
    store.product.actions.primary.url_path = Some("data[].missing_url".into());

    let grid = render_preview(&store, &product_response(), &opts());
    assert!(grid.cards[0].actions.is_empty());
}

#[test]
fn disabled_action_never_renders() {
    let mut store = product_store();
    store.product.actions.primary.enabled = false;

    let grid = render_preview(&store, &product_response(), &opts());
    assert!(grid.cards[0].actions.is_empty());
}

// ============================================================================
// Render boundary
// ============================================================================

#[test]
fn guard_preview_converts_errors_into_panels() {
    let failed: Result<_, Box<dyn std::error::Error>> = Err("mapping file is unreadable".into());

    match guard_preview(failed) {
        PreviewOutcome::Failed { message, .. } => {
            assert!(message.contains("unreadable"));
        }
        PreviewOutcome::Cards(_) => panic!("expected a failure panel"),
    }
}
