use card_mapper::mapping::mapping_model::{
    ActionConfig, ActionMapping, CardType, ContentMapping, PricePeriod,
};
use card_mapper::mapping::store::MappingStore;
use serde_json::{json, Value};

/// A product catalog response: envelope object with a `data` array of 5 items.
pub fn product_response() -> Value {
    json!({
        "status": "ok",
        "data": [
            {
                "id": 101,
                "product_name": "Organic Coffee Beans",
                "details": { "blurb": "Single-origin arabica, medium roast" },
                "price": "18.50",
                "sale_price": "14.99",
                "images": ["https://cdn.example.com/coffee-1.jpg", "https://cdn.example.com/coffee-2.jpg"],
                "product_url": "https://shop.example.com/coffee"
            },
            {
                "id": 102,
                "product_name": "Ceramic Pour-Over Set",
                "details": { "blurb": "Hand-glazed dripper and carafe" },
                "price": "42.00",
                "sale_price": "36.00",
                "images": ["https://cdn.example.com/pourover.jpg"],
                "product_url": "https://shop.example.com/pourover"
            },
            {
                "id": 103,
                "product_name": "Burr Grinder",
                "details": { "blurb": "40 grind settings" },
                "price": "89.00",
                "sale_price": "75.00",
                "images": [],
                "product_url": "https://shop.example.com/grinder"
            },
            {
                "id": 104,
                "product_name": "Gooseneck Kettle",
                "details": { "blurb": "Precision spout, 1L" },
                "price": "54.00",
                "sale_price": "49.00",
                "images": ["https://cdn.example.com/kettle.jpg"],
                "product_url": "https://shop.example.com/kettle"
            },
            {
                "id": 105,
                "product_name": "Travel Mug",
                "details": { "blurb": "Leak-proof, 350ml" },
                "price": "24.00",
                "sale_price": "19.00",
                "images": ["https://cdn.example.com/mug.jpg"],
                "product_url": "https://shop.example.com/mug"
            }
        ]
    })
}

/// A property listing response with nested media arrays.
pub fn property_response() -> Value {
    json!({
        "listings": [
            {
                "property_title": "Sunny Two-Bedroom Flat",
                "address": { "display": "44 Birch Avenue, Riverside" },
                "rent": "1200",
                "bedrooms": 2,
                "bathrooms": 1,
                "floor_area": "62 sqm",
                "property_media": {
                    "photos": [
                        { "photo": "https://img.example.com/flat-front.jpg" },
                        { "photo": "https://img.example.com/flat-kitchen.jpg" },
                        { "photo": "https://img.example.com/flat-bedroom.jpg" }
                    ]
                },
                "listing_url": "https://homes.example.com/44-birch"
            },
            {
                "property_title": "Garden Cottage",
                "address": { "display": "7 Mill Lane, Oakfield" },
                "rent": "1650",
                "bedrooms": 3,
                "bathrooms": 2,
                "floor_area": "98 sqm",
                "property_media": { "photos": [] },
                "listing_url": "https://homes.example.com/7-mill"
            }
        ]
    })
}

/// A blog feed response: root-level array of posts.
pub fn blog_response() -> Value {
    json!([
        {
            "headline": "Shipping Our New Widget",
            "summary": "What changed and why it matters.",
            "published": "2025-03-14",
            "byline": "Dana Reyes",
            "tags": ["release", "engineering"],
            "cover_image": "https://blog.example.com/widget.png",
            "permalink": "https://blog.example.com/shipping-widget"
        },
        {
            "headline": "A Quarter in Review",
            "summary": "Highlights from the last three months.",
            "published": "2025-04-02",
            "byline": "Sam Ortiz",
            "tags": ["company"],
            "cover_image": "https://blog.example.com/review.png",
            "permalink": "https://blog.example.com/quarter-review"
        }
    ])
}

/// A fully mapped product store over [`product_response`].
pub fn product_store() -> MappingStore {
    let mut store = MappingStore::new(CardType::Product);
    store.product.content = ContentMapping {
        title_path: Some("data[].product_name".into()),
        description_path: Some("data[].details.blurb".into()),
        price_path: Some("data[].price".into()),
        discounted_price_path: Some("data[].sale_price".into()),
        image_path: Some("data[].images[]".into()),
        is_array: true,
        currency_type: "USD".into(),
        ..ContentMapping::default()
    };
    store.product.actions = ActionMapping {
        primary: ActionConfig {
            enabled: true,
            text: "Buy Now".into(),
            url_path: Some("data[].product_url".into()),
            static_url: None,
            use_static_url: false,
        },
        secondary: ActionConfig::default(),
    };
    store
}

/// A fully mapped property store over [`property_response`].
pub fn property_store() -> MappingStore {
    let mut store = MappingStore::new(CardType::Property);
    store.property.content = ContentMapping {
        title_path: Some("listings[].property_title".into()),
        address_path: Some("listings[].address.display".into()),
        price_path: Some("listings[].rent".into()),
        beds_path: Some("listings[].bedrooms".into()),
        baths_path: Some("listings[].bathrooms".into()),
        area_path: Some("listings[].floor_area".into()),
        image_path: Some("listings[].property_media.photos[].photo".into()),
        is_array: true,
        currency_type: "GBP".into(),
        price_period: Some(PricePeriod::Month),
        ..ContentMapping::default()
    };
    store.property.actions = ActionMapping {
        primary: ActionConfig {
            enabled: true,
            text: String::new(), // falls back to the card type default
            url_path: Some("listings[].listing_url".into()),
            static_url: None,
            use_static_url: false,
        },
        secondary: ActionConfig::default(),
    };
    store
}

/// A fully mapped blog store over [`blog_response`].
pub fn blog_store() -> MappingStore {
    let mut store = MappingStore::new(CardType::Blog);
    store.blog.content = ContentMapping {
        title_path: Some("headline".into()),
        description_path: Some("summary".into()),
        date_path: Some("published".into()),
        author_path: Some("byline".into()),
        tags_path: Some("tags[]".into()),
        image_path: Some("cover_image".into()),
        is_array: true,
        ..ContentMapping::default()
    };
    store.blog.actions = ActionMapping {
        primary: ActionConfig {
            enabled: true,
            text: "Read More".into(),
            url_path: Some("permalink".into()),
            static_url: None,
            use_static_url: false,
        },
        secondary: ActionConfig::default(),
    };
    store
}
