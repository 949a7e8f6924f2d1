use crate::mapping::mapping_model::CardType;

// ============================================================================
// Placeholder defaults — "never show a broken card"
// ============================================================================

/// A named card field, used to report which fields fell back to their
/// placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Title,
    Description,
    Price,
    DiscountedPrice,
    Address,
    Beds,
    Baths,
    Area,
    Date,
    Tags,
    Author,
    Image,
}

impl CardField {
    pub fn name(&self) -> &'static str {
        match self {
            CardField::Title => "title",
            CardField::Description => "description",
            CardField::Price => "price",
            CardField::DiscountedPrice => "discountedPrice",
            CardField::Address => "address",
            CardField::Beds => "beds",
            CardField::Baths => "baths",
            CardField::Area => "area",
            CardField::Date => "date",
            CardField::Tags => "tags",
            CardField::Author => "author",
            CardField::Image => "image",
        }
    }
}

/// Placeholder shown when a field is unmapped or its path fails to resolve.
/// The preview must stay fully populated before the user finishes mapping.
pub fn placeholder(card_type: CardType, field: CardField) -> &'static str {
    match (card_type, field) {
        (CardType::Product, CardField::Title) => "Product Name",
        (CardType::Product, CardField::Description) => {
            "High-quality product with amazing features"
        }
        (CardType::Product, CardField::Price) => "$99.99",
        (CardType::Product, CardField::DiscountedPrice) => "$79.99",

        (CardType::Blog, CardField::Title) => "Blog Post Title",
        (CardType::Blog, CardField::Description) => {
            "A short preview of the article content goes here."
        }
        (CardType::Blog, CardField::Date) => "Jan 1, 2025",
        (CardType::Blog, CardField::Author) => "Editorial Team",

        (CardType::Property, CardField::Title) => "Charming Family Home",
        (CardType::Property, CardField::Address) => "123 Oak Street, Downtown",
        (CardType::Property, CardField::Price) => "$2,500/month",
        (CardType::Property, CardField::Beds) => "3",
        (CardType::Property, CardField::Baths) => "2",
        (CardType::Property, CardField::Area) => "1,450 sqft",

        (_, CardField::Image) => placeholder_image(card_type),
        (_, CardField::Tags) => "News",

        // Fields outside a card type's template never render; give them a
        // harmless generic anyway.
        _ => "—",
    }
}

pub fn placeholder_image(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Product => "https://via.placeholder.com/300x200?text=Product",
        CardType::Blog => "https://via.placeholder.com/300x200?text=Blog",
        CardType::Property => "https://via.placeholder.com/300x200?text=Property",
    }
}
