use serde::{Deserialize, Serialize};

use crate::mapping::mapping_model::{ActionMapping, CardMapping, CardType, ContentMapping};

// ============================================================================
// Mapping store — owns the per-card-type mappings and the persisted shape
// ============================================================================

/// Envelope version written into `unifiedMapping`.
pub const MAPPING_VERSION: &str = "2.0";

/// All card mappings for one agent configuration.
///
/// Owned and mutated by the configuration layer; the renderer only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MappingStore {
    pub card_type: CardType,
    pub product: CardMapping,
    pub blog: CardMapping,
    pub property: CardMapping,
}

impl Default for MappingStore {
    fn default() -> Self {
        MappingStore {
            card_type: CardType::Product,
            product: CardMapping::default(),
            blog: CardMapping::default(),
            property: CardMapping::default(),
        }
    }
}

impl MappingStore {
    pub fn new(card_type: CardType) -> Self {
        MappingStore {
            card_type,
            ..MappingStore::default()
        }
    }

    pub fn mapping(&self, card_type: CardType) -> &CardMapping {
        match card_type {
            CardType::Product => &self.product,
            CardType::Blog => &self.blog,
            CardType::Property => &self.property,
        }
    }

    pub fn mapping_mut(&mut self, card_type: CardType) -> &mut CardMapping {
        match card_type {
            CardType::Product => &mut self.product,
            CardType::Blog => &mut self.blog,
            CardType::Property => &mut self.property,
        }
    }

    /// The mapping for the active card type.
    pub fn active(&self) -> &CardMapping {
        self.mapping(self.card_type)
    }

    /// Build the persisted configuration shape expected by the backend.
    pub fn to_persisted(&self) -> PersistedMappings {
        PersistedMappings {
            field_mapping: self.active().content.clone(),
            product_mapping: self.product.content.clone(),
            action_mapping: self.product.actions.clone(),
            blog_mapping: self.blog.content.clone(),
            blog_action_mapping: self.blog.actions.clone(),
            property_mapping: self.property.content.clone(),
            property_action_mapping: self.property.actions.clone(),
            unified_mapping: UnifiedMapping {
                content: self.active().content.clone(),
                actions: self.active().actions.clone(),
                card_type: self.card_type,
                version: MAPPING_VERSION.to_string(),
            },
        }
    }

    /// Stable hex fingerprint of the persisted shape, for change detection.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let json = serde_json::to_string(&self.to_persisted()).unwrap_or_default();
        let mut hasher = Sha1::new();
        hasher.update(json.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// The backend persistence shape: one key per card type and purpose, plus
/// the versioned unified envelope kept for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMappings {
    /// Legacy alias of the active card type's content mapping.
    pub field_mapping: ContentMapping,
    pub product_mapping: ContentMapping,
    pub action_mapping: ActionMapping,
    pub blog_mapping: ContentMapping,
    pub blog_action_mapping: ActionMapping,
    pub property_mapping: ContentMapping,
    pub property_action_mapping: ActionMapping,
    pub unified_mapping: UnifiedMapping,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedMapping {
    pub content: ContentMapping,
    pub actions: ActionMapping,
    pub card_type: CardType,
    pub version: String,
}
