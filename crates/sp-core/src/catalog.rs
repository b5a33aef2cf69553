//! Catalog loading
//!
//! Hosts own catalog persistence; this is the minimal JSON shape shared by
//! tools and tests. An empty catalog is rejected at parse time.

use std::path::Path;

use crate::error::{SpError, SpResult};
use crate::item::CatalogItem;

/// Parse a catalog from a JSON array of tagged items
pub fn parse_catalog(json: &str) -> SpResult<Vec<CatalogItem>> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(SpError::EmptyDataset);
    }
    Ok(items)
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> SpResult<Vec<CatalogItem>> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Serialize a catalog to pretty JSON
pub fn catalog_to_json(items: &[CatalogItem]) -> SpResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{CustomItem, PriceTier, ReelItem, StoreItem};

    #[test]
    fn test_parse_round_trip() {
        let items = vec![
            CatalogItem::Store(
                StoreItem::new("s1", "Taqueria")
                    .with_tag("mexican")
                    .with_tier(PriceTier::Budget),
            ),
            CatalogItem::Custom(CustomItem::new("c1", "Stay home")),
        ];
        let json = catalog_to_json(&items).unwrap();
        let parsed = parse_catalog(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].key(), items[0].key());
        assert_eq!(parsed[0].tier(), Some(PriceTier::Budget));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(parse_catalog("[]"), Err(SpError::EmptyDataset)));
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        assert!(matches!(
            parse_catalog("{not json"),
            Err(SpError::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            load_catalog("/no/such/catalog.json"),
            Err(SpError::Io(_))
        ));
    }
}
