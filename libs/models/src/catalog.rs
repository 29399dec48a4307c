//! Catalog snapshots and the provider boundary
//!
//! The engine never owns the catalog lifecycle. A [`CatalogProvider`] hands
//! out immutable [`Catalog`] snapshots; refresh happens by swapping the whole
//! snapshot, so in-flight searches observe either the pre- or post-refresh
//! state, never a partially-updated one.

use crate::error::{Error, Result};
use crate::property::{Property, ResidentialComplex};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// An immutable snapshot of the property catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub properties: Vec<Property>,

    #[serde(default)]
    pub complexes: Vec<ResidentialComplex>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>, complexes: Vec<ResidentialComplex>) -> Self {
        Self {
            properties,
            complexes,
        }
    }

    /// Parse a catalog feed.
    ///
    /// The feed is either a full catalog object (`{"properties": [...],
    /// "complexes": [...]}`) or a bare property array, which older exports
    /// still produce.
    pub fn from_json_str(feed: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(feed)?;
        match value {
            serde_json::Value::Array(_) => {
                let properties: Vec<Property> = serde_json::from_value(value)?;
                Ok(Self::new(properties, Vec::new()))
            }
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(Error::Feed(format!(
                "expected a catalog object or property array, got {other}"
            ))),
        }
    }

    /// Resolve the complex a property belongs to.
    ///
    /// Feeds link inconsistently: newer records carry `complex_id`, older
    /// ones only a name. Id wins when present; the name fallback is
    /// case-insensitive.
    pub fn complex_of(&self, property: &Property) -> Option<&ResidentialComplex> {
        if let Some(id) = property.complex_id {
            if let Some(c) = self.complexes.iter().find(|c| c.id == id) {
                return Some(c);
            }
        }
        if property.complex_name.is_empty() {
            return None;
        }
        let wanted = property.complex_name.to_lowercase();
        self.complexes
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Source of catalog snapshots.
///
/// Implementations own refresh/reload semantics; callers treat every
/// returned snapshot as immutable.
pub trait CatalogProvider: Send + Sync {
    fn snapshot(&self) -> Arc<Catalog>;
}

/// In-memory provider with atomic whole-snapshot replacement.
pub struct StaticCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Swap in a freshly loaded catalog. Snapshots already handed out keep
    /// observing the previous state.
    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.current.write().expect("catalog lock poisoned");
        *guard = Arc::new(catalog);
    }
}

impl CatalogProvider for StaticCatalog {
    fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().expect("catalog lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn property(id: i64, complex_id: Option<i64>, complex_name: &str) -> Property {
        serde_json::from_value(json!({
            "id": id,
            "district": "Центральный",
            "complex_id": complex_id,
            "complex_name": complex_name
        }))
        .unwrap()
    }

    fn complex(id: i64, name: &str) -> ResidentialComplex {
        serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
    }

    #[test]
    fn bare_array_feed_parses() {
        let feed = r#"[{"id": 1, "district": "Центральный"}]"#;
        let catalog = Catalog::from_json_str(feed).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.complexes.is_empty());
    }

    #[test]
    fn malformed_feed_is_an_error() {
        assert!(Catalog::from_json_str("{not json").is_err());
        let err = Catalog::from_json_str("\"товары\"").unwrap_err();
        assert!(err.to_string().contains("Catalog feed error"));
    }

    #[test]
    fn complex_resolution_prefers_id_over_name() {
        let catalog = Catalog::new(
            vec![property(1, Some(2), "ЖК Родной")],
            vec![complex(1, "ЖК Родной"), complex(2, "ЖК Южный")],
        );
        let resolved = catalog.complex_of(&catalog.properties[0]).unwrap();
        assert_eq!(resolved.id, 2);
    }

    #[test]
    fn complex_resolution_falls_back_to_name() {
        let catalog = Catalog::new(
            vec![property(1, None, "ЖК Родной")],
            vec![complex(1, "ЖК Родной")],
        );
        let resolved = catalog.complex_of(&catalog.properties[0]).unwrap();
        assert_eq!(resolved.id, 1);
    }

    #[test]
    fn replace_swaps_whole_snapshot() {
        let provider = StaticCatalog::new(Catalog::new(
            vec![property(1, None, "")],
            Vec::new(),
        ));
        let before = provider.snapshot();
        provider.replace(Catalog::new(
            vec![property(2, None, ""), property(3, None, "")],
            Vec::new(),
        ));
        // The old snapshot is unchanged; new callers see the replacement.
        assert_eq!(before.len(), 1);
        assert_eq!(provider.snapshot().len(), 2);
    }
}
