//! Listings bundled with the app, standing in for a remote listings service.

use crate::model::Property;
use once_cell::sync::Lazy;

const CATALOG_JSON: &str = include_str!("../assets/properties.json");

static CATALOG: Lazy<Result<Vec<Property>, String>> =
    Lazy::new(|| parse_catalog(CATALOG_JSON).map_err(|e| e.to_string()));

pub fn parse_catalog(json: &str) -> Result<Vec<Property>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_catalog() -> Result<&'static [Property], String> {
    CATALOG.as_deref().map_err(Clone::clone)
}

pub fn find_property(id: &str) -> Option<Property> {
    load_catalog()
        .ok()?
        .iter()
        .find(|property| property.id == id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = load_catalog().expect("bundled catalog is valid");
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|property| !property.id.is_empty()));
    }

    #[test]
    fn find_property_by_id() {
        let first = &load_catalog().unwrap()[0];
        assert_eq!(find_property(&first.id).as_ref(), Some(first));
        assert_eq!(find_property("no-such-listing"), None);
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(parse_catalog(r#"[{"id": 3}]"#).is_err());
    }
}
