//! The filter engine
//!
//! Applies a [`FilterSpec`] to a catalog slice, returning the survivors in
//! catalog order. Evaluation short-circuits per property on the first
//! failing criterion; criteria are checked cheapest-rejection-first in the
//! order the listing pages have always used.

use crate::lenient;
use crate::params::FilterSpec;
use domus_models::Property;
use once_cell::sync::Lazy;
use regex::Regex;

/// Case-fold a value for substring matching. Matching is case-insensitive
/// but accent-exact: е and ё stay distinct.
pub(crate) fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Filter `properties` by `spec`, preserving catalog order.
///
/// A stable subset operation: the result borrows from the input and an empty
/// spec returns every property.
pub fn filter_catalog<'a>(properties: &'a [Property], spec: &FilterSpec) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| property_matches(p, spec))
        .collect()
}

/// Evaluate one property against every criterion of `spec`.
///
/// Also used on its own to check whether a newly ingested property matches a
/// saved search.
pub fn property_matches(property: &Property, spec: &FilterSpec) -> bool {
    matches_keywords(property, &spec.keywords)
        && matches_search(property, spec.search.as_deref())
        && matches_rooms(property, &spec.rooms)
        && matches_price(property, spec.price_min, spec.price_max)
        && matches_exact(&property.district, spec.district.as_deref())
        && matches_exact(&property.developer, spec.developer.as_deref())
        && matches_complex(property, spec.residential_complex.as_deref())
        && matches_street(property, spec.street.as_deref())
        && matches_mortgage(property, spec.mortgage)
}

// --- keywords ---------------------------------------------------------------

/// Synonym groups for the property-type vocabulary. A keyword belonging to a
/// group matches a property whose type falls in the same group.
const TYPE_SYNONYMS: &[&[&str]] = &[
    &["дом", "house"],
    &["таунхаус", "townhouse"],
    &["пентхаус", "penthouse"],
    &["апартаменты"],
    &["студия"],
    &["квартира", "apartment"],
];

fn matches_keywords(property: &Property, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }
    keywords.iter().any(|kw| keyword_matches(property, kw))
}

fn keyword_matches(property: &Property, keyword: &str) -> bool {
    let kw = fold(keyword);
    if kw.is_empty() {
        return false;
    }

    let property_type = fold(&property.property_type);
    for group in TYPE_SYNONYMS {
        if group.contains(&kw.as_str()) {
            if group.contains(&property_type.as_str()) {
                return true;
            }
            // Studio listings are often typed as plain apartments; the room
            // count is the reliable signal.
            if kw == "студия" && property.rooms == 0 {
                return true;
            }
        }
    }

    if !property.property_class.is_empty() && fold(&property.property_class) == kw {
        return true;
    }
    if !property.wall_material.is_empty() && fold(&property.wall_material).contains(&kw) {
        return true;
    }
    if property.features.iter().any(|f| fold(f).contains(&kw)) {
        return true;
    }

    room_fallback(property).contains(&kw)
}

fn room_fallback(property: &Property) -> String {
    if property.rooms == 0 {
        "студия".to_string()
    } else {
        format!("{}-комн", property.rooms)
    }
}

// --- free-text search -------------------------------------------------------

fn matches_search(property: &Property, query: Option<&str>) -> bool {
    let Some(query) = query else {
        return true;
    };
    let needle = fold(query);
    if needle.is_empty() {
        return true;
    }
    search_haystack(property).contains(&needle)
}

/// The string free-text search runs over: room description, developer,
/// district, complex and location, lower-cased and space-joined.
fn search_haystack(property: &Property) -> String {
    fold(&format!(
        "{} {} {} {} {}",
        property.room_description(),
        property.developer,
        property.district,
        property.complex_name,
        property.location
    ))
}

// --- rooms ------------------------------------------------------------------

/// Grammar of the room tokens the site accepts. Anything else is not a
/// rejection, it is simply not a constraint.
static ROOM_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:студия|4\+(?:-комн)?|\d+(?:-комн)?)$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum RoomToken {
    /// "студия": zero rooms and a verbatim studio type.
    Studio,
    /// "4+" / "4+-комн": four rooms or more.
    FourPlus,
    /// "N-комн": exact match against the stored `type` field.
    Typed(String),
    /// Bare "N": room count and type must both agree.
    Count(i64),
}

impl RoomToken {
    fn parse(raw: &str) -> Option<Self> {
        let token = fold(raw);
        if !ROOM_TOKEN.is_match(&token) {
            return None;
        }
        if token == "студия" {
            return Some(Self::Studio);
        }
        if token == "4+" || token == "4+-комн" {
            return Some(Self::FourPlus);
        }
        if token.ends_with("-комн") {
            return Some(Self::Typed(token));
        }
        token.parse().ok().map(Self::Count)
    }

    fn matches(&self, property: &Property) -> bool {
        let unit_type = property.unit_type.as_deref().unwrap_or("");
        match self {
            Self::Studio => property.rooms == 0 && unit_type == "студия",
            Self::FourPlus => property.rooms >= 4 && unit_type == "4+-комн",
            Self::Typed(token) => unit_type == token,
            Self::Count(n) => property.rooms == *n && unit_type == format!("{n}-комн"),
        }
    }
}

fn matches_rooms(property: &Property, tokens: &[String]) -> bool {
    let parsed: Vec<RoomToken> = tokens.iter().filter_map(|t| RoomToken::parse(t)).collect();
    // All tokens unparseable means the constraint was dropped, not failed.
    if parsed.is_empty() {
        return true;
    }
    parsed.iter().any(|t| t.matches(property))
}

// --- price ------------------------------------------------------------------

fn matches_price(property: &Property, min: Option<i64>, max: Option<i64>) -> bool {
    if let Some(min) = min {
        if property.price < lenient::normalize_price_bound(min) {
            return false;
        }
    }
    if let Some(max) = max {
        if property.price > lenient::normalize_price_bound(max) {
            return false;
        }
    }
    true
}

// --- location / relations ---------------------------------------------------

fn matches_exact(actual: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == wanted,
    }
}

fn matches_complex(property: &Property, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    fold(&property.complex_name).contains(&fold(wanted))
}

fn matches_street(property: &Property, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    let needle = fold(wanted);
    if fold(&property.location).contains(&needle) {
        return true;
    }
    property
        .full_address
        .as_deref()
        .is_some_and(|addr| fold(addr).contains(&needle))
}

fn matches_mortgage(property: &Property, flag: Option<bool>) -> bool {
    flag != Some(true) || property.mortgage_available
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn property(fields: serde_json::Value) -> Property {
        let mut base = json!({ "id": 1, "district": "Центральный" });
        base.as_object_mut()
            .unwrap()
            .extend(fields.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    fn spec(fields: serde_json::Value) -> FilterSpec {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn empty_spec_matches_everything() {
        let p = property(json!({}));
        assert!(property_matches(&p, &FilterSpec::default()));
    }

    #[test]
    fn room_token_grammar() {
        assert_eq!(RoomToken::parse("студия"), Some(RoomToken::Studio));
        assert_eq!(RoomToken::parse("4+"), Some(RoomToken::FourPlus));
        assert_eq!(RoomToken::parse("4+-комн"), Some(RoomToken::FourPlus));
        assert_eq!(
            RoomToken::parse("2-комн"),
            Some(RoomToken::Typed("2-комн".to_string()))
        );
        assert_eq!(RoomToken::parse(" 3 "), Some(RoomToken::Count(3)));
        assert_eq!(RoomToken::parse("5+"), None);
        assert_eq!(RoomToken::parse("пентхаус"), None);
        assert_eq!(RoomToken::parse(""), None);
    }

    #[test]
    fn bare_count_needs_type_agreement() {
        let agreeing = property(json!({ "rooms": 2, "type": "2-комн" }));
        let disagreeing = property(json!({ "rooms": 2, "type": "3-комн" }));
        let spec = spec(json!({ "rooms": ["2"] }));
        assert!(property_matches(&agreeing, &spec));
        assert!(!property_matches(&disagreeing, &spec));
    }

    #[test]
    fn rooms_list_is_or_semantics() {
        let spec = spec(json!({ "rooms": ["студия", "2-комн"] }));
        assert!(property_matches(
            &property(json!({ "rooms": 0, "type": "студия" })),
            &spec
        ));
        assert!(property_matches(
            &property(json!({ "rooms": 2, "type": "2-комн" })),
            &spec
        ));
        assert!(!property_matches(
            &property(json!({ "rooms": 3, "type": "3-комн" })),
            &spec
        ));
    }

    #[test]
    fn four_plus_requires_count_and_type() {
        let spec = spec(json!({ "rooms": ["4+"] }));
        assert!(property_matches(
            &property(json!({ "rooms": 5, "type": "4+-комн" })),
            &spec
        ));
        assert!(!property_matches(
            &property(json!({ "rooms": 3, "type": "4+-комн" })),
            &spec
        ));
        assert!(!property_matches(
            &property(json!({ "rooms": 5, "type": "5-комн" })),
            &spec
        ));
    }

    #[test]
    fn unparseable_room_tokens_drop_the_constraint() {
        let p = property(json!({ "rooms": 3, "type": "3-комн" }));
        assert!(property_matches(
            &p,
            &spec(json!({ "rooms": ["особняк"] }))
        ));
        // A parseable token alongside garbage still constrains.
        assert!(!property_matches(
            &p,
            &spec(json!({ "rooms": ["особняк", "2"] }))
        ));
    }

    #[test]
    fn price_bounds_are_inclusive_and_unit_inferred() {
        let spec_min = spec(json!({ "price_min": 3 }));
        assert!(!property_matches(
            &property(json!({ "price": 2_999_999 })),
            &spec_min
        ));
        assert!(property_matches(
            &property(json!({ "price": 3_000_000 })),
            &spec_min
        ));

        let spec_max = spec(json!({ "price_max": 5_000_000 }));
        assert!(property_matches(
            &property(json!({ "price": 5_000_000 })),
            &spec_max
        ));
        assert!(!property_matches(
            &property(json!({ "price": 5_000_001 })),
            &spec_max
        ));
    }

    #[test]
    fn district_and_developer_are_exact() {
        let p = property(json!({ "developer": "ССК" }));
        assert!(property_matches(
            &p,
            &spec(json!({ "district": "Центральный", "developer": "ССК" }))
        ));
        assert!(!property_matches(
            &p,
            &spec(json!({ "district": "центральный" }))
        ));
        assert!(!property_matches(&p, &spec(json!({ "developer": "ЮСИ" }))));
    }

    #[test]
    fn complex_is_case_insensitive_substring() {
        let p = property(json!({ "complex_name": "ЖК Солнечный Город" }));
        assert!(property_matches(
            &p,
            &spec(json!({ "residential_complex": "солнечный" }))
        ));
        assert!(!property_matches(
            &p,
            &spec(json!({ "residential_complex": "родной" }))
        ));
    }

    #[test]
    fn street_checks_location_and_full_address() {
        let by_location = property(json!({ "location": "ул. Красная, 45" }));
        let by_address = property(json!({ "full_address": "г. Краснодар, ул. Северная, 12" }));
        let spec_krasnaya = spec(json!({ "street": "красная" }));
        let spec_severnaya = spec(json!({ "street": "Северная" }));
        assert!(property_matches(&by_location, &spec_krasnaya));
        assert!(property_matches(&by_address, &spec_severnaya));
        assert!(!property_matches(&by_location, &spec_severnaya));
    }

    #[test]
    fn mortgage_flag_only_constrains_when_true() {
        let no_mortgage = property(json!({ "mortgage_available": false }));
        assert!(!property_matches(
            &no_mortgage,
            &spec(json!({ "mortgage": true }))
        ));
        assert!(property_matches(
            &no_mortgage,
            &spec(json!({ "mortgage": false }))
        ));
    }

    #[test]
    fn free_text_searches_the_synthesized_haystack() {
        let p = property(json!({
            "rooms": 2,
            "developer": "ССК",
            "complex_name": "ЖК Солнечный",
            "location": "ул. Красная, 45"
        }));
        for query in ["солнечный", "ССК", "красная", "2-комнатная", "ЦЕНТРАЛЬНЫЙ"] {
            assert!(
                property_matches(&p, &spec(json!({ "search": query }))),
                "query={query:?}"
            );
        }
        assert!(!property_matches(&p, &spec(json!({ "search": "южный" }))));
    }

    #[test]
    fn keywords_cover_type_class_material_and_features() {
        let p = property(json!({
            "rooms": 2,
            "property_type": "квартира",
            "property_class": "комфорт",
            "wall_material": "монолит-кирпич",
            "features": ["балкон", "чистовая отделка"]
        }));
        for kw in ["apartment", "квартира", "комфорт", "кирпич", "балкон", "2-комн"] {
            assert!(
                property_matches(&p, &spec(json!({ "keywords": [kw] }))),
                "keyword={kw:?}"
            );
        }
        assert!(!property_matches(&p, &spec(json!({ "keywords": ["пентхаус"] }))));
    }

    #[test]
    fn studio_keyword_matches_zero_rooms_whatever_the_type_says() {
        let p = property(json!({ "rooms": 0, "property_type": "квартира" }));
        assert!(property_matches(&p, &spec(json!({ "keywords": ["студия"] }))));
    }

    #[test]
    fn keywords_are_or_across_tokens_and_fields() {
        let p = property(json!({ "property_class": "бизнес" }));
        assert!(property_matches(
            &p,
            &spec(json!({ "keywords": ["пентхаус", "бизнес"] }))
        ));
    }

    #[test]
    fn filter_is_stable_and_a_subset() {
        let catalog = vec![
            property(json!({ "id": 1, "price": 2_000_000 })),
            property(json!({ "id": 2, "price": 4_000_000 })),
            property(json!({ "id": 3, "price": 6_000_000 })),
        ];
        let spec = spec(json!({ "price_min": 3 }));
        let result = filter_catalog(&catalog, &spec);
        let ids: Vec<i64> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
