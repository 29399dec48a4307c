#![allow(dead_code)]

use domus_models::{Catalog, Property, ResidentialComplex, SearchIndexRecord};
use serde_json::json;

/// Build a property from partial JSON; unset fields take feed defaults.
pub fn property(fields: serde_json::Value) -> Property {
    let mut base = json!({ "id": 0, "district": "Центральный" });
    base.as_object_mut()
        .unwrap()
        .extend(fields.as_object().unwrap().clone());
    serde_json::from_value(base).unwrap()
}

pub fn index_record(fields: serde_json::Value) -> SearchIndexRecord {
    serde_json::from_value(fields).unwrap()
}

/// A small but realistic catalog: three complexes, two developers, a studio,
/// mid-market apartments and a penthouse.
pub fn demo_catalog() -> Catalog {
    let properties = vec![
        property(json!({
            "id": 1,
            "title": "Студия, 26 м²",
            "rooms": 0,
            "type": "студия",
            "property_type": "квартира",
            "property_class": "комфорт",
            "wall_material": "монолит",
            "area": 26.4,
            "floor": 3,
            "total_floors": 16,
            "price": 2_400_000,
            "mortgage_available": true,
            "district": "Прикубанский",
            "location": "ул. Российская, 74",
            "developer": "ССК",
            "complex_name": "ЖК Солнечный",
            "features": ["предчистовая отделка"]
        })),
        property(json!({
            "id": 2,
            "title": "1-комнатная квартира, 38 м²",
            "rooms": 1,
            "type": "1-комн",
            "property_type": "квартира",
            "property_class": "комфорт",
            "wall_material": "кирпич",
            "area": 38.2,
            "floor": 5,
            "total_floors": 9,
            "price": 3_450_000,
            "mortgage_available": true,
            "district": "Центральный",
            "location": "ул. Красная, 45",
            "developer": "ЮСИ",
            "complex_name": "ЖК Родной Дом",
            "features": ["балкон"]
        })),
        property(json!({
            "id": 3,
            "title": "2-комнатная квартира, 54 м²",
            "rooms": 2,
            "type": "2-комн",
            "property_type": "квартира",
            "property_class": "бизнес",
            "wall_material": "монолит-кирпич",
            "area": 54.2,
            "floor": 7,
            "total_floors": 16,
            "price": 4_850_000,
            "mortgage_available": false,
            "district": "Прикубанский",
            "location": "ул. Российская, 74",
            "developer": "ССК",
            "complex_name": "ЖК Солнечный",
            "features": ["балкон", "чистовая отделка"]
        })),
        property(json!({
            "id": 4,
            "title": "3-комнатная квартира, 78 м²",
            "rooms": 3,
            "type": "3-комн",
            "property_type": "квартира",
            "property_class": "бизнес",
            "wall_material": "монолит",
            "area": 78.0,
            "floor": 12,
            "total_floors": 24,
            "price": 6_900_000,
            "mortgage_available": true,
            "district": "Центральный",
            "location": "ул. Северная, 12",
            "developer": "ЮСИ",
            "complex_name": "ЖК Центральный Парк",
            "features": ["вид на парк"]
        })),
        property(json!({
            "id": 5,
            "title": "Пентхаус, 140 м²",
            "rooms": 5,
            "type": "5-комн",
            "property_type": "пентхаус",
            "property_class": "премиум",
            "wall_material": "монолит",
            "area": 140.0,
            "floor": 24,
            "total_floors": 24,
            "price": 18_500_000,
            "mortgage_available": false,
            "district": "Центральный",
            "location": "ул. Северная, 12",
            "full_address": "г. Краснодар, ул. Северная, 12",
            "developer": "ЮСИ",
            "complex_name": "ЖК Центральный Парк",
            "features": ["терраса", "панорамные окна"]
        })),
    ];

    let complexes = vec![
        complex(10, "ЖК Солнечный", "Прикубанский", "ССК"),
        complex(11, "ЖК Родной Дом", "Центральный", "ЮСИ"),
        complex(12, "ЖК Центральный Парк", "Центральный", "ЮСИ"),
    ];

    Catalog::new(properties, complexes)
}

pub fn complex(id: i64, name: &str, district: &str, developer: &str) -> ResidentialComplex {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "district": district,
        "developer": developer,
        "price_from": 2_400_000,
        "cashback_percent": 5.0,
        "apartments_count": 200
    }))
    .unwrap()
}

pub fn query(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
