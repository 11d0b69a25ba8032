use crate::core::{Craft, CrewMember};
use crate::utils::error::{CrewError, Result};
use serde_json::Value;

/// The astros.json payload never names the craft at top level; the source
/// API only serves ISS crew, so the name is a fixed domain constant.
pub const CRAFT_NAME: &str = "ISS";

/// Maps the generic astros.json document onto a [`Craft`].
///
/// The payload shape does not line up with the target model: the crew sits
/// in a flat "people" array next to unrelated "message"/"number" keys, so
/// the projection is done field by field instead of deriving `Deserialize`.
/// Order of "people" is preserved in the crew list. Fails atomically: any
/// missing or ill-typed field yields a `MappingError` and no `Craft`.
pub fn map_craft(value: &Value) -> Result<Craft> {
    // "message" and "number" are present in the payload but carry nothing
    // the model needs. Surface them at debug only.
    if let Some(message) = value.get("message").and_then(Value::as_str) {
        tracing::debug!("API message field: {}", message);
    }
    if let Some(number) = value.get("number").and_then(Value::as_i64) {
        tracing::debug!("API number field: {}", number);
    }

    let people = value
        .get("people")
        .ok_or_else(|| CrewError::mapping("missing 'people' key"))?
        .as_array()
        .ok_or_else(|| CrewError::mapping("'people' is not an array"))?;

    let mut crew = Vec::with_capacity(people.len());
    for (index, person) in people.iter().enumerate() {
        let name = string_field(person, "name", index)?;
        let craft = string_field(person, "craft", index)?;
        crew.push(CrewMember::new(name, craft));
    }

    Ok(Craft::new(CRAFT_NAME, crew))
}

fn string_field<'a>(person: &'a Value, field: &str, index: usize) -> Result<&'a str> {
    person
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            CrewError::mapping(format!(
                "people[{}] is missing '{}' as a string",
                index, field
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "message": "success",
            "number": 2,
            "people": [
                {"name": "Jasmin Moghbeli", "craft": "ISS"},
                {"name": "Andreas Mogensen", "craft": "ISS"}
            ]
        })
    }

    #[test]
    fn test_maps_people_in_order() {
        let craft = map_craft(&sample()).unwrap();

        assert_eq!(craft.name, "ISS");
        assert_eq!(craft.crew.len(), 2);
        assert_eq!(craft.crew[0], CrewMember::new("Jasmin Moghbeli", "ISS"));
        assert_eq!(craft.crew[1], CrewMember::new("Andreas Mogensen", "ISS"));
    }

    #[test]
    fn test_crew_length_matches_people_array() {
        let people: Vec<Value> = (0..7)
            .map(|i| json!({"name": format!("Astronaut {}", i), "craft": "ISS"}))
            .collect();
        let value = json!({"message": "success", "number": 7, "people": people});

        let craft = map_craft(&value).unwrap();
        assert_eq!(craft.crew.len(), 7);
        assert_eq!(craft.crew[3].name, "Astronaut 3");
    }

    #[test]
    fn test_empty_people_is_empty_crew_not_error() {
        let value = json!({"message": "success", "number": 0, "people": []});
        let craft = map_craft(&value).unwrap();
        assert_eq!(craft, Craft::empty("ISS"));
    }

    #[test]
    fn test_missing_people_key_fails() {
        let value = json!({"message": "success", "number": 2});
        let err = map_craft(&value).unwrap_err();
        assert!(matches!(err, CrewError::MappingError { .. }));
        assert!(err.to_string().contains("people"));
    }

    #[test]
    fn test_people_not_an_array_fails() {
        let value = json!({"message": "success", "number": 1, "people": "nobody"});
        assert!(matches!(
            map_craft(&value),
            Err(CrewError::MappingError { .. })
        ));
    }

    #[test]
    fn test_element_missing_name_fails_atomically() {
        let value = json!({
            "message": "success",
            "number": 2,
            "people": [
                {"name": "Jasmin Moghbeli", "craft": "ISS"},
                {"craft": "ISS"}
            ]
        });
        let err = map_craft(&value).unwrap_err();
        assert!(err.to_string().contains("people[1]"));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_element_with_non_string_craft_fails() {
        let value = json!({
            "message": "success",
            "number": 1,
            "people": [{"name": "Jasmin Moghbeli", "craft": 42}]
        });
        assert!(matches!(
            map_craft(&value),
            Err(CrewError::MappingError { .. })
        ));
    }

    #[test]
    fn test_missing_message_and_number_are_tolerated() {
        let value = json!({"people": [{"name": "Jasmin Moghbeli", "craft": "ISS"}]});
        assert!(map_craft(&value).is_ok());
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let value = sample();
        assert_eq!(map_craft(&value).unwrap(), map_craft(&value).unwrap());
    }
}
