//! Key normalisation for request bodies: clients may send `Name`, `name` or `NAME`;
//! the model only knows lowercase keys.

use serde_json::{Map, Value};

/// Lowercase every key of a JSON object (in place). When two keys collide after
/// lowercasing, the one that appeared last in the document wins. Relies on serde_json's
/// `preserve_order` so iteration follows the document.
pub fn object_keys_to_lowercase(obj: &mut Map<String, Value>) {
    let entries = std::mem::take(obj);
    for (k, v) in entries {
        obj.insert(k.to_lowercase(), v);
    }
}

/// Drop keys whose value is `null`, so they deserialize to the field's zero value.
pub fn strip_null_values(obj: &mut Map<String, Value>) {
    obj.retain(|_, v| !v.is_null());
}

/// Prepare a request body for deserialization into a model type. Non-objects are
/// left untouched; the deserializer reports them.
pub fn normalize_payload(value: &mut Value) {
    if let Value::Object(map) = value {
        strip_null_values(map);
        object_keys_to_lowercase(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lowercases_mixed_case_keys() {
        let mut v = json!({"Name": "Ada", "AGE": 30, "email": "a@x.com"});
        normalize_payload(&mut v);
        assert_eq!(v, json!({"name": "Ada", "age": 30, "email": "a@x.com"}));
    }

    #[test]
    fn strips_nulls() {
        let mut v = json!({"Name": null, "Country": "UK"});
        normalize_payload(&mut v);
        assert_eq!(v, json!({"country": "UK"}));
    }

    #[test]
    fn colliding_keys_keep_the_last_spelling() {
        let mut v = json!({"Name": "First", "name": "Last"});
        normalize_payload(&mut v);
        assert_eq!(v, json!({"name": "Last"}));

        let mut v = json!({"name": "First", "NAME": "Last"});
        normalize_payload(&mut v);
        assert_eq!(v, json!({"name": "Last"}));
    }

    #[test]
    fn leaves_non_objects_alone() {
        let mut v = json!([1, 2]);
        normalize_payload(&mut v);
        assert_eq!(v, json!([1, 2]));
    }
}
