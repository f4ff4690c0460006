//! The Person record as it travels over the wire and through the store.

use serde::{Deserialize, Serialize};

/// One person. Responses use capitalised keys (`Id`, `Name`, ...); request keys are
/// lowercased by [`crate::case::normalize_payload`] before they reach this type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "lowercase"), default)]
pub struct Person {
    /// Hyphenated UUID. Empty on a create payload means the store assigns one.
    pub id: String,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub country: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Person {
            id: String::new(),
            name: name.into(),
            age,
            email: email.into(),
            country: country.into(),
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Copy every non-default field of `patch` onto `self`. Zero values never overwrite.
    pub fn merge_from(&mut self, patch: &Person) {
        if !patch.name.is_empty() {
            self.name = patch.name.clone();
        }
        if patch.age != 0 {
            self.age = patch.age;
        }
        if !patch.email.is_empty() {
            self.email = patch.email.clone();
        }
        if !patch.country.is_empty() {
            self.country = patch.country.clone();
        }
    }
}
