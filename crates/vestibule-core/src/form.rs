use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Field name ↔ enum mapping
// ---------------------------------------------------------------------------

/// Canonical wire names for each [`Field`] variant, matching the keys of the
/// JSON body sent to the registration endpoint.
const FIELD_NAMES: &[(Field, &str)] = &[
    (Field::Username, "username"),
    (Field::FavLanguage, "favLanguage"),
    (Field::FavFood, "favFood"),
    (Field::Agreement, "agreement"),
];

/// The four fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::FavLanguage,
        Field::FavFood,
        Field::Agreement,
    ];

    /// The canonical wire name of this field.
    pub fn name(self) -> &'static str {
        for &(f, name) in FIELD_NAMES {
            if f == self {
                return name;
            }
        }
        "unknown"
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    /// Parse a field from its wire name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Error> {
        for &(f, name) in FIELD_NAMES {
            if name.eq_ignore_ascii_case(s) {
                return Ok(f);
            }
        }
        Err(Error::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// The authoritative current values of all four fields.
///
/// Always fully populated: the defaults are empty strings and `false`.
/// Serializes to the exact JSON body the registration endpoint expects
/// (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormState {
    /// Apply a single input event to the form.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Username(value) => self.username = value,
            FieldChange::FavLanguage(value) => self.fav_language = value,
            FieldChange::FavFood(value) => self.fav_food = value,
            FieldChange::Agreement(checked) => self.agreement = checked,
        }
    }
}

/// A single input event from the rendering surface.
///
/// The checkbox carries its checked state; every other field carries its
/// literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Username(String),
    FavLanguage(String),
    FavFood(String),
    Agreement(bool),
}

impl FieldChange {
    /// The field this event targets.
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Username(_) => Field::Username,
            FieldChange::FavLanguage(_) => Field::FavLanguage,
            FieldChange::FavFood(_) => Field::FavFood,
            FieldChange::Agreement(_) => Field::Agreement,
        }
    }
}

// ---------------------------------------------------------------------------
// Error state
// ---------------------------------------------------------------------------

/// Per-field validation failure text, mirroring [`FormState`]'s keys.
///
/// An empty string means the field currently has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: String,
}

impl ErrorState {
    /// The current message for a field, `""` when the field is valid.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::FavLanguage => &self.fav_language,
            Field::FavFood => &self.fav_food,
            Field::Agreement => &self.agreement,
        }
    }

    /// Replace one field's message, leaving every other field untouched.
    /// `None` clears the message.
    pub fn set(&mut self, field: Field, message: Option<&str>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::FavLanguage => &mut self.fav_language,
            Field::FavFood => &mut self.fav_food,
            Field::Agreement => &mut self.agreement,
        };
        *slot = message.unwrap_or_default().to_string();
    }

    /// True when no field has an error message.
    pub fn is_clear(&self) -> bool {
        self.username.is_empty()
            && self.fav_language.is_empty()
            && self.fav_food.is_empty()
            && self.agreement.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_state_defaults() {
        let form = FormState::default();
        assert_eq!(form.username, "");
        assert_eq!(form.fav_language, "");
        assert_eq!(form.fav_food, "");
        assert!(!form.agreement);
    }

    #[test]
    fn test_form_state_serializes_with_camel_case_keys() {
        let form = FormState {
            username: "alice".to_string(),
            fav_language: "rust".to_string(),
            fav_food: "pizza".to_string(),
            agreement: true,
        };
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "username": "alice",
                "favLanguage": "rust",
                "favFood": "pizza",
                "agreement": true,
            })
        );
    }

    #[test]
    fn test_apply_updates_only_the_targeted_field() {
        let mut form = FormState::default();
        form.apply(FieldChange::Username("alice".to_string()));
        assert_eq!(form.username, "alice");
        assert_eq!(form.fav_language, "");

        form.apply(FieldChange::Agreement(true));
        assert!(form.agreement);
        assert_eq!(form.username, "alice");
    }

    #[test]
    fn test_field_change_targets_its_field() {
        assert_eq!(
            FieldChange::Username(String::new()).field(),
            Field::Username
        );
        assert_eq!(
            FieldChange::FavLanguage(String::new()).field(),
            Field::FavLanguage
        );
        assert_eq!(FieldChange::FavFood(String::new()).field(), Field::FavFood);
        assert_eq!(FieldChange::Agreement(false).field(), Field::Agreement);
    }

    #[test]
    fn test_field_name_round_trip() {
        for field in Field::ALL {
            let parsed: Field = field.name().parse().unwrap();
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn test_field_from_str_case_insensitive() {
        assert_eq!("favlanguage".parse::<Field>().unwrap(), Field::FavLanguage);
        assert_eq!("USERNAME".parse::<Field>().unwrap(), Field::Username);
    }

    #[test]
    fn test_field_from_str_unknown() {
        let err = "email".parse::<Field>().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_error_state_set_and_get() {
        let mut errors = ErrorState::default();
        assert!(errors.is_clear());

        errors.set(Field::Username, Some("username is required"));
        assert_eq!(errors.get(Field::Username), "username is required");
        assert_eq!(errors.get(Field::FavFood), "");
        assert!(!errors.is_clear());

        errors.set(Field::Username, None);
        assert!(errors.is_clear());
    }
}
