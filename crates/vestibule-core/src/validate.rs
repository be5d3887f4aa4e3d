//! Validation rules for the registration form.
//!
//! The rules live in a single ordered table and are scanned in order; the
//! first violated rule for a field supplies that field's message, so a field
//! shows at most one error at a time and a required failure always wins over
//! a shape failure. The whole-form predicate [`is_submittable`] is true only
//! when no rule in the table is violated.

use crate::form::{Field, FormState};

/// Accepted values for the favorite-language field.
pub const LANGUAGE_OPTIONS: [&str; 2] = ["javascript", "rust"];

/// Accepted values for the favorite-food field.
pub const FOOD_OPTIONS: [&str; 3] = ["broccoli", "spaghetti", "pizza"];

/// Username length bounds, in characters.
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;

/// Failure messages, one per rule.
pub mod messages {
    pub const USERNAME_REQUIRED: &str = "username is required";
    pub const USERNAME_MIN: &str = "username must be at least 3 characters";
    pub const USERNAME_MAX: &str = "username cannot exceed 20 characters";
    pub const FAV_LANGUAGE_REQUIRED: &str = "favLanguage is required";
    pub const FAV_LANGUAGE_OPTIONS: &str = "favLanguage must be either javascript or rust";
    pub const FAV_FOOD_REQUIRED: &str = "favFood is required";
    pub const FAV_FOOD_OPTIONS: &str = "favFood must be either broccoli, spaghetti or pizza";
    pub const AGREEMENT_REQUIRED: &str = "agreement is required";
    pub const AGREEMENT_ACCEPTED: &str = "agreement must be accepted";
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One entry in the rule table: the field it guards, a predicate returning
/// true when the rule is violated, and the message shown on violation.
struct Rule {
    field: Field,
    violated: fn(&FormState) -> bool,
    message: &'static str,
}

/// The full rule table, in evaluation order. Required rules precede shape
/// rules so the required message wins for an empty field. The username is
/// checked untrimmed here; trimming happens only at submit time.
///
/// `agreement` is a `bool` in [`FormState`] and therefore always present, so
/// only its accepted rule appears here; [`required_message`] still hands out
/// the required message for callers whose input may omit the field entirely.
const RULES: &[Rule] = &[
    Rule {
        field: Field::Username,
        violated: |f: &FormState| f.username.is_empty(),
        message: messages::USERNAME_REQUIRED,
    },
    Rule {
        field: Field::Username,
        violated: |f: &FormState| f.username.chars().count() < USERNAME_MIN,
        message: messages::USERNAME_MIN,
    },
    Rule {
        field: Field::Username,
        violated: |f: &FormState| f.username.chars().count() > USERNAME_MAX,
        message: messages::USERNAME_MAX,
    },
    Rule {
        field: Field::FavLanguage,
        violated: |f: &FormState| f.fav_language.is_empty(),
        message: messages::FAV_LANGUAGE_REQUIRED,
    },
    Rule {
        field: Field::FavLanguage,
        violated: |f: &FormState| !LANGUAGE_OPTIONS.contains(&f.fav_language.as_str()),
        message: messages::FAV_LANGUAGE_OPTIONS,
    },
    Rule {
        field: Field::FavFood,
        violated: |f: &FormState| f.fav_food.is_empty(),
        message: messages::FAV_FOOD_REQUIRED,
    },
    Rule {
        field: Field::FavFood,
        violated: |f: &FormState| !FOOD_OPTIONS.contains(&f.fav_food.as_str()),
        message: messages::FAV_FOOD_OPTIONS,
    },
    Rule {
        field: Field::Agreement,
        violated: |f: &FormState| !f.agreement,
        message: messages::AGREEMENT_ACCEPTED,
    },
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check one field against its rules, in order.
///
/// Returns the first violated rule's message, or `None` when the field
/// passes. Only the candidate value of `field` influences the result.
pub fn check_field(form: &FormState, field: Field) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| rule.field == field && (rule.violated)(form))
        .map(|rule| rule.message)
}

/// The whole-form predicate: true iff every field passes all of its rules.
pub fn is_submittable(form: &FormState) -> bool {
    RULES.iter().all(|rule| !(rule.violated)(form))
}

/// The required-rule message for a field whose value was not supplied at all.
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Username => messages::USERNAME_REQUIRED,
        Field::FavLanguage => messages::FAV_LANGUAGE_REQUIRED,
        Field::FavFood => messages::FAV_FOOD_REQUIRED,
        Field::Agreement => messages::AGREEMENT_REQUIRED,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
