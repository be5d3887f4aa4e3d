use anyhow::Result;
use vestibule_core::{validate, Field, FormState};

/// Validate candidate values without submitting.
///
/// Fields that were not supplied at all are reported with their required
/// message rather than validated as empty: `--agreement` left out reads
/// "agreement is required", while `--agreement false` reads "agreement must
/// be accepted".
pub fn run_check(
    username: Option<String>,
    fav_language: Option<String>,
    fav_food: Option<String>,
    agreement: Option<bool>,
    only: Option<Field>,
) -> Result<()> {
    let provided = |field: Field| match field {
        Field::Username => username.is_some(),
        Field::FavLanguage => fav_language.is_some(),
        Field::FavFood => fav_food.is_some(),
        Field::Agreement => agreement.is_some(),
    };

    let form = FormState {
        username: username.clone().unwrap_or_default(),
        fav_language: fav_language.clone().unwrap_or_default(),
        fav_food: fav_food.clone().unwrap_or_default(),
        agreement: agreement.unwrap_or_default(),
    };

    let fields: &[Field] = match only {
        Some(ref field) => std::slice::from_ref(field),
        None => &Field::ALL,
    };

    let mut all_provided_and_valid = true;
    for &field in fields {
        let verdict = if provided(field) {
            validate::check_field(&form, field)
        } else {
            Some(validate::required_message(field))
        };
        match verdict {
            Some(message) => {
                all_provided_and_valid = false;
                println!("  {field}: {message}");
            }
            None => println!("  {field}: ok"),
        }
    }

    if only.is_none() {
        println!();
        if all_provided_and_valid && validate::is_submittable(&form) {
            println!("form is submittable");
        } else {
            println!("form is not submittable");
        }
    }

    Ok(())
}
