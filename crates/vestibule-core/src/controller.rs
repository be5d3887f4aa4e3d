//! The form controller.
//!
//! Owns the form values, the per-field error messages, the derived submit
//! gate, and the outcome banner, and drives them through the submission
//! state machine. The controller performs no I/O: [`FormController::begin_submit`]
//! hands the caller a payload to POST, and the caller reports the resolution
//! back through [`FormController::finish_submit`]. The gate is recomputed
//! explicitly after every mutation rather than through any implicit
//! reactivity.

use crate::form::{ErrorState, Field, FieldChange, FormState};
use crate::validate;

/// Styling kind for the outcome banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The outcome banner shown after the most recent submit resolution.
///
/// Persists until overwritten by the next resolution; it is never cleared
/// by field edits or by the start of another submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// Resolution of a submit attempt, as reported by the submission layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the registration (any 2xx response).
    Accepted,
    /// The endpoint rejected it, or the request failed. The message is
    /// shown to the user verbatim.
    Rejected { message: String },
}

/// State machine behind the registration form.
#[derive(Debug)]
pub struct FormController {
    form: FormState,
    errors: ErrorState,
    /// The submit gate, recomputed after every form mutation.
    submittable: bool,
    /// Trimmed username of the request currently in flight, if any. Doubles
    /// as the single-submission latch: while set, the affordance stays
    /// disabled even though the fields remain editable.
    in_flight: Option<String>,
    banner: Option<Banner>,
}

impl FormController {
    pub fn new() -> Self {
        let mut controller = Self {
            form: FormState::default(),
            errors: ErrorState::default(),
            submittable: false,
            in_flight: None,
            banner: None,
        };
        controller.recompute_gate();
        controller
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// The current message for one field, `""` when the field is valid.
    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// True while a submitted request has not yet resolved.
    pub fn submit_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the submit affordance is currently enabled.
    pub fn submit_enabled(&self) -> bool {
        self.submittable && self.in_flight.is_none()
    }

    /// Apply one input event: update the field, revalidate that field only,
    /// then recompute the gate. Other fields' errors are left untouched.
    pub fn on_field_change(&mut self, change: FieldChange) {
        let field = change.field();
        log::debug!("field change: {field}");
        self.form.apply(change);
        self.errors
            .set(field, validate::check_field(&self.form, field));
        self.recompute_gate();
    }

    /// Start a submit attempt.
    ///
    /// Returns the payload to POST, with the username trimmed of leading and
    /// trailing whitespace (the stored form keeps the raw value). A `None`
    /// means the attempt was a no-op: the gate is closed or a request is
    /// already in flight. The affordance is disabled before the caller gets
    /// the payload, so duplicate submissions are impossible by construction.
    pub fn begin_submit(&mut self) -> Option<FormState> {
        if !self.submit_enabled() {
            return None;
        }
        let mut payload = self.form.clone();
        payload.username = payload.username.trim().to_string();
        log::info!("submitting registration for {}", payload.username);
        self.in_flight = Some(payload.username.clone());
        Some(payload)
    }

    /// Apply the resolution of the in-flight submit attempt.
    ///
    /// On acceptance the form resets to defaults and the banner greets the
    /// user who just registered; the gate then recomputes against the empty
    /// form and stays closed until the user types again. On rejection the
    /// entered data is kept intact for correction and the gate recomputes
    /// against it.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        let Some(username) = self.in_flight.take() else {
            log::warn!("submit resolution arrived with no request in flight");
            return;
        };
        match outcome {
            SubmitOutcome::Accepted => {
                log::info!("registration accepted for {username}");
                self.form = FormState::default();
                self.errors = ErrorState::default();
                self.banner = Some(Banner {
                    kind: BannerKind::Success,
                    message: format!("Success! Welcome, {username}!"),
                });
            }
            SubmitOutcome::Rejected { message } => {
                log::warn!("registration rejected: {message}");
                self.banner = Some(Banner {
                    kind: BannerKind::Error,
                    message,
                });
            }
        }
        self.recompute_gate();
    }

    fn recompute_gate(&mut self) {
        self.submittable = validate::is_submittable(&self.form);
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
