//! Core domain model for vestibule.
//!
//! This crate defines the registration form state, the ordered validation
//! rule table, and the controller state machine that gates submission. It
//! performs no I/O: submission is split into a `begin`/`finish` pair so the
//! whole machine can be driven and tested without a network.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod controller;
pub mod error;
pub mod form;
pub mod validate;

pub use controller::{Banner, BannerKind, FormController, SubmitOutcome};
pub use error::{Error, Result};
pub use form::{ErrorState, Field, FieldChange, FormState};
