//! Configuration and HTTP submission for vestibule.
//!
//! The registration endpoint is treated as opaque: one POST, a JSON body,
//! and either a 2xx or a failure whose message is surfaced to the user.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod submit;

pub use config::Config;
pub use error::{SubmitError, SubmitResult};
pub use submit::{outcome_for, RegistrationClient, ServerReply};
