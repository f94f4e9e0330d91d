//! Authentication collaborator contract.
//!
//! The actual sign-up/login/verify/reset flows belong to an external backend
//! and are out of scope here. This layer carries only what the directory
//! consumes: the current identity ([`session`]) and the client-side credential
//! checks run before input is handed to the backend ([`validation`]).

pub mod session;
pub mod validation;

pub use session::{AuthProvider, LocalAuth, Session};
pub use validation::{validate_email, EmailValidation};
