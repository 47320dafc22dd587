//! Messaging module: identifiers, validation, fingerprints, and the message
//! record itself.
//!
//! # Validate-then-act contract
//!
//! Validation is a separate pre-check step: the predicates in [`validate`]
//! never run inside the [`record::MessageRecord`] setters, and the setters
//! accept whatever they are given. Callers check first, then set. Invalid
//! input is signalled by predicate booleans or the fingerprint sentinel,
//! never by an error type — the caller decides how to react.

pub mod fingerprint;
pub mod ident;
pub mod record;
pub mod validate;
