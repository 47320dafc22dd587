//! Quickchat — message composition with a durable send log.
//!
//! Validates candidate messages (recipient shape, content length), derives a
//! deterministic content fingerprint, counts sends per run, and persists
//! accepted messages to a JSON array log on disk. The library never owns a
//! dialog: callers supply already-typed strings and display the returned
//! values.
//!
//! See `DESIGN.md` for full architecture documentation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod messaging;
pub mod session;
pub mod store;
