//! Resolution core for the player lookup bot.
//!
//! The upstream profile API has no documented schema and reshapes its
//! responses between deployments. This crate owns everything needed to
//! make sense of one of those responses: key normalization, recursive
//! candidate search, trust/penalty scoring, and the rendered summary.
//! It also interprets the chat commands that trigger a lookup.
//!
//! Everything here is pure and synchronous. The transport shell hands
//! in a chat line or a parsed JSON document and gets back a command or
//! a display string; no I/O, no shared state, safe to call from any
//! number of in-flight requests.

pub mod command;
pub mod normalize;
pub mod resolve;
pub mod summary;
pub mod walk;

pub use command::Command;
pub use resolve::{FieldSpec, ResolvedField, SENTINEL};
pub use summary::PlayerSummary;
