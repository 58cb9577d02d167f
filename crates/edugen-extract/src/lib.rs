//! Best-effort recovery of structured JSON from raw model output.
//!
//! Language models asked for "JSON only" still wrap their answers in
//! markdown fences, sprinkle comments, leave trailing commas, or pad the
//! payload with prose. [`extract`] runs an ordered fallback chain over the
//! raw text and reports which stage produced a parse, so callers can log
//! how far from clean the provider output was.

pub mod recover;

pub use recover::{extract, RecoveryMethod};
