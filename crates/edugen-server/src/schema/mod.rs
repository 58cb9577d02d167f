//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for a specific
//! API domain. Types use serde derives for JSON serialization/deserialization.

pub mod common;
pub mod health;
pub mod knowledge_points;
pub mod lesson_plan;
pub mod questions;
pub mod session_content;
pub mod student;
