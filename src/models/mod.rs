//! Data models for the skills questionnaire
//!
//! This module contains the core data structures:
//! - Skill catalog types and the skill -> category lookup
//! - Enums for stage and category state

pub mod catalog;
pub mod enums;

// Re-exports for convenient access
pub use catalog::{SkillCatalog, SkillCategory};
pub use enums::{CategoryKind, Stage};
