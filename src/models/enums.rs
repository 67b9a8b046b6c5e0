//! Enums used throughout the skills questionnaire
//!
//! This module contains the stage and category types used for state
//! management and validation.

use serde::Deserialize;

/// Current screen of the questionnaire walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Greeting, // Intro screen shown before any input
    Selecting, // Pick exactly 5 skills across the three categories
    Rating,    // Self-rate each selected skill 0-5
}

/// Classification of a skill, used for selection-validity gating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Code,
    Planning,
    Communication,
}

impl CategoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Code => "Code",
            CategoryKind::Planning => "Planning",
            CategoryKind::Communication => "Communication",
        }
    }
}
