//! Form state for the hard-skills questionnaire.
//!
//! Holds the selection set, the rating map and the transient validation
//! message, and implements the stage transitions: Greeting -> Selecting ->
//! Rating -> hand-off. All mutation happens synchronously in response to
//! key events; the actual hand-off timing lives in `flow`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::flow::SkillScores;
use crate::models::{CategoryKind, SkillCatalog, Stage};

/// Exactly this many skills must be selected and rated
pub const MAX_SELECTED: usize = 5;

/// Ratings run 0..=MAX_RATING inclusive
pub const MAX_RATING: u8 = 5;

pub const MSG_NEED_FIVE: &str = "Select exactly 5 skills to continue";
pub const MSG_NEED_CODE: &str = "Add at least one coding skill";
pub const MSG_NEED_PLANNING: &str = "Add at least one planning skill";
pub const MSG_NEED_COMMUNICATION: &str = "Add at least one communication skill";
pub const MSG_RATE_ALL: &str = "Rate all 5 skills to continue";
pub const MSG_SUBMITTED: &str = "Scores saved!";

/// Per-kind coverage of the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coverage {
    pub code: bool,
    pub planning: bool,
    pub communication: bool,
}

impl Coverage {
    pub fn complete(&self) -> bool {
        self.code && self.planning && self.communication
    }
}

/// Result of a backward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackStep {
    /// Moved one stage back within the questionnaire
    SteppedBack,
    /// Already at the greeting; the caller owns leaving the screen
    AtGreeting,
}

/// Form state for one questionnaire session
#[derive(Debug)]
pub struct FormState {
    pub stage: Stage,
    /// Selected skills in insertion order, distinct, at most MAX_SELECTED
    pub selected: Vec<String>,
    /// Self-ratings keyed by skill name, values 0..=MAX_RATING
    pub ratings: BTreeMap<String, u8>,
    /// Transient validation/success message, cleared on successful transitions
    pub message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            stage: Stage::Greeting,
            selected: Vec::new(),
            ratings: BTreeMap::new(),
            message: None,
        }
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.selected.iter().any(|s| s == skill)
    }

    /// Toggle a skill in the selection: remove if present, append if there
    /// is room, otherwise ignore (the UI greys out further options at 5).
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == skill) {
            self.selected.remove(pos);
        } else if self.selected.len() < MAX_SELECTED {
            self.selected.push(skill.to_string());
        }
    }

    /// Coverage of the three category kinds across the current selection
    pub fn coverage(&self, catalog: &SkillCatalog) -> Coverage {
        let mut coverage = Coverage::default();
        for skill in &self.selected {
            match catalog.kind_of(skill) {
                Some(CategoryKind::Code) => coverage.code = true,
                Some(CategoryKind::Planning) => coverage.planning = true,
                Some(CategoryKind::Communication) => coverage.communication = true,
                None => {}
            }
        }
        coverage
    }

    /// Leave the greeting screen
    pub fn begin(&mut self) {
        if self.stage == Stage::Greeting {
            self.stage = Stage::Selecting;
            self.message = None;
        }
    }

    /// Validate the selection and move to the rating stage.
    ///
    /// Checks run in a fixed order and short-circuit: only the first failing
    /// rule's message is shown. Returns true on success.
    pub fn advance_to_rating(&mut self, catalog: &SkillCatalog) -> bool {
        if self.selected.len() != MAX_SELECTED {
            self.message = Some(MSG_NEED_FIVE.to_string());
            return false;
        }
        let coverage = self.coverage(catalog);
        if !coverage.code {
            self.message = Some(MSG_NEED_CODE.to_string());
            return false;
        }
        if !coverage.planning {
            self.message = Some(MSG_NEED_PLANNING.to_string());
            return false;
        }
        if !coverage.communication {
            self.message = Some(MSG_NEED_COMMUNICATION.to_string());
            return false;
        }

        // Drop ratings for skills that were deselected since the last visit,
        // so leftovers can never satisfy the finalize count check.
        let selected = self.selected.clone();
        self.ratings.retain(|skill, _| selected.iter().any(|s| s == skill));

        self.message = None;
        self.stage = Stage::Rating;
        debug!(selected = ?self.selected, "entering rating stage");
        true
    }

    /// Record a self-rating. The UI only emits 0..=MAX_RATING; values above
    /// the scale are clamped rather than trusted.
    pub fn rate_skill(&mut self, skill: &str, value: u8) {
        self.ratings
            .insert(skill.to_string(), value.min(MAX_RATING));
    }

    pub fn rating_of(&self, skill: &str) -> Option<u8> {
        self.ratings.get(skill).copied()
    }

    /// Normalize a 0-5 rating to a 0-100 percentage
    pub fn percentage(rating: u8) -> u8 {
        (f64::from(rating) / f64::from(MAX_RATING) * 100.0).round() as u8
    }

    /// Check that all 5 ratings exist and produce the percentage map.
    ///
    /// On failure sets the message and returns None. On success sets the
    /// submitted message; scheduling the hand-off is the caller's job.
    pub fn finalize(&mut self) -> Option<SkillScores> {
        if self.ratings.len() != MAX_SELECTED {
            self.message = Some(MSG_RATE_ALL.to_string());
            return None;
        }

        let scores: SkillScores = self
            .ratings
            .iter()
            .map(|(skill, &rating)| (skill.clone(), Self::percentage(rating)))
            .collect();

        self.message = Some(MSG_SUBMITTED.to_string());
        debug!(?scores, "questionnaire finalized");
        Some(scores)
    }

    /// Step one stage back, clearing the message. Selections and ratings
    /// survive backward navigation.
    pub fn go_back(&mut self) -> BackStep {
        match self.stage {
            Stage::Rating => {
                self.stage = Stage::Selecting;
                self.message = None;
                BackStep::SteppedBack
            }
            Stage::Selecting => {
                self.stage = Stage::Greeting;
                self.message = None;
                BackStep::SteppedBack
            }
            Stage::Greeting => BackStep::AtGreeting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillCatalog;

    fn catalog() -> SkillCatalog {
        SkillCatalog::default_catalog()
    }

    fn select(form: &mut FormState, skills: &[&str]) {
        for skill in skills {
            form.toggle_skill(skill);
        }
    }

    // Five skills covering all three kinds (HTML/CSS code, Git/Figma
    // planning, Storybook communication)
    const VALID_FIVE: [&str; 5] = ["HTML", "Git", "Storybook", "CSS", "Figma"];

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut form = FormState::new();
        form.toggle_skill("HTML");
        assert!(form.is_selected("HTML"));
        form.toggle_skill("HTML");
        assert!(!form.is_selected("HTML"));
    }

    #[test]
    fn test_toggle_caps_at_five() {
        let mut form = FormState::new();
        select(&mut form, &["HTML", "CSS", "Sass", "Git", "Figma", "Agile"]);
        assert_eq!(form.selected.len(), 5);
        assert!(!form.is_selected("Agile"));

        // Removing a selected skill still works at the cap
        form.toggle_skill("CSS");
        assert_eq!(form.selected.len(), 4);
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut form = FormState::new();
        select(&mut form, &VALID_FIVE);
        assert_eq!(form.selected, VALID_FIVE);
    }

    #[test]
    fn test_advance_requires_exactly_five() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &["HTML", "Git", "Storybook"]);
        assert!(!form.advance_to_rating(&catalog()));
        assert_eq!(form.stage, Stage::Selecting);
        assert_eq!(form.message.as_deref(), Some(MSG_NEED_FIVE));
    }

    #[test]
    fn test_advance_code_only_reports_planning_first() {
        let mut form = FormState::new();
        form.begin();
        // 5 code-only skills: code coverage holds, so the planning check is
        // the first to fail.
        select(&mut form, &["HTML", "CSS", "Sass", "JavaScript", "TypeScript"]);
        assert!(!form.advance_to_rating(&catalog()));
        assert_eq!(form.message.as_deref(), Some(MSG_NEED_PLANNING));
    }

    #[test]
    fn test_advance_missing_code_reported_before_others() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &["Git", "Figma", "Agile", "Storybook", "Code Review"]);
        assert!(!form.advance_to_rating(&catalog()));
        assert_eq!(form.message.as_deref(), Some(MSG_NEED_CODE));
    }

    #[test]
    fn test_advance_missing_communication() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &["HTML", "CSS", "Git", "Figma", "Agile"]);
        assert!(!form.advance_to_rating(&catalog()));
        assert_eq!(form.message.as_deref(), Some(MSG_NEED_COMMUNICATION));
    }

    #[test]
    fn test_advance_success_clears_message() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &["HTML", "Git"]);
        assert!(!form.advance_to_rating(&catalog()));
        assert!(form.message.is_some());

        select(&mut form, &["Storybook", "CSS", "Figma"]);
        assert!(form.advance_to_rating(&catalog()));
        assert_eq!(form.stage, Stage::Rating);
        assert!(form.message.is_none());
    }

    #[test]
    fn test_percentage_scale() {
        let expected = [0, 20, 40, 60, 80, 100];
        for rating in 0..=MAX_RATING {
            assert_eq!(FormState::percentage(rating), expected[rating as usize]);
        }
    }

    #[test]
    fn test_finalize_requires_all_ratings() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &VALID_FIVE);
        assert!(form.advance_to_rating(&catalog()));

        form.rate_skill("HTML", 3);
        form.rate_skill("Git", 5);
        assert!(form.finalize().is_none());
        assert_eq!(form.message.as_deref(), Some(MSG_RATE_ALL));
    }

    #[test]
    fn test_finalize_round_trip_scenario() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &VALID_FIVE);
        assert!(form.advance_to_rating(&catalog()));

        for (skill, rating) in VALID_FIVE.iter().zip([3u8, 5, 0, 4, 2]) {
            form.rate_skill(skill, rating);
        }

        let scores = form.finalize().unwrap();
        assert_eq!(scores.len(), 5);
        assert_eq!(scores["HTML"], 60);
        assert_eq!(scores["Git"], 100);
        assert_eq!(scores["Storybook"], 0);
        assert_eq!(scores["CSS"], 80);
        assert_eq!(scores["Figma"], 40);
        assert_eq!(form.message.as_deref(), Some(MSG_SUBMITTED));
    }

    #[test]
    fn test_rate_skill_clamps_to_scale() {
        let mut form = FormState::new();
        form.rate_skill("HTML", 9);
        assert_eq!(form.rating_of("HTML"), Some(5));
    }

    #[test]
    fn test_go_back_from_rating_keeps_selection() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &VALID_FIVE);
        assert!(form.advance_to_rating(&catalog()));
        form.message = Some("leftover".to_string());

        assert_eq!(form.go_back(), BackStep::SteppedBack);
        assert_eq!(form.stage, Stage::Selecting);
        assert_eq!(form.selected, VALID_FIVE);
        assert!(form.message.is_none());
    }

    #[test]
    fn test_go_back_walks_to_greeting_then_delegates() {
        let mut form = FormState::new();
        form.begin();
        assert_eq!(form.go_back(), BackStep::SteppedBack);
        assert_eq!(form.stage, Stage::Greeting);
        assert_eq!(form.go_back(), BackStep::AtGreeting);
    }

    #[test]
    fn test_stale_ratings_pruned_on_reentering_rating() {
        let mut form = FormState::new();
        form.begin();
        select(&mut form, &VALID_FIVE);
        assert!(form.advance_to_rating(&catalog()));
        for skill in VALID_FIVE {
            form.rate_skill(skill, 4);
        }

        // Go back, swap one skill, rate nothing new: the stale rating for
        // the removed skill must not count toward the five.
        form.go_back();
        form.toggle_skill("Figma");
        form.toggle_skill("Agile");
        assert!(form.advance_to_rating(&catalog()));
        assert_eq!(form.ratings.len(), 4);
        assert!(form.rating_of("Figma").is_none());
        assert!(form.finalize().is_none());
        assert_eq!(form.message.as_deref(), Some(MSG_RATE_ALL));

        // Ratings for still-selected skills survived the detour
        assert_eq!(form.rating_of("HTML"), Some(4));
    }
}
