//! Application state and core logic for the skills questionnaire TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive screen: the form controller, the skill catalog, cursor and
//! animation state, and the pending hand-off once the form is submitted.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::debug;

use crate::flow::{Completion, Handoff, PendingHandoff};
use crate::form::{BackStep, FormState, MAX_RATING, MAX_SELECTED};
use crate::models::{SkillCatalog, Stage};

/// How often the pulse animation advances
const ANIMATION_INTERVAL: Duration = Duration::from_millis(120);

/// Why the event loop should stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppExit {
    /// User quit outright
    Quit,
    /// User backed out past the greeting screen
    Back,
}

/// Application state
pub struct App {
    pub catalog: SkillCatalog,
    pub form: FormState,
    completion: Completion,
    /// Cursor over the flattened catalog on the selection screen
    pub select_cursor: usize,
    /// Cursor over the five selected skills on the rating screen
    pub rate_cursor: usize,
    /// Scheduled hand-off after a successful submit
    pub pending_handoff: Option<PendingHandoff>,
    /// Torn down; a due hand-off must no-op
    defunct: bool,
    // Animation state
    pub animation_tick: u64,
    last_animation_update: Instant,
    // Greeting dot field, regenerated when the area size changes
    pub dots: Vec<(u16, u16)>,
    pub dots_size: (u16, u16),
}

impl App {
    pub fn new(catalog: SkillCatalog, completion: Completion) -> Self {
        Self {
            catalog,
            form: FormState::new(),
            completion,
            select_cursor: 0,
            rate_cursor: 0,
            pending_handoff: None,
            defunct: false,
            animation_tick: 0,
            last_animation_update: Instant::now(),
            dots: Vec::new(),
            dots_size: (0, 0),
        }
    }

    /// Advance the pulse animation if enough time has passed
    pub fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_animation_update) >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    /// Mark the app torn down, suppressing any scheduled hand-off
    pub fn shutdown(&mut self) {
        self.defunct = true;
        self.pending_handoff = None;
    }

    /// Fire a due hand-off, if any. Returns what the event loop should do
    /// next; a defunct app never fires.
    pub fn poll_handoff(&mut self, now: Instant) -> Option<Handoff> {
        if self.defunct {
            return None;
        }
        if self.pending_handoff.as_ref().is_some_and(|p| p.is_due(now)) {
            let pending = self.pending_handoff.take()?;
            return Some(self.completion.deliver(pending.scores));
        }
        None
    }

    /// Handle a key event. Returns Some when the loop should exit.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Option<AppExit> {
        if key == KeyCode::Char('q') {
            return Some(AppExit::Quit);
        }
        // Once submitted, the screen is frozen until the hand-off fires
        if self.pending_handoff.is_some() {
            return None;
        }

        match self.form.stage {
            Stage::Greeting => self.handle_greeting_key(key),
            Stage::Selecting => self.handle_selecting_key(key),
            Stage::Rating => self.handle_rating_key(key, now),
        }
    }

    fn handle_greeting_key(&mut self, key: KeyCode) -> Option<AppExit> {
        match key {
            KeyCode::Enter => {
                self.form.begin();
                debug!("greeting dismissed");
                None
            }
            KeyCode::Esc => self.back(),
            _ => None,
        }
    }

    fn handle_selecting_key(&mut self, key: KeyCode) -> Option<AppExit> {
        let last = self.catalog.skill_count().saturating_sub(1);
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_cursor = self.select_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_cursor = (self.select_cursor + 1).min(last);
            }
            KeyCode::Char(' ') => {
                if let Some(skill) = self.catalog.skill_at(self.select_cursor) {
                    let skill = skill.to_string();
                    self.form.toggle_skill(&skill);
                }
            }
            KeyCode::Enter => {
                if self.form.advance_to_rating(&self.catalog) {
                    self.rate_cursor = 0;
                }
            }
            KeyCode::Esc => return self.back(),
            _ => {}
        }
        None
    }

    fn handle_rating_key(&mut self, key: KeyCode, now: Instant) -> Option<AppExit> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.rate_cursor = self.rate_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.rate_cursor = (self.rate_cursor + 1).min(MAX_SELECTED - 1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(skill) = self.current_rated_skill() {
                    let rating = self.form.rating_of(&skill).unwrap_or(0);
                    self.form.rate_skill(&skill, rating.saturating_sub(1));
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(skill) = self.current_rated_skill() {
                    let rating = self.form.rating_of(&skill).map_or(0, |r| r + 1);
                    self.form.rate_skill(&skill, rating.min(MAX_RATING));
                }
            }
            KeyCode::Char(c @ '0'..='5') => {
                if let Some(skill) = self.current_rated_skill() {
                    self.form.rate_skill(&skill, c as u8 - b'0');
                }
            }
            KeyCode::Enter => {
                if let Some(scores) = self.form.finalize() {
                    let delay = self.completion.delay();
                    self.pending_handoff = Some(PendingHandoff::schedule(now, delay, scores));
                }
            }
            KeyCode::Esc => return self.back(),
            _ => {}
        }
        None
    }

    /// Skill under the rating cursor
    pub fn current_rated_skill(&self) -> Option<String> {
        self.form.selected.get(self.rate_cursor).cloned()
    }

    fn back(&mut self) -> Option<AppExit> {
        match self.form.go_back() {
            BackStep::SteppedBack => None,
            BackStep::AtGreeting => {
                self.completion.back_out();
                Some(AppExit::Back)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{Handoff, SkillScores, HANDOFF_TICK, HARD_SKILLS_KEY};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn embedded_app(sink: Rc<RefCell<Option<SkillScores>>>) -> App {
        App::new(
            SkillCatalog::default_catalog(),
            Completion::Embedded {
                on_complete: Box::new(move |s| *sink.borrow_mut() = Some(s)),
                on_back: None,
            },
        )
    }

    fn standalone_app(form_data: serde_json::Value) -> App {
        App::new(
            SkillCatalog::default_catalog(),
            Completion::Standalone { form_data },
        )
    }

    /// Drive the app through select + rate for the scenario skills
    fn fill_out(app: &mut App, now: Instant) {
        app.handle_key(KeyCode::Enter, now); // leave greeting
        for skill in ["HTML", "Git", "Storybook", "CSS", "Figma"] {
            let pos = app
                .catalog
                .flat_skills()
                .position(|s| s == skill)
                .unwrap();
            app.select_cursor = pos;
            app.handle_key(KeyCode::Char(' '), now);
        }
        app.handle_key(KeyCode::Enter, now); // advance to rating
        assert_eq!(app.form.stage, Stage::Rating);
        for (i, rating) in ['3', '5', '0', '4', '2'].into_iter().enumerate() {
            app.rate_cursor = i;
            app.handle_key(KeyCode::Char(rating), now);
        }
    }

    #[test]
    fn test_embedded_round_trip_via_keys() {
        let received = Rc::new(RefCell::new(None));
        let mut app = embedded_app(Rc::clone(&received));
        let now = Instant::now();

        fill_out(&mut app, now);
        app.handle_key(KeyCode::Enter, now); // submit
        assert!(app.pending_handoff.is_some());

        // Not due yet
        assert!(app.poll_handoff(now).is_none());

        let handoff = app.poll_handoff(now + HANDOFF_TICK).unwrap();
        assert!(matches!(handoff, Handoff::Delivered));
        let scores = received.borrow().clone().unwrap();
        assert_eq!(scores["HTML"], 60);
        assert_eq!(scores["Git"], 100);
        assert_eq!(scores["Storybook"], 0);
        assert_eq!(scores["CSS"], 80);
        assert_eq!(scores["Figma"], 40);
    }

    #[test]
    fn test_standalone_navigates_after_two_ticks() {
        let mut app = standalone_app(json!({"name": "Ada"}));
        let now = Instant::now();

        fill_out(&mut app, now);
        app.handle_key(KeyCode::Enter, now);

        // One tick is not enough in navigation mode
        assert!(app.poll_handoff(now + HANDOFF_TICK).is_none());

        let Some(Handoff::Navigate(payload)) = app.poll_handoff(now + 2 * HANDOFF_TICK) else {
            panic!("expected navigation hand-off");
        };
        assert_eq!(payload.state["name"], "Ada");
        assert_eq!(payload.state[HARD_SKILLS_KEY]["HTML"], 60);
    }

    #[test]
    fn test_shutdown_suppresses_due_handoff() {
        let received = Rc::new(RefCell::new(None));
        let mut app = embedded_app(Rc::clone(&received));
        let now = Instant::now();

        fill_out(&mut app, now);
        app.handle_key(KeyCode::Enter, now);
        app.shutdown();

        assert!(app.poll_handoff(now + 10 * HANDOFF_TICK).is_none());
        assert!(received.borrow().is_none());
    }

    #[test]
    fn test_input_frozen_while_handoff_pending() {
        let mut app = standalone_app(serde_json::Value::Null);
        let now = Instant::now();

        fill_out(&mut app, now);
        app.handle_key(KeyCode::Enter, now);
        let before = app.form.ratings.clone();

        app.handle_key(KeyCode::Char('1'), now);
        app.handle_key(KeyCode::Esc, now);
        assert_eq!(app.form.ratings, before);
        assert_eq!(app.form.stage, Stage::Rating);
    }

    #[test]
    fn test_escape_walks_back_and_exits_at_greeting() {
        let backed = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&backed);
        let mut app = App::new(
            SkillCatalog::default_catalog(),
            Completion::Embedded {
                on_complete: Box::new(|_| {}),
                on_back: Some(Box::new(move || *flag.borrow_mut() = true)),
            },
        );
        let now = Instant::now();

        app.handle_key(KeyCode::Enter, now);
        assert_eq!(app.form.stage, Stage::Selecting);
        assert!(app.handle_key(KeyCode::Esc, now).is_none());
        assert_eq!(app.form.stage, Stage::Greeting);
        assert_eq!(app.handle_key(KeyCode::Esc, now), Some(AppExit::Back));
        assert!(*backed.borrow());
    }

    #[test]
    fn test_select_cursor_stays_in_bounds() {
        let mut app = standalone_app(serde_json::Value::Null);
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);

        app.handle_key(KeyCode::Up, now);
        assert_eq!(app.select_cursor, 0);
        for _ in 0..100 {
            app.handle_key(KeyCode::Down, now);
        }
        assert_eq!(app.select_cursor, app.catalog.skill_count() - 1);
    }

    #[test]
    fn test_arrow_rating_adjustment_clamps() {
        let mut app = standalone_app(serde_json::Value::Null);
        let now = Instant::now();
        fill_out(&mut app, now);

        app.rate_cursor = 0; // HTML, rated 3
        app.handle_key(KeyCode::Right, now);
        app.handle_key(KeyCode::Right, now);
        app.handle_key(KeyCode::Right, now);
        assert_eq!(app.form.rating_of("HTML"), Some(5));

        for _ in 0..7 {
            app.handle_key(KeyCode::Left, now);
        }
        assert_eq!(app.form.rating_of("HTML"), Some(0));
    }

    #[test]
    fn test_quit_wins_over_everything() {
        let mut app = standalone_app(serde_json::Value::Null);
        let now = Instant::now();
        assert_eq!(app.handle_key(KeyCode::Char('q'), now), Some(AppExit::Quit));
    }
}
