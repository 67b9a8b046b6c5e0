//! Completion strategy and hand-off plumbing.
//!
//! The questionnaire runs in one of two modes, injected at construction:
//! embedded in a larger onboarding flow (results go to a callback) or
//! standalone (results travel to the next questionnaire screen as carried
//! navigation state). The hand-off itself is deferred by a short delay so
//! the submitted message is visible before the screen is left; the delay is
//! a deadline polled by the event loop, never a blocking wait.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use tracing::debug;

/// Skill name -> normalized 0-100 percentage
pub type SkillScores = BTreeMap<String, u8>;

/// One hand-off delay unit
pub const HANDOFF_TICK: Duration = Duration::from_millis(600);

/// Key under which the percentages join the carried form data
pub const HARD_SKILLS_KEY: &str = "hardSkills";

/// Screens this questionnaire can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SoftSkills,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::SoftSkills => "soft-skills",
        }
    }
}

/// Navigation request produced by a standalone hand-off
#[derive(Debug, Clone, PartialEq)]
pub struct NavPayload {
    pub route: Route,
    /// Original form data plus the percentages under `hardSkills`
    pub state: Value,
}

/// What the event loop should do once a due hand-off fires
#[derive(Debug)]
pub enum Handoff {
    /// Results went through the embedded callback; leave the screen
    Delivered,
    /// Navigate to the next questionnaire screen with carried state
    Navigate(NavPayload),
}

/// How results leave the screen, decided at construction
pub enum Completion {
    /// Part of a larger onboarding flow: results go to the host's callback,
    /// backing out of the greeting goes to the host's back handler.
    Embedded {
        on_complete: Box<dyn FnMut(SkillScores)>,
        on_back: Option<Box<dyn FnMut()>>,
    },
    /// Standalone flow: the incoming form data (opaque here) is carried
    /// through to the next screen together with the computed percentages.
    Standalone { form_data: Value },
}

impl Completion {
    /// Delay before the hand-off fires. The embedded host repaints faster
    /// than a screen change, so it gets one tick; navigation gets two so the
    /// submitted message is readable before the screen goes away.
    pub fn delay(&self) -> Duration {
        match self {
            Completion::Embedded { .. } => HANDOFF_TICK,
            Completion::Standalone { .. } => 2 * HANDOFF_TICK,
        }
    }

    /// Deliver the results. Consumes the scores; called exactly once per
    /// submission by the hand-off poller.
    pub fn deliver(&mut self, scores: SkillScores) -> Handoff {
        match self {
            Completion::Embedded { on_complete, .. } => {
                debug!("delivering scores through embedded callback");
                on_complete(scores);
                Handoff::Delivered
            }
            Completion::Standalone { form_data } => {
                let state = build_nav_state(form_data, &scores);
                debug!(route = Route::SoftSkills.name(), "navigating with carried state");
                Handoff::Navigate(NavPayload {
                    route: Route::SoftSkills,
                    state,
                })
            }
        }
    }

    /// Back out past the greeting screen
    pub fn back_out(&mut self) {
        if let Completion::Embedded {
            on_back: Some(on_back),
            ..
        } = self
        {
            on_back();
        }
        // Standalone: the event loop exits with AppExit::Back, the caller's
        // analogue of a history pop.
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completion::Embedded { on_back, .. } => f
                .debug_struct("Embedded")
                .field("on_back", &on_back.is_some())
                .finish(),
            Completion::Standalone { form_data } => f
                .debug_struct("Standalone")
                .field("form_data", form_data)
                .finish(),
        }
    }
}

/// A scheduled hand-off waiting for its deadline
#[derive(Debug)]
pub struct PendingHandoff {
    pub due: Instant,
    pub scores: SkillScores,
}

impl PendingHandoff {
    pub fn schedule(now: Instant, delay: Duration, scores: SkillScores) -> Self {
        Self {
            due: now + delay,
            scores,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Merge the carried form data with the computed percentages.
///
/// The form data is opaque and passed through unchanged; a non-object value
/// is wrapped under `formData` rather than discarded.
pub fn build_nav_state(form_data: &Value, scores: &SkillScores) -> Value {
    let mut state = match form_data {
        Value::Object(map) => map.clone(),
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("formData".to_string(), other.clone());
            map
        }
    };

    let skills: Map<String, Value> = scores
        .iter()
        .map(|(skill, &pct)| (skill.clone(), Value::from(pct)))
        .collect();
    state.insert(HARD_SKILLS_KEY.to_string(), Value::Object(skills));

    Value::Object(state)
}
