//! AI vs Human quiz: for each scenario, decide whether humans, AI, or both
//! handle it well.

mod scenarios;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use scenarios::SCENARIOS;

use crate::config::LabConfig;
use crate::error::{ActivityError, ActivityResult};

/// A way of thinking the player can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The human way.
    Human,
    /// The AI way.
    Ai,
}

impl Mode {
    /// Both modes.
    pub const ALL: [Mode; 2] = [Mode::Human, Mode::Ai];

    /// Icon shown next to the mode.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Human => "❤️",
            Self::Ai => "🤖",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Ai => write!(f, "ai"),
        }
    }
}

impl FromStr for Mode {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "h" => Ok(Self::Human),
            "ai" | "a" => Ok(Self::Ai),
            other => Err(ActivityError::InvalidInput(format!(
                "unknown mode '{other}' (expected human or ai)"
            ))),
        }
    }
}

/// Which answer a scenario accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectMode {
    /// Only the human way.
    Human,
    /// Only the AI way.
    Ai,
    /// Either answer counts.
    Both,
}

impl CorrectMode {
    /// Whether `mode` is scored as correct.
    pub fn accepts(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (Self::Both, _) | (Self::Human, Mode::Human) | (Self::Ai, Mode::Ai)
        )
    }
}

impl fmt::Display for CorrectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Ai => write!(f, "ai"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// How one side approaches a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thinking {
    /// Four steps of the thought process.
    pub process: [&'static str; 4],
    /// The resulting answer.
    pub answer: &'static str,
    /// Four characteristic traits.
    pub traits: [&'static str; 4],
}

/// One quiz card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// What is happening.
    pub situation: &'static str,
    /// Emoji for the card.
    pub icon: &'static str,
    /// The question asked about the situation.
    pub question: &'static str,
    /// The human way.
    pub human: Thinking,
    /// The AI way.
    pub ai: Thinking,
    /// Accepted answer.
    pub correct: CorrectMode,
    /// Shown after answering.
    pub explanation: &'static str,
}

impl Scenario {
    /// The thinking for a given mode.
    pub fn thinking(&self, mode: Mode) -> &Thinking {
        match mode {
            Mode::Human => &self.human,
            Mode::Ai => &self.ai,
        }
    }
}

/// Where the quiz is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Start screen.
    Intro,
    /// Waiting for a selection and submit.
    Question,
    /// Answer submitted; explanation visible.
    Feedback {
        /// Whether the submitted answer scored.
        correct: bool,
    },
    /// All scenarios answered.
    Finished,
}

/// Final rating band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// 80% or more.
    Expert,
    /// 60% or more.
    GreatLearner,
    /// Anything lower.
    KeepExploring,
}

impl Rating {
    /// Band for a percentage.
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Expert,
            60.. => Self::GreatLearner,
            _ => Self::KeepExploring,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expert => write!(f, "🏆 AI Expert!"),
            Self::GreatLearner => write!(f, "⭐ Great Learner!"),
            Self::KeepExploring => write!(f, "💪 Keep Exploring!"),
        }
    }
}

/// The quiz state machine.
#[derive(Debug, Clone)]
pub struct QuizGame {
    scenarios: &'static [Scenario],
    index: usize,
    selected: Option<Mode>,
    phase: QuizPhase,
    score: u32,
    points: u32,
}

impl QuizGame {
    /// A quiz over the built-in scenarios, on the intro screen.
    pub fn new(config: &LabConfig) -> Self {
        Self::with_scenarios(config, &SCENARIOS)
    }

    /// A quiz over a custom deck.
    pub fn with_scenarios(config: &LabConfig, scenarios: &'static [Scenario]) -> Self {
        Self {
            scenarios,
            index: 0,
            selected: None,
            phase: QuizPhase::Intro,
            score: 0,
            points: config.points_per_answer,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Zero-based index of the current scenario.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenario on screen, if any.
    pub fn current(&self) -> Option<&'static Scenario> {
        match self.phase {
            QuizPhase::Question | QuizPhase::Feedback { .. } => self.scenarios.get(self.index),
            QuizPhase::Intro | QuizPhase::Finished => None,
        }
    }

    /// Selected mode for the current scenario.
    pub fn selected(&self) -> Option<Mode> {
        self.selected
    }

    /// Points earned.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points available.
    pub fn max_score(&self) -> u32 {
        self.points * self.scenarios.len() as u32
    }

    /// Score as a rounded percentage of the maximum.
    pub fn percentage(&self) -> u32 {
        let max = self.max_score();
        if max == 0 {
            return 0;
        }
        (f64::from(self.score) * 100.0 / f64::from(max)).round() as u32
    }

    /// Rating for the current percentage.
    pub fn rating(&self) -> Rating {
        Rating::for_percentage(self.percentage())
    }

    /// Begin from the first scenario with a zero score.
    pub fn start(&mut self) {
        self.index = 0;
        self.score = 0;
        self.selected = None;
        self.phase = if self.scenarios.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::Question
        };
        info!(scenarios = self.scenarios.len(), "quiz started");
    }

    /// Pick a mode. Allowed until the answer is submitted.
    pub fn select(&mut self, mode: Mode) -> ActivityResult<()> {
        if self.phase != QuizPhase::Question {
            return Err(ActivityError::WrongPhase("question"));
        }
        self.selected = Some(mode);
        Ok(())
    }

    /// Submit the selection and reveal the explanation. Returns whether it
    /// scored.
    pub fn submit(&mut self) -> ActivityResult<bool> {
        if self.phase != QuizPhase::Question {
            return Err(ActivityError::WrongPhase("question"));
        }
        let mode = self.selected.ok_or(ActivityError::NoSelection)?;
        let scenario = self
            .scenarios
            .get(self.index)
            .ok_or(ActivityError::WrongPhase("question"))?;
        let correct = scenario.correct.accepts(mode);
        if correct {
            self.score += self.points;
        }
        debug!(index = self.index, %mode, correct, score = self.score, "quiz answer");
        self.phase = QuizPhase::Feedback { correct };
        Ok(correct)
    }

    /// Move past the feedback to the next scenario, or finish.
    pub fn next(&mut self) -> ActivityResult<QuizPhase> {
        if !matches!(self.phase, QuizPhase::Feedback { .. }) {
            return Err(ActivityError::WrongPhase("feedback"));
        }
        self.selected = None;
        if self.index + 1 < self.scenarios.len() {
            self.index += 1;
            self.phase = QuizPhase::Question;
        } else {
            self.phase = QuizPhase::Finished;
            info!(score = self.score, max = self.max_score(), "quiz finished");
        }
        Ok(self.phase)
    }

    /// Select, submit, and advance in one go.
    pub fn answer(&mut self, mode: Mode) -> ActivityResult<bool> {
        self.select(mode)?;
        let correct = self.submit()?;
        self.next()?;
        Ok(correct)
    }

    /// Back to the intro screen.
    pub fn reset(&mut self) {
        self.index = 0;
        self.score = 0;
        self.selected = None;
        self.phase = QuizPhase::Intro;
    }
}
