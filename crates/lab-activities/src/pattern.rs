//! Pattern challenge: watch a growing color sequence, then repeat it.
//!
//! Each round adds one random color. The sequence is replayed through a
//! [`Timeline`] while input is disabled; the player then repeats it and the
//! first wrong press ends the game.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{LabConfig, PatternTiming};
use crate::error::{ActivityError, ActivityResult};
use crate::timeline::{Playback, Timeline};

/// Points per round are `round * POINTS_PER_ROUND`.
pub const POINTS_PER_ROUND: u32 = 10;

/// The six pads of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Red pad.
    Red,
    /// Blue pad.
    Blue,
    /// Green pad.
    Green,
    /// Yellow pad.
    Yellow,
    /// Purple pad.
    Purple,
    /// Orange pad.
    Orange,
}

impl Color {
    /// All pads in board order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| ActivityError::InvalidInput(format!("unknown color \"{s}\"")))
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternPhase {
    /// Not started yet.
    Idle,
    /// The sequence is being replayed; input is disabled.
    Showing,
    /// Waiting for the player to repeat the sequence.
    Input,
    /// A wrong press ended the game.
    GameOver,
}

/// What a single press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Right color; more to go this round.
    Correct {
        /// Presses matched so far this round.
        matched: usize,
        /// Presses still needed this round.
        remaining: usize,
    },
    /// The whole sequence was repeated; a longer one is on its way.
    RoundComplete {
        /// The round now starting.
        round: u32,
        /// Score after the bonus.
        score: u32,
    },
    /// Wrong color. The game is over.
    Mismatch {
        /// Zero-based position of the wrong press.
        position: usize,
        /// Color that was expected.
        expected: Color,
        /// Color that was pressed.
        pressed: Color,
    },
}

/// One Simon-style game.
#[derive(Debug, Clone)]
pub struct PatternGame {
    sequence: Vec<Color>,
    user_input: Vec<Color>,
    round: u32,
    score: u32,
    phase: PatternPhase,
    highlighted: Option<Color>,
    playback: Option<Playback<Option<Color>>>,
    timing: PatternTiming,
    rng: StdRng,
}

impl PatternGame {
    /// Create an idle game.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            sequence: Vec::new(),
            user_input: Vec::new(),
            round: 0,
            score: 0,
            phase: PatternPhase::Idle,
            highlighted: None,
            playback: None,
            timing: config.pattern,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The sequence to repeat this round.
    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    /// Presses made so far this round.
    pub fn user_input(&self) -> &[Color] {
        &self.user_input
    }

    /// Current round, 1-based (0 before the first start).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current phase.
    pub fn phase(&self) -> PatternPhase {
        self.phase
    }

    /// Pad lit by the playback right now.
    pub fn highlighted(&self) -> Option<Color> {
        self.highlighted
    }

    /// Whether the pads accept presses.
    pub fn accepts_input(&self) -> bool {
        self.phase == PatternPhase::Input
    }

    /// Time until the playback changes the board, if one is running.
    pub fn until_next_flash(&self) -> Option<Duration> {
        self.playback.as_ref().and_then(|p| p.until_next())
    }

    /// Start (or restart) with a one-color sequence and replay it.
    pub fn start(&mut self) {
        self.sequence = vec![Color::random(&mut self.rng)];
        self.user_input.clear();
        self.round = 1;
        self.score = 0;
        self.highlighted = None;
        self.begin_playback(Duration::ZERO);
        info!("pattern challenge started");
    }

    /// The flash script for the current sequence.
    pub fn flash_timeline(&self) -> Timeline<Option<Color>> {
        self.sequence
            .iter()
            .fold(Timeline::new(), |timeline, color| {
                timeline
                    .then(self.timing.gap, Some(*color))
                    .then(self.timing.flash, None)
            })
    }

    fn begin_playback(&mut self, pause: Duration) {
        self.phase = PatternPhase::Showing;
        self.playback = Some(self.flash_timeline().delayed(pause).play());
    }

    /// Feed elapsed time to the playback. Returns true if the board changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(playback) = self.playback.as_mut() else {
            return false;
        };
        let flashes = playback.advance(elapsed);
        let finished = playback.is_finished();
        let changed = !flashes.is_empty();
        if let Some(last) = flashes.last() {
            self.highlighted = *last;
        }
        if finished {
            self.end_playback();
        }
        changed || finished
    }

    /// Skip the rest of the playback and hand control to the player.
    pub fn finish_playback(&mut self) {
        if let Some(playback) = self.playback.as_mut() {
            playback.drain();
        }
        self.end_playback();
    }

    fn end_playback(&mut self) {
        self.playback = None;
        self.highlighted = None;
        if self.phase == PatternPhase::Showing {
            self.phase = PatternPhase::Input;
        }
    }

    /// Press a pad.
    ///
    /// Only the position right after the presses made so far is compared;
    /// a mismatch ends the game on the spot.
    pub fn press(&mut self, color: Color) -> ActivityResult<PressOutcome> {
        if !self.accepts_input() {
            return Err(ActivityError::InputDisabled);
        }

        let position = self.user_input.len();
        let expected = self.sequence[position];
        if color != expected {
            self.phase = PatternPhase::GameOver;
            info!(round = self.round, score = self.score, "pattern challenge over");
            return Ok(PressOutcome::Mismatch {
                position,
                expected,
                pressed: color,
            });
        }

        self.user_input.push(color);
        if self.user_input.len() < self.sequence.len() {
            return Ok(PressOutcome::Correct {
                matched: self.user_input.len(),
                remaining: self.sequence.len() - self.user_input.len(),
            });
        }

        self.score = self
            .score
            .saturating_add(self.round.saturating_mul(POINTS_PER_ROUND));
        self.round = self.round.saturating_add(1);
        self.sequence.push(Color::random(&mut self.rng));
        self.user_input.clear();
        debug!(round = self.round, score = self.score, "round complete");
        self.begin_playback(self.timing.round_pause);

        Ok(PressOutcome::RoundComplete {
            round: self.round,
            score: self.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PatternGame {
        PatternGame::new(&LabConfig::default())
    }

    fn wrong(color: Color) -> Color {
        Color::ALL
            .into_iter()
            .find(|c| *c != color)
            .unwrap_or(Color::Red)
    }

    #[test]
    fn idle_rejects_presses() {
        let mut g = game();
        assert_eq!(g.phase(), PatternPhase::Idle);
        assert!(matches!(g.press(Color::Red), Err(ActivityError::InputDisabled)));
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut g = PatternGame::new(&LabConfig::default().instant());
        g.start();
        g.tick(Duration::ZERO);
        g.round = u32::MAX;
        g.score = u32::MAX - 5;

        let first = g.sequence()[0];
        assert!(matches!(
            g.press(first),
            Ok(PressOutcome::RoundComplete { round: u32::MAX, score: u32::MAX })
        ));
    }

    #[test]
    fn start_shows_one_color() {
        let mut g = game();
        g.start();
        assert_eq!(g.round(), 1);
        assert_eq!(g.sequence().len(), 1);
        assert_eq!(g.phase(), PatternPhase::Showing);
        assert!(matches!(g.press(Color::Red), Err(ActivityError::InputDisabled)));
    }

    #[test]
    fn playback_lights_then_hands_over() {
        let mut g = game();
        g.start();
        let first = g.sequence()[0];

        assert!(!g.tick(Duration::from_millis(500)));
        assert_eq!(g.highlighted(), None);
        assert!(g.tick(Duration::from_millis(100)));
        assert_eq!(g.highlighted(), Some(first));
        assert_eq!(g.phase(), PatternPhase::Showing);

        assert!(g.tick(Duration::from_millis(400)));
        assert_eq!(g.highlighted(), None);
        assert_eq!(g.phase(), PatternPhase::Input);
    }

    #[test]
    fn round_k_has_length_k() {
        let mut g = game();
        g.start();
        for k in 1..=8u32 {
            assert_eq!(g.round(), k);
            assert_eq!(g.sequence().len(), k as usize);
            g.finish_playback();
            let sequence = g.sequence().to_vec();
            let mut last = None;
            for color in sequence {
                last = Some(g.press(color).unwrap());
            }
            assert!(matches!(last, Some(PressOutcome::RoundComplete { .. })));
        }
    }

    #[test]
    fn score_adds_round_times_ten() {
        let mut g = game();
        g.start();
        for _ in 0..3 {
            g.finish_playback();
            for color in g.sequence().to_vec() {
                g.press(color).unwrap();
            }
        }
        assert_eq!(g.score(), 10 + 20 + 30);
        assert_eq!(g.round(), 4);
    }

    #[test]
    fn mismatch_ends_game_immediately() {
        let mut g = game();
        g.start();
        g.finish_playback();
        g.press(g.sequence()[0]).unwrap();
        g.finish_playback();

        // Round 2: wrong on the first position; the second is never looked at.
        let expected = g.sequence()[0];
        let outcome = g.press(wrong(expected)).unwrap();
        assert_eq!(
            outcome,
            PressOutcome::Mismatch {
                position: 0,
                expected,
                pressed: wrong(expected),
            }
        );
        assert_eq!(g.phase(), PatternPhase::GameOver);
        assert!(matches!(g.press(g.sequence()[1]), Err(ActivityError::InputDisabled)));
        assert_eq!(g.score(), 10);
    }

    #[test]
    fn won_round_pauses_before_next_playback() {
        let mut g = game();
        g.start();
        g.finish_playback();
        g.press(g.sequence()[0]).unwrap();

        assert_eq!(g.phase(), PatternPhase::Showing);
        assert_eq!(g.until_next_flash(), Some(Duration::from_millis(1600)));
    }

    #[test]
    fn restart_resets_progress() {
        let mut g = game();
        g.start();
        g.finish_playback();
        let expected = g.sequence()[0];
        g.press(wrong(expected)).unwrap();

        g.start();
        assert_eq!(g.round(), 1);
        assert_eq!(g.score(), 0);
        assert!(g.user_input().is_empty());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = game();
        let mut b = game();
        a.start();
        b.start();
        assert_eq!(a.sequence(), b.sequence());
    }

    #[test]
    fn color_parse() {
        assert_eq!("Purple".parse::<Color>().unwrap(), Color::Purple);
        assert!("pink".parse::<Color>().is_err());
    }
}
