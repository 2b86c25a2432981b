//! AI training simulator: label cats and dogs, then quiz the "model".
//!
//! No learning happens. The toy shows the workflow of collecting labelled
//! examples, then testing and tracking accuracy.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::LabConfig;
use crate::error::{ActivityError, ActivityResult};
use crate::timeline::{Playback, Timeline};

/// Emojis drawn for cat examples.
pub const CAT_EMOJIS: [&str; 9] = ["😺", "😸", "😹", "😻", "😼", "😽", "🙀", "😿", "😾"];

/// Emojis drawn for dog examples.
pub const DOG_EMOJIS: [&str; 6] = ["🐶", "🐕", "🦮", "🐕‍🦺", "🐩", "🐾"];

/// Class of an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// A cat.
    Cat,
    /// A dog.
    Dog,
}

impl Label {
    /// Both labels.
    pub const ALL: [Label; 2] = [Label::Cat, Label::Dog];

    /// Emoji palette for this label.
    pub fn emojis(self) -> &'static [&'static str] {
        match self {
            Self::Cat => &CAT_EMOJIS,
            Self::Dog => &DOG_EMOJIS,
        }
    }

    fn random_emoji(self, rng: &mut impl Rng) -> &'static str {
        let palette = self.emojis();
        palette[rng.random_range(0..palette.len())]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cat => write!(f, "cat"),
            Self::Dog => write!(f, "dog"),
        }
    }
}

impl FromStr for Label {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" | "c" => Ok(Self::Cat),
            "dog" | "d" => Ok(Self::Dog),
            other => Err(ActivityError::InvalidInput(format!(
                "unknown label '{other}' (expected cat or dog)"
            ))),
        }
    }
}

/// A labelled picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Sequence number, unique within one lab.
    pub id: u64,
    /// True class.
    pub label: Label,
    /// Emoji shown for it.
    pub emoji: &'static str,
}

/// Outcome of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The guessed label.
    pub guess: Label,
    /// The true label.
    pub actual: Label,
}

impl Verdict {
    /// Whether the guess matched.
    pub fn is_correct(&self) -> bool {
        self.guess == self.actual
    }
}

/// Running tally of guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Correct guesses.
    pub correct: u32,
    /// All guesses.
    pub total: u32,
}

impl Tally {
    /// Rounded percentage of correct guesses; 0 with no guesses.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u32
    }
}

/// Which half of the workflow is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    /// Collecting examples.
    Training,
    /// Guessing test items.
    Testing,
}

/// The training simulator.
#[derive(Debug, Clone)]
pub struct TrainingLab {
    examples: Vec<Example>,
    phase: TrainingPhase,
    test: Option<Example>,
    verdict: Option<Verdict>,
    tally: Tally,
    next_id: u64,
    min_examples: usize,
    result_pause: Duration,
    pending_next: Option<Playback<()>>,
    rng: StdRng,
}

impl TrainingLab {
    /// An empty lab in the training phase.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            examples: Vec::new(),
            phase: TrainingPhase::Training,
            test: None,
            verdict: None,
            tally: Tally::default(),
            next_id: 1,
            min_examples: config.min_training_examples,
            result_pause: config.training_result_pause,
            pending_next: None,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Collected examples, oldest first.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Number of examples per label as `(cats, dogs)`.
    pub fn counts(&self) -> (usize, usize) {
        let cats = self
            .examples
            .iter()
            .filter(|e| e.label == Label::Cat)
            .count();
        (cats, self.examples.len() - cats)
    }

    /// Examples needed before testing can start.
    pub fn min_examples(&self) -> usize {
        self.min_examples
    }

    /// Current phase.
    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    /// Item being tested.
    pub fn current_test(&self) -> Option<&Example> {
        self.test.as_ref()
    }

    /// Result of the last guess while it is on screen.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Time left before the next test item replaces the shown verdict.
    pub fn until_next_test(&self) -> Option<Duration> {
        self.pending_next.as_ref().and_then(|p| p.until_next())
    }

    /// Guess tally.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Rounded accuracy percentage.
    pub fn accuracy(&self) -> u32 {
        self.tally.accuracy()
    }

    /// Store a labelled example with a random emoji of its class.
    pub fn add_example(&mut self, label: Label) -> ActivityResult<&Example> {
        if self.phase != TrainingPhase::Training {
            return Err(ActivityError::WrongPhase("training"));
        }
        let example = self.draw(label);
        debug!(id = example.id, %label, "training example added");
        let index = self.examples.len();
        self.examples.push(example);
        Ok(&self.examples[index])
    }

    /// Switch to testing and draw the first item.
    pub fn start_testing(&mut self) -> ActivityResult<&Example> {
        if self.examples.len() < self.min_examples {
            return Err(ActivityError::NotEnoughExamples {
                have: self.examples.len(),
                need: self.min_examples,
            });
        }
        info!(examples = self.examples.len(), "training finished, testing");
        self.phase = TrainingPhase::Testing;
        self.next_test()
    }

    /// Draw a fresh test item with a random label.
    pub fn next_test(&mut self) -> ActivityResult<&Example> {
        if self.phase != TrainingPhase::Testing {
            return Err(ActivityError::WrongPhase("testing"));
        }
        let label = if self.rng.random_bool(0.5) {
            Label::Cat
        } else {
            Label::Dog
        };
        let example = self.draw(label);
        self.verdict = None;
        self.pending_next = None;
        Ok(&*self.test.insert(example))
    }

    /// The "model": a coin flip.
    pub fn predict(&mut self) -> Label {
        if self.rng.random_bool(0.5) {
            Label::Cat
        } else {
            Label::Dog
        }
    }

    /// Score a guess against the current test item.
    ///
    /// The verdict stays visible for the configured pause, after which
    /// [`tick`](Self::tick) draws the next item. Guesses during the pause
    /// are rejected.
    pub fn guess(&mut self, guess: Label) -> ActivityResult<Verdict> {
        if self.phase != TrainingPhase::Testing {
            return Err(ActivityError::WrongPhase("testing"));
        }
        if self.verdict.is_some() {
            return Err(ActivityError::InputDisabled);
        }
        let actual = self
            .test
            .as_ref()
            .map(|t| t.label)
            .ok_or(ActivityError::WrongPhase("testing"))?;
        let verdict = Verdict { guess, actual };
        self.tally.total += 1;
        if verdict.is_correct() {
            self.tally.correct += 1;
        }
        debug!(%guess, %actual, accuracy = self.tally.accuracy(), "guess scored");
        self.verdict = Some(verdict);
        self.pending_next = Some(Timeline::new().then(self.result_pause, ()).play());
        Ok(verdict)
    }

    /// Feed elapsed time; draws the next item once the result pause is over.
    /// Returns true if a new item was drawn.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let due = match self.pending_next.as_mut() {
            Some(playback) => !playback.advance(elapsed).is_empty(),
            None => false,
        };
        due && self.next_test().is_ok()
    }

    /// Clear everything and return to training.
    pub fn reset(&mut self) {
        self.examples.clear();
        self.phase = TrainingPhase::Training;
        self.test = None;
        self.verdict = None;
        self.tally = Tally::default();
        self.pending_next = None;
        info!("training lab reset");
    }

    fn draw(&mut self, label: Label) -> Example {
        let emoji = label.random_emoji(&mut self.rng);
        let id = self.next_id;
        self.next_id += 1;
        Example { id, label, emoji }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab() -> TrainingLab {
        TrainingLab::new(&LabConfig::default())
    }

    fn trained() -> TrainingLab {
        let mut lab = lab();
        for label in [Label::Cat, Label::Cat, Label::Dog, Label::Dog] {
            lab.add_example(label).unwrap();
        }
        lab
    }

    #[test]
    fn examples_use_their_palette() {
        let mut lab = lab();
        let cat = lab.add_example(Label::Cat).unwrap().clone();
        let dog = lab.add_example(Label::Dog).unwrap().clone();
        assert!(CAT_EMOJIS.contains(&cat.emoji));
        assert!(DOG_EMOJIS.contains(&dog.emoji));
        assert_ne!(cat.id, dog.id);
        assert_eq!(lab.counts(), (1, 1));
        assert_eq!(lab.examples().last().map(|e| e.id), Some(dog.id));
    }

    #[test]
    fn testing_needs_four_examples() {
        let mut lab = lab();
        for _ in 0..3 {
            lab.add_example(Label::Dog).unwrap();
        }
        assert!(matches!(
            lab.start_testing(),
            Err(ActivityError::NotEnoughExamples { have: 3, need: 4 })
        ));
        assert_eq!(lab.phase(), TrainingPhase::Training);

        lab.add_example(Label::Cat).unwrap();
        assert!(lab.start_testing().is_ok());
        assert_eq!(lab.phase(), TrainingPhase::Testing);
        assert!(lab.current_test().is_some());
    }

    #[test]
    fn guesses_update_tally() {
        let mut lab = trained();
        lab.start_testing().unwrap();

        let actual = lab.current_test().map(|t| t.label).unwrap();
        assert!(lab.guess(actual).unwrap().is_correct());
        lab.next_test().unwrap();

        let actual = lab.current_test().map(|t| t.label).unwrap();
        let wrong = if actual == Label::Cat { Label::Dog } else { Label::Cat };
        assert!(!lab.guess(wrong).unwrap().is_correct());

        assert_eq!(lab.tally(), Tally { correct: 1, total: 2 });
        assert_eq!(lab.accuracy(), 50);
    }

    #[test]
    fn result_stays_until_pause_elapses() {
        let mut lab = trained();
        lab.start_testing().unwrap();
        let first = lab.current_test().cloned().unwrap();
        lab.guess(Label::Cat).unwrap();

        assert!(matches!(lab.guess(Label::Dog), Err(ActivityError::InputDisabled)));
        assert!(!lab.tick(Duration::from_millis(1000)));
        assert_eq!(lab.until_next_test(), Some(Duration::from_millis(500)));
        assert!(lab.verdict().is_some());
        assert!(lab.tick(Duration::from_millis(500)));
        assert!(lab.verdict().is_none());
        assert_ne!(lab.current_test().map(|t| t.id), Some(first.id));
    }

    #[test]
    fn accuracy_rounds() {
        assert_eq!(Tally::default().accuracy(), 0);
        assert_eq!(Tally { correct: 2, total: 3 }.accuracy(), 67);
        assert_eq!(Tally { correct: 1, total: 3 }.accuracy(), 33);
    }

    #[test]
    fn no_examples_while_testing() {
        let mut lab = trained();
        lab.start_testing().unwrap();
        assert!(lab.add_example(Label::Cat).is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut lab = trained();
        lab.start_testing().unwrap();
        let guess = lab.predict();
        lab.guess(guess).unwrap();

        lab.reset();
        assert!(lab.examples().is_empty());
        assert_eq!(lab.phase(), TrainingPhase::Training);
        assert_eq!(lab.tally(), Tally::default());
        assert!(lab.current_test().is_none());
        assert!(lab.guess(Label::Cat).is_err());
    }

    #[test]
    fn label_parsing() {
        assert_eq!("Dog".parse::<Label>().unwrap(), Label::Dog);
        assert_eq!("c".parse::<Label>().unwrap(), Label::Cat);
        assert!("fish".parse::<Label>().is_err());
    }
}
