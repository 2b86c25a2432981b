//! Configuration shared by the activities of one lab session.

use std::time::Duration;

/// Delays of the pattern challenge playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternTiming {
    /// Wait before each highlight.
    pub gap: Duration,
    /// How long a color stays highlighted.
    pub flash: Duration,
    /// Pause between a won round and the next playback.
    pub round_pause: Duration,
}

impl Default for PatternTiming {
    fn default() -> Self {
        Self {
            gap: Duration::from_millis(600),
            flash: Duration::from_millis(400),
            round_pause: Duration::from_millis(1000),
        }
    }
}

/// Configuration for a lab session.
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// RNG seed for reproducible sequences and test items.
    pub seed: u64,
    /// Pattern challenge delays.
    pub pattern: PatternTiming,
    /// Delay between neural network animation stages.
    pub network_stage_delay: Duration,
    /// Labelled examples required before the classifier can be tested.
    pub min_training_examples: usize,
    /// How long a guess result stays up before the next test item.
    pub training_result_pause: Duration,
    /// Quiz points for each correct answer.
    pub points_per_answer: u32,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pattern: PatternTiming::default(),
            network_stage_delay: Duration::from_millis(400),
            min_training_examples: 4,
            training_result_pause: Duration::from_millis(1500),
            points_per_answer: 20,
        }
    }
}

impl LabConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the pattern playback delays.
    pub fn with_pattern_timing(mut self, timing: PatternTiming) -> Self {
        self.pattern = timing;
        self
    }

    /// Set the network stage delay.
    pub fn with_network_stage_delay(mut self, delay: Duration) -> Self {
        self.network_stage_delay = delay;
        self
    }

    /// Set the minimum number of training examples (at least 1).
    pub fn with_min_training_examples(mut self, min: usize) -> Self {
        self.min_training_examples = min.max(1);
        self
    }

    /// Playbacks with every delay set to zero, for scripted runs.
    pub fn instant(mut self) -> Self {
        self.pattern = PatternTiming {
            gap: Duration::ZERO,
            flash: Duration::ZERO,
            round_pause: Duration::ZERO,
        };
        self.network_stage_delay = Duration::ZERO;
        self.training_result_pause = Duration::ZERO;
        self
    }
}
