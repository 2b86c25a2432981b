//! Neural network explorer: two inputs flow through fixed arithmetic layers.
//!
//! The "network" is a 2 → 3 → 2 → 1 pipeline of averages. [`forward`]
//! computes all values at once; [`NetworkExplorer`] reveals them stage by
//! stage through a [`Timeline`] so the data flow can be watched.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LabConfig;
use crate::error::{ActivityError, ActivityResult};
use crate::timeline::{Playback, Timeline};

/// Upper bound of an input slider (and of first-layer weighted values).
pub const INPUT_MAX: f64 = 10.0;

/// Slider step.
pub const INPUT_STEP: f64 = 0.5;

/// Starting value of both inputs.
pub const DEFAULT_INPUT: f64 = 5.0;

/// Icons offered for each input.
pub const INPUT_ICONS: [[&str; 5]; 2] = [
    ["🎨", "🎵", "📚", "⚽", "🎮"],
    ["🍕", "🍦", "🍎", "🥗", "🍰"],
];

/// Number of neurons per layer after the inputs.
pub const LAYER_SIZES: [usize; 3] = [3, 2, 1];

/// One neuron on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Neuron {
    /// Current value.
    pub value: f64,
    /// Whether the signal has reached it.
    pub active: bool,
}

/// All values of one pass through the network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPass {
    /// First hidden layer.
    pub hidden1: [f64; 3],
    /// Second hidden layer.
    pub hidden2: [f64; 2],
    /// The single output.
    pub output: f64,
}

/// Run the fixed arithmetic on two inputs.
pub fn forward(inputs: [f64; 2]) -> ForwardPass {
    let weighted = |i: usize| (inputs[i] * (0.5 + i as f64 * 0.2)).min(INPUT_MAX);
    let hidden1 = [weighted(0), weighted(1), (inputs[0] + inputs[1]) / 2.0];
    let hidden2 = [
        (hidden1[0] + hidden1[1]) / 2.0,
        (hidden1[1] + hidden1[2]) / 2.0,
    ];
    let output = (hidden2[0] + hidden2[1]) / 2.0;
    ForwardPass {
        hidden1,
        hidden2,
        output,
    }
}

/// Clamp to the slider range and snap to its step.
pub fn snap_input(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    ((value.clamp(0.0, INPUT_MAX) / INPUT_STEP).round() * INPUT_STEP).clamp(0.0, INPUT_MAX)
}

/// The four animation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Inputs are lit.
    Inputs,
    /// First hidden layer computed.
    Hidden1,
    /// Second hidden layer computed.
    Hidden2,
    /// Output computed; animation over.
    Output,
}

impl Stage {
    /// Labels of the connections glowing during this stage.
    pub fn active_connections(self) -> &'static [&'static str] {
        match self {
            Self::Inputs => &["input-0", "input-1"],
            Self::Hidden1 => &["layer1-0", "layer1-1", "layer1-2"],
            Self::Hidden2 => &["layer2-0", "layer2-1"],
            Self::Output => &[],
        }
    }
}

/// Interactive explorer state.
#[derive(Debug, Clone)]
pub struct NetworkExplorer {
    inputs: [f64; 2],
    icons: [usize; 2],
    layers: [Vec<Neuron>; 3],
    stage: Option<Stage>,
    pending: Option<ForwardPass>,
    playback: Option<Playback<Stage>>,
    stage_delay: Duration,
}

impl NetworkExplorer {
    /// Create an explorer with both inputs at 5 and all neurons idle.
    pub fn new(config: &LabConfig) -> Self {
        Self {
            inputs: [DEFAULT_INPUT; 2],
            icons: [0, 0],
            layers: idle_layers(),
            stage: None,
            pending: None,
            playback: None,
            stage_delay: config.network_stage_delay,
        }
    }

    /// Current input values.
    pub fn inputs(&self) -> [f64; 2] {
        self.inputs
    }

    /// Icon shown for input `index` (0 or 1).
    pub fn icon(&self, index: usize) -> &'static str {
        let i = index.min(1);
        INPUT_ICONS[i][self.icons[i]]
    }

    /// Neurons of hidden layer 1, hidden layer 2, and the output.
    pub fn layers(&self) -> &[Vec<Neuron>; 3] {
        &self.layers
    }

    /// The output neuron.
    pub fn output(&self) -> Neuron {
        self.layers[2].first().copied().unwrap_or_default()
    }

    /// Stage most recently revealed.
    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Whether an animation is running.
    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// Time until the next stage is revealed.
    pub fn until_next_stage(&self) -> Option<Duration> {
        self.playback.as_ref().and_then(|p| p.until_next())
    }

    /// Connections glowing right now.
    pub fn active_connections(&self) -> &'static [&'static str] {
        match (self.is_animating(), self.stage) {
            (true, Some(stage)) => stage.active_connections(),
            _ => &[],
        }
    }

    /// Move an input slider. Values are clamped to 0–10 in steps of 0.5.
    pub fn set_input(&mut self, index: usize, value: f64) -> ActivityResult<()> {
        let slot = self
            .inputs
            .get_mut(index)
            .ok_or_else(|| ActivityError::InvalidInput(format!("no input {index}")))?;
        *slot = snap_input(value);
        Ok(())
    }

    /// Nudge an input by a number of slider steps.
    pub fn nudge_input(&mut self, index: usize, steps: i32) -> ActivityResult<()> {
        let current = self.inputs.get(index).copied().unwrap_or(DEFAULT_INPUT);
        self.set_input(index, current + f64::from(steps) * INPUT_STEP)
    }

    /// Pick the next icon for an input.
    pub fn cycle_icon(&mut self, index: usize) {
        let i = index.min(1);
        self.icons[i] = (self.icons[i] + 1) % INPUT_ICONS[i].len();
    }

    /// The stage script for one pass.
    pub fn stage_timeline(&self) -> Timeline<Stage> {
        Timeline::new()
            .then(Duration::ZERO, Stage::Inputs)
            .then(self.stage_delay, Stage::Hidden1)
            .then(self.stage_delay, Stage::Hidden2)
            .then(self.stage_delay, Stage::Output)
    }

    /// Send the current inputs through the network.
    ///
    /// Rejected while a previous pass is still animating.
    pub fn process(&mut self) -> ActivityResult<ForwardPass> {
        if self.is_animating() {
            return Err(ActivityError::AnimationInProgress);
        }
        let pass = forward(self.inputs);
        debug!(inputs = ?self.inputs, output = pass.output, "network pass");
        self.pending = Some(pass);
        self.playback = Some(self.stage_timeline().play());
        self.tick(Duration::ZERO);
        Ok(pass)
    }

    /// Feed elapsed time to the animation. Returns true if anything changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(playback) = self.playback.as_mut() else {
            return false;
        };
        let stages = playback.advance(elapsed);
        let changed = !stages.is_empty();
        for stage in stages {
            self.apply(stage);
        }
        changed
    }

    /// Jump to the end of the animation.
    pub fn finish(&mut self) {
        if let Some(playback) = self.playback.as_mut() {
            let stages = playback.drain();
            for stage in stages {
                self.apply(stage);
            }
        }
    }

    fn apply(&mut self, stage: Stage) {
        self.stage = Some(stage);
        let Some(pass) = self.pending else {
            return;
        };
        let lit = |values: &[f64]| -> Vec<Neuron> {
            values
                .iter()
                .map(|v| Neuron {
                    value: *v,
                    active: true,
                })
                .collect()
        };
        match stage {
            Stage::Inputs => {}
            Stage::Hidden1 => self.layers[0] = lit(&pass.hidden1),
            Stage::Hidden2 => self.layers[1] = lit(&pass.hidden2),
            Stage::Output => {
                self.layers[2] = lit(&[pass.output]);
                self.playback = None;
                self.pending = None;
            }
        }
    }

    /// Inputs back to 5/5, all neurons idle.
    pub fn reset(&mut self) {
        self.inputs = [DEFAULT_INPUT; 2];
        self.layers = idle_layers();
        self.stage = None;
        self.pending = None;
        self.playback = None;
    }
}

fn idle_layers() -> [Vec<Neuron>; 3] {
    LAYER_SIZES.map(|n| vec![Neuron::default(); n])
}
