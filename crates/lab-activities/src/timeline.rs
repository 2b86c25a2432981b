//! Scripted playback: an ordered list of `(delay, state)` steps and a
//! cooperative cursor that releases states as time is fed to it.
//!
//! Nothing here owns a timer. The front end measures elapsed time and calls
//! [`Playback::advance`]; scripted runs call [`Playback::drain`] instead.

use std::collections::VecDeque;
use std::time::Duration;

/// One scripted step: wait `delay`, then show `state`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    /// Wait measured from the previous step.
    pub delay: Duration,
    /// State revealed once the wait is over.
    pub state: S,
}

/// An ordered script of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<S> {
    steps: Vec<Step<S>>,
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> Timeline<S> {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn then(mut self, delay: Duration, state: S) -> Self {
        self.steps.push(Step { delay, state });
        self
    }

    /// Add extra wait before the first step.
    pub fn delayed(mut self, extra: Duration) -> Self {
        if let Some(first) = self.steps.first_mut() {
            first.delay += extra;
        }
        self
    }

    /// The steps in order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all delays.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }

    /// Start playing the script from the beginning.
    pub fn play(self) -> Playback<S> {
        Playback {
            pending: self.steps.into(),
            waited: Duration::ZERO,
        }
    }
}

/// A running script. Released states are handed back in order.
#[derive(Debug, Clone)]
pub struct Playback<S> {
    pending: VecDeque<Step<S>>,
    waited: Duration,
}

impl<S> Playback<S> {
    /// Feed elapsed time and collect every state whose wait has passed.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<S> {
        self.waited += elapsed;
        let mut released = Vec::new();
        while let Some(step) = self.pending.front() {
            if step.delay > self.waited {
                break;
            }
            self.waited -= step.delay;
            if let Some(step) = self.pending.pop_front() {
                released.push(step.state);
            }
        }
        if self.pending.is_empty() {
            self.waited = Duration::ZERO;
        }
        released
    }

    /// Release every remaining state at once.
    pub fn drain(&mut self) -> Vec<S> {
        self.waited = Duration::ZERO;
        self.pending.drain(..).map(|s| s.state).collect()
    }

    /// Whether every state has been released.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time left until the next state is released.
    pub fn until_next(&self) -> Option<Duration> {
        self.pending
            .front()
            .map(|s| s.delay.saturating_sub(self.waited))
    }

    /// Number of states not yet released.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn releases_states_as_time_passes() {
        let mut playback = Timeline::new()
            .then(ms(600), 'a')
            .then(ms(400), 'b')
            .play();

        assert!(playback.advance(ms(599)).is_empty());
        assert_eq!(playback.advance(ms(1)), vec!['a']);
        assert_eq!(playback.until_next(), Some(ms(400)));
        assert_eq!(playback.advance(ms(1000)), vec!['b']);
        assert!(playback.is_finished());
    }

    #[test]
    fn one_large_tick_releases_several() {
        let mut playback = Timeline::new()
            .then(ms(100), 1)
            .then(ms(100), 2)
            .then(ms(100), 3)
            .play();
        assert_eq!(playback.advance(ms(250)), vec![1, 2]);
        assert_eq!(playback.until_next(), Some(ms(50)));
        assert_eq!(playback.remaining(), 1);
    }

    #[test]
    fn zero_delay_releases_immediately() {
        let mut playback = Timeline::new().then(Duration::ZERO, "now").play();
        assert_eq!(playback.advance(Duration::ZERO), vec!["now"]);
    }

    #[test]
    fn drain_releases_everything() {
        let mut playback = Timeline::new().then(ms(5), 1).then(ms(5), 2).play();
        assert_eq!(playback.drain(), vec![1, 2]);
        assert!(playback.is_finished());
        assert_eq!(playback.until_next(), None);
    }

    #[test]
    fn delayed_shifts_first_step() {
        let timeline = Timeline::new().then(ms(600), 1).then(ms(400), 2).delayed(ms(1000));
        assert_eq!(timeline.steps()[0].delay, ms(1600));
        assert_eq!(timeline.total_duration(), ms(2000));
        assert_eq!(timeline.len(), 2);
    }
}
