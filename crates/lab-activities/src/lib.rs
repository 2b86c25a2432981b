//! The AI Learning Lab activities beyond the decision tree.
//!
//! Provides a Simon-style pattern challenge, a scripted neural network
//! explorer, the AI-vs-human quiz, and a cat/dog training simulator, plus the
//! timeline scheduler that drives their timed playbacks and the catalog the
//! front ends list them from.

pub mod catalog;
pub mod config;
pub mod error;
pub mod network;
pub mod pattern;
pub mod quiz;
pub mod timeline;
pub mod training;

pub use catalog::{ActivityInfo, ActivityKind, CATALOG, Difficulty};
pub use config::{LabConfig, PatternTiming};
pub use error::{ActivityError, ActivityResult};
pub use network::NetworkExplorer;
pub use pattern::PatternGame;
pub use quiz::QuizGame;
pub use timeline::{Playback, Timeline};
pub use training::TrainingLab;
