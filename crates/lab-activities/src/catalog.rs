//! The list of activities shown on the home screen and by `ailab list`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ActivityError;

/// Difficulty badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    /// Entry level.
    Beginner,
    /// Some prior exposure helps.
    Intermediate,
    /// Hardest.
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Identifies an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    /// Cat/dog training simulator.
    TrainAi,
    /// Neural network explorer.
    NeuralNetwork,
    /// Decision tree builder and player.
    DecisionTree,
    /// Pattern recognition challenge.
    PatternChallenge,
    /// AI vs Human quiz.
    AiVsHuman,
}

impl ActivityKind {
    /// Stable key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::TrainAi => "train-ai",
            Self::NeuralNetwork => "neural-network",
            Self::DecisionTree => "decision-tree",
            Self::PatternChallenge => "pattern-challenge",
            Self::AiVsHuman => "ai-vs-human",
        }
    }

    /// Catalog entry for this activity.
    pub fn info(self) -> &'static ActivityInfo {
        CATALOG
            .iter()
            .find(|a| a.kind == self)
            .unwrap_or(&CATALOG[0])
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActivityKind {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let kind = match key.as_str() {
            "train-ai" | "train" | "training" => Self::TrainAi,
            "neural-network" | "network" | "nn" => Self::NeuralNetwork,
            "decision-tree" | "tree" => Self::DecisionTree,
            "pattern-challenge" | "pattern" => Self::PatternChallenge,
            "ai-vs-human" | "quiz" => Self::AiVsHuman,
            _ => return Err(ActivityError::UnknownActivity(s.to_string())),
        };
        Ok(kind)
    }
}

/// One catalog card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityInfo {
    /// Which activity.
    pub kind: ActivityKind,
    /// Card title.
    pub title: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Card icon.
    pub icon: &'static str,
    /// Difficulty badge.
    pub difficulty: Difficulty,
}

/// Every activity, in home screen order.
pub static CATALOG: [ActivityInfo; 5] = [
    ActivityInfo {
        kind: ActivityKind::TrainAi,
        title: "AI Training Simulator",
        description: "Train your own AI to recognize patterns! See how AI learns from examples.",
        icon: "🧠",
        difficulty: Difficulty::Beginner,
    },
    ActivityInfo {
        kind: ActivityKind::NeuralNetwork,
        title: "Neural Network Explorer",
        description: "Watch how neural networks process information layer by layer.",
        icon: "🕸️",
        difficulty: Difficulty::Intermediate,
    },
    ActivityInfo {
        kind: ActivityKind::DecisionTree,
        title: "Decision Tree Game",
        description: "Build decision trees and see how AI makes smart choices.",
        icon: "🌳",
        difficulty: Difficulty::Beginner,
    },
    ActivityInfo {
        kind: ActivityKind::PatternChallenge,
        title: "Pattern Recognition Challenge",
        description: "Compete against AI in finding patterns. Can you beat the machine?",
        icon: "🎯",
        difficulty: Difficulty::Advanced,
    },
    ActivityInfo {
        kind: ActivityKind::AiVsHuman,
        title: "AI vs Human",
        description: "Discover how AI thinks differently from humans!",
        icon: "🤖",
        difficulty: Difficulty::Beginner,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_one_entry() {
        for info in &CATALOG {
            assert_eq!(info.kind.info(), info);
            assert_eq!(info.kind.key().parse::<ActivityKind>().unwrap(), info.kind);
        }
    }

    #[test]
    fn aliases() {
        assert_eq!("Tree".parse::<ActivityKind>().unwrap(), ActivityKind::DecisionTree);
        assert_eq!("quiz".parse::<ActivityKind>().unwrap(), ActivityKind::AiVsHuman);
        assert!(matches!(
            "chess".parse::<ActivityKind>(),
            Err(ActivityError::UnknownActivity(_))
        ));
    }

    #[test]
    fn json_uses_keys() {
        let json = serde_json::to_value(CATALOG[3]).unwrap();
        assert_eq!(json["kind"], "pattern-challenge");
        assert_eq!(json["difficulty"], "Advanced");
    }
}
