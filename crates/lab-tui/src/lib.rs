//! Terminal UI for the AI Learning Lab.
//!
//! A ratatui interface with a home screen and one tab per activity: the
//! decision tree builder, the pattern challenge, the neural network
//! explorer, the AI vs Human quiz, and the training simulator.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
