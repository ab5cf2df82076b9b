use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::catalog::CategoryId;

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Idle,
    Setup,
    Playing,
    Won,
}

/// One of the 12 winning combinations on the 5x5 grid:
/// 5 rows, 5 columns, main diagonal (0) and anti-diagonal (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum WinningLine {
    Row(usize),
    Col(usize),
    Diag(usize),
}

/// Advisory "one square away" signal. `needed` is always 1 today;
/// kept explicit so the host can render it without hardcoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearWin {
    pub line: WinningLine,
    pub needed: usize,
}

/// An event emitted by the engine for the presentation layer.
/// The host drains these after each call (toasts, confetti, share screen).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A square was filled automatically from a transcript fragment.
    AutoFilled { word: String, row: usize, col: usize },
    /// A line completed. Fired at most once per game.
    Won { line: WinningLine, word: String },
}

/// Errors the engine can actually produce. Everything else that looks
/// invalid (toggling while idle, transcript with no game, new-card with
/// no category) is a defined no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Start/new-card referenced a category id the catalog does not know.
    UnknownCategory(CategoryId),
    /// A category carries fewer than the 24 words a card needs.
    /// Configuration defect, not a runtime user error.
    InsufficientWords { category: CategoryId, have: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownCategory(id) => {
                write!(f, "unknown category: {}", id)
            }
            EngineError::InsufficientWords { category, have } => {
                write!(
                    f,
                    "category {} has {} words, a card needs 24",
                    category, have
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
