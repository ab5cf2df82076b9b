use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::types::{EngineError, GameEvent, GameStatus, NearWin, WinningLine};
use crate::core::card::{generate_card, BingoCard, Rng};
use crate::core::catalog::{CategoryCatalog, CategoryId};
use crate::systems::{checker, detector};

/// The authoritative game state. An owned value type: everything here
/// round-trips through the host's persistence store (see `bridge`).
///
/// `filled_count` is a derived cache recomputed from the grid after
/// every mutation, never hand-incremented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub status: GameStatus,
    pub category: Option<CategoryId>,
    pub card: Option<BingoCard>,
    pub is_listening: bool,
    pub started_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub winning_line: Option<WinningLine>,
    pub winning_word: Option<String>,
    pub filled_count: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            status: GameStatus::Idle,
            category: None,
            card: None,
            is_listening: false,
            started_at: None,
            completed_at: None,
            winning_line: None,
            winning_word: None,
            filled_count: 0,
        }
    }
}

impl GameState {
    /// Milliseconds from start to win, once both stamps exist.
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

/// The state-transition layer. Owns the game state, the category
/// catalog, the card RNG, and the derived filled-word index.
///
/// Single-threaded and event-driven: every entry point is a synchronous
/// reducer over one discrete external event (a click, a finalized
/// transcript fragment). Hosts that parallelize transcript delivery
/// must serialize calls before they reach the engine. Timestamps are
/// host-supplied; the engine never reads a wall clock.
///
/// Outbound notifications (auto-fills, the win) accumulate in an event
/// queue the presentation layer drains after each call.
pub struct GameEngine {
    catalog: CategoryCatalog,
    state: GameState,
    /// Lower-cased canonical words currently filled on the card.
    /// Derived index only — rebuildable from the card at any time via
    /// `rehydrate_filled_words`, and never persisted.
    filled_words: HashSet<String>,
    events: Vec<GameEvent>,
    rng: Rng,
}

impl GameEngine {
    /// Engine over the builtin category packs.
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(CategoryCatalog::builtin(), seed)
    }

    pub fn with_catalog(catalog: CategoryCatalog, seed: u64) -> Self {
        Self {
            catalog,
            state: GameState::default(),
            filled_words: HashSet::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    /// Resume a game loaded from the host's store. Rebuilds the
    /// filled-word index before any new event is applied.
    pub fn from_state(state: GameState, seed: u64) -> Self {
        let mut engine = Self::new(seed);
        engine.restore(state);
        engine
    }

    /// Replace the current state with a loaded one and rehydrate.
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
        self.rehydrate_filled_words();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Landing page / play-again path: show the category picker.
    pub fn begin_setup(&mut self) {
        self.state.status = GameStatus::Setup;
    }

    /// Start a fresh game on `category_id`: generate a card, reset the
    /// filled-word index (the free space contributes no word), and move
    /// to Playing with only the free space filled.
    pub fn start_game(&mut self, category_id: &CategoryId, now_ms: i64) -> Result<(), EngineError> {
        let category = self
            .catalog
            .get(category_id)
            .ok_or_else(|| EngineError::UnknownCategory(category_id.clone()))?;
        let card = generate_card(category, &mut self.rng)?;

        self.filled_words.clear();
        self.state = GameState {
            status: GameStatus::Playing,
            category: Some(category_id.clone()),
            card: Some(card),
            started_at: Some(now_ms),
            filled_count: 1,
            ..GameState::default()
        };
        log::info!("game started: {}", category_id);
        Ok(())
    }

    /// Deal a new card for the already-selected category, discarding
    /// the current one. Silent no-op when no category is selected.
    pub fn new_card(&mut self, now_ms: i64) -> Result<(), EngineError> {
        match self.state.category.clone() {
            Some(category_id) => self.start_game(&category_id, now_ms),
            None => Ok(()),
        }
    }

    /// Manually flip a square. No-op unless Playing, in bounds, and not
    /// the free space. Manual fills clear the auto flag; unfills evict
    /// the word from the index so it can be detected again (the index
    /// mirrors current fill state, not history).
    pub fn toggle_square(&mut self, row: usize, col: usize, now_ms: i64) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        let Some(card) = self.state.card.as_mut() else {
            return;
        };
        let Some(square) = card.square_mut(row, col) else {
            return;
        };
        if square.is_free_space {
            return;
        }

        let key = square.word.to_lowercase();
        if square.is_filled {
            square.is_filled = false;
            square.is_auto_filled = false;
            square.filled_at = None;
            self.filled_words.remove(&key);
        } else {
            square.is_filled = true;
            square.is_auto_filled = false;
            square.filled_at = Some(now_ms);
            self.filled_words.insert(key);
        }

        self.state.filled_count = checker::count_filled(card);
        self.check_win(now_ms);
    }

    /// Feed one finalized transcript fragment. No-op unless Playing.
    /// Newly detected words auto-fill their squares; zero detections
    /// leave the state untouched. Fragments are applied strictly in
    /// call order, each seeing the index as left by the previous one.
    pub fn process_transcript(&mut self, fragment: &str, now_ms: i64) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        let empty = std::collections::HashMap::new();
        let aliases = self
            .state
            .category
            .as_ref()
            .and_then(|id| self.catalog.get(id))
            .map_or(&empty, |c| &c.aliases);
        let Some(card) = self.state.card.as_mut() else {
            return;
        };

        let detected = detector::detect_words(fragment, &card.words, aliases, &self.filled_words);
        if detected.is_empty() {
            return;
        }
        log::debug!("detected {} word(s) in fragment", detected.len());

        for word in &detected {
            for (row, cells) in card.squares.iter_mut().enumerate() {
                for (col, square) in cells.iter_mut().enumerate() {
                    if square.is_free_space || square.is_filled || square.word != *word {
                        continue;
                    }
                    square.is_filled = true;
                    square.is_auto_filled = true;
                    square.filled_at = Some(now_ms);
                    self.filled_words.insert(square.word.to_lowercase());
                    self.events.push(GameEvent::AutoFilled {
                        word: square.word.clone(),
                        row,
                        col,
                    });
                }
            }
        }

        self.state.filled_count = checker::count_filled(card);
        self.check_win(now_ms);
    }

    /// Display flag only; does not touch card state.
    pub fn set_listening(&mut self, listening: bool) {
        self.state.is_listening = listening;
    }

    /// Back to the fully idle state: card, category, and index gone.
    pub fn reset_game(&mut self) {
        self.filled_words.clear();
        self.state = GameState::default();
    }

    /// Advisory "one away" query over the current card.
    pub fn closest_to_win(&self) -> Option<NearWin> {
        self.state.card.as_ref().and_then(checker::closest_to_win)
    }

    /// Rebuild the filled-word index from the card: every filled,
    /// non-free square contributes its lower-cased word. Required after
    /// resuming a persisted game, since the index is not persisted.
    pub fn rehydrate_filled_words(&mut self) {
        self.filled_words.clear();
        if let Some(card) = self.state.card.as_ref() {
            for (_, _, square) in card.iter_squares() {
                if square.is_filled && !square.is_free_space {
                    self.filled_words.insert(square.word.to_lowercase());
                }
            }
        }
    }

    /// Shared post-mutation win check. Latched: only fires while
    /// Playing, and Won blocks all further card mutation, so a second
    /// win event for the same game is impossible.
    fn check_win(&mut self, now_ms: i64) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        let Some(card) = self.state.card.as_ref() else {
            return;
        };
        let Some(line) = checker::check_for_bingo(card) else {
            return;
        };

        let word = latest_fill_on_line(card, line).unwrap_or_default();
        self.state.status = GameStatus::Won;
        self.state.completed_at = Some(now_ms);
        self.state.winning_line = Some(line);
        self.state.winning_word = Some(word.clone());
        self.state.is_listening = false;
        log::info!("bingo on {:?} with \"{}\"", line, word);
        self.events.push(GameEvent::Won { line, word });
    }
}

/// The word that completed a line: the most recently filled non-free
/// square on it (free space and ties resolved by grid order).
fn latest_fill_on_line(card: &BingoCard, line: WinningLine) -> Option<String> {
    checker::line_cells(line)
        .iter()
        .filter_map(|&(row, col)| card.square(row, col))
        .filter(|sq| !sq.is_free_space)
        .max_by_key(|sq| sq.filled_at.unwrap_or(i64::MIN))
        .map(|sq| sq.word.clone())
}
