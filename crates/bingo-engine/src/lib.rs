pub mod api;
pub mod bridge;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::engine::{GameEngine, GameState};
pub use api::types::{EngineError, GameEvent, GameStatus, NearWin, WinningLine};
pub use bridge::share::format_share_text;
pub use bridge::snapshot::{state_from_json, state_to_json, STORAGE_KEY};
pub use core::card::{generate_card, BingoCard, BingoSquare, Rng, FREE_COL, FREE_ROW, GRID_SIZE};
pub use core::catalog::{Category, CategoryCatalog, CategoryId};
pub use systems::checker::{check_for_bingo, closest_to_win, count_filled};
pub use systems::detector::detect_words;
