//! Host persistence boundary. The engine never touches storage itself:
//! the host loads/saves the whole `GameState` under a fixed key and
//! hands it back via `GameEngine::from_state`, which rehydrates the
//! filled-word index before new events are applied.

use crate::api::engine::GameState;

/// The key the host store files the snapshot under.
pub const STORAGE_KEY: &str = "meeting-bingo-game";

/// Serialize the full game state, nested card and squares included.
pub fn state_to_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Parse a snapshot previously produced by `state_to_json`.
pub fn state_from_json(json: &str) -> Result<GameState, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::engine::GameEngine;
    use crate::core::catalog::CategoryId;

    #[test]
    fn idle_state_round_trips() {
        let state = GameState::default();
        let json = state_to_json(&state).unwrap();
        assert_eq!(state_from_json(&json).unwrap(), state);
    }

    #[test]
    fn mid_game_state_round_trips_losslessly() {
        let mut engine = GameEngine::new(42);
        engine.start_game(&CategoryId::from("tech"), 1_000).unwrap();
        engine.toggle_square(0, 0, 2_000);
        let word = engine.state().card.as_ref().unwrap().words[3].clone();
        engine.process_transcript(&word, 3_000);
        engine.set_listening(true);

        let saved = engine.state().clone();
        let json = state_to_json(&saved).unwrap();
        let loaded = state_from_json(&json).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn snapshot_fields_use_camel_case() {
        let mut engine = GameEngine::new(42);
        engine
            .start_game(&CategoryId::from("corporate"), 1_000)
            .unwrap();
        let json = state_to_json(engine.state()).unwrap();
        assert!(json.contains("\"startedAt\""));
        assert!(json.contains("\"filledCount\""));
        assert!(json.contains("\"isListening\""));
        assert!(json.contains("\"isFreeSpace\""));
    }

    #[test]
    fn resumed_snapshot_plays_on() {
        let mut engine = GameEngine::new(42);
        engine
            .start_game(&CategoryId::from("startup"), 1_000)
            .unwrap();
        engine.toggle_square(1, 1, 2_000);

        let json = state_to_json(engine.state()).unwrap();
        let mut resumed = GameEngine::from_state(state_from_json(&json).unwrap(), 9);
        resumed.toggle_square(1, 2, 3_000);
        assert_eq!(resumed.state().filled_count, 3);
    }
}
