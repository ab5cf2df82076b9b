//! Result summary for the host's share/clipboard flow. Pure string
//! building; the clipboard and native share sheet stay host-side.

use crate::api::engine::GameState;
use crate::core::catalog::CategoryCatalog;

/// Human-readable result text for a finished (or ongoing) game.
pub fn format_share_text(state: &GameState, catalog: &CategoryCatalog) -> String {
    let category_name = state
        .category
        .as_ref()
        .and_then(|id| catalog.get(id))
        .map_or("Unknown", |c| c.name.as_str());

    let mut lines = vec![
        "🎯 Meeting Bingo!".to_string(),
        String::new(),
        format!("📋 {}", category_name),
    ];
    if let Some(duration) = state.duration_ms() {
        let minutes = (duration as f64 / 60_000.0).round() as i64;
        lines.push(format!("⏱️ Time to BINGO: {} min", minutes));
    }
    if let Some(word) = &state.winning_word {
        lines.push(format!("🏆 Winning word: \"{}\"", word));
    }
    lines.push(format!("📊 Squares filled: {}/25", state.filled_count));
    lines.push(String::new());
    lines.push("Play Meeting Bingo!".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::engine::GameEngine;
    use crate::core::card::GRID_SIZE;
    use crate::core::catalog::CategoryId;

    #[test]
    fn share_text_names_category_and_winning_word() {
        let mut engine = GameEngine::new(42);
        engine
            .start_game(&CategoryId::from("corporate"), 0)
            .unwrap();
        for col in 0..GRID_SIZE {
            engine.toggle_square(0, col, 120_000);
        }

        let text = format_share_text(engine.state(), engine.catalog());
        assert!(text.contains("Corporate Speak"));
        assert!(text.contains("Time to BINGO: 2 min"));
        let word = engine.state().winning_word.clone().unwrap();
        assert!(text.contains(&word));
        assert!(text.contains("6/25"));
    }

    #[test]
    fn unfinished_game_omits_duration_and_word() {
        let state = GameState::default();
        let text = format_share_text(&state, &CategoryCatalog::builtin());
        assert!(text.contains("Unknown"));
        assert!(!text.contains("Time to BINGO"));
        assert!(!text.contains("Winning word"));
    }
}
