//! Replays a scripted meeting against the engine: transcript fragments
//! auto-fill squares, a few manual clicks finish a line, and the share
//! text prints at the end.

use std::time::{SystemTime, UNIX_EPOCH};

use bingo_engine::{
    format_share_text, CategoryId, GameEngine, GameEvent, GameStatus, GRID_SIZE,
};

const SCRIPT: &[&str] = &[
    "okay everyone, quick sync before we circle back to the roadmap",
    "we don't have the bandwidth this quarter, honestly",
    "there's real synergy between the two teams if we leverage it",
    "let's not boil the ocean here",
    "can we take this offline and touch base on Friday?",
    "per my last email, the deliverable slipped a sprint",
];

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn print_card(engine: &GameEngine) {
    let Some(card) = engine.state().card.as_ref() else {
        return;
    };
    for row in &card.squares {
        let cells: Vec<String> = row
            .iter()
            .map(|sq| {
                let mark = if sq.is_filled { 'x' } else { ' ' };
                let label: String = sq.word.chars().take(12).collect();
                format!("[{mark}] {label:<12}")
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
}

fn report_events(engine: &mut GameEngine) {
    for event in engine.drain_events() {
        match event {
            GameEvent::AutoFilled { word, row, col } => {
                println!("  ✨ detected \"{word}\" at ({row}, {col})");
            }
            GameEvent::Won { line, word } => {
                println!("  🏆 BINGO on {line:?} — winning word \"{word}\"");
            }
        }
    }
}

fn main() {
    let mut engine = GameEngine::new(now_ms() as u64);
    engine.begin_setup();
    if let Err(err) = engine.start_game(&CategoryId::from("corporate"), now_ms()) {
        eprintln!("failed to start: {err}");
        return;
    }
    engine.set_listening(true);

    println!("card:");
    print_card(&engine);

    for fragment in SCRIPT {
        println!("\n🎤 {fragment}");
        engine.process_transcript(fragment, now_ms());
        report_events(&mut engine);
        if let Some(near) = engine.closest_to_win() {
            println!("  🔥 one away from BINGO on {:?}", near.line);
        }
    }

    // Click the rest of row 0 so the scripted meeting always ends.
    for col in 0..GRID_SIZE {
        if engine.state().status != GameStatus::Playing {
            break;
        }
        let filled = engine
            .state()
            .card
            .as_ref()
            .and_then(|card| card.square(0, col))
            .map_or(true, |sq| sq.is_filled);
        if !filled {
            engine.toggle_square(0, col, now_ms());
        }
    }
    report_events(&mut engine);

    println!("\nfinal card ({} filled):", engine.state().filled_count);
    print_card(&engine);
    println!("\n{}", format_share_text(engine.state(), engine.catalog()));
}
