//! Headless demo runner
//!
//! Drives the simulation with a scripted flipper pattern and logs the
//! outcome. Useful for smoke-testing physics changes without a renderer:
//!
//! ```text
//! RUST_LOG=info cargo run -- [seed] [frames]
//! ```

use pinball_core::sim::{GameEvent, GameState, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xDEAD_BEEF);
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    log::info!("starting headless run: seed={seed} frames={frames}");
    let mut state = GameState::new(seed);
    let mut games = 0u32;
    let mut best_score = 0u64;

    for frame in 0..frames {
        // Scripted input: flap both flippers for 20 frames out of every 90,
        // roughly what a player mashing both buttons looks like
        let flap = frame % 90 < 20;
        state.set_left_flipper(flap);
        state.set_right_flipper(flap);

        if let Some(GameEvent::GameOver { score }) = tick(&mut state) {
            games += 1;
            best_score = best_score.max(score);
            state.trigger_reset();
        }
    }

    log::info!(
        "run complete: {} games finished, best score {}, last score {}",
        games,
        best_score,
        state.score()
    );
    println!("games: {games}  best: {best_score}");
}
