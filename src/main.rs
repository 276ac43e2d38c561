//! Axe Dodge entry point
//!
//! Native builds run a headless autopilot session and log each round.
//! Usage: `axe-dodge [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use axe_dodge::consts::FRAME_DT;
    use axe_dodge::platform::{Autopilot, LogRenderer};
    use axe_dodge::{Config, GameState, run};

    /// One minute of play at 60 Hz
    const DEMO_FRAMES: u64 = 60 * 60;

    env_logger::init();
    log::info!("Axe Dodge (headless) starting...");

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match Config::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Err(e) => {
                    log::error!("Invalid config {path}: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Failed to read {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap_or_else(|e| {
            log::warn!("Invalid seed {arg:?} ({e}), using 1");
            1
        }),
        None => 1,
    };

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Autopilot seed: {}", seed);
    let mut platform = Autopilot::new(seed, FRAME_DT, DEMO_FRAMES);
    let mut renderer = LogRenderer::new();

    let stats = run(&mut state, &mut platform, &mut renderer);
    log::info!(
        "Played {} rounds, best score {}",
        stats.rounds,
        stats.high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end; the library is the deliverable on wasm32
}
