// main.rs - Window shell for the animated Game of Life board

use eframe::egui;
use life_core::{BoardConfig, GridEngine};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod ui;

use ui::LifeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BoardConfig::default();
    let seed = board_seed();
    info!("Seeding board with {}", seed);

    let engine = GridEngine::new(&config, &mut StdRng::seed_from_u64(seed))?;
    let app = LifeApp::new(engine);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height + ui::STATUS_BAR_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;

    info!("Window closed");
    Ok(())
}

/// `LIFE_SEED` replays a board; otherwise every run starts fresh
fn board_seed() -> u64 {
    match std::env::var("LIFE_SEED") {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("LIFE_SEED={:?} is not a u64, using a random seed", value);
            rand::random()
        }),
        Err(_) => rand::random(),
    }
}
