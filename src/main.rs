mod app;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use eframe::egui;

use cringe_detector::config::{Cli, Command, Config};
use cringe_detector::net::scorer::{Scorer, ScoringClient};

use crate::app::DetectorApp;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let client = match ScoringClient::from_config(&cli.config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("cringe-detector: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Command::Score { text }) => score_once(&client, &text),
        Some(Command::Gui) | None => run_window(&cli.config, client),
    }
}

/// Headless: score `text` and print the verdict.
fn score_once(client: &ScoringClient, text: &str) -> ExitCode {
    match client.score(text) {
        Ok(score) => {
            println!("{}", score.bucket().label());
            println!("Cringe Score: {}%", score);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error analyzing text: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_window(config: &Config, client: ScoringClient) -> ExitCode {
    log::info!(
        "Scoring against {}, textures from {}",
        client.endpoint(),
        config.assets_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Cringe or not?"),
        ..Default::default()
    };

    let scorer: Arc<dyn Scorer> = Arc::new(client);
    let config = config.clone();
    let result = eframe::run_native(
        "Cringe or not?",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(DetectorApp::new(&config, scorer)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to start window: {}", e);
            ExitCode::FAILURE
        }
    }
}
