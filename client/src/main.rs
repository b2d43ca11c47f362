mod config;
mod game_ui;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::TicTacToeSession;
use common::storage::FileKeyValueStorage;
use common::{log, logger};
use eframe::egui;

use ui::XoApp;

#[derive(Parser)]
#[command(name = "xo_pro_client")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_logger(args.use_log_prefix.then(|| "Client".to_string()));

    let config = config::get_config_manager(&args.config)
        .get_config()
        .unwrap_or_else(|e| {
            log!("Falling back to default config: {}", e);
            config::Config::default()
        });

    let session = TicTacToeSession::new(
        config.session_settings(),
        FileKeyValueStorage::new(&config.stats_dir),
        SessionRng::from_random(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_title("XO Pro"),
        ..Default::default()
    };

    eframe::run_native(
        "XO Pro",
        options,
        Box::new(|_cc| Ok(Box::new(XoApp::new(session)))),
    )?;

    log!("Client shut down");

    Ok(())
}
