use std::path::PathBuf;

use simple_chart::{config::AppConfig, util::log};
use tracing::info;

use crate::{app::App, event::EventHandler};

pub mod app;
pub mod event;
pub mod ui;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load_or_default(config_path.as_deref())?;

    let log_path = log::init(&config.log_dir)?;
    info!("Logging to {}", log_path.display());

    let app = App::new(&config, config_path, EventHandler::new())?;

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
