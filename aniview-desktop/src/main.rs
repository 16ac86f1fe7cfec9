use aniview_desktop::{app, config::Config};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("aniview_desktop", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = Config::load();
    if let Err(error) = config.save() {
        log::warn!("could not persist config: {error}");
    }
    log::info!("starting with API base URL {}", config.api_base_url);

    app::run(config)
}
