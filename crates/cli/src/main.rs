mod config;
mod game;
mod parse;
mod ui;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config::Config;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let config = Config::parse();
    init_tracing(&config.log_level);

    if let Err(err) = ui::ui_loop(&config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
