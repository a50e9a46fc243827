use clap::Parser;
use zikr::cli::Cli;
use zikr::io::{load_config, resolve_config_path};
use zikr::model::Config;

fn main() {
    let cli = Cli::parse();

    let config = match cli.config.clone().or_else(resolve_config_path) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Err(e) = zikr::tui::run(config, &cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
