//! Main application entry point.

use clap::Parser;

fn main() {
    env_logger::init();
    log::info!("Starting GateInk");

    let cli = gateink_app::Cli::parse();
    if let Err(e) = gateink_app::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
