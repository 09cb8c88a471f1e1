#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::env;
use std::process::ExitCode;

use car_dodge::app::{App, LaunchOptions};
use car_dodge::constants::LOOP_TIME;
use car_dodge::platform;
use tracing::{error, info};

/// The main entry point of the application.
///
/// Installs logging, initializes SDL and every asset, then runs frames until
/// the player quits. Startup failures are logged and end the process with a
/// non-zero status.
pub fn main() -> ExitCode {
    if let Err(e) = platform::init_console() {
        eprintln!("Could not initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let options = LaunchOptions::from_args(env::args().skip(1));

    let mut app = match App::new(options) {
        Ok(app) => app,
        Err(e) => {
            error!("Could not start the game: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(loop_time = ?LOOP_TIME, muted = options.muted, "Starting game loop");
    while app.run() {}

    info!("Game loop finished");
    ExitCode::SUCCESS
}
