#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod app;
mod exporters;

use std::process::ExitCode;

use app::{
    options::{get_command, Options},
    runtime::Config,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    // Get exporter configuration
    let args = get_command().get_matches();
    let options = match Options::from_args(&args) {
        Ok(options) => options,
        Err(why) => {
            eprintln!("{why}");
            return ExitCode::FAILURE;
        }
    };

    // Run the app
    let app = Config::new(options);
    if let Err(why) = app.start().await {
        eprintln!("Unable to export: {why}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
