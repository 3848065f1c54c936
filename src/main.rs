use std::process::ExitCode;

use minimal_webview::browser::Gtk;
use minimal_webview::{App, AppError, WindowConfig};

fn load_config() -> Result<WindowConfig, AppError> {
    match std::env::args_os().nth(1) {
        Some(path) => Ok(WindowConfig::load_from_file(path)?),
        None => Ok(WindowConfig::default()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let result = load_config().and_then(|config| {
        let app = App::new(Gtk, config);
        app.run(&mut std::io::stdout())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
