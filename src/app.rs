use std::io::Write;

use crate::config::WindowConfig;
use crate::error::AppError;
use crate::window::{Toolkit, WindowGuard};

pub const GREETING: &str = "Hello, World";

pub struct App<T: Toolkit> {
    toolkit: T,
    config: WindowConfig,
}

impl<T: Toolkit> App<T> {
    pub fn new(toolkit: T, config: WindowConfig) -> Self {
        App { toolkit, config }
    }

    /// Greets on `out`, opens the window, and blocks until it is closed.
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        self.config.validate()?;
        writeln!(out, "{}", GREETING)?;
        out.flush()?;

        let config = &self.config;
        log::info!("Creating web view (debug: {})", config.debug);
        let mut window = WindowGuard::new(self.toolkit.create(config.debug)?);

        window.set_title(&config.title);
        window.set_size(config.width, config.height, config.resize_hint);
        window.navigate(&config.url);

        log::info!("Entering run loop for {}", config.url);
        window.run();
        log::info!("Run loop finished");
        Ok(())
    }
}
