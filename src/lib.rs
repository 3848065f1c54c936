pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod window;

pub use app::App;
pub use config::WindowConfig;
pub use error::AppError;
