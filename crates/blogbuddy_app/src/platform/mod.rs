mod app;
mod config;
mod effects;
pub mod logging;
mod report;

pub use app::run_app;
