pub mod settings;

pub use settings::{AppConfig, RaceSettings, ScraperSettings, ServerSettings};
