use log::warn;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct RaceSettings {
    /// Physical race length in metres; fixed per event, not derived from data
    pub race_distance: f64,
    /// Reporting distance for pace, e.g. time per 500 m
    pub pace_distance: f64,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            race_distance: 1000.0,
            pace_distance: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScraperSettings {
    pub source_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// 0 disables caching of the fetched record set
    pub cache_ttl_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            source_url: "https://results.example.com/live".to_string(),
            user_agent: "SplitLeaderboard/1.0".to_string(),
            timeout_secs: 30,
            cache_ttl_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub static_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            static_dir: "static".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub race: RaceSettings,
    pub scraper: ScraperSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    /// Defaults overridden by whatever is set in the environment.
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_parsed(&lookup, "RACE_DISTANCE", &mut config.race.race_distance);
        override_parsed(&lookup, "PACE_DISTANCE", &mut config.race.pace_distance);
        override_parsed(&lookup, "CACHE_TTL_SECS", &mut config.scraper.cache_ttl_secs);
        override_parsed(&lookup, "TIMEOUT_SECS", &mut config.scraper.timeout_secs);

        if let Some(url) = lookup("SOURCE_URL") {
            config.scraper.source_url = url;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.server.static_dir = dir;
        }

        config
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!("Ignoring invalid {}={:?}, keeping default", key, raw),
    }
}
