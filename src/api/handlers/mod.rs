use crate::cache::RecordCache;
use crate::config::settings::AppConfig;
use crate::fetchers::RecordSource;
use crate::services::transformer::ResultTransformer;

pub mod pages;
pub mod results;

pub struct AppState {
    pub config: AppConfig,
    pub source: Box<dyn RecordSource>,
    pub cache: RecordCache,
    pub transformer: ResultTransformer,
}

impl AppState {
    pub fn new(config: AppConfig, source: Box<dyn RecordSource>) -> Self {
        let cache = RecordCache::new(config.scraper.cache_ttl_secs);
        let transformer = ResultTransformer::new(config.race.clone());
        Self {
            config,
            source,
            cache,
            transformer,
        }
    }
}
