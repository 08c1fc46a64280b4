use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use regex::Regex;
use scraper::{Html, Selector};

use super::RecordSource;
use crate::config::ScraperSettings;
use crate::domain::RawSplitRecord;
use crate::errors::ServiceError;
use crate::http::PageClient;

/// Pulls the results array the provider embeds in a `<script>` tag of its live page
pub struct ResultsPageScraper {
    client: PageClient,
    url: String,
    payload_regex: Regex,
}

impl ResultsPageScraper {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = PageClient::new(&settings.user_agent, settings.timeout_secs)?;
        let payload_regex = Self::compile_regex()?;

        Ok(Self {
            client,
            url: settings.source_url.clone(),
            payload_regex,
        })
    }

    fn compile_regex() -> Result<Regex> {
        // An array of objects assigned to something: `var data = [{...}, ...];`
        Regex::new(r"(?s)=\s*(\[\s*\{.*?\}\s*\])\s*(?:;|$)")
            .context("Failed to compile payload regex")
    }

    /// Find the first embedded array that parses as provider records.
    pub fn extract_records(&self, html: &str) -> Result<Vec<RawSplitRecord>, ServiceError> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("script")
            .map_err(|e| ServiceError::UnexpectedTransform(format!("script selector: {e:?}")))?;

        for (index, script) in document.select(&selector).enumerate() {
            let body = script.text().collect::<String>();
            if let Some(records) = self.parse_script(index, &body) {
                return Ok(records);
            }
        }

        Err(ServiceError::MissingInput(format!(
            "no embedded results array on {}",
            self.url
        )))
    }

    fn parse_script(&self, index: usize, body: &str) -> Option<Vec<RawSplitRecord>> {
        for captures in self.payload_regex.captures_iter(body) {
            let Some(candidate) = captures.get(1) else {
                continue;
            };

            match serde_json::from_str::<Vec<RawSplitRecord>>(candidate.as_str()) {
                Ok(records) => {
                    debug!("Script #{} holds {} records", index, records.len());
                    return Some(records);
                }
                Err(e) => {
                    warn!("Skipping unparseable array in script #{}: {}", index, e);
                }
            }
        }
        None
    }
}

#[async_trait]
impl RecordSource for ResultsPageScraper {
    async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError> {
        info!("Fetching results page {}", self.url);

        let html = self
            .client
            .get_text(&self.url)
            .await
            .map_err(|e| ServiceError::upstream(&self.url, format!("{e:#}")))?;

        let records = self.extract_records(&html)?;
        info!("  → Extracted {} records", records.len());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
