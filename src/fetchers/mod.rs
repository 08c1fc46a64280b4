pub mod file_source;
pub mod results_page;

pub use file_source::FileSource;
pub use results_page::ResultsPageScraper;

use async_trait::async_trait;

use crate::domain::RawSplitRecord;
use crate::errors::ServiceError;

/// Anything that can hand the transformer a fresh set of provider records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError>;

    /// Where the records come from, for logging.
    fn describe(&self) -> String;
}
