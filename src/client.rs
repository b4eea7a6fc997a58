use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
use crate::error::CatalogError;
use crate::models::Series;
use crate::scrape;
use crate::transport::{HttpTransport, Transport};
use crate::xml;

/// Client for the catalog's XML API and its HTML search page.
///
/// Every operation issues its fetches sequentially and to completion before
/// returning; there is no in-flight overlap and no state shared across
/// calls.
#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    api_key: String,
    language: String,
}

impl CatalogClient {
    /// Creates a client over the default HTTP transport.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self::with_transport(api_key, Arc::new(HttpTransport::new()))
    }

    #[must_use]
    pub fn with_transport(api_key: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Creates a client from config, with its own timeout-bounded transport.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.catalog.request_timeout_seconds.into());
        let transport = HttpTransport::with_timeout(timeout)?;

        Ok(Self {
            transport: Arc::new(transport),
            base_url: config.catalog.base_url.trim_end_matches('/').to_string(),
            api_key: config.catalog.api_key.clone(),
            language: config.catalog.language.clone(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Searches the catalog by series name.
    ///
    /// Results carry no season data. Zero matches is an empty list, not an
    /// error.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Series>, CatalogError> {
        let url = format!(
            "{}/api/GetSeries.php?seriesname={}",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!("searching catalog for \"{name}\"");

        let document = self.transport.fetch(&url).await?;
        let list = xml::series_list(&document)?;
        Ok(list.series)
    }

    /// Fetches one series by its catalog id. No seasons populated.
    pub async fn get_by_id(&self, id: u64) -> Result<Series, CatalogError> {
        let url = format!(
            "{}/api/{}/series/{}/{}.xml",
            self.base_url, self.api_key, id, self.language
        );
        debug!("fetching series {id}");

        self.fetch_single(&url).await
    }

    /// Fetches one series by its IMDB cross-reference id.
    pub async fn get_by_imdb_id(&self, imdb_id: &str) -> Result<Series, CatalogError> {
        let url = format!(
            "{}/api/GetSeriesByRemoteID.php?imdbid={}",
            self.base_url,
            urlencoding::encode(imdb_id)
        );
        debug!("fetching series by imdb id {imdb_id}");

        self.fetch_single(&url).await
    }

    async fn fetch_single(&self, url: &str) -> Result<Series, CatalogError> {
        let document = self.transport.fetch(url).await?;
        let mut list = xml::series_list(&document)?;

        if list.series.len() != 1 {
            return Err(CatalogError::UnexpectedResultCount(list.series.len()));
        }

        Ok(list.series.remove(0))
    }

    /// Fetches full detail for a series and attaches its episode roster,
    /// mutating the passed series in place.
    ///
    /// The detail document embeds the series record and every episode in one
    /// payload, so the buffer is decoded twice: once as the series shape
    /// (merged over `series`, keeping any seasons already attached) and once
    /// as the episode list handed to [`Series::attach_episodes`]. Enriching
    /// a series that already has seasons appends; it never replaces.
    pub async fn enrich_series(&self, series: &mut Series) -> Result<(), CatalogError> {
        let url = format!(
            "{}/api/{}/series/{}/all/{}.xml",
            self.base_url, self.api_key, series.id, self.language
        );
        debug!("fetching full detail for series {}", series.id);

        let document = self.transport.fetch(&url).await?;
        let detail = xml::series(&document)?;
        let episodes = xml::episode_list(&document)?;

        series.merge_detail(detail);
        series.attach_episodes(episodes.episodes);
        Ok(())
    }

    /// Enriches every series in the slice, strictly in order.
    ///
    /// Fail-fast: the first error aborts the walk and is returned unchanged;
    /// entries already enriched keep their mutations and later entries are
    /// never fetched.
    pub async fn enrich_all(&self, series_list: &mut [Series]) -> Result<(), CatalogError> {
        for series in series_list.iter_mut() {
            self.enrich_series(series).await?;
        }
        Ok(())
    }

    /// Searches via the website's search page, which ranks results better
    /// than the API name search.
    ///
    /// Candidate ids are scraped from the results page, deduplicated in scan
    /// order (first occurrence wins, duplicates skipped before any fetch),
    /// and each unique id is fetched through the by-id path. A candidate
    /// whose record decodes as malformed is skipped and scanning continues;
    /// any other failure aborts the whole call. `max_results <= 0` means no
    /// cap; once the cap is reached remaining candidates are not fetched.
    /// Result order is scan order, not the page's relevance ranking.
    pub async fn search_web(
        &self,
        name: &str,
        max_results: i32,
    ) -> Result<Vec<Series>, CatalogError> {
        let url = format!(
            "{}/?string={}&searchseriesid=&tab=listseries&function=Search",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!("searching the web interface for \"{name}\"");

        let page = self.transport.fetch(&url).await?;
        let page = String::from_utf8_lossy(&page);

        let mut seen = HashSet::new();
        let mut results = Vec::new();

        for candidate in scrape::series_ids(&page) {
            let id: u64 = candidate.parse()?;

            if !seen.insert(id) {
                continue;
            }

            let series = match self.get_by_id(id).await {
                Ok(series) => series,
                Err(CatalogError::MalformedDocument(e)) => {
                    // Some linked series have no fetchable record.
                    warn!("skipping series {id}: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            results.push(series);

            if max_results > 0 && results.len() == max_results as usize {
                break;
            }
        }

        Ok(results)
    }
}
