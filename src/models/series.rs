use serde::Deserialize;
use std::collections::BTreeMap;

use super::{Episode, PipeList};

/// A TV show record.
///
/// Search and by-id lookups produce a series with an empty `seasons` map;
/// only a detail fetch ([`crate::client::CatalogClient::enrich_series`])
/// populates it. All descriptive scalars are opaque pass-through strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Series {
    #[serde(rename = "id")]
    pub id: u64,
    #[serde(rename = "Actors")]
    pub actors: PipeList,
    #[serde(rename = "Airs_DayOfWeek")]
    pub airs_day_of_week: String,
    #[serde(rename = "Airs_Time")]
    pub airs_time: String,
    #[serde(rename = "ContentRating")]
    pub content_rating: String,
    #[serde(rename = "FirstAired")]
    pub first_aired: String,
    #[serde(rename = "Genre")]
    pub genre: PipeList,
    #[serde(rename = "IMDB_ID")]
    pub imdb_id: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Network")]
    pub network: String,
    #[serde(rename = "NetworkID")]
    pub network_id: String,
    #[serde(rename = "Overview")]
    pub overview: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "RatingCount")]
    pub rating_count: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    /// Legacy string alias for the numeric id, served as its own tag.
    #[serde(rename = "SeriesID")]
    pub series_id: String,
    #[serde(rename = "SeriesName")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "added")]
    pub added: String,
    #[serde(rename = "addedBy")]
    pub added_by: String,
    #[serde(rename = "banner")]
    pub banner: String,
    #[serde(rename = "fanart")]
    pub fanart: String,
    #[serde(rename = "lastupdated")]
    pub last_updated: String,
    #[serde(rename = "poster")]
    pub poster: String,
    #[serde(rename = "zap2it_id")]
    pub zap2it_id: String,

    /// Season number -> episodes in decode order. Never decoded from the
    /// wire; populated only by a detail fetch.
    #[serde(skip)]
    pub seasons: BTreeMap<u64, Vec<Episode>>,
}

impl Series {
    /// Groups a flat episode list into `seasons`, keyed by season number,
    /// appending in input order.
    ///
    /// Append-only: attaching the same list twice leaves every episode in
    /// its season twice. Callers wanting a fresh roster clear `seasons`
    /// first.
    pub fn attach_episodes(&mut self, episodes: Vec<Episode>) {
        for episode in episodes {
            self.seasons
                .entry(episode.season_number)
                .or_default()
                .push(episode);
        }
    }

    /// Overwrites the wire-decoded fields with a freshly decoded detail
    /// record while keeping the seasons map already attached to `self`.
    pub(crate) fn merge_detail(&mut self, detail: Self) {
        let seasons = std::mem::take(&mut self.seasons);
        *self = detail;
        self.seasons = seasons;
    }

    /// Total episode count across all seasons.
    #[must_use]
    pub fn episode_count(&self) -> usize {
        self.seasons.values().map(Vec::len).sum()
    }
}

/// Wire container for a batch of series records, as returned by the search
/// endpoints. Decode target only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeriesList {
    #[serde(rename = "Series")]
    pub series: Vec<Series>,
}
