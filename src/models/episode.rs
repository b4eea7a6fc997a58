use serde::Deserialize;

use super::PipeList;

/// One installment of a series, as served by the catalog's episode records.
///
/// Dates, ratings and the DVD ordering fields are passed through as opaque
/// strings; the catalog leaves them untyped and so do we.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Episode {
    #[serde(rename = "id")]
    pub id: u64,
    #[serde(rename = "Combined_episodenumber")]
    pub combined_episode_number: String,
    #[serde(rename = "Combined_season")]
    pub combined_season: u64,
    #[serde(rename = "DVD_chapter")]
    pub dvd_chapter: String,
    #[serde(rename = "DVD_discid")]
    pub dvd_disc_id: String,
    #[serde(rename = "DVD_episodenumber")]
    pub dvd_episode_number: String,
    #[serde(rename = "DVD_season")]
    pub dvd_season: String,
    #[serde(rename = "Director")]
    pub director: PipeList,
    #[serde(rename = "EpImgFlag")]
    pub ep_img_flag: String,
    #[serde(rename = "EpisodeName")]
    pub name: String,
    #[serde(rename = "EpisodeNumber")]
    pub episode_number: u64,
    #[serde(rename = "FirstAired")]
    pub first_aired: String,
    #[serde(rename = "GuestStars")]
    pub guest_stars: String,
    #[serde(rename = "IMDB_ID")]
    pub imdb_id: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Overview")]
    pub overview: String,
    #[serde(rename = "ProductionCode")]
    pub production_code: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "RatingCount")]
    pub rating_count: String,
    #[serde(rename = "SeasonNumber")]
    pub season_number: u64,
    #[serde(rename = "Writer")]
    pub writer: PipeList,
    #[serde(rename = "absolute_number")]
    pub absolute_number: String,
    #[serde(rename = "filename")]
    pub filename: String,
    #[serde(rename = "lastupdated")]
    pub last_updated: String,
    #[serde(rename = "seasonid")]
    pub season_id: u64,
    #[serde(rename = "seriesid")]
    pub series_id: u64,
    #[serde(rename = "thumb_added")]
    pub thumb_added: String,
    #[serde(rename = "thumb_height")]
    pub thumb_height: String,
    #[serde(rename = "thumb_width")]
    pub thumb_width: String,
}

/// Wire container for a batch of episode records. Only ever used as a decode
/// target; callers take `episodes` and drop the container.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeList {
    #[serde(rename = "Episode")]
    pub episodes: Vec<Episode>,
}
