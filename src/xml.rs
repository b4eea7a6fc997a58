//! Shape-targeted decoding of catalog XML documents.
//!
//! Decoding is tag-driven: known tags populate fields, unknown tags are
//! ignored, and a missing tag leaves its field at the zero value. A buffer
//! may be decoded under more than one shape; the detail endpoint serves the
//! series record and its episode roster in a single document, and callers
//! decode that buffer twice.

use quick_xml::DeError;
use serde::Deserialize;

use crate::models::{EpisodeList, Series, SeriesList};

pub fn series_list(document: &[u8]) -> Result<SeriesList, DeError> {
    quick_xml::de::from_reader(document)
}

pub fn episode_list(document: &[u8]) -> Result<EpisodeList, DeError> {
    quick_xml::de::from_reader(document)
}

/// Decodes the single `Series` child of the document root. A document with
/// no `Series` child yields the zero-value record; absence is not an error.
pub fn series(document: &[u8]) -> Result<Series, DeError> {
    let document: SeriesDocument = quick_xml::de::from_reader(document)?;
    Ok(document.series.unwrap_or_default())
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct SeriesDocument {
    #[serde(rename = "Series")]
    series: Option<Series>,
}
