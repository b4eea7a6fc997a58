//! Behavior tests for the catalog client, driven through a scripted
//! transport so no network is involved.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tvdb::models::Series;
use tvdb::{CatalogClient, CatalogError, Transport, TransportError};

/// Replays a queue of canned responses and records every requested URL.
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<Vec<u8>, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {url}"))
    }
}

fn client(transport: Arc<ScriptedTransport>) -> CatalogClient {
    CatalogClient::with_transport("2B8A3C6F", transport).with_base_url("http://catalog.test")
}

fn transport_failure(url: &str) -> TransportError {
    TransportError::Status {
        status: 503,
        url: url.to_string(),
    }
}

fn search_document(entries: &[(u64, &str)]) -> Vec<u8> {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<Data>\n");
    for (id, name) in entries {
        doc.push_str(&format!(
            "<Series><id>{id}</id><SeriesName>{name}</SeriesName><Network>FOX</Network></Series>\n"
        ));
    }
    doc.push_str("</Data>");
    doc.into_bytes()
}

fn detail_document(id: u64, name: &str, episodes: &[(u64, u64, u64, &str)]) -> Vec<u8> {
    let mut doc = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<Data>\n\
         <Series><id>{id}</id><SeriesName>{name}</SeriesName>\
         <Actors>|Dan Castellaneta|Julie Kavner|</Actors></Series>\n"
    );
    for (episode_id, season, number, title) in episodes {
        doc.push_str(&format!(
            "<Episode><id>{episode_id}</id><SeasonNumber>{season}</SeasonNumber>\
             <EpisodeNumber>{number}</EpisodeNumber><EpisodeName>{title}</EpisodeName>\
             <seriesid>{id}</seriesid></Episode>\n"
        ));
    }
    doc.push_str("</Data>");
    doc.into_bytes()
}

fn search_page(ids: &[u64]) -> Vec<u8> {
    let mut page = String::from("<html><body><table>");
    for id in ids {
        page.push_str(&format!(
            "<tr><td><a href=\"/?tab=series&amp;id={id}&amp;lid=7\">match</a></td></tr>"
        ));
    }
    page.push_str("</table></body></html>");
    page.into_bytes()
}

#[tokio::test]
async fn get_by_id_returns_the_single_series() {
    let transport = ScriptedTransport::new(vec![Ok(search_document(&[(71663, "The Simpsons")]))]);
    let client = client(transport.clone());

    let series = client.get_by_id(71663).await.unwrap();

    assert_eq!(series.id, 71663);
    assert_eq!(series.name, "The Simpsons");
    assert!(series.seasons.is_empty());
    assert_eq!(
        transport.requests(),
        vec!["http://catalog.test/api/2B8A3C6F/series/71663/en.xml"]
    );
}

#[tokio::test]
async fn get_by_id_rejects_zero_and_multiple_results() {
    let transport = ScriptedTransport::new(vec![
        Ok(search_document(&[])),
        Ok(search_document(&[(1, "One"), (2, "Two")])),
    ]);
    let client = client(transport);

    let err = client.get_by_id(5).await.unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedResultCount(0)));

    let err = client.get_by_id(5).await.unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedResultCount(2)));
}

#[tokio::test]
async fn get_by_imdb_id_uses_the_remote_id_endpoint() {
    let transport = ScriptedTransport::new(vec![Ok(search_document(&[(71663, "The Simpsons")]))]);
    let client = client(transport.clone());

    let series = client.get_by_imdb_id("tt0096697").await.unwrap();

    assert_eq!(series.id, 71663);
    assert_eq!(
        transport.requests(),
        vec!["http://catalog.test/api/GetSeriesByRemoteID.php?imdbid=tt0096697"]
    );
}

#[tokio::test]
async fn search_by_name_returns_matches_in_order_and_encodes_the_query() {
    let transport = ScriptedTransport::new(vec![Ok(search_document(&[
        (71663, "The Simpsons"),
        (79349, "Dexter"),
    ]))]);
    let client = client(transport.clone());

    let results = client.search_by_name("the simpsons").await.unwrap();

    let ids: Vec<u64> = results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![71663, 79349]);
    assert!(results.iter().all(|s| s.seasons.is_empty()));
    assert_eq!(
        transport.requests(),
        vec!["http://catalog.test/api/GetSeries.php?seriesname=the%20simpsons"]
    );
}

#[tokio::test]
async fn search_by_name_with_no_matches_is_ok_and_empty() {
    let transport = ScriptedTransport::new(vec![Ok(b"<Data></Data>".to_vec())]);
    let client = client(transport);

    let results = client.search_by_name("xyz-no-such-show").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_by_name_surfaces_malformed_documents() {
    let transport = ScriptedTransport::new(vec![Ok(b"<Data><Series><id>71663".to_vec())]);
    let client = client(transport);

    let err = client.search_by_name("xyz-no-such-show").await.unwrap_err();
    assert!(matches!(err, CatalogError::MalformedDocument(_)));
}

#[tokio::test]
async fn enrich_series_attaches_episodes_grouped_by_season() {
    let detail = detail_document(
        71663,
        "The Simpsons",
        &[
            (101, 1, 1, "Simpsons Roasting on an Open Fire"),
            (201, 2, 1, "Bart Gets an F"),
            (102, 1, 2, "Bart the Genius"),
        ],
    );
    let transport = ScriptedTransport::new(vec![Ok(detail)]);
    let client = client(transport.clone());

    let mut series = Series {
        id: 71663,
        ..Series::default()
    };
    client.enrich_series(&mut series).await.unwrap();

    assert_eq!(series.name, "The Simpsons");
    assert_eq!(series.actors.0, vec!["Dan Castellaneta", "Julie Kavner"]);
    assert_eq!(series.seasons.len(), 2);
    assert_eq!(series.episode_count(), 3);

    let season_one: Vec<u64> = series.seasons[&1].iter().map(|e| e.id).collect();
    assert_eq!(season_one, vec![101, 102]);

    assert_eq!(
        transport.requests(),
        vec!["http://catalog.test/api/2B8A3C6F/series/71663/all/en.xml"]
    );
}

#[tokio::test]
async fn enrich_series_twice_appends_every_episode_twice() {
    let detail = detail_document(71663, "The Simpsons", &[(101, 1, 1, "Pilot")]);
    let transport = ScriptedTransport::new(vec![Ok(detail.clone()), Ok(detail)]);
    let client = client(transport);

    let mut series = Series {
        id: 71663,
        ..Series::default()
    };
    client.enrich_series(&mut series).await.unwrap();
    client.enrich_series(&mut series).await.unwrap();

    assert_eq!(series.seasons[&1].len(), 2);
    assert_eq!(series.seasons[&1][0].id, 101);
    assert_eq!(series.seasons[&1][1].id, 101);
}

#[tokio::test]
async fn enrich_all_aborts_on_first_failure_and_keeps_earlier_mutations() {
    let transport = ScriptedTransport::new(vec![
        Ok(detail_document(1, "First", &[(11, 1, 1, "Pilot")])),
        Err(transport_failure("http://catalog.test/api/2B8A3C6F/series/2/all/en.xml")),
        Ok(detail_document(3, "Third", &[(31, 1, 1, "Pilot")])),
    ]);
    let client = client(transport.clone());

    let mut list = vec![
        Series { id: 1, ..Series::default() },
        Series { id: 2, ..Series::default() },
        Series { id: 3, ..Series::default() },
    ];

    let err = client.enrich_all(&mut list).await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));

    // The third series was never fetched; the first keeps its enrichment.
    assert_eq!(transport.requests().len(), 2);
    assert_eq!(list[0].name, "First");
    assert_eq!(list[0].episode_count(), 1);
    assert!(list[1].seasons.is_empty());
    assert!(list[2].seasons.is_empty());
}

#[tokio::test]
async fn search_web_dedups_in_scan_order_and_stops_at_the_cap() {
    let transport = ScriptedTransport::new(vec![
        Ok(search_page(&[71663, 71663, 79349])),
        Ok(search_document(&[(71663, "The Simpsons")])),
        Ok(search_document(&[(79349, "Dexter")])),
    ]);
    let client = client(transport.clone());

    let results = client.search_web("simpsons", 2).await.unwrap();

    let ids: Vec<u64> = results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![71663, 79349]);

    // One page fetch plus exactly one detail fetch per unique id.
    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[1],
        "http://catalog.test/api/2B8A3C6F/series/71663/en.xml"
    );
    assert_eq!(
        requests[2],
        "http://catalog.test/api/2B8A3C6F/series/79349/en.xml"
    );
}

#[tokio::test]
async fn search_web_cap_stops_fetching_remaining_candidates() {
    let transport = ScriptedTransport::new(vec![
        Ok(search_page(&[1, 2, 3])),
        Ok(search_document(&[(1, "One")])),
    ]);
    let client = client(transport.clone());

    let results = client.search_web("one", 1).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn search_web_zero_cap_means_no_cap() {
    let transport = ScriptedTransport::new(vec![
        Ok(search_page(&[1, 2, 3])),
        Ok(search_document(&[(1, "One")])),
        Ok(search_document(&[(2, "Two")])),
        Ok(search_document(&[(3, "Three")])),
    ]);
    let client = client(transport);

    let results = client.search_web("anything", 0).await.unwrap();
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn search_web_skips_candidates_with_malformed_records() {
    let transport = ScriptedTransport::new(vec![
        Ok(search_page(&[1, 2])),
        Ok(b"<html><body>not a catalog document".to_vec()),
        Ok(search_document(&[(2, "Two")])),
    ]);
    let client = client(transport.clone());

    let results = client.search_web("two", 0).await.unwrap();

    let ids: Vec<u64> = results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn search_web_aborts_on_any_other_candidate_failure() {
    let transport = ScriptedTransport::new(vec![
        Ok(search_page(&[1, 2])),
        Err(transport_failure("http://catalog.test/api/2B8A3C6F/series/1/en.xml")),
    ]);
    let client = client(transport.clone());

    let err = client.search_web("two", 0).await.unwrap_err();

    assert!(matches!(err, CatalogError::Transport(_)));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn search_web_with_no_anchors_is_ok_and_empty() {
    let transport = ScriptedTransport::new(vec![Ok(b"<html><body>nothing here</body></html>".to_vec())]);
    let client = client(transport);

    let results = client.search_web("nothing", 0).await.unwrap();
    assert!(results.is_empty());
}
