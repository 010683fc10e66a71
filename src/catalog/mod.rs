mod station_summary;

pub use station_summary::StationSummary;

use chrono::Utc;
use url::Url;

use crate::fetch::Fetch;
use crate::playlist_error::PlaylistError;

/// Query parameter appended to every catalog request so caches in between
/// never answer with an old catalog.
const CACHE_BUSTER: &str = "preventCache";

fn cache_busted_url(base_url: &Url, millis: i64) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair(CACHE_BUSTER, &millis.to_string());
    url
}

/// Stations of one catalog download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub stations: Vec<StationSummary>,
    /// Array entries that could not be read as a station at all.
    pub rejected: usize,
}

impl Catalog {
    pub fn total(&self) -> usize {
        self.stations.len() + self.rejected
    }
}

fn parse_catalog(body: &str) -> Result<Catalog, PlaylistError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => {
            return Err(PlaylistError::ParseError(String::from(
                "station catalog is not a json array",
            )));
        }
    };
    let mut catalog = Catalog::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<StationSummary>(entry) {
            Ok(station) => catalog.stations.push(station),
            Err(err) => {
                debug!("Dropping catalog entry {}: {}", index, err);
                catalog.rejected += 1;
            }
        }
    }
    Ok(catalog)
}

pub fn load_catalog<F: Fetch + ?Sized>(
    fetcher: &F,
    base_url: &Url,
) -> Result<Catalog, PlaylistError> {
    let url = cache_busted_url(base_url, Utc::now().timestamp_millis());
    debug!("load_catalog({})", url);
    let body = fetcher.fetch(url.as_str(), &[])?;
    let catalog = parse_catalog(&body)?;
    info!("Catalog contains {} stations", catalog.total());
    if catalog.rejected > 0 {
        warn!("Catalog contains {} unreadable entries", catalog.rejected);
    }
    Ok(catalog)
}
