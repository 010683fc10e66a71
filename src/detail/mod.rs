mod station_detail;

pub use station_detail::ImageEntry;
pub use station_detail::MediaEntry;
pub use station_detail::StationDetail;

use rayon::prelude::*;
use serde_json::json;
use url::Url;

use self::station_detail::DetailResponse;
use crate::catalog::StationSummary;
use crate::fetch::Fetch;
use crate::playlist_error::PlaylistError;

const API_KEY_HEADER: &str = "x-api-key";

const STATION_QUERY: &str = "query GetStation($profile: String!, $slug: String!) { \
    station(profile: $profile, slug: $slug) { \
    title shortTitle description \
    media { uri source } \
    images { uri imageType } } }";

/// Where and how station details are looked up.
#[derive(Debug, Clone)]
pub struct DetailEndpoint {
    pub url: Url,
    pub api_key: String,
    pub profile: String,
    /// Parallel lookups, 0 starts one worker per station.
    pub concurrency: usize,
}

fn station_url(endpoint: &DetailEndpoint, slug: &str) -> Url {
    let variables = json!({
        "profile": endpoint.profile,
        "slug": slug,
    });
    let mut url = endpoint.url.clone();
    url.query_pairs_mut()
        .append_pair("query", STATION_QUERY)
        .append_pair("variables", &variables.to_string());
    url
}

fn parse_station(
    body: &str,
    slug: &str,
    summary_description: Option<&str>,
) -> Result<Option<StationDetail>, PlaylistError> {
    let response: DetailResponse = serde_json::from_str(body)?;
    Ok(response
        .data
        .station
        .map(|payload| payload.into_detail(slug, summary_description)))
}

fn resolve_one<F: Fetch + ?Sized>(
    fetcher: &F,
    endpoint: &DetailEndpoint,
    summary: &StationSummary,
) -> Result<Option<StationDetail>, PlaylistError> {
    let slug = match summary.slug.as_deref() {
        Some(slug) if !slug.is_empty() => slug,
        _ => {
            debug!("No slug for station {:?}, skipping lookup", summary.name);
            return Ok(None);
        }
    };
    let url = station_url(endpoint, slug);
    let body = fetcher.fetch(url.as_str(), &[(API_KEY_HEADER, endpoint.api_key.as_str())])?;
    let detail = parse_station(&body, slug, summary.description())?;
    if detail.is_none() {
        debug!("Station '{}' is no longer listed", slug);
    }
    Ok(detail)
}

/// Looks up every summary and returns the results in input order.
///
/// All lookups run to completion before the outcome is decided, the first
/// failure in input order is returned if any of them failed.
pub fn resolve_all<F: Fetch + ?Sized>(
    fetcher: &F,
    endpoint: &DetailEndpoint,
    summaries: &[StationSummary],
) -> Result<Vec<Option<StationDetail>>, PlaylistError> {
    let threads = match endpoint.concurrency {
        0 => summaries.len().max(1),
        n => n,
    };
    trace!("Resolving {} stations (threads: {})", summaries.len(), threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|err| PlaylistError::NetworkError(err.to_string()))?;
    let results: Vec<Result<Option<StationDetail>, PlaylistError>> = pool.install(|| {
        summaries
            .par_iter()
            .map(|summary| resolve_one(fetcher, endpoint, summary))
            .collect()
    });

    let failed = results.iter().filter(|result| result.is_err()).count();
    if failed > 0 {
        error!("{}/{} station lookups failed", failed, results.len());
    }
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::FakeFetcher;

    fn endpoint() -> DetailEndpoint {
        DetailEndpoint {
            url: Url::parse("https://graph.example.com/graphql").unwrap(),
            api_key: String::from("secret"),
            profile: String::from("juke-web"),
            concurrency: 0,
        }
    }

    fn summary(slug: &str) -> StationSummary {
        serde_json::from_value(json!({
            "slug": slug,
            "name": slug.to_uppercase(),
            "metadata": {"description": format!("about {}", slug)}
        }))
        .unwrap()
    }

    fn slug_marker(slug: &str) -> String {
        format!("%22slug%22%3A%22{}%22", slug)
    }

    fn station_body(title: &str) -> String {
        json!({
            "data": {
                "station": {
                    "title": title,
                    "media": [{"uri": format!("https://stream.example.com/{}", title), "source": "icecast"}],
                    "images": null
                }
            }
        })
        .to_string()
    }

    #[test]
    fn station_url_encodes_query_and_variables() {
        let url = station_url(&endpoint(), "juke-rock");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "query");
        assert!(pairs[0].1.starts_with("query GetStation("));
        assert_eq!(pairs[1].0, "variables");
        let variables: serde_json::Value = serde_json::from_str(&pairs[1].1).unwrap();
        assert_eq!(variables, json!({"profile": "juke-web", "slug": "juke-rock"}));
    }

    #[test]
    fn parse_station_null_is_absent() {
        let detail = parse_station(r#"{"data": {"station": null}}"#, "gone", None).unwrap();
        assert_eq!(detail, None);
    }

    #[test]
    fn parse_station_carries_summary_description() {
        let detail = parse_station(&station_body("a"), "a", Some("from catalog"))
            .unwrap()
            .unwrap();
        assert_eq!(detail.slug, "a");
        assert_eq!(detail.title.as_deref(), Some("a"));
        assert_eq!(detail.summary_description.as_deref(), Some("from catalog"));
        assert_eq!(detail.media.len(), 1);
        assert!(detail.images.is_empty());
    }

    #[test]
    fn parse_station_without_data_fails() {
        let result = parse_station(r#"{"errors": [{"message": "denied"}]}"#, "a", None);
        assert!(matches!(result, Err(PlaylistError::ParseError(_))));
    }

    #[test]
    fn resolve_all_keeps_positions() {
        let fetcher = FakeFetcher::new()
            .route(&slug_marker("a"), &station_body("a"))
            .route(&slug_marker("b"), r#"{"data": {"station": null}}"#)
            .route(&slug_marker("c"), &station_body("c"));
        let summaries = vec![summary("a"), summary("b"), summary("c")];
        let details = resolve_all(&fetcher, &endpoint(), &summaries).unwrap();
        assert_eq!(details.len(), 3);
        assert_eq!(details[0].as_ref().map(|d| d.slug.as_str()), Some("a"));
        assert_eq!(details[1], None);
        assert_eq!(details[2].as_ref().map(|d| d.slug.as_str()), Some("c"));
        assert_eq!(
            details[2].as_ref().and_then(|d| d.summary_description.as_deref()),
            Some("about c")
        );
    }

    #[test]
    fn resolve_all_sends_api_key() {
        let fetcher = FakeFetcher::new().route(&slug_marker("a"), &station_body("a"));
        resolve_all(&fetcher, &endpoint(), &[summary("a")]).unwrap();
        let requests = fetcher.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1.get("x-api-key").map(String::as_str), Some("secret"));
    }

    #[test]
    fn resolve_all_fails_together() {
        let fetcher = FakeFetcher::new()
            .route(&slug_marker("a"), &station_body("a"))
            .fail(&slug_marker("b"))
            .route(&slug_marker("c"), &station_body("c"));
        let summaries = vec![summary("a"), summary("b"), summary("c")];
        let result = resolve_all(&fetcher, &endpoint(), &summaries);
        assert!(matches!(result, Err(PlaylistError::NetworkError(_))));
        // every lookup was still issued
        assert_eq!(fetcher.request_count(), 3);
    }

    #[test]
    fn resolve_all_skips_summaries_without_slug() {
        let fetcher = FakeFetcher::new();
        let nameless: StationSummary = serde_json::from_value(json!({"name": "No slug"})).unwrap();
        let details = resolve_all(&fetcher, &endpoint(), &[nameless]).unwrap();
        assert_eq!(details, vec![None]);
        assert_eq!(fetcher.request_count(), 0);
    }

    #[test]
    fn resolve_all_with_bounded_workers() {
        let fetcher = FakeFetcher::new()
            .route(&slug_marker("a"), &station_body("a"))
            .route(&slug_marker("b"), &station_body("b"));
        let mut endpoint = endpoint();
        endpoint.concurrency = 1;
        let details = resolve_all(&fetcher, &endpoint, &[summary("a"), summary("b")]).unwrap();
        assert!(details.iter().all(Option::is_some));
    }
}
