use std::time::Duration;

use reqwest::header::USER_AGENT;

use crate::playlist_error::PlaylistError;

/// Performs a single GET request and hands back the body as text.
///
/// The status code is not inspected, a 404 page is returned like any
/// other body and left to the JSON parser to reject.
pub trait Fetch: Sync {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, PlaylistError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    useragent: String,
}

impl HttpFetcher {
    pub fn new(useragent: &str, timeout: Option<Duration>) -> Result<Self, PlaylistError> {
        // the blocking client defaults to 30 seconds, unset means wait forever
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(HttpFetcher {
            client,
            useragent: useragent.to_string(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, PlaylistError> {
        trace!("GET {}", url);
        let mut request = self
            .client
            .get(url)
            .header(USER_AGENT, self.useragent.clone());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send()?;
        debug!("GET {} -> {}", url, response.status());
        Ok(response.text()?)
    }
}
