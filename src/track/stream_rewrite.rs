use once_cell::sync::Lazy;
use regex::Regex;

/// Source tag of stations relayed through StreamTheWorld.
pub const RELAY_TYPE: &str = "triton";

pub const RELAY_REDIRECT: &str = "https://playerservices.streamtheworld.com/api/livestream-redirect";

/// Numbered relay hosts come and go, the redirect endpoint does not.
pub static RELAY_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://\d+\.live\.streamtheworld\.com").expect("relay host pattern is valid")
});

/// Replaces the first match of `pattern` with `replacement`, the rest of
/// the location is kept.
pub fn rewrite_location(location: &str, pattern: &Regex, replacement: &str) -> String {
    pattern
        .replacen(location, 1, regex::NoExpand(replacement))
        .into_owned()
}

pub fn is_relay(tag: Option<&str>) -> bool {
    tag.map(|t| t.eq_ignore_ascii_case(RELAY_TYPE))
        .unwrap_or(false)
}

/// Points relay stations at the stable redirect endpoint.
pub fn rewrite_relay(location: String, tag: Option<&str>) -> String {
    if is_relay(tag) && RELAY_HOST.is_match(&location) {
        let rewritten = rewrite_location(&location, &RELAY_HOST, RELAY_REDIRECT);
        trace!("Relay rewrite {} -> {}", location, rewritten);
        rewritten
    } else {
        location
    }
}
