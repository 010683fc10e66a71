mod escape;
mod stream_rewrite;

pub use escape::encode_uri;
pub use escape::escape_html;

use crate::catalog::StationSummary;
use crate::detail::ImageEntry;
use crate::detail::MediaEntry;
use crate::detail::StationDetail;

/// A playlist entry, every field already escaped for its place in the XML
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub info: String,
    pub image: String,
    pub location: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().copied().find_map(non_empty)
}

fn is_secure(url: &str) -> bool {
    url.get(..8)
        .map(|scheme| scheme.eq_ignore_ascii_case("https://"))
        .unwrap_or(false)
}

/// https AAC, then the generic stream, then plain http AAC, then the mount.
fn summary_location(station: &StationSummary) -> Option<&str> {
    let aac = non_empty(station.audio_url_aac.as_deref());
    let secure_aac = aac.filter(|url| is_secure(url));
    secure_aac
        .or_else(|| non_empty(station.audio_url.as_deref()))
        .or(aac)
        .or_else(|| non_empty(station.triton_mount.as_deref()))
}

fn detail_media(detail: &StationDetail) -> Option<&MediaEntry> {
    detail
        .media
        .iter()
        .find(|media| non_empty(media.uri.as_deref()).is_some())
}

fn image_with_role<'a>(images: &'a [ImageEntry], role: &str) -> Option<&'a str> {
    images
        .iter()
        .filter(|image| {
            image
                .image_type
                .as_deref()
                .map(|t| t.eq_ignore_ascii_case(role))
                .unwrap_or(false)
        })
        .find_map(|image| non_empty(image.uri.as_deref()))
}

fn detail_image(detail: &StationDetail) -> Option<&str> {
    image_with_role(&detail.images, "premium")
        .or_else(|| image_with_role(&detail.images, "logo"))
        .or_else(|| {
            detail
                .images
                .iter()
                .find_map(|image| non_empty(image.uri.as_deref()))
        })
}

fn detail_info(detail: &StationDetail) -> Option<&str> {
    first_non_empty(&[
        detail.description.as_deref(),
        detail.short_title.as_deref(),
        detail.summary_description.as_deref(),
    ])
}

fn build_track(
    title: Option<&str>,
    info: Option<&str>,
    image: Option<&str>,
    location: Option<&str>,
    relay_tag: Option<&str>,
) -> Option<Track> {
    let title = non_empty(title)?;
    let location = non_empty(location)?;
    let location = stream_rewrite::rewrite_relay(location.to_string(), relay_tag);
    Some(Track {
        title: escape_html(title),
        info: info.map(escape_html).unwrap_or_default(),
        image: image.map(encode_uri).unwrap_or_default(),
        location: encode_uri(&location),
    })
}

/// Turns a catalog entry into a track, `None` if it has no name or nothing
/// playable.
pub fn normalize_summary(station: &StationSummary) -> Option<Track> {
    let track = build_track(
        station.name.as_deref(),
        non_empty(station.description()),
        non_empty(station.image_url()),
        summary_location(station),
        station.station_type.as_deref(),
    );
    if track.is_none() {
        debug!("Dropping station {:?} ({:?})", station.slug, station.name);
    }
    track
}

/// Turns a resolved station into a track, `None` if it has no title or no
/// media entry with a uri.
pub fn normalize_detail(detail: &StationDetail) -> Option<Track> {
    let media = detail_media(detail);
    let track = build_track(
        detail.title.as_deref(),
        detail_info(detail),
        detail_image(detail),
        media.and_then(|m| m.uri.as_deref()),
        media.and_then(|m| m.source.as_deref()),
    );
    if track.is_none() {
        debug!("Dropping station '{}'", detail.slug);
    }
    track
}

/// Stable ordinal sort, no locale collation.
pub fn sort_tracks(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| a.title.cmp(&b.title));
}
