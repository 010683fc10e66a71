use std::path::PathBuf;

use chrono::Utc;

use crate::catalog;
use crate::config::Config;
use crate::detail;
use crate::fetch::Fetch;
use crate::playlist::{self, Playlist};
use crate::playlist_error::PlaylistError;
use crate::track::{self, Track};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub tracks: usize,
    /// Catalog entries that produced no track: unreadable, delisted or
    /// unplayable.
    pub skipped: usize,
}

fn collect_tracks<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &Config,
) -> Result<(Vec<Track>, usize), PlaylistError> {
    let catalog = catalog::load_catalog(fetcher, &config.catalog_url)?;
    let total = catalog.total();
    let stations = catalog.stations;
    let mut tracks: Vec<Track> = match config.details {
        Some(ref endpoint) => detail::resolve_all(fetcher, endpoint, &stations)?
            .iter()
            .flatten()
            .filter_map(track::normalize_detail)
            .collect(),
        None => stations.iter().filter_map(track::normalize_summary).collect(),
    };
    track::sort_tracks(&mut tracks);
    let skipped = total - tracks.len();
    Ok((tracks, skipped))
}

/// Fetches, normalizes, renders and writes the playlist.
///
/// Nothing is written unless every stage before the write succeeded.
pub fn run<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Result<RunSummary, PlaylistError> {
    let (tracks, skipped) = collect_tracks(fetcher, config)?;
    if skipped > 0 {
        info!("Skipped {} catalog entries without a playable stream", skipped);
    }
    let list = Playlist::new(&config.playlist, tracks, Utc::now());
    let document = list.serialize_to_xspf();
    playlist::write_playlist(&config.output, &document)?;
    Ok(RunSummary {
        output: config.output.clone(),
        tracks: list.tracks().len(),
        skipped,
    })
}
