use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::playlist_error::PlaylistError;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

/// Replaces the file at `path` with `document`.
///
/// The document goes to a sibling file first and is renamed into place, a
/// failed write never leaves a truncated playlist behind.
pub fn write_playlist(path: &Path, document: &str) -> Result<(), PlaylistError> {
    let temp = temp_path(path);
    debug!("write_playlist({}) via {}", path.display(), temp.display());
    if let Err(err) = fs::write(&temp, document) {
        let _ = fs::remove_file(&temp);
        return Err(PlaylistError::WriteError(format!("{}: {}", temp.display(), err)));
    }
    if let Err(err) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(PlaylistError::WriteError(format!("{}: {}", path.display(), err)));
    }
    Ok(())
}
