mod output;

pub use output::write_playlist;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

use crate::track::escape_html;
use crate::track::Track;

/// Fixed document metadata, plain text as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistMeta {
    pub title: String,
    pub creator: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    title: String,
    creator: String,
    info: String,
    date: DateTime<Utc>,
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(meta: &PlaylistMeta, tracks: Vec<Track>, date: DateTime<Utc>) -> Self {
        Playlist {
            title: escape_html(&meta.title),
            creator: escape_html(&meta.creator),
            info: escape_html(&meta.info),
            date,
            tracks,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// XSPF document, track fields are written as they are.
    pub fn serialize_to_xspf(&self) -> String {
        let mut j = String::with_capacity(512 + 300 * self.tracks.len());
        j.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        j.push_str("<playlist version=\"1\" xmlns=\"http://xspf.org/ns/0/\">\n");
        j.push_str(&format!("\t<title>{}</title>\n", self.title));
        j.push_str(&format!("\t<creator>{}</creator>\n", self.creator));
        j.push_str(&format!("\t<info>{}</info>\n", self.info));
        j.push_str(&format!(
            "\t<date>{}</date>\n",
            self.date.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
        j.push_str("\t<trackList>\n");
        for track in &self.tracks {
            j.push_str("\t\t<track>\n");
            j.push_str(&format!("\t\t\t<title>{}</title>\n", track.title));
            j.push_str(&format!("\t\t\t<info>{}</info>\n", track.info));
            j.push_str(&format!("\t\t\t<image>{}</image>\n", track.image));
            j.push_str(&format!("\t\t\t<location>{}</location>\n", track.location));
            j.push_str("\t\t</track>\n");
        }
        j.push_str("\t</trackList>\n");
        j.push_str("</playlist>\n");
        j
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta() -> PlaylistMeta {
        PlaylistMeta {
            title: String::from("JUKE.nl Stations"),
            creator: String::from("JUKE Playlist Generator"),
            info: String::from("https://github.com/Ex-iT/"),
        }
    }

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap()
    }

    #[test]
    fn empty_playlist() {
        let playlist = Playlist::new(&meta(), vec![], date());
        assert_eq!(
            playlist.serialize_to_xspf(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <playlist version=\"1\" xmlns=\"http://xspf.org/ns/0/\">\n\
             \t<title>JUKE.nl Stations</title>\n\
             \t<creator>JUKE Playlist Generator</creator>\n\
             \t<info>https://github.com/Ex-iT/</info>\n\
             \t<date>2024-03-01T12:30:05.000Z</date>\n\
             \t<trackList>\n\
             \t</trackList>\n\
             </playlist>\n"
        );
    }

    #[test]
    fn tracks_are_written_verbatim_in_order() {
        let tracks = vec![
            Track {
                title: String::from("A &amp; B"),
                info: String::new(),
                image: String::new(),
                location: String::from("https://a.example.com/?x=1%26y=2"),
            },
            Track {
                title: String::from("C"),
                info: String::from("Info"),
                image: String::from("https://img.example.com/c.png"),
                location: String::from("https://c.example.com/"),
            },
        ];
        let xml = Playlist::new(&meta(), tracks, date()).serialize_to_xspf();
        assert!(xml.contains(
            "\t\t<track>\n\
             \t\t\t<title>A &amp; B</title>\n\
             \t\t\t<info></info>\n\
             \t\t\t<image></image>\n\
             \t\t\t<location>https://a.example.com/?x=1%26y=2</location>\n\
             \t\t</track>\n"
        ));
        let a = xml.find("<title>A &amp; B</title>").unwrap();
        let c = xml.find("<title>C</title>").unwrap();
        assert!(a < c);
        assert_eq!(xml.matches("<track>").count(), 2);
        assert!(xml.ends_with("\t</trackList>\n</playlist>\n"));
    }

    #[test]
    fn metadata_is_escaped_once() {
        let mut meta = meta();
        meta.title = String::from("Rock & Pop");
        let xml = Playlist::new(&meta, vec![], date()).serialize_to_xspf();
        assert!(xml.contains("<title>Rock &amp; Pop</title>"));
    }
}
