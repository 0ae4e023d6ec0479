use std::path::Path;

use serde::Deserialize;

use crate::error::ProbeError;

/// Track type label mediainfo uses for video streams.
pub const VIDEO_TRACK: &str = "Video";
/// Track type label for the container-level track that carries the title.
pub const GENERAL_TRACK: &str = "General";

/// Answers whether a file holds a video stream.
pub trait VideoProbe {
    fn is_video(&self, path: &Path) -> Result<bool, ProbeError>;
}

/// The parts of a `mediainfo --Output=JSON` document we care about.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MediaReport {
    #[serde(default)]
    media: Option<Media>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct Media {
    #[serde(default)]
    track: Vec<Track>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Track {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
}

impl MediaReport {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ProbeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn tracks(&self) -> &[Track] {
        self.media.as_ref().map(|m| m.track.as_slice()).unwrap_or(&[])
    }

    pub fn has_video(&self) -> bool {
        self.tracks().iter().any(|t| t.kind == VIDEO_TRACK)
    }

    /// Title of the first General track, if it has one.
    pub fn title(&self) -> Option<&str> {
        self.tracks()
            .iter()
            .find(|t| t.kind == GENERAL_TRACK)
            .and_then(|t| t.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIE: &str = r#"{
        "creatingLibrary": {"name": "MediaLib", "version": "23.04"},
        "media": {
            "@ref": "/videos/holiday.mkv",
            "track": [
                {"@type": "General", "Title": "Holiday 2019", "Format": "Matroska"},
                {"@type": "Video", "Format": "AVC", "Width": "1920"},
                {"@type": "Audio", "Format": "AAC"}
            ]
        }
    }"#;

    const SONG: &str = r#"{
        "media": {
            "@ref": "song.m4a",
            "track": [
                {"@type": "General", "Format": "MPEG-4"},
                {"@type": "Audio", "Format": "AAC"}
            ]
        }
    }"#;

    #[test]
    fn movie_has_video_and_title() {
        let report = MediaReport::from_json(MOVIE.as_bytes()).unwrap();
        assert_eq!(report.tracks().len(), 3);
        assert!(report.has_video());
        assert_eq!(report.title(), Some("Holiday 2019"));
    }

    #[test]
    fn audio_only_file_is_not_video() {
        let report = MediaReport::from_json(SONG.as_bytes()).unwrap();
        assert!(!report.has_video());
        assert_eq!(report.title(), None);
    }

    #[test]
    fn unrecognised_file_has_no_tracks() {
        let report = MediaReport::from_json(br#"{"media": null}"#).unwrap();
        assert!(report.tracks().is_empty());
        assert!(!report.has_video());
    }

    #[test]
    fn garbage_is_a_report_error() {
        let err = MediaReport::from_json(b"General;Video").unwrap_err();
        assert!(matches!(err, ProbeError::Report(_)));
    }
}
