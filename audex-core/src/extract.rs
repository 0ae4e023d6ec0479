use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AUDIO_EXTENSION;
use crate::error::{Error, TranscodeError};

/// Writes the audio track of `source` to `dest`.
///
/// Implementations must not overwrite `dest`; callers only invoke this
/// after checking that it is absent.
pub trait Transcoder {
    fn extract_audio(&self, source: &Path, dest: &Path) -> Result<(), TranscodeError>;
}

/// What happened to one video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Transcoded(PathBuf),
    /// The destination already existed.
    Skipped(PathBuf),
    Failed(PathBuf),
    /// The source has no file name to derive a destination from.
    Unnamed,
}

/// `<dir>/<stem>.mp3`, whatever extension `source` had.
pub fn destination_for(source: &Path, dir: &Path) -> Option<PathBuf> {
    let mut name = OsString::from(source.file_stem()?);
    name.push(".");
    name.push(AUDIO_EXTENSION);
    Some(dir.join(name))
}

/// Create `dir` (and parents) unless it already exists. Returns whether
/// anything was created.
pub fn ensure_dir(dir: &Path) -> Result<bool, Error> {
    if dir.exists() {
        return Ok(false);
    }
    tracing::info!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_swaps_extension_for_mp3() {
        let dest = destination_for(Path::new("/a/b/clip.mov"), Path::new("/music"));
        assert_eq!(dest, Some(PathBuf::from("/music/clip.mp3")));
    }

    #[test]
    fn destination_keeps_inner_dots() {
        let dest = destination_for(Path::new("rips/show.s01e02.mkv"), Path::new("out"));
        assert_eq!(dest, Some(PathBuf::from("out/show.s01e02.mp3")));

        let dest = destination_for(Path::new("noext"), Path::new("out"));
        assert_eq!(dest, Some(PathBuf::from("out/noext.mp3")));
    }

    #[test]
    fn destination_needs_a_file_name() {
        assert_eq!(destination_for(Path::new("/"), Path::new("out")), None);
    }

    #[test]
    fn ensure_dir_creates_nested_dirs_once() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a/b/c");
        assert!(ensure_dir(&dir).unwrap());
        assert!(dir.is_dir());
        assert!(!ensure_dir(&dir).unwrap());
    }

    #[test]
    fn ensure_dir_under_a_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"not a dir").unwrap();

        let err = ensure_dir(&blocker.join("out")).unwrap_err();
        let Error::CreateDir { path, .. } = err;
        assert_eq!(path, blocker.join("out"));
    }
}
