use std::path::{Path, PathBuf};

use directories::UserDirs;

/// Fallback list of inputs read from the working directory.
pub const LIST_FILE_NAME: &str = "videos.txt";

/// Extension given to every extracted audio file.
pub const AUDIO_EXTENSION: &str = "mp3";

#[derive(Clone, Debug)]
pub struct Config {
    /// Where extracted audio is written.
    pub output_dir: PathBuf,
    /// Path list consulted when no arguments were given.
    pub list_file: PathBuf,
}

impl Config {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            list_file: PathBuf::from(LIST_FILE_NAME),
        }
    }

    pub fn with_list_file(mut self, list_file: impl Into<PathBuf>) -> Self {
        self.list_file = list_file.into();
        self
    }

    /// The user's music folder, or `~/Music` when the platform doesn't name one.
    pub fn default_output_dir() -> Option<PathBuf> {
        let dirs = UserDirs::new()?;
        Some(
            dirs.audio_dir()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dirs.home_dir().join("Music")),
        )
    }
}
