use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::extract::{destination_for, ensure_dir, Outcome, Transcoder};
use crate::media::VideoProbe;

/// Counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub probed: usize,
    pub transcoded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub invalid: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} probed, {} extracted, {} already present, {} failed, {} invalid",
            self.probed, self.transcoded, self.skipped, self.failed, self.invalid
        )
    }
}

/// One pass over a set of inputs.
///
/// Failures are isolated to the input that caused them. The only error
/// returned is [`Error::CreateDir`], which ends the run.
pub struct Session<'a> {
    pub(crate) probe: &'a dyn VideoProbe,
    pub(crate) transcoder: &'a dyn Transcoder,
    pub(crate) config: Config,
    pub(crate) summary: Summary,
}

impl<'a> Session<'a> {
    pub fn new(config: Config, probe: &'a dyn VideoProbe, transcoder: &'a dyn Transcoder) -> Self {
        Self {
            probe,
            transcoder,
            config,
            summary: Summary::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Process every path in order.
    pub fn process_paths<I, P>(&mut self, paths: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.process_path(path.as_ref())?;
        }
        Ok(())
    }

    /// A file is classified and extracted, a directory is walked, anything
    /// else is logged and counted as invalid.
    pub fn process_path(&mut self, path: &Path) -> Result<(), Error> {
        if path.is_file() {
            self.process_file(path)
        } else if path.is_dir() {
            self.walk_dir(path)
        } else {
            tracing::error!("Error processing {}: not a file or directory", path.display());
            self.summary.invalid += 1;
            Ok(())
        }
    }

    /// Process each line of the list file as a path.
    ///
    /// An unreadable list is logged, not returned.
    pub fn process_list_file(&mut self) -> Result<(), Error> {
        let list = self.config.list_file.clone();
        let file = match File::open(&list) {
            Ok(f) => f,
            Err(e) => {
                tracing::error!("Error opening list {}: {}", list.display(), e);
                return Ok(());
            }
        };

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("Error reading list {}: {}", list.display(), e);
                    return Ok(());
                }
            };
            let line = line.trim_end_matches(['\r', '\n']);
            self.process_path(Path::new(line))?;
        }
        Ok(())
    }

    /// Extract `path` into the configured output directory if it is a video.
    pub fn process_file(&mut self, path: &Path) -> Result<(), Error> {
        if self.classify(path) {
            let dir = self.output_dir();
            self.extract_to(path, &dir)?;
        }
        Ok(())
    }

    /// Extract one video into `dir`, skipping when the target already exists.
    pub fn extract_to(&mut self, video: &Path, dir: &Path) -> Result<Outcome, Error> {
        ensure_dir(dir)?;

        let Some(dest) = destination_for(video, dir) else {
            tracing::error!("Error deriving output name for {}", video.display());
            self.summary.failed += 1;
            return Ok(Outcome::Unnamed);
        };

        if dest.exists() {
            tracing::info!("File ({}) already exists", dest.display());
            self.summary.skipped += 1;
            return Ok(Outcome::Skipped(dest));
        }

        tracing::info!("Extracting {} -> {}", video.display(), dest.display());
        match self.transcoder.extract_audio(video, &dest) {
            Ok(()) => {
                self.summary.transcoded += 1;
                Ok(Outcome::Transcoded(dest))
            }
            Err(e) => {
                tracing::error!("Error extracting audio from {}: {}", video.display(), e);
                self.summary.failed += 1;
                Ok(Outcome::Failed(dest))
            }
        }
    }

    pub(crate) fn classify(&mut self, path: &Path) -> bool {
        self.summary.probed += 1;
        match self.probe.is_video(path) {
            Ok(is_video) => {
                tracing::debug!("{} video={}", path.display(), is_video);
                is_video
            }
            Err(e) => {
                tracing::error!("Error inspecting {}: {}", path.display(), e);
                self.summary.invalid += 1;
                false
            }
        }
    }

    pub(crate) fn output_dir(&self) -> PathBuf {
        self.config.output_dir.clone()
    }
}
