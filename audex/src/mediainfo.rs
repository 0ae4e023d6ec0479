use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use audex_core::{MediaReport, ProbeError, VideoProbe};

/// Classifies files by asking the `mediainfo` CLI for its JSON report.
pub struct MediaInfoProbe {
    program: PathBuf,
}

impl MediaInfoProbe {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn report(&self, path: &Path) -> Result<MediaReport, ProbeError> {
        let program = self.program.display().to_string();
        let output = Command::new(&self.program)
            .arg("--Output=JSON")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ProbeError::Launch {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Status {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        MediaReport::from_json(&output.stdout)
    }
}

impl Default for MediaInfoProbe {
    fn default() -> Self {
        Self::new("mediainfo")
    }
}

impl VideoProbe for MediaInfoProbe {
    fn is_video(&self, path: &Path) -> Result<bool, ProbeError> {
        let report = self.report(path)?;
        if let Some(title) = report.title() {
            tracing::debug!("{} is titled {:?}", path.display(), title);
        }
        Ok(report.has_video())
    }
}
