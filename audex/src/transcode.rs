use std::path::{Path, PathBuf};

use audex_core::{TranscodeError, Transcoder};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

/// Extracts audio with ffmpeg, letting the output extension pick the codec.
pub struct FfmpegTranscoder {
    program: Option<PathBuf>,
}

impl FfmpegTranscoder {
    /// `None` leaves the lookup to ffmpeg-sidecar.
    pub fn new(program: Option<PathBuf>) -> Self {
        Self { program }
    }

    fn command(&self) -> FfmpegCommand {
        match &self.program {
            Some(path) => FfmpegCommand::new_with_path(path),
            None => FfmpegCommand::new(),
        }
    }

    fn program_name(&self) -> String {
        self.program
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "ffmpeg".to_string())
    }
}

impl Transcoder for FfmpegTranscoder {
    fn extract_audio(&self, source: &Path, dest: &Path) -> Result<(), TranscodeError> {
        let program = self.program_name();

        // -n: never overwrite, the caller already checked dest is absent
        let mut child = self
            .command()
            .hide_banner()
            .arg("-n")
            .arg("-i")
            .arg(source)
            .arg(dest)
            .spawn()
            .map_err(|e| TranscodeError::Launch {
                program: program.clone(),
                source: e,
            })?;

        let events = child.iter().map_err(|e| TranscodeError::Io {
            program: program.clone(),
            message: e.to_string(),
        })?;
        for event in events {
            match event {
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, msg) | FfmpegEvent::Error(msg) => {
                    tracing::warn!("[ffmpeg] {}", msg);
                }
                FfmpegEvent::Log(_, msg) => tracing::trace!("[ffmpeg] {}", msg),
                _ => {}
            }
        }

        let status = child.wait().map_err(|e| TranscodeError::Io {
            program: program.clone(),
            message: e.to_string(),
        })?;
        if !status.success() {
            return Err(TranscodeError::Status { program, status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_launch_error() {
        let tmp = std::env::temp_dir();
        let transcoder = FfmpegTranscoder::new(Some(PathBuf::from("/nonexistent/bin/ffmpeg")));
        let err = transcoder
            .extract_audio(&tmp.join("clip.mkv"), &tmp.join("clip.mp3"))
            .unwrap_err();
        assert!(matches!(err, TranscodeError::Launch { .. }));
    }
}
