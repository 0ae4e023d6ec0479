use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "audex",
    version,
    about = "Extract the audio track of video files to MP3",
    after_help = "Example: audex -f /home/user/Videos -s /home/user/Music"
)]
pub struct Cli {
    /// Files or directories to extract from (repeatable)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Where to save extracted audio files (default: your music folder)
    #[arg(short = 's', long = "save", value_name = "DIR")]
    pub save: Option<PathBuf>,

    /// ffmpeg binary used for extraction
    #[arg(long, env = "AUDEX_FFMPEG", value_name = "PATH")]
    pub ffmpeg: Option<PathBuf>,

    /// mediainfo binary used to detect video files
    #[arg(long, env = "AUDEX_MEDIAINFO", value_name = "PATH")]
    pub mediainfo: Option<PathBuf>,
}

pub enum Parsed {
    Run(Cli),
    /// Help or version was requested; print it and leave.
    Exit(clap::Error),
}

/// Parse `args`, falling back to whatever could be salvaged when they are
/// malformed. Bad arguments are logged, never fatal.
pub fn parse<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let err = match Cli::try_parse_from(&args) {
        Ok(cli) => return Parsed::Run(cli),
        Err(e) => e,
    };
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return Parsed::Exit(err);
    }

    let rendered = err.render().to_string();
    tracing::error!(
        "An error occurred while getting args: {}",
        rendered.lines().next().unwrap_or_default()
    );

    let salvaged = Cli::command()
        .ignore_errors(true)
        .try_get_matches_from(&args)
        .and_then(|matches| Cli::from_arg_matches(&matches));
    Parsed::Run(salvaged.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match parse(args.iter().copied()) {
            Parsed::Run(cli) => cli,
            Parsed::Exit(e) => panic!("unexpected exit: {e}"),
        }
    }

    #[test]
    fn file_flag_repeats() {
        let cli = run(&["audex", "-f", "a.mkv", "--file", "shows", "-s", "out"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.mkv"), PathBuf::from("shows")]);
        assert_eq!(cli.save, Some(PathBuf::from("out")));
    }

    #[test]
    fn unknown_flag_keeps_what_parsed() {
        let cli = run(&["audex", "--save", "out", "-f", "a.mkv", "--bogus"]);
        assert_eq!(cli.save, Some(PathBuf::from("out")));
        assert_eq!(cli.files, vec![PathBuf::from("a.mkv")]);
    }

    #[test]
    fn help_exits() {
        match parse(["audex", "--help"]) {
            Parsed::Exit(e) => assert_eq!(e.kind(), ErrorKind::DisplayHelp),
            Parsed::Run(cli) => panic!("expected help, got {cli:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
