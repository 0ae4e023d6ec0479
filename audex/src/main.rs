mod cli;
mod mediainfo;
mod transcode;

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use audex_core::{Config, Session};

use crate::cli::{Cli, Parsed};
use crate::mediainfo::MediaInfoProbe;
use crate::transcode::FfmpegTranscoder;

/// Where the inputs of this run come from.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Arguments,
    ListFile,
    Prompt,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let has_args = std::env::args_os().len() > 1;
    let cli = if has_args {
        match cli::parse(std::env::args_os()) {
            Parsed::Run(cli) => cli,
            Parsed::Exit(e) => e.exit(),
        }
    } else {
        env_overrides(|key| std::env::var_os(key))
    };
    tracing::debug!("{:#?}", cli);

    let output_dir = resolve_output_dir(cli.save.clone(), Config::default_output_dir())
        .inspect_err(|e| tracing::error!("{:#}", e))?;
    let config = Config::new(output_dir);

    let probe = cli.mediainfo.clone().map(MediaInfoProbe::new).unwrap_or_default();
    let transcoder = FfmpegTranscoder::new(cli.ffmpeg.clone());
    let mut session = Session::new(config, &probe, &transcoder);

    let mode = select_mode(has_args, session.config());
    let result = match mode {
        Mode::Arguments => session.process_paths(&cli.files),
        Mode::ListFile => {
            tracing::info!("Reading inputs from {}", session.config().list_file.display());
            session.process_list_file()
        }
        Mode::Prompt => {
            let input = prompt("Enter a directory or filename: ")?;
            session.process_path(Path::new(&input))
        }
    };
    result.inspect_err(|e| tracing::error!("Stopping: {}", e))?;

    tracing::info!("Done: {}", session.summary());
    Ok(())
}

/// Arguments win, then the list file, then the prompt.
fn select_mode(has_args: bool, config: &Config) -> Mode {
    if has_args {
        Mode::Arguments
    } else if config.list_file.is_file() {
        Mode::ListFile
    } else {
        Mode::Prompt
    }
}

/// Options for a run without arguments: only the binary overrides apply.
fn env_overrides(var: impl Fn(&str) -> Option<OsString>) -> Cli {
    Cli {
        ffmpeg: var("AUDEX_FFMPEG").map(PathBuf::from),
        mediainfo: var("AUDEX_MEDIAINFO").map(PathBuf::from),
        ..Cli::default()
    }
}

fn resolve_output_dir(save: Option<PathBuf>, default: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    save.or(default)
        .context("could not locate a music folder; pass --save <DIR>")
}

fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    read_answer(&mut io::stdin().lock()).context("failed to read from stdin")
}

/// One line of input without its line ending.
fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
