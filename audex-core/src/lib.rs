pub mod config;
pub mod error;
pub mod extract;
pub mod media;
pub mod session;
pub mod walk;

pub use config::Config;
pub use error::{Error, ProbeError, TranscodeError};
pub use extract::{Outcome, Transcoder};
pub use media::{MediaReport, VideoProbe};
pub use session::{Session, Summary};
