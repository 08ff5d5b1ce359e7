// Error type shared by every module of the music crate.
//
// Nothing here is recoverable inside the generator: a bad note name, an
// out-of-range event field, or an empty configuration table aborts the
// current piece. The binary wraps these in `anyhow` for reporting.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusicError {
    #[error("invalid note name {0:?}")]
    InvalidNoteName(String),
    #[error("{what} out of range: {value} (max {max})")]
    OutOfRange {
        what: &'static str,
        value: u64,
        max: u64,
    },
    #[error("tempo {0} bpm is too slow to encode")]
    InvalidTempo(u16),
    #[error("configuration table is empty: {0}")]
    EmptyTable(&'static str),
    #[error("pitch {0} is not in the melody pitch pool")]
    PitchNotInPool(u8),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid generator config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MusicError>;
