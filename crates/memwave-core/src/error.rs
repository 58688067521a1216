use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no {kind} file found in song directory {dir}")]
    MissingAsset { dir: String, kind: &'static str },

    #[error("found {count} {kind} files in song directory {dir}, expected exactly one")]
    AmbiguousAsset {
        dir: String,
        kind: &'static str,
        count: usize,
    },

    #[error("malformed map record at line {line}: {message}")]
    MapFormat { line: usize, message: String },

    #[error("failed to probe audio duration: {0}")]
    AudioProbe(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
