use std::{
    io,
    path::PathBuf,
};

/// Errors raised while gathering text to search.
///
/// Searching itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
