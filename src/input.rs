use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use crate::{Error, Result};

/// Where the text to search comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextSource {
    /// Pick a source from an optional inline text and an optional file path.
    /// Neither means stdin.
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the whole text. Files and stdin must hold UTF-8.
    pub fn load(&self) -> Result<String> {
        let text = match self {
            Self::Inline(text) => text.clone(),
            Self::File(path) => fs::read_to_string(path).map_err(|source| Error::Io { path: path.clone(), source })?,
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map_err(Error::Stdin)?;
                buf
            }
        };
        tracing::debug!(source = ?self, len = text.len(), "loaded text");
        Ok(text)
    }
}
