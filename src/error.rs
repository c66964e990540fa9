use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the whole pipeline. No variant is retried
/// anywhere; everything propagates to the binary's top level.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("JLPT N{level} is not supported yet (only N5 has a known source)")]
    UnsupportedLevel { level: u8 },

    #[error("vocabulary source is not a valid url ({url}): {detail}")]
    InvalidSourceUrl { url: String, detail: String },

    #[error("vocabulary source returned HTTP {status}")]
    RemoteFetch { status: u16 },

    #[error("network error: {0}")]
    Transport(Box<reqwest::Error>),

    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store {} is corrupt: {detail}", path.display())]
    CorruptStore { path: PathBuf, detail: String },

    #[error("vocabulary row {row} has {cells} cells, expected 4")]
    MalformedRow { row: usize, cells: usize },

    #[error("every word in the store has already been studied")]
    StoreExhausted,
}

impl From<reqwest::Error> for VocabError {
    fn from(error: reqwest::Error) -> Self {
        VocabError::Transport(Box::new(error))
    }
}
