use std::fmt;

use url::Url;

use crate::error::VocabError;

const N5_SOURCE: &str =
    "https://nihongoichiban.com/2011/04/30/complete-list-of-vocabulary-for-the-jlpt-n5/";

/// Overrides the N5 source url; lets tests point the fetcher at a local stub.
pub const SOURCE_URL_ENV: &str = "JLPTVOCAB_N5_URL";

/// JLPT proficiency tier (N5 easiest, N1 hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(pub u8);

impl Level {
    /// Source page carrying this level's vocabulary table.
    ///
    /// Resolved and validated before any network activity, so an
    /// unsupported level never triggers a request.
    pub fn source_url(self) -> Result<Url, VocabError> {
        if self.0 != 5 {
            return Err(VocabError::UnsupportedLevel { level: self.0 });
        }

        let raw = std::env::var(SOURCE_URL_ENV).unwrap_or_else(|_| N5_SOURCE.to_owned());
        Url::parse(&raw).map_err(|err| VocabError::InvalidSourceUrl {
            url: raw,
            detail: err.to_string(),
        })
    }

    /// File name of the persisted store for this level, e.g. `jlptn5.json`.
    pub fn store_file_name(self) -> String {
        format!("jlptn{}.json", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}
