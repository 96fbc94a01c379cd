//! Query parameters for the popularity ranking.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// Query string of `GET /films/popular`.
///
/// Uses `serde_with` to parse the count from the query string as an integer.
/// An empty `count=` is treated as absent.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PopularParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub count: Option<i64>,
}

impl PopularParams {
    /// Resolves the number of films to return.
    ///
    /// A missing count falls back to `default`. Zero is allowed and yields an
    /// empty ranking; negative values are rejected.
    pub fn resolve_count(&self, default: usize) -> Result<usize, String> {
        match self.count {
            None => Ok(default),
            Some(count) => usize::try_from(count)
                .map_err(|_| format!("Count must not be negative, got {count}")),
        }
    }
}
