//! Fetching the park dataset over HTTP.

use crate::park::{self, ParkCollection};
use crate::summary::DataSummary;

#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    Park(park::Error),
    /// The dataset parsed but contains no parks; the degenerate summary
    /// must not reach the UI.
    Empty,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Reqwest(e)
    }
}

impl From<park::Error> for Error {
    fn from(e: park::Error) -> Self {
        Self::Park(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reqwest(e) => e.fmt(f),
            Self::Park(e) => e.fmt(f),
            Self::Empty => write!(f, "dataset contains no parks"),
        }
    }
}

impl std::error::Error for Error {}

/// GETs a GeoJSON dataset and summarizes it.
///
/// # Errors
///
/// HTTP and parse failures, plus `Error::Empty` for a dataset with no
/// features.
pub async fn get_parks(url: &str) -> Result<(ParkCollection, DataSummary), Error> {
    log::debug!("fetching park data from {url}");
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    let collection = ParkCollection::parse(&body)?;
    if collection.is_empty() {
        return Err(Error::Empty);
    }
    let summary = DataSummary::of(&collection);
    log::debug!(
        "loaded {} parks with {} timestamps",
        collection.len(),
        summary.timestamps.len()
    );
    Ok((collection, summary))
}
