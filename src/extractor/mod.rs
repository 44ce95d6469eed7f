//! Common interface all extractors expose to the download pipeline.
//!
//! An extractor unit is constructed from a matching URL, asked once for its
//! [`Message`] sequence, then discarded. The driver picks which unit to build
//! by matching the input URL against each registered pattern (see
//! [`find_extractor`]) and consumes the messages in emission order.

use async_trait::async_trait;
use log::debug;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::ExtractorError;
use crate::imageboards::chen::{BoardExtractor, ThreadExtractor};
use crate::post::{Post, ThreadMetadata};

/// One instruction emitted by an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Announces the metadata of the thread whose files follow. Always emitted
    /// before any [`Message::Url`] from the same extractor.
    Directory(ThreadMetadata),
    /// A file to download, together with the post it came from.
    Url { url: String, post: Post },
    /// A page that should be handed to another extractor unit.
    Queue { url: String, extractor: ExtractorKind },
}

/// Registry token identifying an extractor implementation.
///
/// [`Message::Queue`] names its forwarding target with this token instead of a
/// concrete type, letting the driver resolve it through a lookup against
/// [`pattern`](Self::pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractorKind {
    Thread,
    Board,
}

impl ExtractorKind {
    /// Site category shared by every extractor in this crate.
    pub const fn category(self) -> &'static str {
        "2chen"
    }

    pub const fn subcategory(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Board => "board",
        }
    }

    /// URL pattern the driver matches before instantiating this kind.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::Thread => ThreadExtractor::pattern(),
            Self::Board => BoardExtractor::pattern(),
        }
    }
}

/// This trait is the only common public interface all extractors expose aside
/// from some website-specific configuration.
#[async_trait]
pub trait Extractor: Sized {
    /// Compiled URL pattern for this extractor.
    fn pattern() -> &'static Regex;

    /// Sets up the extractor unit from a URL matching [`pattern`](Self::pattern).
    fn from_url(url: &str) -> Result<Self, ExtractorError>;

    /// Fetches the page and returns every [`Message`] in emission order.
    ///
    /// Consumes the unit: each extractor performs exactly one fetch, produces
    /// one finite sequence and is discarded afterwards. Re-running an
    /// extraction means constructing a fresh unit from the same URL.
    async fn items(self) -> Result<Vec<Message>, ExtractorError>;

    /// Returns the used client for external use.
    fn client(&self) -> Client;

    /// Returns the registry token for this extractor.
    fn kind() -> ExtractorKind;
}

/// Matches `url` against every registered pattern and returns the first kind
/// that accepts it. Thread URLs are tried first since the board pattern is the
/// looser of the two.
pub fn find_extractor(url: &str) -> Option<ExtractorKind> {
    [ExtractorKind::Thread, ExtractorKind::Board]
        .into_iter()
        .find(|kind| kind.pattern().is_match(url))
}

/// Single page fetch shared by the extractors.
///
/// A missing page surfaces as the domain [`NotFound`](ExtractorError::NotFound)
/// condition naming the `resource` being fetched; every other failed status
/// propagates as a connection error.
pub(crate) async fn fetch_page(
    client: &Client,
    url: &str,
    resource: &'static str,
) -> Result<String, ExtractorError> {
    debug!("Fetching {url}");

    let response = client.get(url).send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ExtractorError::NotFound { resource });
    }

    Ok(response.error_for_status()?.text().await?)
}
