//! # 2chen Extractors
//!
//! Extractor units for the 2chen imageboard (`2chen.moe` / `2chen.club`),
//! meant to be driven by a generic download pipeline.
//!
//! Two units are provided:
//! - [`ThreadExtractor`] walks one discussion thread and yields a
//!   [`Message::Directory`] with the thread metadata followed by one
//!   [`Message::Url`] per post attachment.
//! - [`BoardExtractor`] walks a board catalog and yields one
//!   [`Message::Queue`] per thread found, naming the thread extractor as the
//!   forwarding target.
//!
//! The driver matches an input URL against each unit's pattern (or calls
//! [`find_extractor`]), constructs the matching unit and consumes the message
//! sequence returned by [`Extractor::items`]:
//!
//! ```rust
//! use chen_extractors::{Extractor, Message, ThreadExtractor};
//!
//! async fn grab() -> Result<(), chen_extractors::ExtractorError> {
//!     let unit = ThreadExtractor::from_url("https://2chen.moe/tv/496715")?;
//!
//!     for message in unit.items().await? {
//!         match message {
//!             Message::Directory(data) => println!("{:?}", data.directory()),
//!             Message::Url { url, post } => println!("{} -> {}", url, post.file_name()),
//!             Message::Queue { url, .. } => println!("queue {}", url),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Download scheduling, retry policy, rate limiting and archival dedup all
//! live in the consuming pipeline, not here.

use log::debug;

// Public Exports
pub use log;
pub use reqwest;
pub use serde;

pub mod error;
pub mod extractor;
pub mod imageboards;
pub mod macros;
pub mod post;
pub mod text;

mod test;

pub use error::ExtractorError;
pub use extractor::{find_extractor, Extractor, ExtractorKind, Message};
pub use imageboards::chen::{BoardExtractor, ThreadExtractor};
pub use post::{Post, ThreadMetadata};

/// User agent set on every extractor [`Client`](reqwest::Client).
///
/// It will always follow the version declared inside ```Cargo.toml```
pub fn user_agent() -> String {
    let ua = format!("Rust Imageboard Thread Extractor/{}", env!("CARGO_PKG_VERSION"));
    debug!("Using user-agent: {}", ua);
    ua
}
