//! Thread and catalog extractors for `https://2chen.moe`
//!
//! 2chen serves plain HTML without a JSON API, so both extractors locate
//! their fields with positional marker scans over the page body (see
//! [`crate::text`]). Extraction is best effort: markup missing an expected
//! marker degrades to empty fields instead of failing the whole page.
//!
//! The site is reachable under two domains (`2chen.moe` and `2chen.club`);
//! the root origin of the matched URL is kept and reused when resolving
//! relative attachment paths.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::client;
use crate::error::ExtractorError;
use crate::extractor::{fetch_page, Extractor, ExtractorKind, Message};
use crate::post::{Post, ThreadMetadata};
use crate::text;

static THREAD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://)?2chen\.(?:moe|club)/([^/?#]+)/(\d+)").unwrap());

static BOARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?2chen\.(?:moe|club)/([^/?#]+)(?:/catalog|/?$)").unwrap()
});

/// Format of the post dates rendered into the thread markup.
const DATE_FORMAT: &str = "%d %b %Y (%a) %H:%M:%S";

/// Markers delimiting one post inside the thread page.
const POST_OPEN: &str = "class=\"glass media";
const POST_CLOSE: &str = "</article>";

/// Extractor for 2chen threads.
///
/// Emits one [`Message::Directory`] with the thread metadata followed by one
/// [`Message::Url`] per post carrying an attachment.
#[derive(Debug, Clone)]
pub struct ThreadExtractor {
    client: Client,
    root: String,
    board: String,
    thread: String,
}

impl ThreadExtractor {
    /// Thread metadata parsed once from the top of the page.
    fn metadata(&self, page: &str) -> ThreadMetadata {
        let (board, pos) = text::extract(page, "class=\"board\">/", "/<", 0);
        let (title, _) = text::extract(page, "<h3>", "</h3>", pos);

        ThreadMetadata {
            board: board.unwrap_or_default().to_string(),
            thread: self.thread.clone(),
            title: text::unescape(title.unwrap_or_default()),
        }
    }

    /// Maps the full thread page into the message sequence [`items`](Extractor::items) emits.
    fn map_page(&self, page: &str) -> Vec<Message> {
        let data = self.metadata(page);

        let posts: Vec<Post> = text::extract_iter(page, POST_OPEN, POST_CLOSE)
            .filter_map(|segment| self.parse(segment, &data))
            .collect();
        debug!("Mapped {} posts with attachments", posts.len());

        let mut messages = Vec::with_capacity(posts.len() + 1);
        messages.push(Message::Directory(data));
        messages.extend(posts.into_iter().map(|post| Message::Url {
            url: post.url.clone(),
            post,
        }));
        messages
    }

    /// Sequential marker extraction inside one post segment.
    ///
    /// Returns `None` for posts without an attachment URL; those are dropped
    /// from the output entirely.
    fn parse(&self, segment: &str, data: &ThreadMetadata) -> Option<Post> {
        let mut extr = text::ExtractCursor::new(segment);

        let name = text::unescape(extr.extract("<span>", "</span>"));
        let date = extr.extract("<time", "<");
        let no = extr.extract("href=\"#p", "\"").to_string();
        let url = extr.extract("</a><a href=\"", "\"");
        let filename = extr.extract("download=\"", "\"");
        let hash = extr.extract("data-hash=\"", "\"").to_string();

        if url.is_empty() {
            return None;
        }

        let mut url = url.to_string();
        if url.starts_with('/') {
            url.insert_str(0, &self.root);
        }
        if let Some(query) = url.find('?') {
            url.truncate(query);
        }

        // The visible date sits after the closing `>` of the opening time tag.
        let date = date.split_once('>').map_or("", |(_, visible)| visible);
        let time = NaiveDateTime::parse_from_str(date, DATE_FORMAT)
            .map_or(0, |parsed| parsed.and_utc().timestamp());

        let (filename, extension) = text::nameext_from_url(&text::unescape(filename));

        Some(Post {
            name,
            time,
            no,
            url,
            filename,
            extension,
            hash,
            board: data.board.clone(),
            thread: data.thread.clone(),
            title: data.title.clone(),
        })
    }
}

#[async_trait]
impl Extractor for ThreadExtractor {
    fn pattern() -> &'static Regex {
        &THREAD_PATTERN
    }

    fn from_url(url: &str) -> Result<Self, ExtractorError> {
        let caps = THREAD_PATTERN
            .captures(url)
            .ok_or_else(|| ExtractorError::NoUrlMatch {
                url: url.to_string(),
            })?;

        Ok(Self {
            client: client!(),
            root: text::root_from_url(&caps[0]),
            board: caps[1].to_string(),
            thread: caps[2].to_string(),
        })
    }

    async fn items(self) -> Result<Vec<Message>, ExtractorError> {
        let url = format!("{}/{}/{}", self.root, self.board, self.thread);
        let page = fetch_page(&self.client, &url, "thread").await?;

        Ok(self.map_page(&page))
    }

    fn client(&self) -> Client {
        self.client.clone()
    }

    fn kind() -> ExtractorKind {
        ExtractorKind::Thread
    }
}

/// Extractor for 2chen board catalogs.
///
/// Purely a link-harvesting pass: emits one [`Message::Queue`] per thread
/// link found, naming [`ExtractorKind::Thread`] as the forwarding target. No
/// per-thread metadata is read at this stage.
#[derive(Debug, Clone)]
pub struct BoardExtractor {
    client: Client,
    root: String,
    board: String,
}

impl BoardExtractor {
    fn map_page(&self, page: &str) -> Vec<Message> {
        text::extract_iter(page, "<figure><a href=\"", "\"")
            .map(|thread| Message::Queue {
                url: format!("{}{}", self.root, thread),
                extractor: ExtractorKind::Thread,
            })
            .collect()
    }
}

#[async_trait]
impl Extractor for BoardExtractor {
    fn pattern() -> &'static Regex {
        &BOARD_PATTERN
    }

    fn from_url(url: &str) -> Result<Self, ExtractorError> {
        let caps = BOARD_PATTERN
            .captures(url)
            .ok_or_else(|| ExtractorError::NoUrlMatch {
                url: url.to_string(),
            })?;

        Ok(Self {
            client: client!(),
            root: text::root_from_url(&caps[0]),
            board: caps[1].to_string(),
        })
    }

    async fn items(self) -> Result<Vec<Message>, ExtractorError> {
        let url = format!("{}/{}/catalog", self.root, self.board);
        let page = fetch_page(&self.client, &url, "board").await?;

        let messages = self.map_page(&page);
        debug!("Found {} threads in catalog", messages.len());
        Ok(messages)
    }

    fn client(&self) -> Client {
        self.client.clone()
    }

    fn kind() -> ExtractorKind {
        ExtractorKind::Board
    }
}
