//! Main representation of an imageboard post attachment
//!
//! # Post
//! A [`Post` struct](Post) holds everything the download pipeline needs to
//! fetch one file and file it away: the resolved attachment URL, the naming
//! fields derived from the original upload, and the thread-level metadata
//! merged in at extraction time.

use serde::{Deserialize, Serialize};

/// Thread-level fields shared by every post extracted from the same page.
///
/// Extracted once per thread fetch and announced ahead of the downloads so
/// consumers can set up the destination directory first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMetadata {
    /// Board tag as displayed on the page, without the surrounding slashes.
    pub board: String,
    /// Thread id, taken from the source URL.
    pub thread: String,
    /// Thread title with HTML entities resolved. Empty when the page carried
    /// no title markup.
    pub title: String,
}

impl ThreadMetadata {
    /// Path components for the destination directory of this thread's files.
    #[inline]
    pub fn directory(&self) -> [String; 3] {
        [
            String::from("2chen"),
            self.board.clone(),
            format!("{} {}", self.thread, self.title),
        ]
    }
}

/// One post carrying a file attachment.
///
/// Posts without an attachment are never mapped into this struct; the
/// extractor drops them while scanning the thread page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Display name of the poster.
    pub name: String,
    /// Post date as Unix epoch seconds. Zero when the page carried no
    /// parseable date.
    pub time: i64,
    /// Post number given by the imageboard.
    pub no: String,
    /// Direct URL of the attachment. Always absolute and query-free.
    pub url: String,
    /// Stem of the original filename as uploaded.
    pub filename: String,
    /// File extension from the original filename.
    pub extension: String,
    /// Content hash published in the page markup.
    pub hash: String,
    /// Board tag of the containing thread.
    pub board: String,
    /// Id of the containing thread.
    pub thread: String,
    /// Title of the containing thread.
    pub title: String,
}

impl Post {
    /// Final file name of the post for saving.
    #[inline]
    pub fn file_name(&self) -> String {
        format!("{} {}.{}", self.time, self.filename, self.extension)
    }

    /// Composite key used by the archival layer to recognize previously
    /// downloaded files.
    #[inline]
    pub fn archive_key(&self) -> String {
        format!("{}_{}_{}_{}", self.board, self.thread, self.hash, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            name: "Anonymous".to_string(),
            time: 1661085296,
            no: "496716".to_string(),
            url: "https://2chen.moe/assets/images/src/abc.png".to_string(),
            filename: "cat picture".to_string(),
            extension: "png".to_string(),
            hash: "4ccf04f2".to_string(),
            board: "tv".to_string(),
            thread: "496715".to_string(),
            title: "Comfy thread".to_string(),
        }
    }

    #[test]
    fn file_name_format() {
        assert_eq!(sample().file_name(), "1661085296 cat picture.png");
    }

    #[test]
    fn archive_key_format() {
        assert_eq!(sample().archive_key(), "tv_496715_4ccf04f2_1661085296");
    }

    #[test]
    fn directory_components() {
        let meta = ThreadMetadata {
            board: "tv".to_string(),
            thread: "496715".to_string(),
            title: "Comfy thread".to_string(),
        };
        assert_eq!(meta.directory(), ["2chen", "tv", "496715 Comfy thread"]);
    }
}
