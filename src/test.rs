#![cfg(test)]
//! Tests against the live website. Ignored by default since they need network
//! access and an up 2chen instance; run with `cargo test -- --ignored`.

use crate::error::ExtractorError;
use crate::extractor::{Extractor, Message};
use crate::imageboards::chen::{BoardExtractor, ThreadExtractor};

#[tokio::test]
#[ignore = "requires network access"]
async fn thread_live() {
    let unit = ThreadExtractor::from_url("https://2chen.moe/tv/496715").unwrap();

    let messages = unit.items().await.unwrap();
    assert!(matches!(messages[0], Message::Directory(_)));
    assert!(messages.len() > 1, "thread has no attachments");

    for message in &messages[1..] {
        let Message::Url { url, post } = message else {
            panic!("unexpected message kind: {message:?}");
        };
        assert!(url.starts_with("https://"));
        assert!(!url.contains('?'));
        assert!(!post.hash.is_empty());
    }
}

#[tokio::test]
#[ignore = "requires network access"]
async fn missing_thread_live() {
    let unit = ThreadExtractor::from_url("https://2chen.moe/jp/303786").unwrap();

    let result = unit.items().await;
    assert!(matches!(
        result,
        Err(ExtractorError::NotFound { resource: "thread" })
    ));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn board_live() {
    let unit = BoardExtractor::from_url("https://2chen.moe/co/").unwrap();

    let messages = unit.items().await.unwrap();
    assert!(!messages.is_empty(), "catalog is empty");

    for message in messages {
        let Message::Queue { url, extractor } = message else {
            panic!("unexpected message kind: {message:?}");
        };
        assert_eq!(extractor, crate::extractor::ExtractorKind::Thread);
        assert!(ThreadExtractor::pattern().is_match(&url), "{url}");
    }
}
