use thiserror::Error;

/// Enumerates the possible errors that can arise during extractor operations.
///
/// Covers the two domain failures an extractor can report on its own (a URL
/// that matches no supported pattern and a page that does not exist) plus the
/// transport errors bubbled up from the HTTP client.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The input URL did not match this extractor's pattern.
    ///
    /// Drivers that resolve extractors through [`find_extractor`](crate::extractor::find_extractor)
    /// never see this; it only surfaces when constructing an extractor directly
    /// from an arbitrary string.
    #[error("URL does not match any supported pattern: {url}")]
    NoUrlMatch { url: String },

    /// The requested page does not exist on the server.
    ///
    /// `resource` names what was being fetched (`"thread"` or `"board"`).
    /// Fatal for this single extraction only; sibling extractions are
    /// unaffected and no retry is attempted.
    #[error("Requested {resource} does not exist")]
    NotFound { resource: &'static str },

    /// An error occurred during a network request (e.g., connection timeout,
    /// DNS resolution failure). Wraps an underlying `reqwest::Error`.
    #[error("Connection Error")]
    ConnectionError(#[from] reqwest::Error),
}
