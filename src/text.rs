//! Text-scanning helpers used by the HTML extractors.
//!
//! The pages handled by this crate are served as plain HTML without a JSON
//! API, so the extractors locate their fields with positional marker searches
//! instead of a full DOM parser. All helpers here are lenient: a missing
//! marker produces an empty value, never an error.

use std::borrow::Cow;

use url::Url;

/// Cursor for sequential marker extraction over a page buffer.
///
/// Each successful [`extract`](Self::extract) advances the cursor past the
/// closing marker, so consecutive calls scan forward through the buffer in
/// order. A missing marker yields `""` and leaves the cursor where it was.
#[derive(Debug)]
pub struct ExtractCursor<'a> {
    buf: &'a str,
    pos: usize,
}

impl<'a> ExtractCursor<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self { buf, pos: 0 }
    }

    /// Text between `open` and `close`, searching forward from the cursor.
    pub fn extract(&mut self, open: &str, close: &str) -> &'a str {
        match extract(self.buf, open, close, self.pos) {
            (Some(value), pos) => {
                self.pos = pos;
                value
            }
            (None, _) => "",
        }
    }

    /// Current offset into the buffer.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

/// One-shot extraction of the text between `open` and `close`, starting the
/// search at `pos`.
///
/// Returns the extracted value together with the offset right past the
/// closing marker, or `(None, pos)` when either marker is absent.
pub fn extract<'a>(buf: &'a str, open: &str, close: &str, pos: usize) -> (Option<&'a str>, usize) {
    let Some(open_idx) = buf.get(pos..).and_then(|rest| rest.find(open)) else {
        return (None, pos);
    };
    let start = pos + open_idx + open.len();

    let Some(close_idx) = buf.get(start..).and_then(|rest| rest.find(close)) else {
        return (None, pos);
    };
    let end = start + close_idx;

    (Some(&buf[start..end]), end + close.len())
}

/// Iterator over every non-overlapping `open`..`close` segment in `buf`, in
/// document order. Each call re-scans from the start of the buffer, so the
/// iterator is restartable per invocation.
pub fn extract_iter<'a>(
    buf: &'a str,
    open: &'a str,
    close: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let (value, next) = extract(buf, open, close, pos);
        pos = next;
        value
    })
}

/// Scheme and host of `url`, with `https` assumed when the scheme is missing.
pub fn root_from_url(url: &str) -> String {
    let absolute = if url.contains("://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{url}"))
    };

    match Url::parse(&absolute) {
        Ok(parsed) => format!(
            "{}://{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or_default()
        ),
        Err(_) => absolute.trim_end_matches('/').to_string(),
    }
}

/// Resolves the HTML entities commonly found in imageboard markup.
///
/// Handles the named entities `amp`, `lt`, `gt`, `quot` and `apos` plus
/// decimal and hexadecimal character references. Anything unrecognized is
/// passed through verbatim.
pub fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let Some(end) = rest.find(';') else {
            break;
        };

        match resolve_entity(&rest[1..end]) {
            Some(ch) => out.push(ch),
            None => out.push_str(&rest[..=end]),
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    out
}

fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Filename stem and extension derived from the basename of `url`.
///
/// The query and fragment components are discarded before splitting the last
/// path component at its final dot. A basename without a dot yields an empty
/// extension.
pub fn nameext_from_url(url: &str) -> (String, String) {
    let base = url.split(['?', '#']).next().unwrap_or_default();
    let base = base.rsplit('/').next().unwrap_or_default();

    match base.rsplit_once('.') {
        Some((name, ext)) => (name.to_string(), ext.to_ascii_lowercase()),
        None => (base.to_string(), String::new()),
    }
}
