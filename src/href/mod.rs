// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

//! Link targets and asset paths

use std::sync::LazyLock;

use derive_more::{Display, Error};
use regex::Regex;
use url::Url;

/// Scheme prefix of absolute references.
pub const HTTPS_PREFIX: &str = "https://";

/// The kind of a link target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HrefKind {
    /// Absolute `https://` URL, usually pointing to a third-party site.
    Absolute,

    /// Path starting with `/`, resolved against the site root.
    SiteRelative,
}

/// An invalid link target
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HrefError {
    /// Empty reference.
    #[display("empty reference")]
    Empty,

    /// Whitespace anywhere in the reference.
    #[display("whitespace")]
    Whitespace,

    /// Neither `https://` nor `/` prefix.
    #[display("neither an absolute https URL nor a site-relative path")]
    UnknownForm,

    /// Starts with `//`, i.e. protocol-relative.
    #[display("protocol-relative reference")]
    ProtocolRelative,

    /// Absolute URL with a scheme other than `https`.
    #[display("unsupported scheme \"{_0}\"")]
    UnsupportedScheme(#[error(not(source))] String),

    /// Absolute URL without a host.
    #[display("missing host")]
    MissingHost,

    /// Not parseable as a URL.
    #[display("malformed: {_0}")]
    Malformed(url::ParseError),
}

impl From<url::ParseError> for HrefError {
    fn from(from: url::ParseError) -> Self {
        Self::Malformed(from)
    }
}

const fn starts_with(input: &[u8], prefix: &[u8]) -> bool {
    if input.len() < prefix.len() {
        return false;
    }
    let mut i = 0;
    while i < prefix.len() {
        if input[i] != prefix[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Check the shape of a link target.
///
/// Non-empty and starting with either `/` or `https://`. Evaluated in `const`
/// context to reject malformed static entries at compile time. Use [`classify()`]
/// for a complete check.
#[must_use]
pub const fn is_well_formed(href: &str) -> bool {
    let bytes = href.as_bytes();
    !bytes.is_empty() && (bytes[0] == b'/' || starts_with(bytes, HTTPS_PREFIX.as_bytes()))
}

static DUMMY_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    // Site-relative paths cannot be parsed without a base URL.
    Url::parse("https://site.invalid/").expect("valid base URL")
});

/// Classify and validate a link target.
///
/// # Errors
///
/// Returns an [`HrefError`] if `href` is neither a well-formed absolute
/// `https` URL nor a well-formed site-relative path.
pub fn classify(href: &str) -> Result<HrefKind, HrefError> {
    if href.is_empty() {
        return Err(HrefError::Empty);
    }
    if href.contains(char::is_whitespace) {
        return Err(HrefError::Whitespace);
    }
    if href.starts_with("//") {
        return Err(HrefError::ProtocolRelative);
    }
    if href.starts_with('/') {
        DUMMY_BASE_URL.join(href)?;
        return Ok(HrefKind::SiteRelative);
    }
    if !href.starts_with(HTTPS_PREFIX) {
        // The parser normalizes forms like `HTTPS://` or `https:host`.
        return match Url::parse(href) {
            Ok(url) if url.scheme() != "https" => {
                Err(HrefError::UnsupportedScheme(url.scheme().to_owned()))
            }
            _ => Err(HrefError::UnknownForm),
        };
    }
    let url = Url::parse(href)?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(HrefError::MissingHost);
    }
    Ok(HrefKind::Absolute)
}

const ASSET_PATH_REGEX_STR: &str = r"^/[^/\s?#][^\s?#]*$";

static ASSET_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ASSET_PATH_REGEX_STR).expect("valid regex"));

/// Check if the given path can refer to a static asset.
///
/// Site-relative without whitespace, query, or fragment.
#[must_use]
pub fn is_valid_asset_path(path: &str) -> bool {
    ASSET_PATH_REGEX.is_match(path)
}

/// Check the shape of an asset path in `const` context.
///
/// Only checks for a single leading `/`. Use [`is_valid_asset_path()`]
/// for a complete check.
#[must_use]
pub const fn is_well_formed_asset_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() > 1 && bytes[0] == b'/' && bytes[1] != b'/'
}

#[cfg(test)]
mod tests;
