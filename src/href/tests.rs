// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

#[test]
fn is_well_formed_accepts_site_relative_and_https() {
    assert!(is_well_formed("/"));
    assert!(is_well_formed("/blog"));
    assert!(is_well_formed("https://github.com/"));
}

#[test]
fn is_well_formed_rejects_other_forms() {
    assert!(!is_well_formed(""));
    assert!(!is_well_formed("blog"));
    assert!(!is_well_formed("http://example.com"));
    assert!(!is_well_formed("https:/example.com"));
    assert!(!is_well_formed(" /blog"));
}

#[test]
fn classify_site_relative() {
    assert_eq!(Ok(HrefKind::SiteRelative), classify("/"));
    assert_eq!(Ok(HrefKind::SiteRelative), classify("/blog/tiki-recommender-etl-pipeline"));
    assert_eq!(Ok(HrefKind::SiteRelative), classify("/tags?page=2#top"));
}

#[test]
fn classify_absolute() {
    assert_eq!(
        Ok(HrefKind::Absolute),
        classify("https://drive.google.com/file/d/1rM7iMvRxWB018cSueHHTGxnGNr7gPV2X/view")
    );
}

#[test]
fn classify_should_fail_on_empty_input() {
    assert_eq!(Err(HrefError::Empty), classify(""));
}

#[test]
fn classify_should_fail_on_whitespace() {
    assert_eq!(Err(HrefError::Whitespace), classify(" /blog"));
    assert_eq!(Err(HrefError::Whitespace), classify("/blog "));
    assert_eq!(Err(HrefError::Whitespace), classify("/my blog"));
}

#[test]
fn classify_should_fail_on_interior_whitespace_in_absolute_url() {
    assert_eq!(
        Err(HrefError::Whitespace),
        classify("https://example.com/my cover")
    );
    assert_eq!(Err(HrefError::Whitespace), classify("https://example.com/a\tb"));
}

#[test]
fn classify_should_fail_on_https_without_exact_prefix() {
    for href in [
        "https:example.com",
        "https:/example.com",
        "HTTPS://example.com",
        "Https://example.com",
    ] {
        assert!(!is_well_formed(href));
        assert_eq!(Err(HrefError::UnknownForm), classify(href), "{href}");
    }
}

#[test]
fn classify_should_fail_on_protocol_relative() {
    assert_eq!(Err(HrefError::ProtocolRelative), classify("//example.com/blog"));
}

#[test]
fn classify_should_fail_on_bare_path() {
    assert_eq!(Err(HrefError::UnknownForm), classify("blog"));
}

#[test]
fn classify_should_fail_on_other_schemes() {
    assert_eq!(
        Err(HrefError::UnsupportedScheme("http".to_owned())),
        classify("http://example.com")
    );
    assert_eq!(
        Err(HrefError::UnsupportedScheme("ftp".to_owned())),
        classify("ftp://example.com")
    );
    assert_eq!(
        Err(HrefError::UnsupportedScheme("mailto".to_owned())),
        classify("mailto:someone@example.com")
    );
}

#[test]
fn classify_should_fail_on_malformed_url() {
    assert!(matches!(classify("https://"), Err(HrefError::Malformed(_))));
}

#[test]
fn asset_paths() {
    assert!(is_valid_asset_path("/static/images/cover3.jpg"));
    assert!(is_valid_asset_path("/static/images/tiki-etl/tiki.png"));
    assert!(!is_valid_asset_path(""));
    assert!(!is_valid_asset_path("/"));
    assert!(!is_valid_asset_path("static/images/cover3.jpg"));
    assert!(!is_valid_asset_path("//cdn.example.com/cover3.jpg"));
    assert!(!is_valid_asset_path("/static/my cover.jpg"));
    assert!(!is_valid_asset_path("/static/cover.jpg?v=1"));
    assert!(!is_valid_asset_path("https://example.com/cover.jpg"));
}

#[test]
fn well_formed_asset_paths() {
    assert!(is_well_formed_asset_path("/static/images/cover3.jpg"));
    assert!(!is_well_formed_asset_path("/"));
    assert!(!is_well_formed_asset_path("//cdn.example.com/cover3.jpg"));
    assert!(!is_well_formed_asset_path("cover3.jpg"));
}
