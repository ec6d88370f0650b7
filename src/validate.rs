// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

//! Validation of content tables
//!
//! The built-in tables are already shape-checked at compile time. These
//! functions perform the complete check, including URL parsing and
//! duplicate detection, and report every offending record.

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
};

use derive_more::{Display, Error};

use crate::{
    href::{self, HrefError},
    nav::{self, NavigationLink},
    projects::{self, Project},
};

/// The validated table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Table {
    /// Header navigation links.
    #[display("header_nav_links")]
    HeaderNavLinks,

    /// Projects.
    #[display("projects")]
    Projects,
}

/// The offending field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    /// `href`
    #[display("href")]
    Href,

    /// `title`
    #[display("title")]
    Title,

    /// `description`
    #[display("description")]
    Description,

    /// `img_src`
    #[display("img_src")]
    ImgSrc,
}

/// Why a field is invalid
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Reason {
    /// Required text is empty or blank.
    #[display("empty")]
    Empty,

    /// Invalid link target.
    #[display("invalid reference \"{value}\": {error}")]
    Href {
        /// The offending value
        value: String,
        /// The cause
        error: HrefError,
    },

    /// Invalid asset path.
    #[display("invalid asset path \"{_0}\"")]
    AssetPath(String),

    /// Same value as an earlier record.
    #[display("duplicate of record {_0}")]
    Duplicate(usize),
}

/// A single offending field
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{table}[{index}].{field}: {reason}")]
pub struct ValidationError {
    /// The table
    pub table: Table,

    /// The record index within the table
    pub index: usize,

    /// The field
    pub field: Field,

    /// The reason
    pub reason: Reason,
}

/// All offending fields of a table, in record order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors(#[error(not(source))] pub Vec<ValidationError>);

impl ValidationErrors {
    /// Return the individual errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(errors) = self;
        write!(f, "{} invalid field(s): ", errors.len())?;
        f.write_str(&itertools::join(errors, "; "))
    }
}

struct Collector {
    table: Table,
    errors: Vec<ValidationError>,
}

impl Collector {
    const fn new(table: Table) -> Self {
        Self {
            table,
            errors: Vec::new(),
        }
    }

    fn push(&mut self, index: usize, field: Field, reason: Reason) {
        let error = ValidationError {
            table: self.table,
            index,
            field,
            reason,
        };
        log::warn!("{error}");
        self.errors.push(error);
    }

    fn check_text(&mut self, index: usize, field: Field, text: &str) {
        if text.trim().is_empty() {
            self.push(index, field, Reason::Empty);
        }
    }

    fn check_href(&mut self, index: usize, value: &str) {
        if let Err(error) = href::classify(value) {
            self.push(
                index,
                Field::Href,
                Reason::Href {
                    value: value.to_owned(),
                    error,
                },
            );
        }
    }

    fn finish(self, len: usize) -> Result<(), ValidationErrors> {
        let Self { table, errors } = self;
        if errors.is_empty() {
            log::debug!("Validated {len} record(s) of {table}");
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Index of the first record per value.
#[derive(Default)]
struct FirstSeen<'a>(HashMap<&'a str, usize>);

impl<'a> FirstSeen<'a> {
    /// Returns the index of the first record if `value` has been seen before.
    fn check(&mut self, value: &'a str, index: usize) -> Option<usize> {
        match self.0.entry(value) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(index);
                None
            }
        }
    }
}

/// Validate header navigation links.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every empty title, invalid or
/// duplicate link target, and duplicate title.
pub fn validate_nav_links(links: &[NavigationLink]) -> Result<(), ValidationErrors> {
    let mut collector = Collector::new(Table::HeaderNavLinks);
    let mut hrefs = FirstSeen::default();
    let mut titles = FirstSeen::default();
    for (index, link) in links.iter().enumerate() {
        collector.check_href(index, link.href);
        collector.check_text(index, Field::Title, link.title);
        if let Some(first) = hrefs.check(link.href, index) {
            collector.push(index, Field::Href, Reason::Duplicate(first));
        }
        if let Some(first) = titles.check(link.title, index) {
            collector.push(index, Field::Title, Reason::Duplicate(first));
        }
    }
    collector.finish(links.len())
}

/// Validate projects.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every empty title or description,
/// invalid link target or image path, and duplicate title or link target.
pub fn validate_projects(projects: &[Project]) -> Result<(), ValidationErrors> {
    let mut collector = Collector::new(Table::Projects);
    let mut hrefs = FirstSeen::default();
    let mut titles = FirstSeen::default();
    for (index, project) in projects.iter().enumerate() {
        collector.check_text(index, Field::Title, project.title);
        collector.check_text(index, Field::Description, project.description);
        if let Some(href) = project.href {
            collector.check_href(index, href);
            if let Some(first) = hrefs.check(href, index) {
                collector.push(index, Field::Href, Reason::Duplicate(first));
            }
        }
        if let Some(img_src) = project.img_src {
            if !href::is_valid_asset_path(img_src) {
                collector.push(index, Field::ImgSrc, Reason::AssetPath(img_src.to_owned()));
            }
        }
        if let Some(first) = titles.check(project.title, index) {
            collector.push(index, Field::Title, Reason::Duplicate(first));
        }
    }
    collector.finish(projects.len())
}

/// Validate all built-in tables.
///
/// # Errors
///
/// Returns the first table's [`ValidationErrors`] that failed.
pub fn validate_all() -> anyhow::Result<()> {
    validate_nav_links(nav::header_nav_links())?;
    validate_projects(projects::projects())?;
    Ok(())
}
