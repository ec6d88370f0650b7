// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

//! Portfolio projects

use crate::href;

/// A portfolio entry
///
/// The link and the image are independently optional. A project without
/// a link is informational only and must not be rendered as an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Project {
    /// The title
    pub title: &'static str,

    /// Free-form prose, possibly with embedded line breaks
    pub description: &'static str,

    /// The optional link target
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub href: Option<&'static str>,

    /// The optional site-relative path of a cover image
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub img_src: Option<&'static str>,
}

impl Project {
    /// Create a new entry.
    ///
    /// The arguments are not validated.
    #[must_use]
    pub const fn new(
        title: &'static str,
        description: &'static str,
        href: Option<&'static str>,
        img_src: Option<&'static str>,
    ) -> Self {
        Self {
            title,
            description,
            href,
            img_src,
        }
    }

    /// Return the title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Return the raw description.
    ///
    /// See also [`Project::normalized_description()`].
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Return the description with all whitespace runs collapsed into a single space.
    #[must_use]
    pub fn normalized_description(&self) -> String {
        itertools::join(self.description.split_whitespace(), " ")
    }

    /// Return the link target, if any.
    #[must_use]
    pub const fn href(&self) -> Option<&'static str> {
        self.href
    }

    /// Check if the project should be rendered as a link.
    #[must_use]
    pub const fn is_link(&self) -> bool {
        self.href.is_some()
    }

    /// Return the image path, if any.
    #[must_use]
    pub const fn img_src(&self) -> Option<&'static str> {
        self.img_src
    }

    /// Return the image path or the given placeholder.
    #[must_use]
    pub fn img_src_or<'a>(&self, fallback: &'a str) -> &'a str {
        self.img_src.unwrap_or(fallback)
    }

    /// Check the shape of the entry in `const` context.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        if self.title.is_empty() || self.description.is_empty() {
            return false;
        }
        if let Some(href) = self.href {
            if !href::is_well_formed(href) {
                return false;
            }
        }
        match self.img_src {
            Some(img_src) => href::is_well_formed_asset_path(img_src),
            None => true,
        }
    }
}

const PROJECTS_DATA: &[Project] = &[
    Project::new(
        "Tiki Recommender ETL Pipeline",
        "End-to-end ETL data pipeline that automatically scrapes data from Tiki.vn, stores it in MinIO (data
    lake), transforms data and trains the model using Apache Spark, and loads the processed data into PostgreSQL
    (data warehouse), orchestrated by Dagster and containerized with Docker.",
        Some("/blog/tiki-recommender-etl-pipeline"),
        Some("/static/images/tiki-etl/tiki.png"),
    ),
    Project::new(
        "Comprehensive Performance Analysis between Hadoop and Spark",
        "This study developed a fully distributed system on Linux virtual machines using Hadoop and Spark,
    benchmarking various parameters to optimize performance and evaluate the efficiency of Apache Hadoop and
    Apache Spark in large-scale data processing.",
        Some("https://github.com/nchn471/performance-analysis-hadoop-spark"),
        Some("/static/images/tiki-etl/cover.png"),
    ),
    Project::new(
        "Developer Salary Prediction Website",
        "A machine learning project that predicts developer salaries based on experience, country, education,
    and technology stack. The project also includes visualizations to analyze developer’s market trends using the
    Stack Overflow 2023 Survey Dataset.",
        Some("https://github.com/nchn471/Developer-Salary-Prediction"),
        Some("/static/images/cover3.jpg"),
    ),
];

const _: () = assert!(all_well_formed(PROJECTS_DATA), "malformed project");

/// The projects in display order
pub static PROJECTS: &[Project] = PROJECTS_DATA;

const fn all_well_formed(projects: &[Project]) -> bool {
    let mut i = 0;
    while i < projects.len() {
        if !projects[i].is_well_formed() {
            return false;
        }
        i += 1;
    }
    true
}

/// Return the projects in display order.
#[must_use]
pub fn projects() -> &'static [Project] {
    PROJECTS
}
