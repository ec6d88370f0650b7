// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Static content of a portfolio website: the header menu and the projects gallery.
//!
//! Both tables are immutable `'static` data that are shape-checked at compile time.
//! The [`validate`] module performs the complete check.
//!
//! Refer to [`docs`] for more information.

pub mod docs;

pub mod href;
pub use self::href::{HrefError, HrefKind};

pub mod nav;
pub use self::nav::{HEADER_NAV_LINKS, NavigationLink, header_nav_links};

pub mod projects;
pub use self::projects::{PROJECTS, Project, projects};

pub mod validate;
pub use self::validate::{ValidationError, ValidationErrors, validate_all};
