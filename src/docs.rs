// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation

#![allow(rustdoc::invalid_rust_codeblocks)] // Do not interpret code blocks, e.g. license comments.
#![doc = include_str!("../README.md")]
