// SPDX-License-Identifier: PMPL-1.0-or-later

//! art-locales: locale catalog pipeline for art-piece descriptions.
//!
//! The site ships one `art-pieces.json` per locale under
//! `public/locales/<locale>/`. This crate provides the three pieces that
//! keep those files healthy:
//!
//! 1. **Loader**: reads a `.json` or `.hjson` document into a generic tree.
//! 2. **Converter**: one-shot migration from an array of records tagged with
//!    `art_id` to a catalog keyed by `art_id`.
//! 3. **Validator**: shape and content checks over every locale catalog, with
//!    stricter pinned expectations for the reference locale (`en`).

pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod locale;
pub mod report;
pub mod types;
pub mod validate;

pub use error::{LocaleError, Result};
