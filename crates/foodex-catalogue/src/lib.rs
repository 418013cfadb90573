#![deny(unsafe_code)]

//! FoodEx2 catalogue store and loaders.
//!
//! This crate loads the static reference data - terms, hierarchy edges,
//! the forbidden-process table and rule-message overrides - from offline
//! CSV files and serves read-only queries over them.
//!
//! # Catalogue Directory Structure
//!
//! ```text
//! catalogue/
//! ├── terms.csv               # one row per term (MTX export columns)
//! ├── term_hierarchies.csv    # one row per (term, hierarchy) placement
//! ├── BR_Data.csv             # forbidden processes + ordinals (';'-delimited)
//! └── warning_messages.csv    # optional rule-message overrides (';'-delimited)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use foodex_catalogue::{Catalogue, HierarchyResolver, hierarchy};
//! use std::sync::Arc;
//!
//! let catalogue = Arc::new(Catalogue::load(&path)?);
//! let resolver = HierarchyResolver::new(Arc::clone(&catalogue));
//! let reportable = catalogue.is_member(&code, hierarchy::REPORT);
//! ```

pub mod csv;
pub mod csv_utils;
pub mod error;
pub mod resolver;
pub mod store;

pub use csv::hierarchies::HierarchyEdge;
pub use error::{CatalogueError, Result};
pub use resolver::HierarchyResolver;
pub use store::{Catalogue, CatalogueSummary, hierarchy};
