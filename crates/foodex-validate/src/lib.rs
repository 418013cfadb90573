#![deny(unsafe_code)]

//! FoodEx2 expression validation.
//!
//! This crate provides the validation engine for FoodEx2 food-classification
//! expressions:
//!
//! - **Parsing**: tokenizes `BASE#GROUP.DESC$...` expressions, accepting
//!   `#` and `$` interchangeably
//! - **Structural checks**: descriptor existence, facet-category
//!   membership, cardinality, duplication
//! - **Normalization**: strips explicit facets already implied by the base
//!   term and records the cleaned canonical form
//! - **Business rules**: the BR01-BR31 rule table, dispatching on term
//!   typology, hierarchy positions, ordinal codes and the
//!   forbidden-process table
//! - **Aggregation**: severity roll-up, warning buckets, interpreted
//!   description
//!
//! Expression-level faults never surface as `Err`; they become typed
//! [`foodex_model::Warning`] values. `Err` is reserved for catalogue
//! inconsistencies (e.g. a hierarchy cycle), which are fatal.
//!
//! # Example
//!
//! ```rust,ignore
//! use foodex_validate::Validator;
//!
//! let validator = Validator::new(catalogue);
//! let result = validator.validate("A0B9Z#F28.A07JS$F01.A0F6E")?;
//! assert!(result.valid);
//! ```

pub mod config;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod rules;
pub mod structural;
pub mod validator;

pub use config::ValidatorConfig;
pub use parser::{ParseOutcome, parse_expression};
pub use rules::{BusinessRule, RuleInput, business_rules};
pub use validator::Validator;
