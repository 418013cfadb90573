//! Type-safe enumerations for FoodEx2 catalogue metadata.
//!
//! These enums replace the single-character and string encodings used in
//! the catalogue export with closed, pattern-matchable types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Term typology from the catalogue's `termType` column.
///
/// The type drives most business-rule dispatch: raw commodities and
/// derivatives accept source facets under different conditions, composites
/// refuse them outright, and facet terms may never be base terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermType {
    /// `r` - raw commodity.
    Raw,
    /// `d` - derivative.
    Derivative,
    /// `c` - aggregated composite.
    Composite,
    /// `s` - simple composite.
    SimpleComposite,
    /// `f` - facet descriptor.
    Facet,
    /// `g` - grouping term.
    Group,
    /// `h` - hierarchy-only term.
    Hierarchy,
    /// `n` - non-specific term.
    NonSpecific,
}

impl TermType {
    /// The one-character code as stored in the catalogue.
    pub fn as_code(&self) -> char {
        match self {
            TermType::Raw => 'r',
            TermType::Derivative => 'd',
            TermType::Composite => 'c',
            TermType::SimpleComposite => 's',
            TermType::Facet => 'f',
            TermType::Group => 'g',
            TermType::Hierarchy => 'h',
            TermType::NonSpecific => 'n',
        }
    }

    /// True for both composite flavours (`c` and `s`).
    pub fn is_composite(&self) -> bool {
        matches!(self, TermType::Composite | TermType::SimpleComposite)
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for TermType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" => Ok(TermType::Raw),
            "d" => Ok(TermType::Derivative),
            "c" => Ok(TermType::Composite),
            "s" => Ok(TermType::SimpleComposite),
            "f" => Ok(TermType::Facet),
            "g" => Ok(TermType::Group),
            "h" => Ok(TermType::Hierarchy),
            "n" => Ok(TermType::NonSpecific),
            _ => Err(ModelError::InvalidTermType(s.to_string())),
        }
    }
}

/// Publication status of a catalogue term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TermStatus {
    Approved,
    Dismissed,
}

impl TermStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermStatus::Approved => "APPROVED",
            TermStatus::Dismissed => "DISMISSED",
        }
    }
}

impl fmt::Display for TermStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "APPROVED" => Ok(TermStatus::Approved),
            "DISMISSED" => Ok(TermStatus::Dismissed),
            _ => Err(ModelError::InvalidTermStatus(s.to_string())),
        }
    }
}

/// Severity of a validation warning, ordered `NONE < LOW < HIGH < ERROR`.
///
/// `ERROR` marks structural faults, `HIGH` blocking business-rule
/// violations (by default), `LOW` advisories, `NONE` informational
/// success markers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    None,
    Low,
    High,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Low => "LOW",
            Severity::High => "HIGH",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" | "INFO" => Ok(Severity::None),
            "LOW" => Ok(Severity::Low),
            "HIGH" => Ok(Severity::High),
            "ERROR" => Ok(Severity::Error),
            _ => Err(ModelError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Caller context for context-gated rules.
///
/// BR14 and BR15 are reserved for the ICT and DCF contexts; until they are
/// defined the context has no observable effect on the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationContext {
    Ict,
    Dcf,
    #[default]
    Internal,
    External,
}

impl FromStr for ValidationContext {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ict" => Ok(ValidationContext::Ict),
            "dcf" => Ok(ValidationContext::Dcf),
            "internal" => Ok(ValidationContext::Internal),
            "external" => Ok(ValidationContext::External),
            _ => Err(ModelError::InvalidContext(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_type_codes_round_trip() {
        for code in ["r", "d", "c", "s", "f", "g", "h", "n"] {
            let ty: TermType = code.parse().unwrap();
            assert_eq!(ty.as_code().to_string(), code);
        }
        assert!("x".parse::<TermType>().is_err());
    }

    #[test]
    fn composite_covers_both_flavours() {
        assert!(TermType::Composite.is_composite());
        assert!(TermType::SimpleComposite.is_composite());
        assert!(!TermType::Raw.is_composite());
        assert!(!TermType::Derivative.is_composite());
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::None < Severity::Low);
        assert!(Severity::Low < Severity::High);
        assert!(Severity::High < Severity::Error);
        assert_eq!(
            [Severity::Low, Severity::Error, Severity::High]
                .into_iter()
                .max(),
            Some(Severity::Error)
        );
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            "approved".parse::<TermStatus>().unwrap(),
            TermStatus::Approved
        );
        assert_eq!(
            "DISMISSED".parse::<TermStatus>().unwrap(),
            TermStatus::Dismissed
        );
    }
}
