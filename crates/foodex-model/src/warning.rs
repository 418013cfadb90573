//! Warnings, counts and the validation result surface.

use serde::{Deserialize, Serialize};

use crate::enums::Severity;

/// A single validation finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    /// Rule id (`BR19`, `VBA-NOTFOUND`, ...).
    pub rule: String,
    /// Rendered message text.
    pub message: String,
    pub severity: Severity,
    /// Codes of the term(s) that triggered the finding, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub terms: Vec<String>,
}

impl Warning {
    pub fn is_blocking(&self, high_is_blocking: bool) -> bool {
        match self.severity {
            Severity::Error => true,
            Severity::High => high_is_blocking,
            Severity::Low | Severity::None => false,
        }
    }
}

/// Warning tallies by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningCounts {
    pub error: usize,
    pub high: usize,
    pub low: usize,
    pub info: usize,
    pub total: usize,
}

impl WarningCounts {
    pub fn tally(warnings: &[Warning]) -> Self {
        let mut counts = Self::default();
        for warning in warnings {
            match warning.severity {
                Severity::Error => counts.error += 1,
                Severity::High => counts.high += 1,
                Severity::Low => counts.low += 1,
                Severity::None => counts.info += 1,
            }
            counts.total += 1;
        }
        counts
    }
}

/// Base-term details echoed back in the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseTermSummary {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub term_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_level: Option<String>,
}

/// One explicit facet of the expression, with resolved names when the
/// descriptor exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetSummary {
    pub group: String,
    pub group_label: String,
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor_name: Option<String>,
}

/// Outcome of validating one expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub original_code: String,
    /// Canonical form after implicit-facet removal; absent when nothing was
    /// stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_term: Option<BaseTermSummary>,
    pub facets: Vec<FacetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreted_description: Option<String>,
    pub warnings: Vec<Warning>,
    /// Maximum severity over all warnings.
    pub severity: Severity,
    pub warning_counts: WarningCounts,
}

impl ValidationResult {
    /// Blocking findings: `ERROR` and `HIGH`.
    pub fn hard_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| w.severity >= Severity::High)
    }

    /// Advisory findings: `LOW`.
    pub fn soft_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| w.severity == Severity::Low)
    }

    /// Informational findings: `NONE`.
    pub fn info_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(|w| w.severity == Severity::None)
    }
}
