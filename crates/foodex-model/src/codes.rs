//! Validated term codes and the closed facet-group set.
//!
//! A FoodEx2 term code is five uppercase alphanumerics; a facet group is one
//! of the 29 assigned `Fnn` identifiers (F05 and F13-F16 are reserved and
//! rejected). The group carries the authoritative group-to-hierarchy
//! mapping and the single-cardinality flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A five-character FoodEx2 term code (e.g. `A01DJ`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCode(String);

impl TermCode {
    /// Validate and wrap a raw code.
    pub fn new(code: impl Into<String>) -> Result<Self, ModelError> {
        let code = code.into();
        if Self::is_valid(&code) {
            Ok(Self(code))
        } else {
            Err(ModelError::InvalidTermCode(code))
        }
    }

    /// Check the five-uppercase-alphanumerics shape without allocating.
    pub fn is_valid(code: &str) -> bool {
        code.len() == 5
            && code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TermCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TermCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A facet group identifier (`F01`..`F34`, gaps reserved).
///
/// Each group is permanently paired with exactly one catalogue hierarchy;
/// descriptors used under the group must be members of that hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetGroup {
    F01,
    F02,
    F03,
    F04,
    F06,
    F07,
    F08,
    F09,
    F10,
    F11,
    F12,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,
    F26,
    F27,
    F28,
    F29,
    F30,
    F31,
    F32,
    F33,
    F34,
}

/// All assigned facet groups, in id order.
pub const ALL_FACET_GROUPS: &[FacetGroup] = &[
    FacetGroup::F01,
    FacetGroup::F02,
    FacetGroup::F03,
    FacetGroup::F04,
    FacetGroup::F06,
    FacetGroup::F07,
    FacetGroup::F08,
    FacetGroup::F09,
    FacetGroup::F10,
    FacetGroup::F11,
    FacetGroup::F12,
    FacetGroup::F17,
    FacetGroup::F18,
    FacetGroup::F19,
    FacetGroup::F20,
    FacetGroup::F21,
    FacetGroup::F22,
    FacetGroup::F23,
    FacetGroup::F24,
    FacetGroup::F25,
    FacetGroup::F26,
    FacetGroup::F27,
    FacetGroup::F28,
    FacetGroup::F29,
    FacetGroup::F30,
    FacetGroup::F31,
    FacetGroup::F32,
    FacetGroup::F33,
    FacetGroup::F34,
];

impl FacetGroup {
    /// Returns the canonical id string (e.g. `"F28"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetGroup::F01 => "F01",
            FacetGroup::F02 => "F02",
            FacetGroup::F03 => "F03",
            FacetGroup::F04 => "F04",
            FacetGroup::F06 => "F06",
            FacetGroup::F07 => "F07",
            FacetGroup::F08 => "F08",
            FacetGroup::F09 => "F09",
            FacetGroup::F10 => "F10",
            FacetGroup::F11 => "F11",
            FacetGroup::F12 => "F12",
            FacetGroup::F17 => "F17",
            FacetGroup::F18 => "F18",
            FacetGroup::F19 => "F19",
            FacetGroup::F20 => "F20",
            FacetGroup::F21 => "F21",
            FacetGroup::F22 => "F22",
            FacetGroup::F23 => "F23",
            FacetGroup::F24 => "F24",
            FacetGroup::F25 => "F25",
            FacetGroup::F26 => "F26",
            FacetGroup::F27 => "F27",
            FacetGroup::F28 => "F28",
            FacetGroup::F29 => "F29",
            FacetGroup::F30 => "F30",
            FacetGroup::F31 => "F31",
            FacetGroup::F32 => "F32",
            FacetGroup::F33 => "F33",
            FacetGroup::F34 => "F34",
        }
    }

    /// The catalogue hierarchy whose members are the valid descriptors for
    /// this group.
    pub fn hierarchy(&self) -> &'static str {
        match self {
            FacetGroup::F01 => "source",
            FacetGroup::F02 => "part",
            FacetGroup::F03 => "state",
            FacetGroup::F04 => "ingred",
            FacetGroup::F06 => "medium",
            FacetGroup::F07 => "fat",
            FacetGroup::F08 => "sweet",
            FacetGroup::F09 => "fort",
            FacetGroup::F10 => "qual",
            FacetGroup::F11 => "alcohol",
            FacetGroup::F12 => "dough",
            FacetGroup::F17 => "cookext",
            FacetGroup::F18 => "packformat",
            FacetGroup::F19 => "packmat",
            FacetGroup::F20 => "partcon",
            FacetGroup::F21 => "prod",
            FacetGroup::F22 => "place",
            FacetGroup::F23 => "targcon",
            FacetGroup::F24 => "use",
            FacetGroup::F25 => "riskingred",
            FacetGroup::F26 => "gen",
            FacetGroup::F27 => "racsource",
            FacetGroup::F28 => "process",
            FacetGroup::F29 => "fpurpose",
            FacetGroup::F30 => "replev",
            FacetGroup::F31 => "animage",
            FacetGroup::F32 => "gender",
            FacetGroup::F33 => "legis",
            FacetGroup::F34 => "hostsampled",
        }
    }

    /// Human-readable group label used in interpreted descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            FacetGroup::F01 => "Source",
            FacetGroup::F02 => "Part-nature",
            FacetGroup::F03 => "Physical state",
            FacetGroup::F04 => "Ingredient",
            FacetGroup::F06 => "Production medium",
            FacetGroup::F07 => "Fat content",
            FacetGroup::F08 => "Sweetening agent",
            FacetGroup::F09 => "Fortification agent",
            FacetGroup::F10 => "Qualitative info",
            FacetGroup::F11 => "Alcohol content",
            FacetGroup::F12 => "Dough mass",
            FacetGroup::F17 => "Extent of cooking",
            FacetGroup::F18 => "Packaging format",
            FacetGroup::F19 => "Packaging material",
            FacetGroup::F20 => "Part consumed",
            FacetGroup::F21 => "Production method",
            FacetGroup::F22 => "Place of origin",
            FacetGroup::F23 => "Target consumer",
            FacetGroup::F24 => "Intended use",
            FacetGroup::F25 => "Risk ingredient",
            FacetGroup::F26 => "Generic term",
            FacetGroup::F27 => "Source commodities",
            FacetGroup::F28 => "Process",
            FacetGroup::F29 => "Food purpose",
            FacetGroup::F30 => "Reporting level",
            FacetGroup::F31 => "Animal age",
            FacetGroup::F32 => "Gender",
            FacetGroup::F33 => "Legislation",
            FacetGroup::F34 => "Host sampled",
        }
    }

    /// Groups that admit at most one explicit facet per expression.
    pub fn single_cardinality(&self) -> bool {
        matches!(
            self,
            FacetGroup::F01
                | FacetGroup::F02
                | FacetGroup::F03
                | FacetGroup::F07
                | FacetGroup::F11
                | FacetGroup::F22
                | FacetGroup::F24
                | FacetGroup::F26
                | FacetGroup::F30
                | FacetGroup::F32
                | FacetGroup::F34
        )
    }
}

impl fmt::Display for FacetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetGroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let group = ALL_FACET_GROUPS
            .iter()
            .find(|group| group.as_str() == s)
            .copied();
        group.ok_or_else(|| ModelError::InvalidFacetGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_code_shape() {
        assert!(TermCode::new("A01DJ").is_ok());
        assert!(TermCode::new("A0F6E").is_ok());
        assert!(TermCode::new("a01dj").is_err());
        assert!(TermCode::new("A01D").is_err());
        assert!(TermCode::new("A01DJX").is_err());
        assert!(TermCode::new("A01D!").is_err());
    }

    #[test]
    fn facet_group_round_trip() {
        for group in ALL_FACET_GROUPS {
            assert_eq!(group.as_str().parse::<FacetGroup>().unwrap(), *group);
        }
    }

    #[test]
    fn reserved_groups_rejected() {
        for reserved in ["F05", "F13", "F14", "F15", "F16", "F35", "F00"] {
            assert!(reserved.parse::<FacetGroup>().is_err(), "{reserved}");
        }
    }

    #[test]
    fn group_hierarchy_mapping() {
        assert_eq!(FacetGroup::F01.hierarchy(), "source");
        assert_eq!(FacetGroup::F27.hierarchy(), "racsource");
        assert_eq!(FacetGroup::F28.hierarchy(), "process");
        assert_eq!(FacetGroup::F34.hierarchy(), "hostsampled");
    }

    #[test]
    fn single_cardinality_groups() {
        let singles: Vec<&str> = ALL_FACET_GROUPS
            .iter()
            .filter(|g| g.single_cardinality())
            .map(|g| g.as_str())
            .collect();
        assert_eq!(
            singles,
            ["F01", "F02", "F03", "F07", "F11", "F22", "F24", "F26", "F30", "F32", "F34"]
        );
    }
}
