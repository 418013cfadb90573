//! Facet references, parsed expressions and process ordinal codes.
//!
//! A facet is a `(group, descriptor)` pair such as `F28.A07KQ`; equality is
//! on the full pair, so the same descriptor under two groups is two distinct
//! facets. The catalogue's `implicitFacets` column chains facets with `$`
//! or `#` interchangeably; both separators are accepted everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codes::{FacetGroup, TermCode};
use crate::error::ModelError;

/// A single facet: a group id plus a descriptor term code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetRef {
    pub group: FacetGroup,
    pub descriptor: TermCode,
}

impl FacetRef {
    pub fn new(group: FacetGroup, descriptor: TermCode) -> Self {
        Self { group, descriptor }
    }
}

impl fmt::Display for FacetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.descriptor)
    }
}

impl FromStr for FacetRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((group, descriptor)) = s.split_once('.') else {
            return Err(ModelError::InvalidFacetRef(s.to_string()));
        };
        let group: FacetGroup = group
            .parse()
            .map_err(|_| ModelError::InvalidFacetRef(s.to_string()))?;
        let descriptor = TermCode::new(descriptor)
            .map_err(|_| ModelError::InvalidFacetRef(s.to_string()))?;
        Ok(Self { group, descriptor })
    }
}

/// Parse a facet chain such as `F01.A059P$F27.A000A` into facet refs.
///
/// Both `$` and `#` are accepted as separators in any position; empty
/// fragments are skipped.
pub fn parse_facet_list(encoded: &str) -> Result<Vec<FacetRef>, ModelError> {
    encoded
        .split(['$', '#'])
        .filter(|fragment| !fragment.is_empty())
        .map(str::parse)
        .collect()
}

/// A parsed FoodEx2 expression: a base term plus explicit facets.
///
/// Facet order is preserved for display but carries no meaning; set
/// membership governs the semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetExpression {
    pub base: TermCode,
    pub facets: Vec<FacetRef>,
}

impl FacetExpression {
    pub fn new(base: TermCode, facets: Vec<FacetRef>) -> Self {
        Self { base, facets }
    }

    /// All explicit facets belonging to the given group.
    pub fn facets_in_group(&self, group: FacetGroup) -> impl Iterator<Item = &FacetRef> {
        self.facets.iter().filter(move |f| f.group == group)
    }

    pub fn has_group(&self, group: FacetGroup) -> bool {
        self.facets.iter().any(|f| f.group == group)
    }

    /// Canonical serialization: `#` before the first facet, `$` before the
    /// rest.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FacetExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for (idx, facet) in self.facets.iter().enumerate() {
            let sep = if idx == 0 { '#' } else { '$' };
            write!(f, "{sep}{facet}")?;
        }
        Ok(())
    }
}

impl FromStr for FacetExpression {
    type Err = ModelError;

    /// Strict parse of a well-formed expression. The validator's lenient,
    /// warning-collecting parser lives in the engine crate; this one is for
    /// round-tripping canonical forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, rest) = match s.find(['#', '$']) {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };
        let base = TermCode::new(base)
            .map_err(|_| ModelError::InvalidExpression(s.to_string(), "bad base".into()))?;
        let facets = parse_facet_list(rest)
            .map_err(|e| ModelError::InvalidExpression(s.to_string(), e.to_string()))?;
        Ok(Self { base, facets })
    }
}

/// Ordinal code attached to a process descriptor.
///
/// Integer ordinals (`1`, `2.0`) mark mutually exclusive process
/// alternatives at the same categorical level; fractional ordinals sharing
/// an integer part (`1.1`, `1.2`) mark processes that each create a
/// distinct derivative. `0` is non-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessOrdinal {
    integer: u32,
    fraction: u32,
}

impl ProcessOrdinal {
    /// The non-exclusive ordinal assigned to unlisted processes.
    pub const ZERO: ProcessOrdinal = ProcessOrdinal {
        integer: 0,
        fraction: 0,
    };

    pub fn new(integer: u32, fraction: u32) -> Self {
        Self { integer, fraction }
    }

    pub fn integer_part(&self) -> u32 {
        self.integer
    }

    /// True for ordinals like `1.1` whose fractional digits are non-zero.
    pub fn is_fractional(&self) -> bool {
        self.fraction != 0
    }

    /// Ordinal `0` (and `0.0`) carries no exclusivity constraint.
    pub fn is_non_exclusive(&self) -> bool {
        self.integer == 0 && self.fraction == 0
    }
}

impl fmt::Display for ProcessOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction == 0 {
            write!(f, "{}", self.integer)
        } else {
            write!(f, "{}.{}", self.integer, self.fraction)
        }
    }
}

impl FromStr for ProcessOrdinal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ModelError::InvalidOrdinal(s.to_string());
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, "0"),
        };
        let integer = int_part.parse::<u32>().map_err(|_| err())?;
        let fraction = frac_part.parse::<u32>().map_err(|_| err())?;
        Ok(Self { integer, fraction })
    }
}
