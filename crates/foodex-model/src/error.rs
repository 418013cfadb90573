use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid term code '{0}': expected five uppercase alphanumerics")]
    InvalidTermCode(String),

    #[error("invalid facet group '{0}': not in the FoodEx2 group set")]
    InvalidFacetGroup(String),

    #[error("invalid facet reference '{0}': expected GROUP.DESCRIPTOR")]
    InvalidFacetRef(String),

    #[error("invalid ordinal code '{0}'")]
    InvalidOrdinal(String),

    #[error("unknown term type '{0}'")]
    InvalidTermType(String),

    #[error("unknown term status '{0}'")]
    InvalidTermStatus(String),

    #[error("unknown severity '{0}'")]
    InvalidSeverity(String),

    #[error("unknown validation context '{0}'")]
    InvalidContext(String),

    #[error("invalid expression '{0}': {reason}", reason = .1)]
    InvalidExpression(String, String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
