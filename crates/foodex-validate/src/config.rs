//! Validation engine configuration.
//!
//! The BR13 and BR28 code sets are catalogue-version-specific: the MTX
//! release enumerates which physical states create derivatives and which
//! processes count as dehydration or reconstitution. The defaults below
//! track the current release; deployments pinning another release override
//! them at construction.

use std::collections::BTreeSet;

use foodex_model::{TermCode, ValidationContext};

/// Physical-state descriptors (F03) that turn a raw commodity into a
/// derivative: dried, concentrated, powdered.
const DEFAULT_DERIVATIVE_STATES: &[&str] = &["A0BZS", "A0BZT", "A0BZX"];

/// Process descriptors (F28) indicating dehydration or concentration.
const DEFAULT_DEHYDRATION_PROCESSES: &[&str] = &["A07KF", "A07KG", "A07KJ"];

/// Process descriptors (F28) indicating reconstitution or dilution.
const DEFAULT_RECONSTITUTION_PROCESSES: &[&str] = &["A07MR", "A07MS"];

/// Base-term name fragments that mark a dehydrated/concentrated food
/// (BR28 fallback when the implicit-facet test is inconclusive).
pub const DEHYDRATION_NAME_HINTS: &[&str] = &["concentrate", "powder", "dried", "dehydrated"];

/// Descriptor name fragments that mark a reconstitution/dilution process.
pub const RECONSTITUTION_NAME_HINTS: &[&str] = &["reconstitut", "dilut"];

/// Knobs for the validation engine.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Caller context; BR14/BR15 are reserved for ICT/DCF and stay inert.
    pub context: ValidationContext,
    /// Whether a HIGH warning invalidates the expression (the default).
    pub high_is_blocking: bool,
    /// Run the business rules even when a structural ERROR was found.
    pub run_rules_after_structural_error: bool,
    /// BR13: F03 descriptors that create a derivative.
    pub derivative_states: BTreeSet<TermCode>,
    /// BR28: F28 descriptors indicating dehydration/concentration.
    pub dehydration_processes: BTreeSet<TermCode>,
    /// BR28: F28 descriptors indicating reconstitution/dilution.
    pub reconstitution_processes: BTreeSet<TermCode>,
}

fn default_set(codes: &[&str]) -> BTreeSet<TermCode> {
    codes
        .iter()
        .map(|c| TermCode::new(*c).expect("default code sets are well-formed"))
        .collect()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            context: ValidationContext::default(),
            high_is_blocking: true,
            run_rules_after_structural_error: false,
            derivative_states: default_set(DEFAULT_DERIVATIVE_STATES),
            dehydration_processes: default_set(DEFAULT_DEHYDRATION_PROCESSES),
            reconstitution_processes: default_set(DEFAULT_RECONSTITUTION_PROCESSES),
        }
    }
}

impl ValidatorConfig {
    #[must_use]
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn high_is_blocking(mut self, blocking: bool) -> Self {
        self.high_is_blocking = blocking;
        self
    }

    #[must_use]
    pub fn run_rules_after_structural_error(mut self, run: bool) -> Self {
        self.run_rules_after_structural_error = run;
        self
    }

    #[must_use]
    pub fn with_derivative_states(mut self, states: BTreeSet<TermCode>) -> Self {
        self.derivative_states = states;
        self
    }

    #[must_use]
    pub fn with_dehydration_processes(mut self, processes: BTreeSet<TermCode>) -> Self {
        self.dehydration_processes = processes;
        self
    }

    #[must_use]
    pub fn with_reconstitution_processes(mut self, processes: BTreeSet<TermCode>) -> Self {
        self.reconstitution_processes = processes;
        self
    }
}
