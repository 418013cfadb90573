//! The validation pipeline.
//!
//! Data flows one way: tokenizer, structural checks, normalization, the
//! business-rule table, aggregation. The catalogue is shared immutably;
//! per-expression state lives on the stack, so independent expressions
//! validate in parallel without coordination.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use foodex_catalogue::{Catalogue, CatalogueError, HierarchyResolver};
use foodex_model::{Severity, ValidationResult};

use crate::config::ValidatorConfig;
use crate::normalize::strip_implicit;
use crate::parser::parse_expression;
use crate::report::build_result;
use crate::rules::{RuleInput, evaluate, success_marker};
use crate::structural::check_structure;

/// Validates FoodEx2 expressions against a loaded catalogue.
///
/// Cheap to share: the catalogue is behind an `Arc` and the resolver's
/// memoization is internally synchronized.
pub struct Validator {
    catalogue: Arc<Catalogue>,
    resolver: HierarchyResolver,
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self::with_config(catalogue, ValidatorConfig::default())
    }

    pub fn with_config(catalogue: Arc<Catalogue>, config: ValidatorConfig) -> Self {
        let resolver = HierarchyResolver::new(Arc::clone(&catalogue));
        Self {
            catalogue,
            resolver,
            config,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn resolver(&self) -> &HierarchyResolver {
        &self.resolver
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a single expression.
    ///
    /// Expression-level faults come back as warnings inside the result;
    /// `Err` means the catalogue itself is inconsistent (e.g. a hierarchy
    /// cycle) and the process should not keep serving requests.
    pub fn validate(&self, input: &str) -> Result<ValidationResult, CatalogueError> {
        let original = input.trim();
        let outcome = parse_expression(original, self.catalogue.rule_registry());
        let mut warnings = outcome.warnings;

        let Some(expression) = outcome.expression else {
            return Ok(build_result(
                original,
                None,
                None,
                None,
                warnings,
                &self.catalogue,
                &self.config,
            ));
        };

        warnings.extend(check_structure(&expression, &self.catalogue));

        let base = self.catalogue.term(&expression.base);

        // Normalization needs the base term's implicit facets; without a
        // resolved base the expression is served as-is.
        let (expression, cleaned_code) = match base {
            Some(term) => {
                let normalized =
                    strip_implicit(&expression, &term.implicit_facets, self.catalogue.rule_registry());
                warnings.extend(normalized.warning);
                (normalized.expression, normalized.cleaned_code)
            }
            None => (expression, None),
        };

        let has_error = warnings.iter().any(|w| w.severity == Severity::Error);
        let run_rules = base.is_some()
            && (!has_error || self.config.run_rules_after_structural_error);

        if let Some(base) = base
            && run_rules
        {
            let input = RuleInput {
                base,
                explicit: &expression.facets,
                implicit: &base.implicit_facets,
                catalogue: &self.catalogue,
                resolver: &self.resolver,
                config: &self.config,
            };
            warnings.extend(evaluate(&input)?);
            let marker = success_marker(&input, &warnings);
            warnings.extend(marker);
        }

        debug!(
            code = %expression.base,
            warning_count = warnings.len(),
            "expression validated"
        );

        Ok(build_result(
            original,
            Some(&expression),
            cleaned_code,
            base,
            warnings,
            &self.catalogue,
            &self.config,
        ))
    }

    /// Validate many expressions; results mirror the input order.
    ///
    /// The catalogue is read-only, so expressions fan out over the rayon
    /// pool; the only shared mutable state is the resolver's memoization
    /// table, which is lock-guarded.
    pub fn validate_batch<S>(&self, inputs: &[S]) -> Result<Vec<ValidationResult>, CatalogueError>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.validate(input.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .finish()
    }
}
