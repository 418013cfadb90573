//! Hierarchy reachability queries with memoization.
//!
//! Ancestor lookup dominates validation cost, so chains are computed once
//! per `(code, hierarchy)` and cached for the lifetime of the catalogue
//! handle. Values are immutable `Arc` snapshots, safe to share across
//! request workers; the cache itself is guarded by an `RwLock`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use foodex_model::TermCode;

use crate::error::{CatalogueError, Result};
use crate::store::Catalogue;

/// Traversal bound; a valid catalogue is nowhere near this deep, so hitting
/// it means a parent-link cycle.
const MAX_DEPTH: usize = 64;

pub struct HierarchyResolver {
    catalogue: Arc<Catalogue>,
    cache: RwLock<HashMap<(TermCode, String), Arc<[TermCode]>>>,
}

impl HierarchyResolver {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self {
            catalogue,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Ancestors of `code` in `hierarchy`, nearest first, excluding the
    /// term itself. A term outside the hierarchy has no ancestors.
    pub fn ancestors(&self, code: &TermCode, hierarchy: &str) -> Result<Arc<[TermCode]>> {
        let key = (code.clone(), hierarchy.to_string());
        if let Some(chain) = self.cache.read().expect("resolver cache poisoned").get(&key) {
            return Ok(Arc::clone(chain));
        }

        let mut chain = Vec::new();
        let mut current = code;
        while let Some(parent) = self.catalogue.parent(current, hierarchy) {
            if chain.len() >= MAX_DEPTH {
                return Err(CatalogueError::Cycle {
                    code: code.to_string(),
                    hierarchy: hierarchy.to_string(),
                });
            }
            chain.push(parent.clone());
            current = parent;
        }

        let chain: Arc<[TermCode]> = chain.into();
        self.cache
            .write()
            .expect("resolver cache poisoned")
            .insert(key, Arc::clone(&chain));
        Ok(chain)
    }

    /// Whether `ancestor` lies strictly above `descendant` in the
    /// hierarchy. Irreflexive: a term is never its own ancestor.
    pub fn is_ancestor(
        &self,
        ancestor: &TermCode,
        descendant: &TermCode,
        hierarchy: &str,
    ) -> Result<bool> {
        if ancestor == descendant {
            return Ok(false);
        }
        Ok(self.ancestors(descendant, hierarchy)?.contains(ancestor))
    }

    /// Whether `descendant` lies strictly below any of the given terms.
    pub fn is_descendant_of_any<'a>(
        &self,
        descendant: &TermCode,
        candidates: impl IntoIterator<Item = &'a TermCode>,
        hierarchy: &str,
    ) -> Result<bool> {
        let chain = self.ancestors(descendant, hierarchy)?;
        for candidate in candidates {
            if candidate != descendant && chain.contains(candidate) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether `parent` is the direct parent of `child`.
    pub fn is_parent_of(&self, parent: &TermCode, child: &TermCode, hierarchy: &str) -> bool {
        self.catalogue.parent(child, hierarchy) == Some(parent)
    }

    /// Whether two distinct terms share a direct parent in the hierarchy.
    pub fn are_siblings(&self, a: &TermCode, b: &TermCode, hierarchy: &str) -> bool {
        if a == b {
            return false;
        }
        match (self.catalogue.parent(a, hierarchy), self.catalogue.parent(b, hierarchy)) {
            (Some(pa), Some(pb)) => pa == pb,
            _ => false,
        }
    }
}

impl std::fmt::Debug for HierarchyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .cache
            .read()
            .map(|cache| cache.len())
            .unwrap_or_default();
        f.debug_struct("HierarchyResolver")
            .field("cached_chains", &cached)
            .finish()
    }
}
