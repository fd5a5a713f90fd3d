//! The canonicalizer: `build()` pipeline
//!
//! Reduces the raw discovery graph to a clean tree of uniquely named,
//! uniquely addressed resources. The passes run once, synchronously, in
//! fixed order:
//!
//! 1. Cycle repair, then DAG-to-tree multi-parent resolution
//! 2. Location resolution (template merge, ancestor concatenation)
//! 3. Multi-location split of parentless resources
//! 4. Sibling merge by shared location
//! 5. Disjoint-method merge
//! 6. Name simplification (unless disabled by configuration)
//!
//! Every pass is a deterministic pure transformation over the in-memory
//! store; all tie-breaks fall back to lexicographic name order.

mod locations;
mod method_merge;
mod sibling_merge;
mod simplify;
mod split;
mod tree;

use crate::errors::Result;
use crate::ops::Store;

/// The `build()` pipeline over a raw model store
///
/// Owns the store for the duration of the run and carries the run-scoped
/// disambiguating counter used when a copied resource's name must be made
/// unique. Construct one per finalization; the store it returns is the
/// canonical model and is only read afterwards.
#[derive(Debug)]
pub struct Canonicalizer {
    store: Store,

    /// Monotonically increasing counter for copy-name disambiguation,
    /// scoped to this run
    name_counter: u64,
}

impl Canonicalizer {
    /// Wrap a raw store for finalization
    pub fn new(store: Store) -> Self {
        Self {
            store,
            name_counter: 0,
        }
    }

    /// Run all passes in fixed order and return the canonical store
    ///
    /// # Errors
    ///
    /// Propagates method-combination errors from the merge passes; these
    /// cannot occur for methods matched by name, so a returned error
    /// indicates a bug rather than bad discovery input.
    pub fn build(mut self) -> Result<Store> {
        tracing::debug!(pass = "dag_to_tree", "canonicalize");
        tree::repair_cycles(&mut self.store);
        tree::resolve_multi_parents(&mut self.store, &mut self.name_counter);

        tracing::debug!(pass = "resolve_locations", "canonicalize");
        locations::merge_templates(&mut self.store);
        locations::resolve_ancestor_chains(&mut self.store);

        tracing::debug!(pass = "split_multi_location", "canonicalize");
        split::split_multi_location(&mut self.store);

        tracing::debug!(pass = "merge_siblings", "canonicalize");
        sibling_merge::merge_siblings(&mut self.store)?;

        tracing::debug!(pass = "merge_disjoint_methods", "canonicalize");
        method_merge::merge_disjoint(&mut self.store)?;

        if self.store.config.simplify_names {
            tracing::debug!(pass = "simplify_names", "canonicalize");
            simplify::simplify_names(&mut self.store);
        }

        Ok(self.store)
    }
}
