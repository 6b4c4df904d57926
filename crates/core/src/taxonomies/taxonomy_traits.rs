//! Traits for walking a taxonomy.

use super::{Assignment, ClassificationId, Taxonomy};

/// Callbacks invoked by [`Taxonomy::accept`] in pre-order.
///
/// Both methods default to no-ops, so a visitor only implements what it needs.
/// The taxonomy is handed over mutably; edits to the children or assignments
/// of the node being walked do not disturb the ongoing traversal.
pub trait TaxonomyVisitor {
    fn visit_classification(&mut self, _taxonomy: &mut Taxonomy, _classification: ClassificationId) {}

    fn visit_assignment(
        &mut self,
        _taxonomy: &mut Taxonomy,
        _classification: ClassificationId,
        _assignment: &Assignment,
    ) {
    }
}
