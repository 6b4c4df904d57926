//! Taxonomies module - classification trees with weighted assignments.
//!
//! A [`Taxonomy`] owns a tree of [`Classification`] nodes. Investment
//! vehicles are attached to nodes through weighted [`Assignment`]s.

mod taxonomy_model;
mod taxonomy_traits;
mod taxonomy_tree;

pub use taxonomy_model::{by_rank, Assignment, Classification, ClassificationId, InvestmentVehicle};
pub use taxonomy_traits::TaxonomyVisitor;
pub use taxonomy_tree::Taxonomy;
