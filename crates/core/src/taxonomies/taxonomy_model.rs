//! Domain models for taxonomies.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

use crate::constants::{ONE_HUNDRED_PERCENT, UNASSIGNED_ID};

/// Handle of a classification inside its owning [`Taxonomy`](super::Taxonomy).
///
/// Handles are only minted by the taxonomy and are meaningless across taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassificationId(pub(crate) usize);

/// Something that can be classified: a security or a cash account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentVehicle {
    Security(String),
    Account(String),
}

impl InvestmentVehicle {
    pub fn id(&self) -> &str {
        match self {
            InvestmentVehicle::Security(id) | InvestmentVehicle::Account(id) => id,
        }
    }
}

/// Weighted link between a classification and an investment vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub investment_vehicle: InvestmentVehicle,
    pub weight: i32, // basis points: 10000 = 100%
    pub rank: i32,
}

impl Assignment {
    /// Assigns the full weight of `investment_vehicle` at the default precision.
    ///
    /// Use [`Taxonomy::new_assignment`](super::Taxonomy::new_assignment) for a
    /// taxonomy built with a custom weight precision.
    pub fn new(investment_vehicle: InvestmentVehicle) -> Self {
        Self::with_weight(investment_vehicle, ONE_HUNDRED_PERCENT)
    }

    pub fn with_weight(investment_vehicle: InvestmentVehicle, weight: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            investment_vehicle,
            weight,
            rank: 0,
        }
    }
}

/// A category node within a taxonomy.
///
/// The owning direction is parent to children; `parent` is a plain handle
/// back into the same taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) color: String,
    pub(crate) parent: Option<ClassificationId>,
    pub(crate) children: Vec<ClassificationId>,
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) weight: i32, // basis points: 10000 = 100%
    pub(crate) rank: i32,
}

impl Classification {
    pub(crate) fn new(
        parent: Option<ClassificationId>,
        id: String,
        name: String,
        color: String,
        weight: i32,
    ) -> Self {
        Self {
            id,
            name,
            description: None,
            color,
            parent,
            children: Vec::new(),
            assignments: Vec::new(),
            weight,
            rank: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Color as `#rrggbb`.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn parent(&self) -> Option<ClassificationId> {
        self.parent
    }

    pub fn children(&self) -> &[ClassificationId] {
        &self.children
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment_mut(&mut self, assignment_id: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.id == assignment_id)
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight;
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn set_rank(&mut self, rank: i32) {
        self.rank = rank;
    }

    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Orders classifications by descending rank; equal ranks compare equal.
pub fn by_rank(a: &Classification, b: &Classification) -> Ordering {
    b.rank.cmp(&a.rank)
}
