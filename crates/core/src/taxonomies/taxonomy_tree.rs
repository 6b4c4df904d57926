//! Taxonomy tree: an arena of classifications rooted in a single node.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::constants::{ONE_HUNDRED_PERCENT, PATH_ELLIPSIS, PATH_SEPARATOR};
use crate::errors::{Result, TaxonomyError};
use crate::settings::Settings;
use crate::utils::color_utils;

use super::{
    by_rank, Assignment, Classification, ClassificationId, InvestmentVehicle, TaxonomyVisitor,
};

/// A classification scheme (e.g. "Asset Classes", "Regions").
///
/// Owns every classification in an arena. Nodes detached from their parent
/// stay allocated but are no longer reachable from the root.
///
/// Methods taking a [`ClassificationId`] panic when given a handle minted by
/// another taxonomy.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    id: String,
    name: String,
    classifications: Vec<Classification>,
    root: ClassificationId,
    full_weight: i32,
    rng: StdRng,
}

impl Taxonomy {
    /// Creates a taxonomy whose colors come from an entropy-seeded source.
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name.into(), StdRng::from_entropy(), ONE_HUNDRED_PERCENT)
    }

    /// Creates a taxonomy with deterministic color generation.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::build(name.into(), StdRng::seed_from_u64(seed), ONE_HUNDRED_PERCENT)
    }

    pub fn with_settings(name: impl Into<String>, settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let rng = match settings.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::build(name.into(), rng, settings.one_hundred_percent()))
    }

    fn build(name: String, rng: StdRng, full_weight: i32) -> Self {
        let id = Uuid::new_v4().to_string();
        let mut taxonomy = Self {
            id: id.clone(),
            name: name.clone(),
            classifications: Vec::new(),
            root: ClassificationId(0),
            full_weight,
            rng,
        };
        let color = taxonomy.random_pastel_color();
        taxonomy
            .classifications
            .push(Classification::new(None, id, name, color, full_weight));
        taxonomy
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

    pub fn root(&self) -> ClassificationId {
        self.root
    }

    /// Weight given to newly created classifications.
    pub fn one_hundred_percent(&self) -> i32 {
        self.full_weight
    }

    pub fn classification(&self, id: ClassificationId) -> &Classification {
        &self.classifications[id.0]
    }

    pub fn classification_mut(&mut self, id: ClassificationId) -> &mut Classification {
        &mut self.classifications[id.0]
    }

    /// Looks up a classification reachable from the root by its string id.
    pub fn find_by_id(&self, key: &str) -> Option<ClassificationId> {
        self.all_classifications()
            .into_iter()
            .find(|c| self.classification(*c).id == key)
    }

    pub fn get_classification_id(&self, key: &str) -> Result<ClassificationId> {
        self.find_by_id(key)
            .ok_or_else(|| TaxonomyError::ClassificationNotFound(key.to_string()).into())
    }

    /// The root followed by all of its descendants in pre-order.
    pub fn all_classifications(&self) -> Vec<ClassificationId> {
        let mut all = vec![self.root];
        all.extend(self.tree_elements(self.root));
        all
    }

    /// Allocates a classification linked to `parent` without adding it to
    /// the parent's children. A missing color is replaced by a random pastel.
    pub fn create_classification(
        &mut self,
        parent: Option<ClassificationId>,
        id: impl Into<String>,
        name: impl Into<String>,
        color: Option<String>,
    ) -> Result<ClassificationId> {
        let id = id.into();
        if self.find_by_id(&id).is_some() {
            return Err(TaxonomyError::DuplicateClassificationId(id).into());
        }

        let color = match color {
            Some(color) => color,
            None => self.random_pastel_color(),
        };

        let handle = ClassificationId(self.classifications.len());
        self.classifications.push(Classification::new(
            parent,
            id,
            name.into(),
            color,
            self.full_weight,
        ));
        Ok(handle)
    }

    /// Creates a classification and appends it to `parent`'s children.
    pub fn add_classification(
        &mut self,
        parent: ClassificationId,
        id: impl Into<String>,
        name: impl Into<String>,
        color: Option<String>,
    ) -> Result<ClassificationId> {
        let child = self.create_classification(Some(parent), id, name, color)?;
        self.add_child(parent, child);
        Ok(child)
    }

    pub fn add_child(&mut self, parent: ClassificationId, child: ClassificationId) {
        self.classifications[child.0].parent = Some(parent);
        self.classifications[parent.0].children.push(child);
    }

    /// Detaches `child` from `parent`. Returns false if it was not a child.
    pub fn remove_child(&mut self, parent: ClassificationId, child: ClassificationId) -> bool {
        let children = &mut self.classifications[parent.0].children;
        let Some(position) = children.iter().position(|c| *c == child) else {
            return false;
        };
        children.remove(position);
        self.classifications[child.0].parent = None;
        true
    }

    /// Sets the parent link only; the children lists are left untouched.
    pub fn set_parent(&mut self, node: ClassificationId, parent: Option<ClassificationId>) {
        self.classifications[node.0].parent = parent;
    }

    /// Moves `node` under `new_parent` at `position` (clamped to the end).
    pub fn move_classification(
        &mut self,
        node: ClassificationId,
        new_parent: ClassificationId,
        position: usize,
    ) {
        if let Some(old_parent) = self.classifications[node.0].parent {
            self.remove_child(old_parent, node);
        }
        let children = &mut self.classifications[new_parent.0].children;
        let position = position.min(children.len());
        children.insert(position, node);
        self.classifications[node.0].parent = Some(new_parent);
    }

    /// Renames the string id of a classification, keeping ids unique.
    pub fn set_classification_id(
        &mut self,
        node: ClassificationId,
        id: impl Into<String>,
    ) -> Result<()> {
        let id = id.into();
        match self.find_by_id(&id) {
            Some(existing) if existing != node => {
                Err(TaxonomyError::DuplicateClassificationId(id).into())
            }
            _ => {
                self.classifications[node.0].id = id;
                Ok(())
            }
        }
    }

    pub fn add_assignment(&mut self, node: ClassificationId, assignment: Assignment) {
        self.classifications[node.0].assignments.push(assignment);
    }

    /// A full-weight assignment of `investment_vehicle` under this taxonomy's precision.
    pub fn new_assignment(&self, investment_vehicle: InvestmentVehicle) -> Assignment {
        Assignment::with_weight(investment_vehicle, self.full_weight)
    }

    /// Assigns the full weight of `investment_vehicle` to `node` and returns the assignment id.
    pub fn assign_vehicle(
        &mut self,
        node: ClassificationId,
        investment_vehicle: InvestmentVehicle,
    ) -> String {
        let assignment = self.new_assignment(investment_vehicle);
        let id = assignment.id.clone();
        self.add_assignment(node, assignment);
        id
    }

    /// Removes the assignment with the given identity.
    pub fn remove_assignment(
        &mut self,
        node: ClassificationId,
        assignment_id: &str,
    ) -> Option<Assignment> {
        let classification = &mut self.classifications[node.0];
        match classification
            .assignments
            .iter()
            .position(|a| a.id == assignment_id)
        {
            Some(position) => Some(classification.assignments.remove(position)),
            None => {
                warn!(
                    "Assignment {} not found in classification '{}'",
                    assignment_id, classification.id
                );
                None
            }
        }
    }

    /// Classifications reachable from the root that hold an assignment of `vehicle`.
    pub fn classifications_for(&self, vehicle: &InvestmentVehicle) -> Vec<ClassificationId> {
        self.all_classifications()
            .into_iter()
            .filter(|c| {
                self.classification(*c)
                    .assignments
                    .iter()
                    .any(|a| &a.investment_vehicle == vehicle)
            })
            .collect()
    }

    /// Sum of the children's weights. Not required to match the node's own weight.
    ///
    /// Weights are unchecked, so the sum wraps on overflow.
    pub fn children_weight(&self, node: ClassificationId) -> i32 {
        self.classifications[node.0]
            .children
            .iter()
            .fold(0i32, |sum, c| sum.wrapping_add(self.classifications[c.0].weight))
    }

    /// Handles from the root down to `node`, root first.
    pub fn path_to_root(&self, node: ClassificationId) -> Vec<ClassificationId> {
        let mut path = VecDeque::new();
        let mut current = Some(node);
        while let Some(id) = current {
            // a parent cycle cannot be longer than the arena
            if path.len() > self.classifications.len() {
                break;
            }
            path.push_front(id);
            current = self.classifications[id.0].parent;
        }
        path.into()
    }

    fn path_names(&self, node: ClassificationId, include_parent: bool) -> Vec<&str> {
        let mut path = self.path_to_root(node);
        if !include_parent && path.len() > 1 {
            path.remove(0);
        }
        path.iter()
            .map(|c| self.classifications[c.0].name.as_str())
            .collect()
    }

    /// Names from the root (or its first child when `include_parent` is false)
    /// down to `node`, joined with ` » `.
    pub fn path_name(&self, node: ClassificationId, include_parent: bool) -> String {
        self.path_names(node, include_parent).join(PATH_SEPARATOR)
    }

    /// Like [`path_name`](Self::path_name) but keeps the total length of the
    /// names within `limit` characters.
    ///
    /// Names are taken alternately from the node end and the root end,
    /// starting at the node. When a name no longer fits, the omitted middle
    /// is marked with ` ... `.
    pub fn path_name_limited(
        &self,
        node: ClassificationId,
        include_parent: bool,
        limit: usize,
    ) -> String {
        let names = self.path_names(node, include_parent);
        if names.len() == 1 {
            return names[0].to_string();
        }

        let mut available = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut left_names: Vec<&str> = Vec::new();
        let mut right_names: VecDeque<&str> = VecDeque::new();

        while left_names.len() + right_names.len() < names.len() {
            let take_right = (left_names.len() + right_names.len()) % 2 == 0;
            let name = if take_right {
                names[names.len() - 1 - right_names.len()]
            } else {
                names[left_names.len()]
            };

            available -= name.chars().count() as i64;
            if available < 0 {
                break;
            }

            if take_right {
                right_names.push_front(name);
            } else {
                left_names.push(name);
            }
        }

        let complete = left_names.len() + right_names.len() == names.len();
        let left = left_names.join(PATH_SEPARATOR);
        let right = Vec::from(right_names).join(PATH_SEPARATOR);
        let glue = if complete { PATH_SEPARATOR } else { PATH_ELLIPSIS };
        format!("{}{}{}", left, glue, right)
    }

    /// All descendants of `node` in depth-first pre-order, excluding `node`.
    pub fn tree_elements(&self, node: ClassificationId) -> Vec<ClassificationId> {
        let mut answer = Vec::new();
        let mut stack: VecDeque<ClassificationId> =
            self.classifications[node.0].children.iter().copied().collect();

        while let Some(current) = stack.pop_front() {
            answer.push(current);
            for child in self.classifications[current.0].children.iter().rev() {
                stack.push_front(*child);
            }
        }

        answer
    }

    /// Walks `node` and its subtree: the node, then each child subtree, then
    /// the node's assignments.
    ///
    /// Children and assignments are copied before iterating, so the visitor
    /// may restructure them while the walk is in progress.
    pub fn accept<V>(&mut self, node: ClassificationId, visitor: &mut V)
    where
        V: TaxonomyVisitor + ?Sized,
    {
        visitor.visit_classification(self, node);

        let children = self.classifications[node.0].children.clone();
        for child in children {
            self.accept(child, visitor);
        }

        let assignments = self.classifications[node.0].assignments.clone();
        for assignment in &assignments {
            visitor.visit_assignment(self, node, assignment);
        }
    }

    /// Walks the whole taxonomy from the root.
    pub fn foreach<V>(&mut self, visitor: &mut V)
    where
        V: TaxonomyVisitor + ?Sized,
    {
        let root = self.root;
        self.accept(root, visitor);
    }

    /// Spreads random colors over the children of `node` and cascades them down.
    pub fn assign_random_colors(&mut self, node: ClassificationId) {
        let hue = self.rng.gen::<f32>() * 360.0;
        let saturation = self.rng.gen::<f32>() * 0.5 + 0.3;
        let brightness = self.rng.gen::<f32>() * 0.4 + 0.5;

        self.assign_colors(node, hue, saturation, brightness);
    }

    /// Sorts the children of `node` by rank and spaces their hues evenly
    /// around the color wheel starting at `hue`.
    pub fn assign_colors(
        &mut self,
        node: ClassificationId,
        hue: f32,
        saturation: f32,
        brightness: f32,
    ) {
        if self.classifications[node.0].children.is_empty() {
            return;
        }

        let mut children = self.classifications[node.0].children.clone();
        children.sort_by(|a, b| by_rank(&self.classifications[a.0], &self.classifications[b.0]));
        self.classifications[node.0].children = children.clone();

        debug!(
            "Assigning colors to {} children of '{}' from hue {:.1}",
            children.len(),
            self.classifications[node.0].id,
            hue
        );

        let step = 360.0 / children.len() as f32;
        for (index, child) in children.into_iter().enumerate() {
            let h = (hue + step * index as f32) % 360.0;
            self.classifications[child.0].color = color_utils::to_hex(h, saturation, brightness);
            self.cascade_color_down_from(child, h, saturation, brightness);
        }
    }

    /// Recolors all descendants of `node` as lighter shades of its own color.
    pub fn cascade_color_down(&mut self, node: ClassificationId) -> Result<()> {
        if self.classifications[node.0].children.is_empty() {
            return Ok(());
        }

        let [hue, saturation, brightness] =
            color_utils::to_hsb(&self.classifications[node.0].color)?;
        self.cascade_color_down_from(node, hue, saturation, brightness);
        Ok(())
    }

    fn cascade_color_down_from(
        &mut self,
        node: ClassificationId,
        hue: f32,
        saturation: f32,
        brightness: f32,
    ) {
        if self.classifications[node.0].children.is_empty() {
            return;
        }

        let child_saturation = (saturation - 0.1).max(0.0);
        let child_brightness = (brightness + 0.1).min(1.0);
        let color = color_utils::to_hex(hue, child_saturation, child_brightness);

        let children = self.classifications[node.0].children.clone();
        for child in children {
            self.classifications[child.0].color = color.clone();
            self.cascade_color_down_from(child, hue, child_saturation, child_brightness);
        }
    }

    /// Each channel drawn from `[127, 255)`.
    fn random_pastel_color(&mut self) -> String {
        let mut channel = || 127 + self.rng.gen_range(0..128u8);
        let (r, g, b) = (channel(), channel(), channel());
        color_utils::rgb_to_hex(r, g, b)
    }
}
