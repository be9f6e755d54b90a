//! Groups: composite nodes arranging children along one axis

use crate::{Item, SizeSpec};
use serde::{Deserialize, Serialize};

/// The direction in which a group arranges its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A child of a group: either a leaf item or a nested group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupChild {
    Item(Item),
    Group(Group),
}

impl From<Item> for GroupChild {
    fn from(item: Item) -> Self {
        GroupChild::Item(item)
    }
}

impl From<Group> for GroupChild {
    fn from(group: Group) -> Self {
        GroupChild::Group(group)
    }
}

/// A container laying out an ordered set of children along one axis.
///
/// Children are moved in at construction, so the tree is strictly
/// owned: a group can never become its own descendant and no subtree
/// is shared between parents. Child order is visual order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub axis: Axis,
    pub inter_item_spacing: f64,
    pub children: Vec<GroupChild>,
}

impl Group {
    pub fn new(width: SizeSpec, height: SizeSpec, children: Vec<GroupChild>, axis: Axis) -> Self {
        Self {
            width,
            height,
            axis,
            inter_item_spacing: 0.0,
            children,
        }
    }

    /// Create a group arranging its children left to right
    pub fn horizontal(width: SizeSpec, height: SizeSpec, children: Vec<GroupChild>) -> Self {
        Self::new(width, height, children, Axis::Horizontal)
    }

    /// Create a group arranging its children top to bottom
    pub fn vertical(width: SizeSpec, height: SizeSpec, children: Vec<GroupChild>) -> Self {
        Self::new(width, height, children, Axis::Vertical)
    }

    /// Set the amount of space between the children of the group
    pub fn with_inter_item_spacing(mut self, spacing: f64) -> Self {
        self.inter_item_spacing = spacing;
        self
    }
}
