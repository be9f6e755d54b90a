//! Descriptor types consumed by the host layout engine

use layout_model::{
    AnchorOffset, Axis, Edges, Insets, OrthogonalScrollBehavior, RectAlignment, SizeSpec,
    VisibleItemsInvalidationHandler,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolved dimension of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Dimension {
    /// An exact point value
    Absolute(f64),
    /// An estimated point value, re-measured after render
    Estimated(f64),
    /// A fraction of the containing group's width
    FractionalWidth(f64),
    /// A fraction of the containing group's height
    FractionalHeight(f64),
}

impl From<SizeSpec> for Dimension {
    fn from(size: SizeSpec) -> Self {
        match size {
            SizeSpec::Zero => Dimension::Absolute(0.0),
            SizeSpec::Fixed(value) => Dimension::Absolute(value),
            SizeSpec::Estimated(value) => Dimension::Estimated(value),
            SizeSpec::FractionalWidth(value) => Dimension::FractionalWidth(value),
            SizeSpec::FractionalHeight(value) => Dimension::FractionalHeight(value),
        }
    }
}

/// A width/height dimension pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutSize {
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Where a supplementary view attaches to its item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutAnchor {
    pub edges: Edges,
    pub offset: AnchorOffset,
}

/// A supplementary view anchored to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryDescriptor {
    pub size: LayoutSize,
    pub element_kind: String,
    pub container_anchor: LayoutAnchor,
    pub content_insets: Insets,
}

/// A header/footer-like view keyed by alignment to a section boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDescriptor {
    pub size: LayoutSize,
    pub element_kind: String,
    pub alignment: RectAlignment,
    pub content_insets: Insets,
}

/// A background view stretched over the section rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationDescriptor {
    pub element_kind: String,
    pub content_insets: Insets,
}

/// A sized leaf the engine places within its group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub size: LayoutSize,
    pub content_insets: Insets,
    pub supplementary_items: Vec<SupplementaryDescriptor>,
}

/// A child of a composite descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupChildDescriptor {
    Item(ItemDescriptor),
    Group(GroupDescriptor),
}

/// An axis-tagged composite with ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub size: LayoutSize,
    pub axis: Axis,
    pub inter_item_spacing: f64,
    pub children: Vec<GroupChildDescriptor>,
}

/// The fully lowered form of one section, ready for the host engine
#[derive(Clone, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub group: GroupDescriptor,
    pub content_insets: Insets,
    pub inter_group_spacing: f64,
    pub scroll_behavior: OrthogonalScrollBehavior,
    pub boundary_items: Vec<BoundaryDescriptor>,
    pub decoration_items: Vec<DecorationDescriptor>,
    #[serde(skip)]
    pub visibility_handler: Option<VisibleItemsInvalidationHandler>,
}

impl fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("group", &self.group)
            .field("content_insets", &self.content_insets)
            .field("inter_group_spacing", &self.inter_group_spacing)
            .field("scroll_behavior", &self.scroll_behavior)
            .field("boundary_items", &self.boundary_items)
            .field("decoration_items", &self.decoration_items)
            .field("visibility_handler", &self.visibility_handler.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Layout-wide configuration handed to the host alongside the sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDescriptor {
    /// Main scroll axis of the whole layout
    pub scroll_direction: Axis,
    pub inter_section_spacing: f64,
    /// Boundary views spanning the whole layout rather than one section
    pub boundary_items: Vec<BoundaryDescriptor>,
}
