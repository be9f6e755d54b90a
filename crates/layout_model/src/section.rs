//! Sections: the top-level composition unit of a layout

use crate::{
    DecorationItem, Group, Insets, LayoutEnvironment, Point, SupplementaryItem, VisibleItem,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Called by the host engine before each layout cycle with the items
/// currently visible, the scroll offset, and the layout environment.
/// Runs on whatever thread the host uses for layout invalidation.
pub type VisibleItemsInvalidationHandler =
    Arc<dyn Fn(&[VisibleItem], Point, &LayoutEnvironment) + Send + Sync>;

/// How a section scrolls orthogonally to the layout's main axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrthogonalScrollBehavior {
    /// The section lays out along the main axis and does not scroll sideways
    #[default]
    None,
    Continuous,
    ContinuousGroupLeadingBoundary,
    Paging,
    GroupPaging,
    GroupPagingCentered,
}

/// A distinct visual grouping: one root group plus section-wide chrome
/// (insets, headers/footers, decorations, scroll behavior).
#[derive(Clone, Serialize, Deserialize)]
pub struct Section {
    pub group: Group,
    pub content_insets: Insets,
    pub inter_group_spacing: f64,
    pub scroll_behavior: OrthogonalScrollBehavior,
    /// Headers, footers, and other views tied to the section boundary
    pub boundary_items: Vec<SupplementaryItem>,
    /// Background views behind the section's content
    pub decoration_items: Vec<DecorationItem>,
    #[serde(skip)]
    pub visibility_handler: Option<VisibleItemsInvalidationHandler>,
}

impl Section {
    pub fn new(group: Group) -> Self {
        Self {
            group,
            content_insets: Insets::ZERO,
            inter_group_spacing: 0.0,
            scroll_behavior: OrthogonalScrollBehavior::None,
            boundary_items: Vec::new(),
            decoration_items: Vec::new(),
            visibility_handler: None,
        }
    }

    /// Set the space between the content of the section and its boundaries
    pub fn with_content_insets(mut self, insets: Insets) -> Self {
        self.content_insets = insets;
        self
    }

    /// Set the amount of space between the groups in the section
    pub fn with_inter_group_spacing(mut self, spacing: f64) -> Self {
        self.inter_group_spacing = spacing;
        self
    }

    /// Set how the section scrolls relative to the main layout axis
    pub fn with_scroll_behavior(mut self, behavior: OrthogonalScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    /// Set the supplementary views tied to the boundary edges of the
    /// section, such as headers and footers
    pub fn with_boundary_items(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.boundary_items = items;
        self
    }

    /// Set the decoration views anchored to the section, such as
    /// background views
    pub fn with_decoration_items(mut self, items: Vec<DecorationItem>) -> Self {
        self.decoration_items = items;
        self
    }

    /// Set the handler the host calls before each layout cycle with the
    /// visible items, scroll offset, and environment
    pub fn with_visibility_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[VisibleItem], Point, &LayoutEnvironment) + Send + Sync + 'static,
    {
        self.visibility_handler = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
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
