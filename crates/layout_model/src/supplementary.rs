//! Supplementary views: badges anchored to items, headers and footers
//! anchored to section boundaries

use crate::{Insets, Point, SizeSpec};
use serde::{Deserialize, Serialize};

/// The set of item edges an anchor attaches to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edges {
    pub top: bool,
    pub leading: bool,
    pub bottom: bool,
    pub trailing: bool,
}

impl Edges {
    pub const NONE: Edges = Edges::new(false, false, false, false);
    pub const TOP: Edges = Edges::new(true, false, false, false);
    pub const LEADING: Edges = Edges::new(false, true, false, false);
    pub const BOTTOM: Edges = Edges::new(false, false, true, false);
    pub const TRAILING: Edges = Edges::new(false, false, false, true);
    pub const TOP_LEADING: Edges = Edges::new(true, true, false, false);
    pub const TOP_TRAILING: Edges = Edges::new(true, false, false, true);
    pub const BOTTOM_LEADING: Edges = Edges::new(false, true, true, false);
    pub const BOTTOM_TRAILING: Edges = Edges::new(false, false, true, true);

    const fn new(top: bool, leading: bool, bottom: bool, trailing: bool) -> Self {
        Self { top, leading, bottom, trailing }
    }
}

/// Alignment of a boundary item relative to the section rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectAlignment {
    #[default]
    None,
    Top,
    TopLeading,
    Leading,
    BottomLeading,
    Bottom,
    BottomTrailing,
    Trailing,
    TopTrailing,
}

/// Offset of an anchor from the edges it attaches to
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum AnchorOffset {
    #[default]
    Zero,
    /// Offset in points
    Absolute(Point),
    /// Offset as a fraction of the anchored view's size
    Fractional(Point),
}

/// An extra visual attached to an item (badge) or to the section
/// boundary (header, footer).
///
/// The `element_kind` must match the reuse identifier the host
/// registered for the supplementary view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryItem {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub element_kind: String,
    pub edges: Edges,
    pub alignment: RectAlignment,
    pub offset: AnchorOffset,
    pub content_insets: Insets,
}

impl SupplementaryItem {
    pub fn new(width: SizeSpec, height: SizeSpec, element_kind: impl Into<String>) -> Self {
        Self {
            width,
            height,
            element_kind: element_kind.into(),
            edges: Edges::NONE,
            alignment: RectAlignment::None,
            offset: AnchorOffset::Zero,
            content_insets: Insets::ZERO,
        }
    }

    /// Set the space added around the content of the supplementary view
    pub fn with_content_insets(mut self, insets: Insets) -> Self {
        self.content_insets = insets;
        self
    }

    /// Anchor to the top edge
    pub fn top(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::TOP, RectAlignment::Top, offset)
    }

    /// Anchor to the top and leading edges
    pub fn top_leading(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::TOP_LEADING, RectAlignment::TopLeading, offset)
    }

    /// Anchor to the top and trailing edges
    pub fn top_trailing(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::TOP_TRAILING, RectAlignment::TopTrailing, offset)
    }

    /// Anchor to the leading edge
    pub fn leading(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::LEADING, RectAlignment::Leading, offset)
    }

    /// Anchor to the trailing edge
    pub fn trailing(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::TRAILING, RectAlignment::Trailing, offset)
    }

    /// Anchor to the bottom edge
    pub fn bottom(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::BOTTOM, RectAlignment::Bottom, offset)
    }

    /// Anchor to the bottom and leading edges
    pub fn bottom_leading(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::BOTTOM_LEADING, RectAlignment::BottomLeading, offset)
    }

    /// Anchor to the bottom and trailing edges
    pub fn bottom_trailing(self, offset: AnchorOffset) -> Self {
        self.anchored(Edges::BOTTOM_TRAILING, RectAlignment::BottomTrailing, offset)
    }

    fn anchored(mut self, edges: Edges, alignment: RectAlignment, offset: AnchorOffset) -> Self {
        self.edges = edges;
        self.alignment = alignment;
        self.offset = offset;
        self
    }
}
