//! Items: the atomic sized unit of a layout

use crate::{Insets, SizeSpec, SupplementaryItem};
use serde::{Deserialize, Serialize};

/// The most basic component of a layout: a size pair plus content
/// insets and zero or more supplementary views anchored to it.
///
/// Builder methods consume and return the item, so two callers can
/// never alias the same mutable node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub content_insets: Insets,
    pub supplementary_items: Vec<SupplementaryItem>,
}

impl Item {
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            width,
            height,
            content_insets: Insets::ZERO,
            supplementary_items: Vec::new(),
        }
    }

    /// Set the space added around the content of the item to adjust its
    /// final size after its position is computed
    pub fn with_content_insets(mut self, insets: Insets) -> Self {
        self.content_insets = insets;
        self
    }

    /// Replace the supplementary views anchored to this item
    pub fn with_supplementary_items(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.supplementary_items = items;
        self
    }

    /// Append one supplementary view anchored to this item
    pub fn attach_supplementary(mut self, item: SupplementaryItem) -> Self {
        self.supplementary_items.push(item);
        self
    }
}
