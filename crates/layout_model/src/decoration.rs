//! Decoration items: background views anchored to a section

use crate::Insets;
use serde::{Deserialize, Serialize};

/// A background view behind a section's content. Decorations have no
/// intrinsic size; the engine stretches them over the section rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationItem {
    /// Reuse identifier the host registered for the decoration view
    pub element_kind: String,
    pub content_insets: Insets,
}

impl DecorationItem {
    pub fn new(element_kind: impl Into<String>) -> Self {
        Self {
            element_kind: element_kind.into(),
            content_insets: Insets::ZERO,
        }
    }

    /// Set the space between the decoration and the section rectangle
    pub fn with_content_insets(mut self, insets: Insets) -> Self {
        self.content_insets = insets;
        self
    }
}
