//! Host-provided context for providers and invalidation handlers

use crate::{Insets, Rect, Size};
use serde::{Deserialize, Serialize};

/// Information about the layout container, supplied by the host engine
/// when it asks for a section or invokes an invalidation handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutEnvironment {
    /// Size of the container the layout is resolved against
    pub container_size: Size,
    /// Insets already applied to the container by the host
    pub container_insets: Insets,
}

impl LayoutEnvironment {
    pub fn new(container_size: Size, container_insets: Insets) -> Self {
        Self { container_size, container_insets }
    }
}

/// One currently visible item, as reported by the host engine to a
/// section's visibility-invalidation handler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleItem {
    /// Index of the item within its section
    pub index: usize,
    /// Current frame of the item in container coordinates
    pub bounds: Rect,
}

impl VisibleItem {
    pub fn new(index: usize, bounds: Rect) -> Self {
        Self { index, bounds }
    }
}
