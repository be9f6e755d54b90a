//! Directional edge insets

use serde::{Deserialize, Serialize};

/// Space added around the content of a node, in layout direction terms
/// (leading/trailing rather than left/right).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self { top, leading, bottom, trailing }
    }

    /// Create insets with the same value on all four edges
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}
