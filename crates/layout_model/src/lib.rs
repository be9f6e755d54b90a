//! Layout Model - Declarative building blocks for compositional
//! collection layouts
//!
//! This crate provides the value types an application composes into a
//! section tree (items, groups, supplementary and decoration views)
//! and two specialized section generators. The finished tree is lowered
//! into the host engine's descriptor graph by the `engine_model` crate.

mod decoration;
mod environment;
mod error;
mod geometry;
mod grid;
mod group;
mod insets;
mod item;
mod nested;
mod section;
mod size;
mod supplementary;

pub use decoration::*;
pub use environment::*;
pub use error::*;
pub use geometry::*;
pub use grid::*;
pub use group::*;
pub use insets::*;
pub use item::*;
pub use nested::*;
pub use section::*;
pub use size::*;
pub use supplementary::*;
