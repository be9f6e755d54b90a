//! Engine Model - Section-tree lowering and host-engine descriptors
//!
//! This crate lowers the declarative trees built with `layout_model`
//! into the object graph the host layout engine consumes, and defines
//! the section-source boundary the host pulls sections through.

mod converter;
mod descriptor;
mod layout;
mod source;

pub use converter::*;
pub use descriptor::*;
pub use layout::*;
pub use source::*;
