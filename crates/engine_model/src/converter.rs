//! Lowering from the declarative section tree to engine descriptors
//!
//! Lowering is a pure, depth-first tree-to-tree transform. All
//! validation already happened while the tree was built, so nothing
//! here can fail and lowering the same tree twice yields structurally
//! identical descriptors.

use crate::{
    BoundaryDescriptor, DecorationDescriptor, GroupChildDescriptor, GroupDescriptor,
    ItemDescriptor, LayoutAnchor, LayoutSize, SectionDescriptor, SupplementaryDescriptor,
};
use layout_model::{DecorationItem, Group, GroupChild, Item, Section, SupplementaryItem};

/// Lower a section and everything beneath it
pub fn lower_section(section: &Section) -> SectionDescriptor {
    tracing::debug!(
        boundary_items = section.boundary_items.len(),
        decoration_items = section.decoration_items.len(),
        "lowering section"
    );

    SectionDescriptor {
        group: lower_group(&section.group),
        content_insets: section.content_insets,
        inter_group_spacing: section.inter_group_spacing,
        scroll_behavior: section.scroll_behavior,
        boundary_items: section.boundary_items.iter().map(lower_boundary).collect(),
        decoration_items: section.decoration_items.iter().map(lower_decoration).collect(),
        visibility_handler: section.visibility_handler.clone(),
    }
}

/// Lower a group, recursing into nested groups depth-first. Child
/// order is preserved exactly; it determines visual placement.
pub fn lower_group(group: &Group) -> GroupDescriptor {
    let children = group
        .children
        .iter()
        .map(|child| match child {
            GroupChild::Item(item) => GroupChildDescriptor::Item(lower_item(item)),
            GroupChild::Group(nested) => GroupChildDescriptor::Group(lower_group(nested)),
        })
        .collect();

    GroupDescriptor {
        size: LayoutSize::new(group.width, group.height),
        axis: group.axis,
        inter_item_spacing: group.inter_item_spacing,
        children,
    }
}

/// Lower a leaf item with its anchored supplementary views
pub fn lower_item(item: &Item) -> ItemDescriptor {
    ItemDescriptor {
        size: LayoutSize::new(item.width, item.height),
        content_insets: item.content_insets,
        supplementary_items: item
            .supplementary_items
            .iter()
            .map(lower_supplementary)
            .collect(),
    }
}

/// Lower a supplementary view into its item-anchored form
pub fn lower_supplementary(item: &SupplementaryItem) -> SupplementaryDescriptor {
    SupplementaryDescriptor {
        size: LayoutSize::new(item.width, item.height),
        element_kind: item.element_kind.clone(),
        container_anchor: LayoutAnchor {
            edges: item.edges,
            offset: item.offset,
        },
        content_insets: item.content_insets,
    }
}

/// Lower a supplementary view into its section-boundary form, keyed by
/// alignment rather than by an item anchor
pub fn lower_boundary(item: &SupplementaryItem) -> BoundaryDescriptor {
    BoundaryDescriptor {
        size: LayoutSize::new(item.width, item.height),
        element_kind: item.element_kind.clone(),
        alignment: item.alignment,
        content_insets: item.content_insets,
    }
}

/// Lower a decoration background
pub fn lower_decoration(item: &DecorationItem) -> DecorationDescriptor {
    DecorationDescriptor {
        element_kind: item.element_kind.clone(),
        content_insets: item.content_insets,
    }
}
