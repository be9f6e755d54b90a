//! The top-level layout object handed to the host engine

use crate::{lower_boundary, ConfigurationDescriptor, LayoutSource, SectionDescriptor};
use layout_model::{Axis, LayoutEnvironment, SupplementaryItem};
use serde::{Deserialize, Serialize};

/// Settings that apply to the whole layout rather than one section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    /// Main scroll axis of the layout
    pub scroll_direction: Axis,
    /// Space between consecutive sections
    pub inter_section_spacing: f64,
    /// Boundary views spanning the whole layout (global headers/footers)
    pub boundary_items: Vec<SupplementaryItem>,
}

impl Default for LayoutConfiguration {
    fn default() -> Self {
        Self {
            scroll_direction: Axis::Vertical,
            inter_section_spacing: 0.0,
            boundary_items: Vec::new(),
        }
    }
}

impl LayoutConfiguration {
    /// Set the main scroll axis
    pub fn with_scroll_direction(mut self, axis: Axis) -> Self {
        self.scroll_direction = axis;
        self
    }

    /// Set the space between consecutive sections
    pub fn with_inter_section_spacing(mut self, spacing: f64) -> Self {
        self.inter_section_spacing = spacing;
        self
    }

    /// Set the boundary views spanning the whole layout
    pub fn with_boundary_items(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.boundary_items = items;
        self
    }
}

/// A section source plus layout-wide configuration: everything the
/// host engine needs to resolve the layout.
#[derive(Debug, Clone)]
pub struct CompositionalLayout {
    pub source: LayoutSource,
    pub configuration: LayoutConfiguration,
}

impl CompositionalLayout {
    pub fn new(source: LayoutSource) -> Self {
        Self {
            source,
            configuration: LayoutConfiguration::default(),
        }
    }

    pub fn with_configuration(mut self, configuration: LayoutConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Resolve and lower the section at `index`
    pub fn section_at(
        &self,
        index: usize,
        environment: &LayoutEnvironment,
    ) -> Option<SectionDescriptor> {
        self.source.section_at(index, environment)
    }

    /// Lower the layout-wide configuration
    pub fn configuration_descriptor(&self) -> ConfigurationDescriptor {
        ConfigurationDescriptor {
            scroll_direction: self.configuration.scroll_direction,
            inter_section_spacing: self.configuration.inter_section_spacing,
            boundary_items: self
                .configuration
                .boundary_items
                .iter()
                .map(lower_boundary)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_model::{AnchorOffset, Group, RectAlignment, Section, SizeSpec};

    #[test]
    fn test_configuration_boundary_items_are_lowered() {
        let footer = SupplementaryItem::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(32.0),
            "global-footer",
        )
        .bottom(AnchorOffset::Zero);

        let section = Section::new(Group::horizontal(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(44.0),
            Vec::new(),
        ));
        let layout = CompositionalLayout::new(LayoutSource::Single(section)).with_configuration(
            LayoutConfiguration::default()
                .with_scroll_direction(Axis::Horizontal)
                .with_inter_section_spacing(20.0)
                .with_boundary_items(vec![footer]),
        );

        let descriptor = layout.configuration_descriptor();
        assert_eq!(descriptor.scroll_direction, Axis::Horizontal);
        assert_eq!(descriptor.inter_section_spacing, 20.0);
        assert_eq!(descriptor.boundary_items.len(), 1);
        assert_eq!(descriptor.boundary_items[0].alignment, RectAlignment::Bottom);
    }

    #[test]
    fn test_default_configuration_scrolls_vertically() {
        let configuration = LayoutConfiguration::default();
        assert_eq!(configuration.scroll_direction, Axis::Vertical);
        assert_eq!(configuration.inter_section_spacing, 0.0);
    }
}
