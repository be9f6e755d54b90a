//! Nested-groups section generator: a two-level group hierarchy built
//! from per-inner-group item counts
//!
//! Example with a horizontal outer axis and `item_counts = [1, 2]`:
//!
//! ```text
//!   +-----------------------------------------------------+
//!   | +---------------------------------+  +-----------+  |
//!   | |                                 |  |     1     |  |
//!   | |                                 |  +-----------+  |
//!   | |               0                 |                 |
//!   | |                                 |  +-----------+  |
//!   | |                                 |  |     2     |  |
//!   | +---------------------------------+  +-----------+  |
//!   +-----------------------------------------------------+
//! ```

use crate::{
    Axis, Group, Insets, Item, LayoutError, Result, Section, SizeSpec, SupplementaryItem,
};

/// Tolerance when checking that custom inner fractions sum to 1.0
const FRACTION_SUM_EPSILON: f64 = 1e-6;

/// Builds a [`Section`] whose root group nests one inner group per
/// entry of `item_counts`, each inner group packing that many items.
///
/// With a vertical outer axis the inner groups are horizontal rows
/// stacked top to bottom; a horizontal outer axis is the transposed
/// mirror. Inner groups split the outer extent equally unless custom
/// fractions are supplied.
#[derive(Debug, Clone)]
pub struct NestedGroupsSection {
    group_width: SizeSpec,
    group_height: SizeSpec,
    outer_axis: Axis,
    item_counts: Vec<usize>,
    inner_item_spacing: Vec<f64>,
    inter_inner_group_spacing: f64,
    inner_fractions: Option<Vec<f64>>,
    item_insets: Insets,
    item_supplementaries: Vec<SupplementaryItem>,
}

impl NestedGroupsSection {
    pub fn new(
        group_width: SizeSpec,
        group_height: SizeSpec,
        outer_axis: Axis,
        item_counts: Vec<usize>,
    ) -> Self {
        Self {
            group_width,
            group_height,
            outer_axis,
            item_counts,
            inner_item_spacing: Vec::new(),
            inter_inner_group_spacing: 0.0,
            inner_fractions: None,
            item_insets: Insets::ZERO,
            item_supplementaries: Vec::new(),
        }
    }

    /// Set the per-inner-group spacing between items. An empty list
    /// (the default) means no spacing anywhere; otherwise the list must
    /// have one entry per inner group.
    pub fn with_inner_item_spacing(mut self, spacing: Vec<f64>) -> Self {
        self.inner_item_spacing = spacing;
        self
    }

    /// Set the amount of space between the inner groups
    pub fn with_inter_inner_group_spacing(mut self, spacing: f64) -> Self {
        self.inter_inner_group_spacing = spacing;
        self
    }

    /// Give each inner group its own share of the outer extent. The
    /// list must have one entry per inner group and sum to 1.0. When
    /// omitted, inner groups split the extent equally.
    pub fn with_inner_fractions(mut self, fractions: Vec<f64>) -> Self {
        self.inner_fractions = Some(fractions);
        self
    }

    /// Set the content insets applied to every item
    pub fn with_item_insets(mut self, insets: Insets) -> Self {
        self.item_insets = insets;
        self
    }

    /// Set the supplementary views attached to every item
    pub fn with_item_supplementaries(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.item_supplementaries = items;
        self
    }

    /// Build the nested section.
    ///
    /// Fails with `InvalidArgument` when any item count is zero, and
    /// with `InvalidConfiguration` when `item_counts` is empty, when a
    /// non-empty spacing or fraction list does not match the inner
    /// group count, or when custom fractions do not sum to 1.0.
    pub fn build(self) -> Result<Section> {
        self.validate()?;
        tracing::debug!(
            inner_groups = self.item_counts.len(),
            custom_fractions = self.inner_fractions.is_some(),
            "building nested groups section"
        );

        let inner_count = self.item_counts.len();
        let mut inners: Vec<Group> = Vec::with_capacity(inner_count);

        for (index, &count) in self.item_counts.iter().enumerate() {
            let spacing = self.inner_item_spacing.get(index).copied().unwrap_or(0.0);
            let weight = self.inner_fractions.as_ref().map(|fractions| fractions[index]);

            let inner = match self.outer_axis {
                Axis::Vertical => {
                    let item = self.shared_item(
                        self.group_width.resize_by_count(count)?,
                        SizeSpec::FractionalHeight(1.0),
                    );
                    let height = match weight {
                        Some(ratio) => self.group_height.resize_by_ratio(ratio),
                        None => self.group_height.resize_by_count(inner_count)?,
                    };
                    Group::horizontal(SizeSpec::FractionalWidth(1.0), height, vec![item.into()])
                }
                Axis::Horizontal => {
                    let item = self.shared_item(
                        SizeSpec::FractionalWidth(1.0),
                        self.group_height.resize_by_count(count)?,
                    );
                    let width = match weight {
                        Some(ratio) => self.group_width.resize_by_ratio(ratio),
                        None => self.group_width.resize_by_count(inner_count)?,
                    };
                    Group::vertical(width, SizeSpec::FractionalHeight(1.0), vec![item.into()])
                }
            };

            inners.push(inner.with_inter_item_spacing(spacing));
        }

        let children = inners.into_iter().map(Into::into).collect();
        let outer = Group::new(self.group_width, self.group_height, children, self.outer_axis)
            .with_inter_item_spacing(self.inter_inner_group_spacing);

        Ok(Section::new(outer))
    }

    fn shared_item(&self, width: SizeSpec, height: SizeSpec) -> Item {
        Item::new(width, height)
            .with_content_insets(self.item_insets)
            .with_supplementary_items(self.item_supplementaries.clone())
    }

    fn validate(&self) -> Result<()> {
        if self.item_counts.is_empty() {
            return Err(LayoutError::InvalidConfiguration(
                "a nested section needs at least one inner group".to_string(),
            ));
        }

        if self.item_counts.contains(&0) {
            return Err(LayoutError::InvalidArgument(
                "every inner group must pack at least one item".to_string(),
            ));
        }

        if !self.inner_item_spacing.is_empty()
            && self.inner_item_spacing.len() != self.item_counts.len()
        {
            return Err(LayoutError::InvalidConfiguration(format!(
                "inner item spacing has {} entries for {} inner groups",
                self.inner_item_spacing.len(),
                self.item_counts.len()
            )));
        }

        if let Some(fractions) = &self.inner_fractions {
            if fractions.len() != self.item_counts.len() {
                return Err(LayoutError::InvalidConfiguration(format!(
                    "inner fractions has {} entries for {} inner groups",
                    fractions.len(),
                    self.item_counts.len()
                )));
            }

            let sum: f64 = fractions.iter().sum();
            if (sum - 1.0).abs() > FRACTION_SUM_EPSILON {
                return Err(LayoutError::InvalidConfiguration(format!(
                    "inner fractions sum to {sum}, expected 1.0"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GroupChild;

    fn inner_groups(section: &Section) -> Vec<&Group> {
        section
            .group
            .children
            .iter()
            .map(|child| match child {
                GroupChild::Group(group) => group,
                GroupChild::Item(_) => panic!("inner child should be a group"),
            })
            .collect()
    }

    #[test]
    fn test_equal_split_uses_reciprocal_of_group_count() {
        let section = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            vec![1, 2, 2],
        )
        .build()
        .unwrap();

        assert_eq!(section.group.axis, Axis::Vertical);
        let inners = inner_groups(&section);
        assert_eq!(inners.len(), 3);

        for inner in &inners {
            assert_eq!(inner.axis, Axis::Horizontal);
            assert_eq!(inner.width, SizeSpec::FractionalWidth(1.0));
            assert_eq!(inner.height, SizeSpec::Fixed(100.0));
        }

        // Items are pre-divided by their inner group's item count.
        match &inners[1].children[0] {
            GroupChild::Item(item) => {
                assert_eq!(item.width, SizeSpec::FractionalWidth(0.5));
                assert_eq!(item.height, SizeSpec::FractionalHeight(1.0));
            }
            GroupChild::Group(_) => panic!("inner group child should be an item"),
        }
    }

    #[test]
    fn test_custom_fractions_partition_the_extent() {
        let section = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(400.0),
            Axis::Vertical,
            vec![1, 2, 2],
        )
        .with_inner_fractions(vec![0.5, 0.25, 0.25])
        .build()
        .unwrap();

        let inners = inner_groups(&section);
        assert_eq!(inners[0].height, SizeSpec::Fixed(200.0));
        assert_eq!(inners[1].height, SizeSpec::Fixed(100.0));
        assert_eq!(inners[2].height, SizeSpec::Fixed(100.0));
    }

    #[test]
    fn test_horizontal_outer_axis_is_the_transposed_mirror() {
        let section = NestedGroupsSection::new(
            SizeSpec::Fixed(300.0),
            SizeSpec::FractionalHeight(1.0),
            Axis::Horizontal,
            vec![1, 3],
        )
        .build()
        .unwrap();

        assert_eq!(section.group.axis, Axis::Horizontal);
        let inners = inner_groups(&section);

        for inner in &inners {
            assert_eq!(inner.axis, Axis::Vertical);
            assert_eq!(inner.width, SizeSpec::Fixed(150.0));
            assert_eq!(inner.height, SizeSpec::FractionalHeight(1.0));
        }

        match &inners[1].children[0] {
            GroupChild::Item(item) => {
                assert_eq!(item.width, SizeSpec::FractionalWidth(1.0));
                assert_eq!(item.height, SizeSpec::FractionalHeight(1.0 / 3.0));
            }
            GroupChild::Group(_) => panic!("inner group child should be an item"),
        }
    }

    #[test]
    fn test_per_inner_group_spacing_is_applied_in_order() {
        let section = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            vec![2, 3],
        )
        .with_inner_item_spacing(vec![4.0, 8.0])
        .with_inter_inner_group_spacing(12.0)
        .build()
        .unwrap();

        assert_eq!(section.group.inter_item_spacing, 12.0);
        let inners = inner_groups(&section);
        assert_eq!(inners[0].inter_item_spacing, 4.0);
        assert_eq!(inners[1].inter_item_spacing, 8.0);
    }

    #[test]
    fn test_short_spacing_list_is_rejected() {
        let result = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            vec![1, 2, 2],
        )
        .with_inner_item_spacing(vec![4.0])
        .build();

        assert!(matches!(result, Err(LayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_short_fraction_list_is_rejected() {
        let result = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            vec![1, 2, 2],
        )
        .with_inner_fractions(vec![0.5])
        .build();

        assert!(matches!(result, Err(LayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_fractions_must_sum_to_one() {
        let result = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            vec![1, 2],
        )
        .with_inner_fractions(vec![0.5, 0.3])
        .build();

        assert!(matches!(result, Err(LayoutError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_item_count_is_rejected() {
        let result = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            vec![1, 0],
        )
        .build();

        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_item_counts_is_rejected() {
        let result = NestedGroupsSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::Fixed(300.0),
            Axis::Vertical,
            Vec::new(),
        )
        .build();

        assert!(matches!(result, Err(LayoutError::InvalidConfiguration(_))));
    }
}
