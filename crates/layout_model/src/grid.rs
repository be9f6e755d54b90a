//! Grid section generator: uniform rows of equal-width cells

use crate::{Group, Insets, Item, Result, Section, SizeSpec, SupplementaryItem};

/// Builds a [`Section`] whose root group is one row repeated down the
/// layout, each row holding `items_per_row` equal-width cells.
///
/// The row group holds a single child pre-divided by `items_per_row`;
/// the engine tiles that child to fill the row. Substitute engines must
/// keep that repetition behavior.
#[derive(Debug, Clone)]
pub struct GridSection {
    row_width: SizeSpec,
    row_height: SizeSpec,
    items_per_row: usize,
    inter_item_spacing: f64,
    item_insets: Insets,
    item_supplementaries: Vec<SupplementaryItem>,
}

impl GridSection {
    pub fn new(row_width: SizeSpec, row_height: SizeSpec, items_per_row: usize) -> Self {
        Self {
            row_width,
            row_height,
            items_per_row,
            inter_item_spacing: 0.0,
            item_insets: Insets::ZERO,
            item_supplementaries: Vec::new(),
        }
    }

    /// Set the amount of space between the items in a row
    pub fn with_inter_item_spacing(mut self, spacing: f64) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    /// Set the content insets applied to every cell
    pub fn with_item_insets(mut self, insets: Insets) -> Self {
        self.item_insets = insets;
        self
    }

    /// Set the supplementary views attached to every cell
    pub fn with_item_supplementaries(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.item_supplementaries = items;
        self
    }

    /// Build the grid section.
    ///
    /// Fails with `InvalidArgument` when `items_per_row` is zero.
    pub fn build(self) -> Result<Section> {
        tracing::debug!(items_per_row = self.items_per_row, "building grid section");

        let item = Item::new(
            self.row_width.resize_by_count(self.items_per_row)?,
            SizeSpec::FractionalHeight(1.0),
        )
        .with_content_insets(self.item_insets)
        .with_supplementary_items(self.item_supplementaries);

        let group = Group::horizontal(self.row_width, self.row_height, vec![item.into()])
            .with_inter_item_spacing(self.inter_item_spacing);

        Ok(Section::new(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupChild, LayoutError};

    #[test]
    fn test_cell_is_row_width_divided_by_count() {
        let section = GridSection::new(
            SizeSpec::FractionalWidth(1.0),
            SizeSpec::FractionalHeight(0.1),
            3,
        )
        .build()
        .unwrap();

        assert_eq!(section.group.width, SizeSpec::FractionalWidth(1.0));
        assert_eq!(section.group.height, SizeSpec::FractionalHeight(0.1));
        assert_eq!(section.group.children.len(), 1);

        match &section.group.children[0] {
            GroupChild::Item(item) => {
                assert_eq!(item.width, SizeSpec::FractionalWidth(1.0 / 3.0));
                assert_eq!(item.height, SizeSpec::FractionalHeight(1.0));
            }
            GroupChild::Group(_) => panic!("grid cell should be a leaf item"),
        }
    }

    #[test]
    fn test_fixed_row_width_divides_evenly() {
        let section = GridSection::new(SizeSpec::Fixed(300.0), SizeSpec::Fixed(100.0), 4)
            .with_inter_item_spacing(2.0)
            .build()
            .unwrap();

        assert_eq!(section.group.inter_item_spacing, 2.0);
        match &section.group.children[0] {
            GroupChild::Item(item) => assert_eq!(item.width, SizeSpec::Fixed(75.0)),
            GroupChild::Group(_) => panic!("grid cell should be a leaf item"),
        }
    }

    #[test]
    fn test_zero_items_per_row_is_rejected() {
        let result = GridSection::new(SizeSpec::Fixed(300.0), SizeSpec::Fixed(100.0), 0).build();
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_item_chrome_is_carried_onto_the_cell() {
        let badge = SupplementaryItem::new(SizeSpec::Fixed(16.0), SizeSpec::Fixed(16.0), "badge");
        let section = GridSection::new(SizeSpec::FractionalWidth(1.0), SizeSpec::Fixed(44.0), 2)
            .with_item_insets(Insets::uniform(3.0))
            .with_item_supplementaries(vec![badge])
            .build()
            .unwrap();

        match &section.group.children[0] {
            GroupChild::Item(item) => {
                assert_eq!(item.content_insets, Insets::uniform(3.0));
                assert_eq!(item.supplementary_items.len(), 1);
            }
            GroupChild::Group(_) => panic!("grid cell should be a leaf item"),
        }
    }
}
