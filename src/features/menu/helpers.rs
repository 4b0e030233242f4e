use std::collections::BTreeMap;

use crate::features::menu::dto::{MenuItemDto, MenuItemRecord};

/// Groups rows into category buckets, preserving the per-category name order
/// the store already established. A `BTreeMap` keeps category keys in a
/// stable lexicographic order.
pub(super) fn group_by_category(
    rows: Vec<MenuItemRecord>,
) -> BTreeMap<String, Vec<MenuItemDto>> {
    let mut grouped: BTreeMap<String, Vec<MenuItemDto>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(row.category.clone())
            .or_default()
            .push(strip_category(row));
    }
    grouped
}

pub(super) fn strip_category(row: MenuItemRecord) -> MenuItemDto {
    MenuItemDto {
        name: row.name,
        subcategory: row.subcategory,
        price: row.price,
    }
}
