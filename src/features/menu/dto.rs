use serde::Serialize;

/// One row of the external `menu` table.
#[derive(Debug, Clone)]
pub struct MenuItemRecord {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
}

/// Item as it appears in responses. The category is carried by the grouping
/// key (or the request path), not repeated on every item.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemDto {
    pub name: String,
    pub subcategory: String,
    pub price: f64,
}
