use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::menu::dto::MenuItemDto;
use crate::features::menu::helpers::{group_by_category, strip_category};
use crate::features::menu::store::MenuStore;

pub struct MenuService {
    store: Arc<dyn MenuStore>,
}

impl MenuService {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }

    /// Full menu as a category → items mapping, each group sorted by name.
    pub async fn menu_by_category(
        &self,
    ) -> Result<BTreeMap<String, Vec<MenuItemDto>>, AppError> {
        let rows = self.store.fetch_all().await?;
        Ok(group_by_category(rows))
    }

    /// Items in one category, sorted by name. The category must be non-empty
    /// (checked before any storage access) and match at least one row; a
    /// category with no rows is rejected rather than answered with an empty
    /// list.
    pub async fn items_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItemDto>, AppError> {
        if category.is_empty() {
            return Err(AppError::bad_request(
                "category must not be empty".to_string(),
            ));
        }

        let rows = self.store.fetch_category(category).await?;
        if rows.is_empty() {
            return Err(AppError::not_found(format!(
                "no menu items in category {category}"
            )));
        }

        Ok(rows.into_iter().map(strip_category).collect())
    }
}
