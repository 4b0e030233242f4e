pub mod dto;
pub mod handler;
mod helpers;
pub mod service;
pub mod store;

pub use dto::{MenuItemDto, MenuItemRecord};
pub use handler::{handle_healthcheck, handle_list_category, handle_list_menu};
pub use service::MenuService;
pub use store::{MenuStore, PostgresMenuStore};
