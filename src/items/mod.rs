//! Task items: model, list operations, and persistence

pub mod item;
pub mod list;
pub mod storage;

pub use item::{Item, TextColor, format_due, format_duration, parse_due, parse_duration};
pub use list::TodoList;
pub use storage::{default_items, items_path, load_items, save_items};
