//! Item system

pub mod item;
pub mod inventory;
pub mod shop;

pub use item::{Item, ItemCategory, ItemKind, QUALIFYING_WEAPON};
pub use inventory::{Inventory, InventoryError};
pub use shop::{purchase, Shop, ShopError};
