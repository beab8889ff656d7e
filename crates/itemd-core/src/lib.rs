// ABOUTME: Core library for itemd, containing the item model and the in-memory item store.
// ABOUTME: This crate owns all collection state; the server only reaches it through ItemStore.

pub mod item;
pub mod store;

pub use item::Item;
pub use store::{ItemStore, StoreError};
