//! Catalog data model and the client-side store.
//!
//! | Module  | Purpose                                         |
//! |---------|-------------------------------------------------|
//! | `item`  | `ItemRecord` and its opaque `ItemId`            |
//! | `state` | `CatalogState` snapshot and shape validation    |
//! | `store` | `CatalogStore`: favorite transitions, listeners |

mod item;
mod state;
mod store;

pub use item::{ItemId, ItemRecord};
#[cfg(test)]
pub(crate) use item::sample;
pub use state::{CatalogState, Section};
pub use store::{Action, CatalogStore, SubscriptionId};
