//! Client-side catalog store.
//!
//! The store is the single source of truth once hydrated. It is owned by the
//! running client (`app::App`); views only read `CatalogState` and hand
//! `Action`s back through `dispatch`.
//!
//! Listeners are called synchronously, after the transition has completed,
//! exactly once per transition that changed the state. A no-op
//! `add_favorite` (id already present) or `remove_favorite` (id absent)
//! notifies nobody.

use super::{CatalogState, ItemId, ItemRecord};
use crate::core::CatalogError;
use serde_json::Value;
use std::fmt;

pub type SubscriptionId = usize;

type Listener = Box<dyn FnMut(&CatalogState)>;

/// The two transitions a view may request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append the full record to `mylist` unless its id is already there.
    AddFavorite(ItemRecord),
    /// Drop the `mylist` entry with this id, if any.
    RemoveFavorite(ItemId),
}

#[derive(Default)]
pub struct CatalogStore {
    state: CatalogState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl CatalogStore {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot.
    #[inline]
    pub fn get_state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::AddFavorite(item) => self.add_favorite(item),
            Action::RemoveFavorite(id) => self.remove_favorite(&id),
        }
    }

    /// Append `item` to `mylist` if no entry shares its id.
    pub fn add_favorite(&mut self, item: ItemRecord) -> bool {
        if self.state.mylist.iter().any(|fav| fav.id == item.id) {
            return false;
        }
        self.state.mylist.push(item);
        self.notify();
        true
    }

    /// Remove the `mylist` entry matching `id`. Absent ids are a no-op.
    pub fn remove_favorite(&mut self, id: &ItemId) -> bool {
        let before = self.state.mylist.len();
        self.state.mylist.retain(|fav| &fav.id != id);
        if self.state.mylist.len() == before {
            return false;
        }
        self.notify();
        true
    }

    /// Install an externally obtained snapshot after validating its shape.
    ///
    /// On error the current state is left untouched and nobody is notified.
    pub fn replace_state(&mut self, snapshot: Value) -> Result<(), CatalogError> {
        let state = CatalogState::from_value(snapshot)?;
        self.install(state);
        Ok(())
    }

    /// Install an already validated snapshot.
    pub fn install(&mut self, state: CatalogState) {
        self.state = state;
        self.notify();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CatalogState) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let Self {
            state, listeners, ..
        } = self;
        for (_, listener) in listeners.iter_mut() {
            listener(&*state);
        }
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
