//! Client app: the view tree mounted on a hydrated store.
//!
//! `App` owns the store. Views get a read-only `CatalogState` and every click
//! is turned into an `Action` by the toggle protocol before it reaches
//! `CatalogStore::dispatch`. A store listener re-renders the markup after
//! each transition that changed the state.

use crate::catalog::{CatalogState, CatalogStore, ItemId, Section, SubscriptionId};
use crate::debug;
use crate::favorite::{self, ViewContext};
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
pub struct App {
    store: CatalogStore,
    markup: Rc<RefCell<String>>,
    renders: Rc<RefCell<usize>>,
    subscription: SubscriptionId,
}

impl App {
    /// Render the initial view and subscribe it to store changes.
    pub fn mount(mut store: CatalogStore) -> Self {
        let markup = Rc::new(RefCell::new(view::home(store.get_state())));
        let renders = Rc::new(RefCell::new(1));

        let subscription = {
            let markup = Rc::clone(&markup);
            let renders = Rc::clone(&renders);
            store.subscribe(move |state| {
                *markup.borrow_mut() = view::home(state);
                *renders.borrow_mut() += 1;
            })
        };

        Self {
            store,
            markup,
            renders,
            subscription,
        }
    }

    /// Click the favorite affordance of the item `id` shown in `section`.
    ///
    /// Returns whether the store changed. Clicking an item that is not shown
    /// in that section does nothing.
    pub fn click(&mut self, section: Section, id: &ItemId) -> bool {
        let ctx = ViewContext::of(section);
        let Some(item) = self.store.get_state().find(section, id) else {
            debug!("app"; "no item `{}` in {}, click ignored", id, section);
            return false;
        };
        let action = favorite::on_click(ctx, item);
        self.store.dispatch(action)
    }

    pub fn state(&self) -> &CatalogState {
        self.store.get_state()
    }

    /// Markup as of the last render.
    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    /// How many times the view tree has rendered, the initial mount included.
    pub fn renders(&self) -> usize {
        *self.renders.borrow()
    }

    /// Detach the view tree and hand the store back.
    pub fn unmount(mut self) -> CatalogStore {
        self.store.unsubscribe(self.subscription);
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    fn mounted(state: CatalogState) -> App {
        App::mount(CatalogStore::new(state))
    }

    #[test]
    fn test_discovery_click_adds_favorite_and_rerenders() {
        let item = sample(1, "Mirage");
        let mut app = mounted(CatalogState {
            trends: vec![item.clone()],
            ..CatalogState::empty()
        });
        assert!(!app.markup().contains("My list"));

        assert!(app.click(Section::Trends, &ItemId::Number(1)));

        assert_eq!(app.state().mylist, vec![item.clone()]);
        assert_eq!(app.state().trends, vec![item]);
        assert!(app.markup().contains("My list"));
        assert_eq!(app.renders(), 2);
    }

    #[test]
    fn test_list_click_removes_favorite() {
        let item = sample(1, "Mirage");
        let mut app = mounted(CatalogState {
            mylist: vec![item.clone()],
            originals: vec![item],
            ..CatalogState::empty()
        });

        assert!(app.click(Section::MyList, &ItemId::Number(1)));
        assert!(app.state().mylist.is_empty());
        assert_eq!(app.state().originals.len(), 1);
        assert!(!app.markup().contains("My list"));
    }

    #[test]
    fn test_repeated_discovery_click_does_not_rerender() {
        let mut app = mounted(CatalogState {
            originals: vec![sample(5, "Orbit")],
            ..CatalogState::empty()
        });

        assert!(app.click(Section::Originals, &ItemId::Number(5)));
        assert!(!app.click(Section::Originals, &ItemId::Number(5)));
        assert_eq!(app.state().mylist.len(), 1);
        assert_eq!(app.renders(), 2);
    }

    #[test]
    fn test_click_on_missing_item_is_ignored() {
        let mut app = mounted(CatalogState::empty());
        assert!(!app.click(Section::Trends, &ItemId::Number(1)));
        assert_eq!(app.renders(), 1);
    }

    #[test]
    fn test_unmount_stops_rendering() {
        let app = mounted(CatalogState::empty());
        let markup = Rc::clone(&app.markup);
        let mut store = app.unmount();

        store.add_favorite(sample(1, "A"));
        assert!(!markup.borrow().contains("My list"));
    }
}
