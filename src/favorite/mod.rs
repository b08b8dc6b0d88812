//! Favorite toggle protocol.
//!
//! Which affordance a card shows, and which store transition a click on it
//! requests, is decided by the card's `ViewContext` alone:
//!
//! | Context     | Shown as       | Affordance | Click dispatches              |
//! |-------------|----------------|------------|-------------------------------|
//! | `List`      | `Favorited`    | remove     | `RemoveFavorite(id)`          |
//! | `Discovery` | `NotFavorited` | add        | `AddFavorite(full record)`    |
//!
//! Membership in `mylist` is deliberately not consulted: an item that is
//! already a favorite still shows "add" inside trends/originals, and clicking
//! it is a no-op in the store.

use crate::catalog::{Action, ItemRecord, Section};

/// Where a card is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewContext {
    /// The personal list.
    List,
    /// Trends and originals.
    Discovery,
}

impl ViewContext {
    pub const fn of(section: Section) -> Self {
        match section {
            Section::MyList => Self::List,
            Section::Trends | Section::Originals => Self::Discovery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    NotFavorited,
    Favorited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Add,
    Remove,
}

impl Affordance {
    /// Icon shown on the card.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Add => "/assets/static/plus-icon.png",
            Self::Remove => "/assets/static/remove-icon.png",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add to my list",
            Self::Remove => "Remove from my list",
        }
    }

    /// Value of the card's `data-action` attribute.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// State an item is treated as having inside `ctx`.
pub const fn state_in(ctx: ViewContext) -> FavoriteState {
    match ctx {
        ViewContext::List => FavoriteState::Favorited,
        ViewContext::Discovery => FavoriteState::NotFavorited,
    }
}

/// Affordance offered for an item in `ctx`.
pub const fn affordance(ctx: ViewContext) -> Affordance {
    match state_in(ctx) {
        FavoriteState::Favorited => Affordance::Remove,
        FavoriteState::NotFavorited => Affordance::Add,
    }
}

/// Transition requested by clicking the affordance of `item` inside `ctx`.
///
/// Discovery clicks carry the whole record as rendered, so the store never
/// has to look it up.
pub fn on_click(ctx: ViewContext, item: &ItemRecord) -> Action {
    match affordance(ctx) {
        Affordance::Add => Action::AddFavorite(item.clone()),
        Affordance::Remove => Action::RemoveFavorite(item.id.clone()),
    }
}
