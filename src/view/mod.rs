//! View tree: `Home` -> sections -> carousel cards.
//!
//! Views only read a `CatalogState`. Every card is tagged with its section,
//! so the client can map a click back to a `ViewContext` and an item.

mod card;

use crate::catalog::{CatalogState, Section};
use crate::utils::html::escape;

/// Search header rendered above the sections.
const SEARCH: &str = concat!(
    r#"<section class="main">"#,
    r#"<h2 class="main__title">What do you want to watch today?</h2>"#,
    r#"<input type="text" class="input" placeholder="Search...">"#,
    "</section>",
);

/// Render the home view. Empty collections produce no section at all.
pub fn home(state: &CatalogState) -> String {
    let mut html = String::from(SEARCH);
    for section in Section::ALL {
        if !state.collection(section).is_empty() {
            html.push_str(&render_section(state, section));
        }
    }
    html
}

/// One titled carousel.
pub fn render_section(state: &CatalogState, section: Section) -> String {
    let cards: String = state
        .collection(section)
        .iter()
        .map(|item| card::render(section, item))
        .collect();

    format!(
        r#"<div class="categories" data-section="{key}"><h3 class="categories__title">{title}</h3><section class="carousel"><div class="carousel__container">{cards}</div></section></div>"#,
        key = section.key(),
        title = escape(section.title()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_empty_state_renders_no_sections() {
        let html = home(&CatalogState::empty());
        assert!(html.contains("main__title"));
        assert!(!html.contains("categories"));
    }

    #[test]
    fn test_only_non_empty_sections_render() {
        let state = CatalogState {
            trends: vec![sample(1, "Mirage")],
            ..CatalogState::empty()
        };
        let html = home(&state);
        assert!(html.contains("Trending"));
        assert!(!html.contains("My list"));
        assert!(!html.contains("Originals"));
    }

    #[test]
    fn test_sections_follow_display_order() {
        let state = CatalogState {
            mylist: vec![sample(1, "A")],
            trends: vec![sample(2, "B")],
            originals: vec![sample(3, "C")],
        };
        let html = home(&state);
        let mylist = html.find("My list").unwrap();
        let trends = html.find("Trending").unwrap();
        let originals = html.find("Originals").unwrap();
        assert!(mylist < trends && trends < originals);
    }

    #[test]
    fn test_same_item_rendered_per_context() {
        let item = sample(1, "Mirage");
        let state = CatalogState {
            mylist: vec![item.clone()],
            trends: vec![item],
            ..CatalogState::empty()
        };
        let html = home(&state);
        assert_eq!(html.matches(r#"data-action="remove""#).count(), 1);
        assert_eq!(html.matches(r#"data-action="add""#).count(), 1);
    }
}
