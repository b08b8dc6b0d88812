//! One carousel card.

use crate::catalog::{ItemRecord, Section};
use crate::favorite::{self, ViewContext};
use crate::utils::html::{escape, escape_attr};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const PLAY_ICON: &str = "/assets/static/play-icon.png";

/// Navigation target for an item.
pub fn player_href(item: &ItemRecord) -> String {
    let id = item.id.to_string();
    format!("/player/{}", utf8_percent_encode(&id, SEGMENT))
}

/// Render one card for `item` inside `section`.
///
/// The affordance carries `data-section`, `data-id` and `data-action`, which
/// is all a click handler needs to route back through the toggle protocol.
pub fn render(section: Section, item: &ItemRecord) -> String {
    let ctx = ViewContext::of(section);
    let affordance = favorite::affordance(ctx);
    let id = item.id.to_string();
    let title = escape(&item.title);

    format!(
        concat!(
            r#"<div class="carousel-item">"#,
            r#"<img class="carousel-item__img" src="{cover}" alt="{alt}">"#,
            r#"<div class="carousel-item__details">"#,
            "<div>",
            r#"<a href="{href}"><img class="carousel-item__details--img" src="{play}" alt="Play"></a>"#,
            r#"<img class="carousel-item__details--img" src="{icon}" alt="{label}" "#,
            r#"data-section="{section}" data-id="{id}" data-action="{action}">"#,
            "</div>",
            r#"<p class="carousel-item__details--title">{title}</p>"#,
            r#"<p class="carousel-item__details--subtitle">{subtitle}</p>"#,
            "</div>",
            "</div>",
        ),
        cover = escape_attr(&item.cover),
        alt = escape_attr(&item.title),
        href = escape_attr(&player_href(item)),
        play = PLAY_ICON,
        icon = affordance.icon(),
        label = affordance.label(),
        section = section.key(),
        id = escape_attr(&id),
        action = affordance.name(),
        title = title,
        subtitle = escape(&item.subtitle()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ItemId, sample};

    #[test]
    fn test_card_in_list_offers_remove() {
        let html = render(Section::MyList, &sample(3, "Mirage"));
        assert!(html.contains(r#"data-action="remove""#));
        assert!(html.contains("remove-icon.png"));
        assert!(html.contains(r#"data-section="mylist" data-id="3""#));
    }

    #[test]
    fn test_card_in_discovery_offers_add() {
        let html = render(Section::Originals, &sample(3, "Mirage"));
        assert!(html.contains(r#"data-action="add""#));
        assert!(html.contains("plus-icon.png"));
    }

    #[test]
    fn test_card_shows_cover_link_and_subtitle() {
        let item = sample(7, "Mirage");
        let html = render(Section::Trends, &item);
        assert!(html.contains(&format!(r#"src="{}" alt="Mirage""#, item.cover)));
        assert!(html.contains(r#"<a href="/player/7">"#));
        assert!(html.contains(">2009 16+ 164</p>"));
    }

    #[test]
    fn test_card_escapes_text_and_attributes() {
        let mut item = sample(1, "<b>Tom & Jerry</b>");
        item.cover = "x\" onerror=\"alert(1)".into();
        let html = render(Section::Trends, &item);

        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
        assert!(html.contains("x&quot; onerror=&quot;alert(1)"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_player_href_encodes_text_ids() {
        let mut item = sample(1, "A");
        item.id = ItemId::from("a b/c?");
        assert_eq!(player_href(&item), "/player/a%20b%2Fc%3F");
    }
}
