//! Item records shared by every collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque item identifier, either a JSON number or a JSON string.
///
/// `1` and `"1"` are distinct ids; equality never coerces between the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Command-line form: an integer becomes a numeric id, anything else a text
/// id. Double quotes force a text id, so `"007"` stays `Text("007")`.
impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(text) = s.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
            return Ok(Self::Text(text.to_owned()));
        }
        Ok(s.parse::<i64>().map_or_else(|_| Self::Text(s.to_owned()), Self::Number))
    }
}

/// A catalog entry. Unknown JSON fields are ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: ItemId,
    pub cover: String,
    pub title: String,
    pub year: i32,
    pub content_rating: String,
    /// Length in minutes.
    pub duration: u32,
}

impl ItemRecord {
    /// Subtitle line shown under the title: `"{year} {rating} {duration}"`.
    pub fn subtitle(&self) -> String {
        format!("{} {} {}", self.year, self.content_rating, self.duration)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: impl Into<ItemId>, title: &str) -> ItemRecord {
    ItemRecord {
        id: id.into(),
        cover: format!("http://dummyimage.com/800x600.png/{}", title.len()),
        title: title.to_owned(),
        year: 2009,
        content_rating: "16+".to_owned(),
        duration: 164,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_field_names() {
        let item = sample(2, "Mirage");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["contentRating"], "16+");
        assert_eq!(json["id"], 2);
        assert!(json.get("content_rating").is_none());
    }

    #[test]
    fn test_item_ignores_unknown_fields() {
        let json = r#"{
            "id": 7, "slug": "tvshow-7", "title": "In the Dark", "type": "Scripted",
            "language": "English", "year": 2009, "contentRating": "16+",
            "duration": 164, "cover": "http://dummyimage.com/800x600.png/99118E/ffffff",
            "description": "Vestibulum ac est lacinia nisi venenatis tristique",
            "source": "https://mora.com/..."
        }"#;
        let item: ItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::Number(7));
        assert_eq!(item.title, "In the Dark");
        assert_eq!(item.duration, 164);
    }

    #[test]
    fn test_item_id_number_and_text_are_distinct() {
        let number: ItemId = serde_json::from_str("1").unwrap();
        let text: ItemId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(number, ItemId::Number(1));
        assert_eq!(text, ItemId::Text("1".into()));
        assert_ne!(number, text);
    }

    #[test]
    fn test_item_id_from_str() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId::Number(42));
        assert_eq!("abc-1".parse::<ItemId>().unwrap(), ItemId::from("abc-1"));
        assert_eq!("007".parse::<ItemId>().unwrap(), ItemId::Number(7));
    }

    #[test]
    fn test_quoted_item_id_stays_text() {
        assert_eq!("\"007\"".parse::<ItemId>().unwrap(), ItemId::from("007"));
        assert_eq!("\"1\"".parse::<ItemId>().unwrap(), ItemId::from("1"));
        assert_eq!("\"\"".parse::<ItemId>().unwrap(), ItemId::from(""));
        // a lone quote is not a quoted id
        assert_eq!("\"".parse::<ItemId>().unwrap(), ItemId::from("\""));
    }

    #[test]
    fn test_subtitle() {
        assert_eq!(sample(1, "x").subtitle(), "2009 16+ 164");
    }
}
