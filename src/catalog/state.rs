//! Catalog snapshot: the three named collections.

use super::{ItemId, ItemRecord};
use crate::core::CatalogError;
use crate::debug;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One of the three collections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    MyList,
    Trends,
    Originals,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::MyList, Self::Trends, Self::Originals];

    /// JSON key of the collection.
    pub const fn key(self) -> &'static str {
        match self {
            Self::MyList => "mylist",
            Self::Trends => "trends",
            Self::Originals => "originals",
        }
    }

    /// Heading shown above the section.
    pub const fn title(self) -> &'static str {
        match self {
            Self::MyList => "My list",
            Self::Trends => "Trending",
            Self::Originals => "Originals",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown section `{s}` (expected mylist, trends or originals)"))
    }
}

/// Immutable view of the catalog as handed to views and the serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    pub mylist: Vec<ItemRecord>,
    pub trends: Vec<ItemRecord>,
    pub originals: Vec<ItemRecord>,
}

impl CatalogState {
    /// `{mylist: [], trends: [], originals: []}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when all three collections are empty.
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.collection(*s).is_empty())
    }

    pub fn collection(&self, section: Section) -> &[ItemRecord] {
        match section {
            Section::MyList => &self.mylist,
            Section::Trends => &self.trends,
            Section::Originals => &self.originals,
        }
    }

    /// Find an item by id inside one collection.
    pub fn find(&self, section: Section, id: &ItemId) -> Option<&ItemRecord> {
        self.collection(section).iter().find(|item| &item.id == id)
    }

    /// Validate an externally obtained snapshot.
    ///
    /// Each of `mylist`, `trends` and `originals` must be present and be a list
    /// of item records; extra top-level keys are ignored. Duplicate ids inside
    /// one collection collapse to their first occurrence.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Object(mut map) = value else {
            return Err(CatalogError::shape(format!(
                "expected an object with `mylist`, `trends` and `originals`, found {}",
                kind(&value)
            )));
        };

        let mut take = |section: Section| -> Result<Vec<ItemRecord>, CatalogError> {
            let key = section.key();
            let items = match map.remove(key) {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(CatalogError::shape(format!(
                        "`{key}` is not a list (found {})",
                        kind(&other)
                    )));
                }
                None => return Err(CatalogError::shape(format!("missing `{key}`"))),
            };

            let records = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_json::from_value::<ItemRecord>(item)
                        .map_err(|e| CatalogError::shape(format!("`{key}[{i}]`: {e}")))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(dedup(section, records))
        };

        Ok(Self {
            mylist: take(Section::MyList)?,
            trends: take(Section::Trends)?,
            originals: take(Section::Originals)?,
        })
    }

    /// Parse and validate a JSON document.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| CatalogError::shape(format!("not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Load the catalog snapshot the server renders from.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid catalog {}", path.display()))
    }
}

/// Keep the first record for each id, preserving order.
fn dedup(section: Section, items: Vec<ItemRecord>) -> Vec<ItemRecord> {
    let mut seen = HashSet::with_capacity(items.len());
    let before = items.len();
    let items: Vec<_> = items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect();

    if items.len() != before {
        debug!("hydrate"; "dropped {} duplicate id(s) in `{}`", before - items.len(), section);
    }
    items
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
