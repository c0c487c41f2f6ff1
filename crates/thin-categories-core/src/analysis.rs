//! Thin-category filtering and summary statistics.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::AnalysisConfig;
use crate::error::{Result, ThinCategoriesError};
use crate::index::{Category, CategoryIndex};
use crate::ordered::OrderedListsVisitor;

/// Categories below the usability threshold, smallest first
///
/// Serializes as a JSON object (category -> words) keeping this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThinCategories {
    categories: Vec<Category>,
}

impl ThinCategories {
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a ThinCategories {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ThinCategories {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.words)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ThinCategories {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = deserializer.deserialize_map(OrderedListsVisitor)?;
        let categories = pairs
            .into_iter()
            .map(|(name, words)| Category { name, words })
            .collect();
        Ok(Self { categories })
    }
}

/// Select categories that are too small for the grid and not in an excluded
/// family, sorted ascending by size. Equal sizes keep index order.
pub fn filter_thin_categories(index: &CategoryIndex, config: &AnalysisConfig) -> ThinCategories {
    let mut categories: Vec<Category> = index
        .iter()
        .filter(|c| !config.is_usable(c.len()) && !config.is_excluded(&c.name))
        .cloned()
        .collect();

    // sort_by_key is stable
    categories.sort_by_key(Category::len);

    ThinCategories { categories }
}

/// Category counts over the non-excluded families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub usable: usize,
    pub thin: usize,
}

impl Summary {
    /// `usable / total * 100`; fails when no category survived exclusion
    pub fn usable_percentage(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(ThinCategoriesError::EmptyDataset);
        }
        Ok(self.usable as f64 / self.total as f64 * 100.0)
    }
}

pub fn summarize(index: &CategoryIndex, config: &AnalysisConfig) -> Summary {
    index
        .iter()
        .filter(|c| !config.is_excluded(&c.name))
        .fold(Summary::default(), |mut summary, category| {
            summary.total += 1;
            if config.is_usable(category.len()) {
                summary.usable += 1;
            } else {
                summary.thin += 1;
            }
            summary
        })
}
