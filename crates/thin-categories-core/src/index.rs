//! Category Index
//!
//! Inverts the word -> categories dataset into category -> words.
//! Categories keep first-encounter order, and each word list keeps the order
//! in which its words were scanned.

use std::collections::HashMap;

use crate::dataset::Dataset;

/// A category and its member words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

impl Category {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Category -> words mapping built from a [`Dataset`]
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    positions: HashMap<String, usize>,
}

impl CategoryIndex {
    /// Scan every word and append it to each of its categories
    pub fn build(dataset: &Dataset) -> Self {
        let mut index = Self::default();
        for entry in dataset.iter() {
            for category in &entry.categories {
                index.append(category, &entry.word);
            }
        }
        index
    }

    fn append(&mut self, category: &str, word: &str) {
        match self.positions.get(category) {
            Some(&pos) => self.categories[pos].words.push(word.to_string()),
            None => {
                self.positions
                    .insert(category.to_string(), self.categories.len());
                self.categories.push(Category {
                    name: category.to_string(),
                    words: vec![word.to_string()],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.positions.get(name).map(|&pos| &self.categories[pos])
    }

    /// Categories in first-encounter order
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
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

impl<'a> IntoIterator for &'a CategoryIndex {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn build_category_index(dataset: &Dataset) -> CategoryIndex {
    CategoryIndex::build(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_json_str(r#"{"cat": ["Fruit"], "dog": ["Pet"], "ant": ["Insect", "Pet"]}"#)
            .unwrap()
    }

    #[test]
    fn build_inverts_dataset() {
        let index = build_category_index(&sample());

        assert_eq!(index.names(), vec!["Fruit", "Pet", "Insect"]);
        assert_eq!(index.get("Fruit").unwrap().words, vec!["cat"]);
        assert_eq!(index.get("Pet").unwrap().words, vec!["dog", "ant"]);
        assert_eq!(index.get("Insect").unwrap().words, vec!["ant"]);
        assert!(index.get("Vehicle").is_none());
    }

    #[test]
    fn every_listing_indexed_once() {
        let dataset: Dataset = [
            ("red", vec!["Colors", "Starts with R"]),
            ("rose", vec!["Flowers", "Starts with R", "Colors"]),
            ("tulip", vec!["Flowers"]),
            ("blue", vec!["Colors"]),
        ]
        .into_iter()
        .collect();
        let index = CategoryIndex::build(&dataset);

        for entry in dataset.iter() {
            for category in &entry.categories {
                let words = &index.get(category).unwrap().words;
                let hits = words.iter().filter(|w| **w == entry.word).count();
                assert_eq!(hits, 1, "{} in {}", entry.word, category);
            }
        }

        let listings: usize = dataset.iter().map(|e| e.categories.len()).sum();
        let indexed: usize = index.iter().map(Category::len).sum();
        assert_eq!(listings, indexed);
    }

    #[test]
    fn no_empty_categories() {
        let dataset: Dataset = [("lonely", Vec::<&str>::new()), ("kiwi", vec!["Fruit"])]
            .into_iter()
            .collect();
        let index = CategoryIndex::build(&dataset);

        assert_eq!(index.len(), 1);
        assert!(index.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn empty_dataset_empty_index() {
        let index = CategoryIndex::build(&Dataset::default());
        assert!(index.is_empty());
    }
}
