use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{Result, ThinCategoriesError};
use crate::ordered::OrderedListsVisitor;

/// A word and the categories it is listed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub categories: Vec<String>,
}

/// The word -> categories dataset, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<WordEntry>,
}

impl Dataset {
    /// Load the dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| ThinCategoriesError::DatasetRead {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json_str(&content).map_err(|source| ThinCategoriesError::DatasetParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W, C> FromIterator<(W, Vec<C>)> for Dataset
where
    W: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, Vec<C>)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(word, categories)| WordEntry {
                word: word.into(),
                categories: categories.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self { entries }
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = deserializer.deserialize_map(OrderedListsVisitor)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_preserves_word_order() {
        let dataset =
            Dataset::from_json_str(r#"{"cat": ["Fruit"], "dog": ["Pet"], "ant": ["Insect", "Pet"]}"#)
                .unwrap();

        let words: Vec<&str> = dataset.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "dog", "ant"]);
        assert_eq!(dataset.entries()[2].categories, vec!["Insect", "Pet"]);
    }

    #[test]
    fn parse_empty_object() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.json");
        fs::write(&path, r#"{"apple": ["Fruit", "Red things"]}"#).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.entries()[0].word, "apple");
    }

    #[test]
    fn load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");

        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, ThinCategoriesError::DatasetRead { .. }));
    }

    #[test]
    fn load_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.json");
        fs::write(&path, r#"{"apple": ["Fruit""#).unwrap();

        let err = Dataset::load(&path).unwrap_err();
        match err {
            ThinCategoriesError::DatasetParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_iter_builds_entries() {
        let dataset: Dataset = [("cat", vec!["Pet"]), ("fig", vec!["Fruit", "Tree"])]
            .into_iter()
            .collect();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.entries()[1].categories, vec!["Fruit", "Tree"]);
    }
}
