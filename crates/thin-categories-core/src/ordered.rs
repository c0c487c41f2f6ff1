//! Order-preserving decoding of `{ "key": ["value", ...] }` JSON objects.
//!
//! Both the word dataset and the thin-category report are objects whose key
//! order carries meaning (first-seen order), so they are read into a `Vec`
//! instead of a hash map.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};

pub(crate) type OrderedLists = Vec<(String, Vec<String>)>;

pub(crate) struct OrderedListsVisitor;

impl<'de> Visitor<'de> for OrderedListsVisitor {
    type Value = OrderedLists;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object mapping strings to arrays of strings")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: OrderedLists = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut positions: HashMap<String, usize> = HashMap::new();

        // Duplicate keys: the later value replaces the earlier one in place
        while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
            match positions.get(&key) {
                Some(&pos) => entries[pos].1 = values,
                None => {
                    positions.insert(key.clone(), entries.len());
                    entries.push((key, values));
                }
            }
        }

        Ok(entries)
    }
}
