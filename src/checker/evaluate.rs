// src/checker/evaluate.rs
// =============================================================================
// Runs every check against a parsed document.
//
// This is a pure function: it reads the document and the check list, and
// builds a new CheckResults. Nothing is mutated, so running it twice (or on
// several threads) gives the same answer.
// =============================================================================

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::checks::CheckList;
use super::document::Document;

// Selector -> "is it present?", in check list order
//
// A Vec of pairs rather than a HashMap because the key order is part of
// the output: it must match the sorted check list exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckResults {
    entries: Vec<(String, bool)>,
}

impl CheckResults {
    // Records one result. A repeated key overwrites the earlier value in
    // place, like assigning the same key twice in a JSON object.
    fn insert(&mut self, key: &str, present: bool) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = present,
            None => self.entries.push((key.to_string(), present)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// Serialized as a plain JSON object, keys in insertion order
impl Serialize for CheckResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, present) in &self.entries {
            map.serialize_entry(key, present)?;
        }
        map.end()
    }
}

// Evaluates every check against the document
//
// A check passes when its selector matches at least one element.
pub fn evaluate(document: &Document, checks: &CheckList) -> CheckResults {
    let mut results = CheckResults::default();
    for check in checks.iter() {
        let present = document.query(&check.selector) > 0;
        results.insert(&check.text, present);
    }
    results
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why implement Serialize by hand?
//    - #[derive(Serialize)] on a Vec<(String, bool)> would give a JSON array
//      of pairs, not an object
//    - serialize_map writes {"key": value, ...} in the order we choose
//
// 2. What does &Document mean here?
//    - evaluate only borrows the document and the checks
//    - The caller still owns both and can reuse them afterwards
// -----------------------------------------------------------------------------
