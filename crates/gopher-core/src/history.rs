//! Shared translation history: a reader/writer-locked phrase map with a
//! deterministic JSON export.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::Result;

/// English phrase -> gopher phrase.
pub type Records = HashMap<String, String>;

/// Thread-safe store of completed translations.
///
/// Words and sentences share one key space. The map is only allocated on the
/// first `store`.
#[derive(Debug, Default)]
pub struct History {
    data: RwLock<Option<Records>>,
}

/// One exported pair, serialized as `{"<english>": "<gopher>"}`.
struct Entry<'a> {
    english: &'a str,
    gopher: &'a str,
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.english, self.gopher)?;
        map.end()
    }
}

#[derive(Serialize)]
struct Export<'a> {
    history: Vec<Entry<'a>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a translation.
    pub fn store(&self, english: impl Into<String>, gopher: impl Into<String>) {
        self.data
            .write()
            .get_or_insert_with(HashMap::new)
            .insert(english.into(), gopher.into());
    }

    pub fn load(&self, english: &str) -> Option<String> {
        self.data.read().as_ref()?.get(english).cloned()
    }

    /// Independent copy of every stored translation.
    pub fn snapshot(&self) -> Records {
        self.data.read().clone().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data.read().as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the history as `{"history":[{"<english>":"<gopher>"},...]}`,
    /// ordered by english phrase (byte-wise).
    pub fn export(&self) -> Result<Vec<u8>> {
        let records = self.snapshot();
        let mut history: Vec<Entry<'_>> = records
            .iter()
            .map(|(english, gopher)| Entry { english, gopher })
            .collect();
        history.sort_unstable_by(|a, b| a.english.cmp(b.english));

        Ok(serde_json::to_vec(&Export { history })?)
    }
}
