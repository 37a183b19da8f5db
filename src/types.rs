use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of resolving a remote ID: either the content, or the page said it does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

/// A resolved workshop item. Page attributes are flattened next to `id` and `mod_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    pub id: String,
    pub mod_name: String,
    /// Sorted by key, so rebuilding the same folder serializes byte-identically.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl ModRecord {
    pub fn new(id: impl Into<String>, mod_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mod_name: mod_name.into(),
            attributes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub game_name: String,
    pub mods: Vec<ModRecord>,
}

/// Root document written at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub games: Vec<GameRecord>,
}

impl Catalog {
    pub fn mod_count(&self) -> usize {
        self.games.iter().map(|g| g.mods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mod_record_flattens_attributes() {
        let mut record = ModRecord::new("200", "TestMod");
        record
            .attributes
            .insert("file_size".to_string(), "1 MB".to_string());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"id": "200", "mod_name": "TestMod", "file_size": "1 MB"})
        );
    }

    #[test]
    fn test_attributes_serialize_in_key_order() {
        let mut record = ModRecord::new("200", "TestMod");
        record
            .attributes
            .insert("updated".to_string(), "9 Feb".to_string());
        record
            .attributes
            .insert("file_size".to_string(), "1 MB".to_string());

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"200","mod_name":"TestMod","file_size":"1 MB","updated":"9 Feb"}"#
        );
    }

    #[test]
    fn test_empty_catalog_shape() {
        let text = serde_json::to_string(&Catalog::default()).unwrap();
        assert_eq!(text, r#"{"games":[]}"#);
    }

    #[test]
    fn test_lookup_found() {
        assert_eq!(Lookup::Found(3).found(), Some(3));
        assert_eq!(Lookup::<u8>::NotFound.found(), None);
    }
}
