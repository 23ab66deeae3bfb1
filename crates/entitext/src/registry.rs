use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{EntitextError, Result};

const BUILTIN_REGISTRY: &str = include_str!("../resources/entities.json");

static SHARED_TABLE: LazyLock<EntityTable> =
    LazyLock::new(|| EntityTable::builtin().expect("bundled entity registry is malformed"));

#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    pub codepoints: Vec<u32>,
    pub characters: String,
}

#[derive(Debug, Default)]
pub struct EntityTable {
    entity_to_char: HashMap<String, String>,
    codepoint_to_entity: HashMap<u32, String>,
}

impl EntityTable {
    pub fn from_json(raw: &str) -> Result<Self> {
        let references: serde_json::Map<String, Value> =
            serde_json::from_str(raw).map_err(|error| EntitextError::InvalidRegistry {
                message: error.to_string(),
            })?;

        let mut entity_to_char = HashMap::new();
        let mut codepoint_to_entity = HashMap::new();

        for (name, value) in references {
            if !name.ends_with(';') {
                continue;
            }

            let record: EntityRecord =
                serde_json::from_value(value).map_err(|error| EntitextError::InvalidRegistry {
                    message: format!("entry '{name}': {error}"),
                })?;

            if record.codepoints.len() != 1 {
                continue;
            }

            codepoint_to_entity.insert(record.codepoints[0], name.clone());
            entity_to_char.insert(name, record.characters);
        }

        Ok(Self {
            entity_to_char,
            codepoint_to_entity,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|error| EntitextError::JsonParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_REGISTRY)
    }

    pub fn shared() -> &'static EntityTable {
        &SHARED_TABLE
    }

    pub fn len(&self) -> usize {
        self.entity_to_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_to_char.is_empty()
    }

    pub fn character_for(&self, entity: &str) -> Option<&str> {
        self.entity_to_char.get(entity).map(String::as_str)
    }

    pub fn entity_for(&self, codepoint: u32) -> Option<&str> {
        self.codepoint_to_entity.get(&codepoint).map(String::as_str)
    }
}
