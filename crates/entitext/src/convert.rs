use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::registry::EntityTable;

static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&[A-Za-z]+;").unwrap());

impl EntityTable {
    pub fn escape(&self, text: &str, encode_ascii: bool) -> String {
        let mut output = String::with_capacity(text.len());
        for character in text.chars() {
            match self.entity_for(character as u32) {
                Some(entity) if encode_ascii || !character.is_ascii() => {
                    output.push_str(entity);
                }
                _ => output.push(character),
            }
        }
        output
    }

    pub fn unescape(&self, text: &str) -> String {
        ENTITY_PATTERN
            .replace_all(text, |captures: &Captures| {
                let token = &captures[0];
                self.character_for(token).unwrap_or(token).to_string()
            })
            .into_owned()
    }
}

pub fn escape(text: &str, encode_ascii: bool) -> String {
    EntityTable::shared().escape(text, encode_ascii)
}

pub fn unescape(text: &str) -> String {
    EntityTable::shared().unescape(text)
}
