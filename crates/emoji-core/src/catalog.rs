//! Emoji catalog: glyphs, their aliases, and per-character pinyin readings.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alias::AliasSet;
use crate::pinyin::{normalize_syllable, SyllableError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid reading {reading:?} for {character}: {source}")]
    InvalidReading {
        character: char,
        reading: String,
        #[source]
        source: SyllableError,
    },

    #[error("no readings listed for {0}")]
    EmptyReadings(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub emoji: String,
    pub aliases: AliasSet,
}

/// Candidate pinyin syllables per character. Polyphonic characters list
/// several readings, most common first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingTable {
    readings: BTreeMap<char, Vec<String>>,
}

impl ReadingTable {
    pub fn get(&self, c: char) -> Option<&[String]> {
        self.readings.get(&c).map(Vec::as_slice)
    }

    pub fn insert(&mut self, c: char, readings: Vec<String>) {
        self.readings.insert(c, readings);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Per-character syllable options for an alias. Whitespace is skipped.
    ///
    /// Returns the first character without a reading as the error.
    pub fn resolve(&self, alias: &str) -> Result<Vec<Vec<String>>, char> {
        alias
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.get(c).map(<[String]>::to_vec).ok_or(c))
            .collect()
    }

    fn normalize(&mut self) -> Result<(), CatalogError> {
        for (&character, options) in self.readings.iter_mut() {
            if options.is_empty() {
                return Err(CatalogError::EmptyReadings(character));
            }
            let mut cleaned: Vec<String> = Vec::with_capacity(options.len());
            for reading in options.iter() {
                let syllable =
                    normalize_syllable(reading).map_err(|source| CatalogError::InvalidReading {
                        character,
                        reading: reading.clone(),
                        source,
                    })?;
                if !cleaned.contains(&syllable) {
                    cleaned.push(syllable);
                }
            }
            *options = cleaned;
        }
        Ok(())
    }
}

impl FromIterator<(char, Vec<String>)> for ReadingTable {
    fn from_iter<I: IntoIterator<Item = (char, Vec<String>)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub emojis: Vec<EmojiEntry>,
    #[serde(default)]
    pub readings: ReadingTable,
}

impl Catalog {
    /// Parse a catalog and clean up its readings.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.readings.normalize()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total number of aliases across all emoji.
    pub fn alias_count(&self) -> usize {
        self.emojis.iter().map(|e| e.aliases.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "emojis": [
            { "emoji": "😘", "aliases": ["飞吻", "爱你"] },
            { "emoji": "🐱", "aliases": ["猫｜喵"] }
        ],
        "readings": {
            "飞": ["fei1"],
            "吻": ["wen3"],
            "爱": ["ai"],
            "你": ["ni", "Ni"],
            "猫": ["mao"],
            "喵": ["miao"]
        }
    }"#;

    #[test]
    fn parse_sample() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.emojis.len(), 2);
        assert_eq!(catalog.alias_count(), 3);
        assert_eq!(catalog.readings.len(), 6);
        assert_eq!(catalog.readings.get('飞').unwrap(), ["fei"]);
        // Duplicates collapse after normalization.
        assert_eq!(catalog.readings.get('你').unwrap(), ["ni"]);
    }

    #[test]
    fn resolve_alias() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let r = catalog.readings.resolve("爱 你").unwrap();
        assert_eq!(r, vec![vec!["ai".to_string()], vec!["ni".to_string()]]);
        assert_eq!(catalog.readings.resolve("爱狗"), Err('狗'));
        assert_eq!(catalog.readings.resolve(""), Ok(Vec::new()));
    }

    #[test]
    fn readings_are_optional() {
        let catalog = Catalog::from_json(r#"{ "emojis": [] }"#).unwrap();
        assert!(catalog.readings.is_empty());
    }

    #[test]
    fn error_invalid_reading() {
        let json = r#"{ "emojis": [], "readings": { "中": ["zhōng"] } }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReading { character: '中', .. }));
    }

    #[test]
    fn error_empty_readings() {
        let json = r#"{ "emojis": [], "readings": { "中": [] } }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyReadings('中')));
    }

    #[test]
    fn error_malformed_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.json");
        fs::write(&path, SAMPLE).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.emojis[0].emoji, "😘");

        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
