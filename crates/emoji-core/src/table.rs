//! Generated code table and its two on-disk formats.
//!
//! - JSON: `{ code: [ { alias, emoji } ] }`, key-sorted, 4-space indent.
//! - Phrase edit text: one `code<TAB>emoji` line per pair, sorted.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One alias of one emoji that a code produces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phrase {
    pub alias: String,
    pub emoji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseCodeTable {
    entries: BTreeMap<String, BTreeSet<Phrase>>,
}

impl PhraseCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `code` produces `emoji` via `alias`. Returns `false` if
    /// the triple was already present.
    pub fn insert(&mut self, code: &str, alias: &str, emoji: &str) -> bool {
        self.entries.entry(code.to_string()).or_default().insert(Phrase {
            alias: alias.to_string(),
            emoji: emoji.to_string(),
        })
    }

    pub fn get(&self, code: &str) -> Option<&BTreeSet<Phrase>> {
        self.entries.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Phrase>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (code, alias, emoji) triples.
    pub fn phrase_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Phrase edit text. Aliases sharing a code and emoji produce one line.
    pub fn to_phrase_edit(&self) -> String {
        let mut out = String::new();
        for (code, phrases) in &self.entries {
            let emojis: BTreeSet<&str> = phrases.iter().map(|p| p.emoji.as_str()).collect();
            for emoji in emojis {
                out.push_str(code);
                out.push('\t');
                out.push_str(emoji);
                out.push('\n');
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, TableError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        String::from_utf8(buf)
            .map_err(|e| TableError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: &Path) -> Result<Self, TableError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn save_json(&self, path: &Path) -> Result<(), TableError> {
        write_atomic(path, self.to_json()?.as_bytes())?;
        Ok(())
    }

    pub fn save_phrase_edit(&self, path: &Path) -> Result<(), TableError> {
        write_atomic(path, self.to_phrase_edit().as_bytes())?;
        Ok(())
    }
}

/// Atomic write: write to .tmp then rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
