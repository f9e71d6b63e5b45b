use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct LayoutConfig {
    id: String,
    name: String,
    #[serde(default)]
    layout: BTreeMap<String, String>,
}

/// A parsed layout document: scheme identity plus its key table.
#[derive(Debug, Clone)]
pub struct LayoutDefinition {
    pub id: String,
    pub name: String,
    pub layout: Layout,
}

/// Maps multi-letter pinyin units (compound initials, finals) to keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    keys: BTreeMap<String, String>,
}

impl Layout {
    pub fn get(&self, unit: &str) -> Option<&str> {
        self.keys.get(unit).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<(String, String)> for Layout {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("scheme id is empty")]
    EmptyId,
    #[error("[layout] table is empty")]
    Empty,
    #[error("non-ASCII pinyin unit: {0}")]
    NonAsciiUnit(String),
    #[error("invalid key for unit {0}: keys must be non-empty ASCII")]
    InvalidKey(String),
}

/// Parse a layout TOML document.
pub fn parse_layout_toml(toml_str: &str) -> Result<LayoutDefinition, LayoutError> {
    let config: LayoutConfig =
        toml::from_str(toml_str).map_err(|e| LayoutError::Parse(e.to_string()))?;

    if config.id.trim().is_empty() {
        return Err(LayoutError::EmptyId);
    }
    if config.layout.is_empty() {
        return Err(LayoutError::Empty);
    }

    for (unit, key) in &config.layout {
        if !unit.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(LayoutError::NonAsciiUnit(unit.clone()));
        }
        if key.is_empty() || !key.is_ascii() {
            return Err(LayoutError::InvalidKey(unit.clone()));
        }
    }

    Ok(LayoutDefinition {
        id: config.id,
        name: config.name,
        layout: Layout {
            keys: config.layout,
        },
    })
}
