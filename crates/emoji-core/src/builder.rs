//! Catalog to code-table pipeline.
//!
//! Normalization is scheme-independent and runs once; [`build_table`] then
//! runs once per [`BuildTarget`]. An encoding failure aborts that target.

use tracing::{debug, debug_span, warn};

use crate::alias::{normalize, AliasRule};
use crate::catalog::{Catalog, EmojiEntry, ReadingTable};
use crate::encode::EncodeError;
use crate::expand::{position_codes, Combinations};
use crate::scheme::{self, KeyboardScheme};
use crate::table::PhraseCodeTable;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{emoji} alias {alias:?}: {source}")]
    Encode {
        emoji: String,
        alias: String,
        #[source]
        source: EncodeError,
    },
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}

/// One output table: full pinyin or a shuangpin scheme.
#[derive(Debug, Clone, Copy)]
pub enum BuildTarget {
    FullPinyin,
    Shuangpin(&'static KeyboardScheme),
}

impl BuildTarget {
    pub fn scheme(&self) -> Option<&'static KeyboardScheme> {
        match *self {
            BuildTarget::FullPinyin => None,
            BuildTarget::Shuangpin(s) => Some(s),
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            BuildTarget::FullPinyin => "quanpin",
            BuildTarget::Shuangpin(s) => s.id.as_str(),
        }
    }

    /// Targets for the given scheme ids, full pinyin first when requested.
    pub fn resolve(full_pinyin: bool, scheme_ids: &[String]) -> Result<Vec<Self>, BuildError> {
        let mut targets = Vec::with_capacity(scheme_ids.len() + 1);
        if full_pinyin {
            targets.push(BuildTarget::FullPinyin);
        }
        for id in scheme_ids {
            let s = scheme::scheme(id).ok_or_else(|| BuildError::UnknownScheme(id.clone()))?;
            targets.push(BuildTarget::Shuangpin(s));
        }
        Ok(targets)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Aliases encoded into at least one code.
    pub encoded_aliases: usize,
    /// Aliases with a character missing from the reading table.
    pub skipped_aliases: usize,
    /// Aliases that normalized to nothing to type.
    pub empty_aliases: usize,
}

/// Apply the alias rules to every entry of the catalog.
pub fn normalize_catalog(catalog: &Catalog, rules: &[AliasRule]) -> Vec<EmojiEntry> {
    let _span = debug_span!("normalize_catalog", entries = catalog.emojis.len()).entered();
    let entries: Vec<EmojiEntry> = catalog
        .emojis
        .iter()
        .map(|e| EmojiEntry {
            emoji: e.emoji.clone(),
            aliases: normalize(&e.aliases, rules),
        })
        .collect();
    debug!(
        aliases_in = catalog.alias_count(),
        aliases_out = entries.iter().map(|e| e.aliases.len()).sum::<usize>()
    );
    entries
}

/// Build the code table for one target.
pub fn build_table(
    entries: &[EmojiEntry],
    readings: &ReadingTable,
    target: BuildTarget,
) -> Result<(PhraseCodeTable, BuildReport), BuildError> {
    let _span = debug_span!("build_table", target = target.label()).entered();
    let mut table = PhraseCodeTable::new();
    let mut report = BuildReport::default();

    for entry in entries {
        for alias in &entry.aliases {
            let per_char = match readings.resolve(alias) {
                Ok(per_char) => per_char,
                Err(c) => {
                    warn!(emoji = %entry.emoji, alias = %alias, "no reading for {c}, skipped");
                    report.skipped_aliases += 1;
                    continue;
                }
            };
            if per_char.is_empty() {
                report.empty_aliases += 1;
                continue;
            }

            let positions =
                position_codes(&per_char, target.scheme()).map_err(|source| BuildError::Encode {
                    emoji: entry.emoji.clone(),
                    alias: alias.clone(),
                    source,
                })?;
            for code in Combinations::new(positions) {
                table.insert(&code, alias, &entry.emoji);
            }
            report.encoded_aliases += 1;
        }
    }

    debug!(
        codes = table.len(),
        phrases = table.phrase_count(),
        skipped = report.skipped_aliases
    );
    Ok((table, report))
}
