//! Alias clean-up applied before phonetic expansion.
//!
//! Each rule maps a whole alias set to a new one. Rules are independent
//! passes; [`normalize`] runs them in the configured order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub type AliasSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasRule {
    /// Add variants with gender qualifiers removed.
    Gender,
    /// Replace "category: name" with "name".
    Colon,
    /// Split "a｜b" into "a" and "b".
    Pipe,
}

impl AliasRule {
    pub const DEFAULT_ORDER: [AliasRule; 3] =
        [AliasRule::Gender, AliasRule::Colon, AliasRule::Pipe];

    pub fn apply(self, aliases: &AliasSet) -> AliasSet {
        match self {
            AliasRule::Gender => strip_gender(aliases),
            AliasRule::Colon => resolve_colon(aliases),
            AliasRule::Pipe => resolve_pipe(aliases),
        }
    }
}

/// Apply `rules` to `aliases` in order.
pub fn normalize(aliases: &AliasSet, rules: &[AliasRule]) -> AliasSet {
    rules.iter().fold(aliases.clone(), |set, rule| rule.apply(&set))
}

/// 男人, 男生, 男子, 女人, 女生, 女子, 的男人, 的女人
pub fn gender_keywords() -> Vec<String> {
    let mut keywords = Vec::with_capacity(8);
    for gender in ["男", "女"] {
        for noun in ["人", "生", "子"] {
            keywords.push(format!("{gender}{noun}"));
        }
    }
    keywords.push("的男人".to_string());
    keywords.push("的女人".to_string());
    keywords
}

/// For every alias containing a gender keyword, also add the alias with the
/// keyword removed. Originals are kept.
pub fn strip_gender(aliases: &AliasSet) -> AliasSet {
    let mut out = aliases.clone();
    for keyword in gender_keywords() {
        for alias in aliases {
            if alias.contains(&keyword) {
                let stripped = alias.replace(&keyword, "");
                if !stripped.is_empty() {
                    out.insert(stripped);
                }
            }
        }
    }
    out
}

/// Replace each "category: name" alias with its trimmed second half.
///
/// Aliases with more than one ':' are dropped without replacement.
pub fn resolve_colon(aliases: &AliasSet) -> AliasSet {
    let mut out = aliases.clone();
    for alias in aliases.iter().filter(|a| a.contains(':')) {
        out.remove(alias);
        let parts: Vec<&str> = alias.split(':').collect();
        if parts.len() != 2 {
            continue;
        }
        let name = parts[1].trim();
        if !name.is_empty() {
            out.insert(name.to_string());
        }
    }
    out
}

/// Replace each full-width pipe alias with its non-empty segments.
pub fn resolve_pipe(aliases: &AliasSet) -> AliasSet {
    let mut out = aliases.clone();
    for alias in aliases.iter().filter(|a| a.contains('｜')) {
        out.remove(alias);
        out.extend(
            alias
                .split('｜')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    out
}
