//! Pinyin syllable decomposition into initial and final.

/// Valid initials. Compound initials come first so the longest prefix wins.
pub const INITIALS: [&str; 23] = [
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// A syllable split into its initial and final.
///
/// `initial + final_part` always reconstructs the original syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'a> {
    pub initial: &'a str,
    pub final_part: &'a str,
}

impl Syllable<'_> {
    /// A zero-initial syllable such as "ai" or "er".
    pub fn is_bare(&self) -> bool {
        self.initial.is_empty()
    }
}

/// Split a syllable at its longest matching initial.
pub fn split(syllable: &str) -> Syllable<'_> {
    let initial = INITIALS
        .iter()
        .find(|i| syllable.starts_with(*i))
        .copied()
        .unwrap_or("");
    Syllable {
        initial,
        final_part: &syllable[initial.len()..],
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyllableError {
    #[error("empty syllable")]
    Empty,
    #[error("invalid syllable {0:?}: expected ASCII letters")]
    Invalid(String),
}

/// Clean up a reading from the catalog.
///
/// Trims, lowercases, writes `ü` as `v` and drops a trailing tone number.
pub fn normalize_syllable(raw: &str) -> Result<String, SyllableError> {
    let mut s: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            'ü' | 'Ü' => 'v',
            c => c.to_ascii_lowercase(),
        })
        .collect();
    if s.ends_with(|c: char| ('1'..='5').contains(&c)) {
        s.pop();
    }
    if s.is_empty() {
        return Err(SyllableError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(SyllableError::Invalid(raw.to_string()));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_compound_initial() {
        let s = split("zhong");
        assert_eq!(s.initial, "zh");
        assert_eq!(s.final_part, "ong");
        assert!(!s.is_bare());
    }

    #[test]
    fn split_single_initial() {
        let s = split("zong");
        assert_eq!(s.initial, "z");
        assert_eq!(s.final_part, "ong");
    }

    #[test]
    fn split_bare() {
        let s = split("ang");
        assert_eq!(s.initial, "");
        assert_eq!(s.final_part, "ang");
        assert!(s.is_bare());

        // Pure vowel syllables are always bare.
        assert!(split("a").is_bare());
        assert!(split("e").is_bare());
    }

    #[test]
    fn split_semivowel_initials() {
        assert_eq!(split("yu").initial, "y");
        assert_eq!(split("yu").final_part, "u");
        assert_eq!(split("wo").initial, "w");
    }

    #[test]
    fn split_reconstructs() {
        for s in ["zhuang", "er", "lve", "chi", "shi", "o", "xiong"] {
            let parts = split(s);
            assert_eq!(format!("{}{}", parts.initial, parts.final_part), s);
        }
    }

    #[test]
    fn normalize_cleans_readings() {
        assert_eq!(normalize_syllable(" Zhong1 ").unwrap(), "zhong");
        assert_eq!(normalize_syllable("lü").unwrap(), "lv");
        assert_eq!(normalize_syllable("nv3").unwrap(), "nv");
        assert_eq!(normalize_syllable("ai").unwrap(), "ai");
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert_eq!(normalize_syllable("  "), Err(SyllableError::Empty));
        assert_eq!(normalize_syllable("5"), Err(SyllableError::Empty));
        assert!(matches!(
            normalize_syllable("zhōng"),
            Err(SyllableError::Invalid(_))
        ));
        assert!(matches!(
            normalize_syllable("a b"),
            Err(SyllableError::Invalid(_))
        ));
    }
}
