//! Syllable encoder: one pinyin syllable to its key sequence under a scheme.


use crate::pinyin;
use crate::scheme::{KeyboardScheme, MissingKey};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("empty syllable")]
    EmptySyllable,
    #[error("invalid syllable {0:?}: expected lowercase ASCII letters")]
    InvalidSyllable(String),
    #[error("{scheme}: unknown initial {initial:?} in syllable {syllable:?}")]
    UnknownInitial {
        scheme: String,
        syllable: String,
        initial: String,
    },
    #[error("{scheme}: unknown final {final_part:?} in syllable {syllable:?}")]
    UnknownFinal {
        scheme: String,
        syllable: String,
        final_part: String,
    },
}

/// Encode a syllable. `None` selects full pinyin, where the code is the
/// syllable itself.
pub fn encode(syllable: &str, scheme: Option<&KeyboardScheme>) -> Result<String, EncodeError> {
    match scheme {
        Some(scheme) => encode_syllable(syllable, scheme),
        None if syllable.is_empty() => Err(EncodeError::EmptySyllable),
        None => Ok(syllable.to_string()),
    }
}

/// Encode a syllable as initial key(s) followed by final key(s).
pub fn encode_syllable(syllable: &str, scheme: &KeyboardScheme) -> Result<String, EncodeError> {
    if syllable.is_empty() {
        return Err(EncodeError::EmptySyllable);
    }
    if !syllable.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(EncodeError::InvalidSyllable(syllable.to_string()));
    }

    let parts = pinyin::split(syllable);
    let initial = scheme
        .encoder
        .encode_initial(parts.initial, &scheme.layout)
        .map_err(|MissingKey(unit)| EncodeError::UnknownInitial {
            scheme: scheme.id.clone(),
            syllable: syllable.to_string(),
            initial: unit,
        })?;
    let final_key = scheme
        .encoder
        .encode_final(parts.final_part, parts.is_bare(), &scheme.layout)
        .map_err(|MissingKey(unit)| EncodeError::UnknownFinal {
            scheme: scheme.id.clone(),
            syllable: syllable.to_string(),
            final_part: unit,
        })?;

    Ok(initial + &final_key)
}
