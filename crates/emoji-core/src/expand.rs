//! Phrase expansion: the cross product of per-character codes.
//!
//! Polyphonic characters multiply the number of codes, so combinations are
//! produced lazily by [`Combinations`] rather than materialized up front.

use std::collections::BTreeSet;

use crate::encode::{encode, EncodeError};
use crate::scheme::KeyboardScheme;

/// Codes reachable at each character position, deduplicated in input order.
pub fn position_codes(
    readings: &[Vec<String>],
    scheme: Option<&KeyboardScheme>,
) -> Result<Vec<Vec<String>>, EncodeError> {
    readings
        .iter()
        .map(|options| -> Result<Vec<String>, EncodeError> {
            let mut codes: Vec<String> = Vec::with_capacity(options.len());
            for syllable in options {
                let code = encode(syllable, scheme)?;
                if !codes.contains(&code) {
                    codes.push(code);
                }
            }
            Ok(codes)
        })
        .collect()
}

/// Lazy Cartesian product over per-position codes, concatenated in order.
///
/// The last position varies fastest. Yields nothing when there are no
/// positions or when any position has no options.
pub struct Combinations {
    positions: Vec<Vec<String>>,
    cursor: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(positions: Vec<Vec<String>>) -> Self {
        let done = positions.is_empty() || positions.iter().any(Vec::is_empty);
        let cursor = vec![0; positions.len()];
        Self {
            positions,
            cursor,
            done,
        }
    }

    /// Upper bound on the number of codes: the product of option counts.
    pub fn upper_bound(&self) -> usize {
        if self.positions.is_empty() {
            return 0;
        }
        self.positions
            .iter()
            .fold(1usize, |acc, p| acc.saturating_mul(p.len()))
    }

    fn advance(&mut self) {
        for i in (0..self.cursor.len()).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.positions[i].len() {
                return;
            }
            self.cursor[i] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let code: String = self
            .cursor
            .iter()
            .zip(&self.positions)
            .map(|(&i, options)| options[i].as_str())
            .collect();
        self.advance();
        Some(code)
    }
}

/// Every code an alias can be typed with.
pub fn expand(
    readings: &[Vec<String>],
    scheme: Option<&KeyboardScheme>,
) -> Result<BTreeSet<String>, EncodeError> {
    Ok(Combinations::new(position_codes(readings, scheme)?).collect())
}
