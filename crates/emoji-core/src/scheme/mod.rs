//! Shuangpin scheme registry.
//!
//! Each scheme pairs a key layout (embedded TOML, see `layouts/`) with a
//! [`SchemeEncoder`] that carries the scheme's zero-initial and exception rules.
//! The registry is built once on first access and is read-only afterwards.

mod config;
mod mspy;
mod xiaohe;

use std::collections::BTreeSet;
use std::sync::OnceLock;

pub use config::{parse_layout_toml, Layout, LayoutDefinition, LayoutError};
pub use mspy::Microsoft;
pub use xiaohe::Xiaohe;

pub(crate) const MSPY_TOML: &str = include_str!("layouts/mspy.toml");
pub(crate) const XIAOHE_TOML: &str = include_str!("layouts/xiaohe.toml");

/// Single-letter initials typed on their own key.
pub const DIRECT_INITIALS: &str = "qwrtypsdfghjklzxcbnm";

/// A pinyin unit that has no entry in the scheme's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey(pub String);

/// Per-scheme encoding of the two halves of a syllable.
pub trait SchemeEncoder: Send + Sync {
    /// Key(s) for an initial. `""` for bare syllables.
    fn encode_initial(&self, initial: &str, layout: &Layout) -> Result<String, MissingKey>;

    /// Key(s) for a final. `bare` is set when the syllable has no initial.
    fn encode_final(
        &self,
        final_part: &str,
        bare: bool,
        layout: &Layout,
    ) -> Result<String, MissingKey>;
}

/// Initial rule shared by the built-in schemes: compound initials go through
/// the layout, single letters are typed as-is.
pub(crate) fn encode_initial_common(
    initial: &str,
    layout: &Layout,
) -> Result<String, MissingKey> {
    if initial.len() > 1 {
        return layout.key(initial).map(str::to_string);
    }
    if !initial.is_empty() && DIRECT_INITIALS.contains(initial) {
        return Ok(initial.to_string());
    }
    Ok(String::new())
}

impl Layout {
    pub fn key(&self, unit: &str) -> Result<&str, MissingKey> {
        self.get(unit).ok_or_else(|| MissingKey(unit.to_string()))
    }
}

pub struct KeyboardScheme {
    pub id: String,
    pub name: String,
    pub layout: Layout,
    pub encoder: &'static dyn SchemeEncoder,
}

impl KeyboardScheme {
    /// Every character a code under this scheme may contain.
    pub fn key_alphabet(&self) -> BTreeSet<char> {
        let mut keys: BTreeSet<char> = ('a'..='z').collect();
        keys.extend(self.layout.iter().flat_map(|(_, key)| key.chars()));
        keys
    }
}

impl std::fmt::Debug for KeyboardScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardScheme")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

const BUILTIN: [(&str, &dyn SchemeEncoder); 2] =
    [(MSPY_TOML, &Microsoft), (XIAOHE_TOML, &Xiaohe)];

/// All registered schemes, in registration order.
pub fn schemes() -> &'static [KeyboardScheme] {
    static INSTANCE: OnceLock<Vec<KeyboardScheme>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        BUILTIN
            .iter()
            .map(|&(toml_str, encoder)| {
                let def =
                    parse_layout_toml(toml_str).expect("built-in layout TOML must be valid");
                KeyboardScheme {
                    id: def.id,
                    name: def.name,
                    layout: def.layout,
                    encoder,
                }
            })
            .collect()
    })
}

/// Look up a registered scheme by id.
pub fn scheme(id: &str) -> Option<&'static KeyboardScheme> {
    schemes().iter().find(|s| s.id == id)
}

/// Embedded layout TOML for a built-in scheme.
pub fn layout_toml(id: &str) -> Option<&'static str> {
    match id {
        "mspy" => Some(MSPY_TOML),
        "xiaohe" => Some(XIAOHE_TOML),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_and_names() {
        let ids: Vec<&str> = schemes().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["mspy", "xiaohe"]);
        assert_eq!(scheme("mspy").unwrap().name, "微软双拼");
        assert_eq!(scheme("xiaohe").unwrap().name, "小鹤双拼");
        assert!(scheme("ziranma").is_none());
    }

    #[test]
    fn layout_toml_matches_registry() {
        for s in schemes() {
            let def = parse_layout_toml(layout_toml(&s.id).unwrap()).unwrap();
            assert_eq!(def.layout, s.layout);
        }
        assert!(layout_toml("ziranma").is_none());
    }

    #[test]
    fn key_alphabet_includes_layout_symbols() {
        let ms = scheme("mspy").unwrap().key_alphabet();
        assert!(ms.contains(&';'));
        assert!(ms.contains(&'a'));
        let xh = scheme("xiaohe").unwrap().key_alphabet();
        assert!(!xh.contains(&';'));
        assert_eq!(xh.len(), 26);
    }

    #[test]
    fn initial_rules() {
        let layout = &scheme("mspy").unwrap().layout;
        assert_eq!(encode_initial_common("ch", layout).unwrap(), "i");
        assert_eq!(encode_initial_common("y", layout).unwrap(), "y");
        assert_eq!(encode_initial_common("", layout).unwrap(), "");
        assert_eq!(
            encode_initial_common("gh", layout).unwrap_err(),
            MissingKey("gh".to_string())
        );
    }
}
