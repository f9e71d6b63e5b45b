//! Generator settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::alias::AliasRule;
use crate::scheme;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Placeholder replaced by the scheme id in shuangpin output paths.
pub const SCHEME_PLACEHOLDER: &str = "{scheme_id}";

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub schemes: SchemeSettings,
    pub normalize: NormalizeSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemeSettings {
    pub enabled: Vec<String>,
    pub full_pinyin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeSettings {
    pub rules: Vec<AliasRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub quanpin_json: String,
    pub quanpin_phrase_edit: String,
    pub shuangpin_json: String,
    pub shuangpin_phrase_edit: String,
}

impl OutputSettings {
    /// JSON output path for a scheme id, or for full pinyin when `None`.
    pub fn json_path(&self, base: &Path, scheme_id: Option<&str>) -> PathBuf {
        resolve(base, &self.quanpin_json, &self.shuangpin_json, scheme_id)
    }

    /// Phrase edit output path for a scheme id, or for full pinyin when `None`.
    pub fn phrase_edit_path(&self, base: &Path, scheme_id: Option<&str>) -> PathBuf {
        resolve(
            base,
            &self.quanpin_phrase_edit,
            &self.shuangpin_phrase_edit,
            scheme_id,
        )
    }
}

fn resolve(base: &Path, quanpin: &str, shuangpin: &str, scheme_id: Option<&str>) -> PathBuf {
    match scheme_id {
        Some(id) => base.join(shuangpin.replace(SCHEME_PLACEHOLDER, id)),
        None => base.join(quanpin),
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }
    macro_rules! check_placeholder {
        ($section:ident . $field:ident) => {
            if !s.$section.$field.contains(SCHEME_PLACEHOLDER) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: format!("must contain {SCHEME_PLACEHOLDER}"),
                });
            }
        };
    }

    check_non_empty!(output.quanpin_json);
    check_non_empty!(output.quanpin_phrase_edit);
    check_non_empty!(output.shuangpin_json);
    check_non_empty!(output.shuangpin_phrase_edit);
    check_placeholder!(output.shuangpin_json);
    check_placeholder!(output.shuangpin_phrase_edit);

    for (i, id) in s.schemes.enabled.iter().enumerate() {
        if scheme::scheme(id).is_none() {
            return Err(SettingsError::InvalidValue {
                field: format!("schemes.enabled[{i}]"),
                reason: format!("unknown scheme {id:?}"),
            });
        }
        if s.schemes.enabled[..i].contains(id) {
            return Err(SettingsError::InvalidValue {
                field: format!("schemes.enabled[{i}]"),
                reason: format!("duplicate scheme {id:?}"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOM: &str = r#"
[schemes]
enabled = ["xiaohe"]
full_pinyin = false

[normalize]
rules = ["pipe"]

[output]
quanpin_json = "qp.json"
quanpin_phrase_edit = "qp.txt"
shuangpin_json = "sp-{scheme_id}.json"
shuangpin_phrase_edit = "sp-{scheme_id}.txt"
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.schemes.enabled, ["mspy", "xiaohe"]);
        assert!(s.schemes.full_pinyin);
        assert_eq!(s.normalize.rules, AliasRule::DEFAULT_ORDER);
        assert_eq!(s.output.quanpin_json, "json/emoji.quanpin.json");
        assert_eq!(
            s.output.shuangpin_phrase_edit,
            "PhraseEdit.shuangpin.{scheme_id}.txt"
        );
    }

    #[test]
    fn parse_valid_custom_toml() {
        let s = parse_settings_toml(CUSTOM).unwrap();
        assert_eq!(s.schemes.enabled, ["xiaohe"]);
        assert!(!s.schemes.full_pinyin);
        assert_eq!(s.normalize.rules, [AliasRule::Pipe]);
    }

    #[test]
    fn output_paths() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let base = Path::new("out");
        assert_eq!(
            s.output.json_path(base, None),
            Path::new("out/json/emoji.quanpin.json")
        );
        assert_eq!(
            s.output.json_path(base, Some("mspy")),
            Path::new("out/json/emoji.shuangpin.mspy.json")
        );
        assert_eq!(
            s.output.phrase_edit_path(base, Some("xiaohe")),
            Path::new("out/PhraseEdit.shuangpin.xiaohe.txt")
        );
        assert_eq!(
            s.output.phrase_edit_path(base, None),
            Path::new("out/PhraseEdit.quanpin.txt")
        );
    }

    #[test]
    fn error_unknown_scheme() {
        let toml = CUSTOM.replace(r#"enabled = ["xiaohe"]"#, r#"enabled = ["ziranma"]"#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("schemes.enabled[0]"));
    }

    #[test]
    fn error_duplicate_scheme() {
        let toml = CUSTOM.replace(r#"enabled = ["xiaohe"]"#, r#"enabled = ["xiaohe", "xiaohe"]"#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn error_missing_placeholder() {
        let toml = CUSTOM.replace("sp-{scheme_id}.json", "sp.json");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("output.shuangpin_json"));
    }

    #[test]
    fn error_empty_path() {
        let toml = CUSTOM.replace(r#""qp.txt""#, r#""""#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("output.quanpin_phrase_edit"));
    }

    #[test]
    fn error_unknown_rule() {
        let toml = CUSTOM.replace(r#"rules = ["pipe"]"#, r#"rules = ["emoji"]"#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[schemes]
enabled = []
full_pinyin = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
