use std::fs;
use std::process;

use emoji_core::{scheme, settings};

pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

pub fn layout_export(scheme_id: &str) {
    let Some(toml) = scheme::layout_toml(scheme_id) else {
        eprintln!("Error: unknown scheme '{scheme_id}' (available: {})", scheme_ids());
        process::exit(1);
    };
    print!("{toml}");
}

pub fn layout_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let def = die!(scheme::parse_layout_toml(&content), "Error: {}");
    println!("OK: {} ({}), {} units", def.id, def.name, def.layout.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: schemes.enabled=[{}], schemes.full_pinyin={}, normalize.rules={}",
        s.schemes.enabled.join(", "),
        s.schemes.full_pinyin,
        s.normalize.rules.len()
    );
}

pub(crate) fn scheme_ids() -> String {
    scheme::schemes()
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
