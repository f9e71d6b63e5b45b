use std::path::Path;
use std::process;

use emoji_core::alias::{normalize, AliasSet};
use emoji_core::catalog::Catalog;
use emoji_core::encode::encode;
use emoji_core::expand::expand;
use emoji_core::scheme::{self, KeyboardScheme};
use emoji_core::settings::settings;

use super::config_ops::scheme_ids;

/// Resolve `--scheme`; `None` means full pinyin.
fn lookup_scheme(scheme_id: Option<&str>) -> Option<&'static KeyboardScheme> {
    let id = scheme_id?;
    let found = scheme::scheme(id);
    if found.is_none() {
        eprintln!("Error: unknown scheme '{id}' (available: {})", scheme_ids());
        process::exit(1);
    }
    found
}

pub fn encode_cmd(syllables: &[String], scheme_id: Option<&str>) {
    let scheme = lookup_scheme(scheme_id);
    for syllable in syllables {
        let code = die!(encode(syllable, scheme), "Error: {}");
        println!("{syllable}\t{code}");
    }
}

pub fn expand_cmd(catalog_file: &str, alias: &str, scheme_id: Option<&str>) {
    let scheme = lookup_scheme(scheme_id);
    let catalog = die!(
        Catalog::load(Path::new(catalog_file)),
        "Error reading catalog: {}"
    );
    let readings = catalog.readings.resolve(alias).unwrap_or_else(|c| {
        eprintln!("Error: no reading for '{c}' in {catalog_file}");
        process::exit(1);
    });
    let codes = die!(expand(&readings, scheme), "Error: {}");
    if codes.is_empty() {
        println!("{alias}: no codes");
        return;
    }
    for code in &codes {
        println!("{code}");
    }
}

pub fn normalize_cmd(aliases: &[String]) {
    let input: AliasSet = aliases.iter().cloned().collect();
    for alias in normalize(&input, &settings().normalize.rules) {
        println!("{alias}");
    }
}

pub fn schemes_cmd() {
    for s in scheme::schemes() {
        println!("{}\t{}\t{} units", s.id, s.name, s.layout.len());
    }
}
