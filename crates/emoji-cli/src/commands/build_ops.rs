use std::fs;
use std::path::Path;
use std::process;

use tracing::debug;

use emoji_core::builder::{build_table, normalize_catalog, BuildTarget};
use emoji_core::catalog::Catalog;
use emoji_core::settings::settings;
use emoji_core::table::PhraseCodeTable;

pub struct BuildOptions {
    /// Scheme ids to build; empty means the configured set.
    pub schemes: Vec<String>,
    pub skip_full_pinyin: bool,
}

pub fn build(catalog_file: &str, output_dir: &str, opts: &BuildOptions) {
    let s = settings();

    eprintln!("Reading {catalog_file}...");
    let catalog = die!(
        Catalog::load(Path::new(catalog_file)),
        "Error reading catalog: {}"
    );
    eprintln!(
        "  {} emoji, {} aliases, {} readings",
        catalog.emojis.len(),
        catalog.alias_count(),
        catalog.readings.len()
    );

    let entries = normalize_catalog(&catalog, &s.normalize.rules);
    let alias_count: usize = entries.iter().map(|e| e.aliases.len()).sum();
    eprintln!("Normalized to {alias_count} aliases");

    let scheme_ids = if opts.schemes.is_empty() {
        s.schemes.enabled.as_slice()
    } else {
        opts.schemes.as_slice()
    };
    let full_pinyin = s.schemes.full_pinyin && !opts.skip_full_pinyin;
    let targets = die!(BuildTarget::resolve(full_pinyin, scheme_ids), "Error: {}");

    let base = Path::new(output_dir);
    let mut failed = Vec::new();
    for target in targets {
        let label = target.label();
        eprintln!("Building {label}...");
        let (table, report) = match build_table(&entries, &catalog.readings, target) {
            Ok(built) => built,
            Err(e) => {
                eprintln!("Error building {label}: {e}");
                failed.push(label);
                continue;
            }
        };
        if report.skipped_aliases > 0 {
            eprintln!(
                "  (skipped {} aliases without readings)",
                report.skipped_aliases
            );
        }

        let scheme_id = target.scheme().map(|s| s.id.as_str());
        let json_path = s.output.json_path(base, scheme_id);
        let txt_path = s.output.phrase_edit_path(base, scheme_id);
        debug!(build = label, json = %json_path.display(), txt = %txt_path.display());

        die!(table.save_json(&json_path), "Error writing JSON: {}");
        die!(table.save_phrase_edit(&txt_path), "Error writing phrase edit: {}");
        eprintln!(
            "Wrote {} and {} ({} codes, {} phrases)",
            json_path.display(),
            txt_path.display(),
            table.len(),
            table.phrase_count()
        );
    }

    if !failed.is_empty() {
        eprintln!("Failed: {}", failed.join(", "));
        process::exit(1);
    }
}

pub fn info(table_file: &str) {
    let table = die!(
        PhraseCodeTable::load_json(Path::new(table_file)),
        "Error opening table: {}"
    );
    let file_size = fs::metadata(table_file).map(|m| m.len()).unwrap_or(0);
    let emoji_count = table
        .iter()
        .flat_map(|(_, phrases)| phrases.iter().map(|p| p.emoji.as_str()))
        .collect::<std::collections::BTreeSet<_>>()
        .len();

    println!("Table:      {table_file}");
    println!("File size:  {:.1} KB", file_size as f64 / 1024.0);
    println!("Codes:      {}", table.len());
    println!("Phrases:    {}", table.phrase_count());
    println!("Emoji:      {emoji_count}");

    println!();
    println!("Sample codes:");
    for (code, phrases) in table.iter().take(5) {
        let shown: Vec<String> = phrases
            .iter()
            .take(5)
            .map(|p| format!("{} ({})", p.emoji, p.alias))
            .collect();
        println!("  {code} → {}", shown.join(", "));
    }
}
