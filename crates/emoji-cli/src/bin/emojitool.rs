use clap::{Parser, Subcommand};

use emoji_cli::commands::build_ops::{self, BuildOptions};
use emoji_cli::commands::{config_ops, encode_ops};
use emoji_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "emojitool", about = "Emoji phrase dictionary build tool")]
struct Cli {
    /// Custom settings TOML (see settings-export)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate phrase tables from an emoji catalog
    Build {
        /// Catalog JSON file
        catalog: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        output_dir: String,
        /// Shuangpin scheme to build (repeatable; default: from settings)
        #[arg(long = "scheme")]
        schemes: Vec<String>,
        /// Do not generate the full-pinyin table
        #[arg(long)]
        no_quanpin: bool,
    },
    /// Encode pinyin syllables
    Encode {
        /// Shuangpin scheme (default: full pinyin)
        #[arg(long)]
        scheme: Option<String>,
        /// Syllables, e.g. zhong
        #[arg(required = true)]
        syllables: Vec<String>,
    },
    /// Show every code of an alias
    Expand {
        /// Catalog JSON file providing readings
        #[arg(long)]
        catalog: String,
        /// Shuangpin scheme (default: full pinyin)
        #[arg(long)]
        scheme: Option<String>,
        /// Alias text
        alias: String,
    },
    /// Apply the alias clean-up rules
    Normalize {
        /// Aliases, treated as one emoji's alias set
        #[arg(required = true)]
        aliases: Vec<String>,
    },
    /// List supported shuangpin schemes
    Schemes,
    /// Show statistics of a generated JSON table
    Info {
        /// Table JSON file
        file: String,
    },
    /// Export a built-in layout as TOML
    LayoutExport {
        /// Scheme id
        scheme: String,
    },
    /// Validate a layout TOML file
    LayoutValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Some(file) = cli.settings.as_deref() {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Build {
            catalog,
            output_dir,
            schemes,
            no_quanpin,
        } => {
            let opts = BuildOptions {
                schemes,
                skip_full_pinyin: no_quanpin,
            };
            build_ops::build(&catalog, &output_dir, &opts);
        }
        Command::Encode { scheme, syllables } => {
            encode_ops::encode_cmd(&syllables, scheme.as_deref())
        }
        Command::Expand {
            catalog,
            scheme,
            alias,
        } => encode_ops::expand_cmd(&catalog, &alias, scheme.as_deref()),
        Command::Normalize { aliases } => encode_ops::normalize_cmd(&aliases),
        Command::Schemes => encode_ops::schemes_cmd(),
        Command::Info { file } => build_ops::info(&file),
        Command::LayoutExport { scheme } => config_ops::layout_export(&scheme),
        Command::LayoutValidate { file } => config_ops::layout_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
